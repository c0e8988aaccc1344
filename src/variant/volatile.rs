//! Volatile Brogue variant
//!
//! Volatile Brogue reuses the baseline Brogue content but dials up
//! high-risk elements: out-of-depth monsters, swingy status effects, early
//! lava, and a deeper dungeon. This module owns the variant's tuning
//! overlay, its release identity, the player's class selection, and the
//! activation routine that publishes the patched constants.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{ConfigHandle, GameConstants};
use crate::constants::depth::{AMULET_LEVEL, DEEPEST_LEVEL};
use crate::constants::version::{
    DISPLAY_VERSION_CAP, EXTRA_VERSION, VOLATILE_MAJOR, VOLATILE_MINOR, VOLATILE_PATCH,
    VOLATILE_PREFIX, VOLATILE_VARIANT_NAME,
};
use crate::version::VersionIdentity;

/// Release identity for Volatile Brogue.
pub const VOLATILE_VERSION: VersionIdentity =
    VersionIdentity::new(VOLATILE_PREFIX, VOLATILE_MAJOR, VOLATILE_MINOR, VOLATILE_PATCH);

/// Sub-class the player may pick after the variant is active.
///
/// Unselected is represented by `Option::None` on the runtime, not by an
/// extra enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum VolatileClass {
    Berserker,
    Alchemist,
    Warden,
}

/// The variant's gameplay overrides: every knob Volatile Brogue changes
/// relative to the baseline, and nothing else.
///
/// Defaults are the shipped tuning. The struct is also deserializable from
/// a TOML file so a release can ship adjusted numbers without a rebuild;
/// keys missing from the file keep their shipped values. No cross-field
/// validation is performed, matching the permissiveness of the baseline
/// overlay (an altar below the deepest level is the caller's problem).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolatileTuning {
    pub deepest_level: i32,
    pub amulet_level: i32,

    pub minimum_altar_level: i32,
    pub minimum_lava_level: i32,
    pub minimum_brimstone_level: i32,
    pub mutations_occur_above_level: i32,
    pub monster_out_of_depth_chance: i32,

    pub machines_per_level_suppression_multiplier: i32,
    pub machines_per_level_suppression_offset: i32,
    pub machines_per_level_increase_factor: i32,
    pub max_level_for_bonus_machines: i32,

    pub extra_items_per_level: i32,
    pub gold_adjustment_start_depth: i32,

    pub player_transference_ratio: i32,
    pub on_hit_hallucinate_duration: i32,
    pub on_hit_weaken_duration: i32,
    pub on_hit_mercy_heal_percent: i32,

    pub weapon_kills_to_auto_id: i32,
    pub armor_delay_to_auto_id: i32,
    pub ring_delay_to_auto_id: i32,

    pub fall_damage_min: i32,
    pub fall_damage_max: i32,

    pub companion_feat_required_xp: i32,
}

impl Default for VolatileTuning {
    fn default() -> Self {
        Self {
            deepest_level: DEEPEST_LEVEL,
            amulet_level: AMULET_LEVEL,

            minimum_altar_level: 10,
            minimum_lava_level: 3,
            minimum_brimstone_level: 12,
            mutations_occur_above_level: 6,
            monster_out_of_depth_chance: 25,

            machines_per_level_suppression_multiplier: 3,
            machines_per_level_suppression_offset: 1,
            machines_per_level_increase_factor: 2,
            max_level_for_bonus_machines: 3,

            extra_items_per_level: 1,
            gold_adjustment_start_depth: 4,

            player_transference_ratio: 15,
            on_hit_hallucinate_duration: 60,
            on_hit_weaken_duration: 220,
            on_hit_mercy_heal_percent: 40,

            weapon_kills_to_auto_id: 10,
            armor_delay_to_auto_id: 600,
            ring_delay_to_auto_id: 900,

            fall_damage_min: 8,
            fall_damage_max: 16,

            companion_feat_required_xp: 8400,
        }
    }
}

impl VolatileTuning {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load tuning overrides from `path` (or the default config location).
    ///
    /// A missing file yields the shipped tuning; a malformed file is an
    /// error rather than a silent fallback.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map_or_else(Self::path, Path::to_path_buf);

        if !path.exists() {
            info!(path = %path.display(), "No tuning file found, using shipped volatile tuning");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read tuning file {:?}", path))?;
        let tuning: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML from {:?}", path))?;

        info!(path = %path.display(), "Loaded volatile tuning overrides");
        Ok(tuning)
    }

    /// Compose the overlay: clone `base` and overwrite exactly the fields
    /// this variant owns. Fields not named here (content-table counts,
    /// depth accelerator, menu chrome) pass through from the baseline
    /// untouched.
    pub fn apply(&self, base: &GameConstants) -> GameConstants {
        let mut derived = base.clone();

        derived.deepest_level = self.deepest_level;
        derived.amulet_level = self.amulet_level;

        derived.minimum_altar_level = self.minimum_altar_level;
        derived.minimum_lava_level = self.minimum_lava_level;
        derived.minimum_brimstone_level = self.minimum_brimstone_level;
        derived.mutations_occur_above_level = self.mutations_occur_above_level;
        derived.monster_out_of_depth_chance = self.monster_out_of_depth_chance;

        derived.machines_per_level_suppression_multiplier =
            self.machines_per_level_suppression_multiplier;
        derived.machines_per_level_suppression_offset = self.machines_per_level_suppression_offset;
        derived.machines_per_level_increase_factor = self.machines_per_level_increase_factor;
        derived.max_level_for_bonus_machines = self.max_level_for_bonus_machines;
        // Machines stop generating at the amulet depth in this variant.
        derived.deepest_level_for_machines = self.amulet_level;

        derived.extra_items_per_level = self.extra_items_per_level;
        derived.gold_adjustment_start_depth = self.gold_adjustment_start_depth;

        derived.player_transference_ratio = self.player_transference_ratio;
        derived.on_hit_hallucinate_duration = self.on_hit_hallucinate_duration;
        derived.on_hit_weaken_duration = self.on_hit_weaken_duration;
        derived.on_hit_mercy_heal_percent = self.on_hit_mercy_heal_percent;

        derived.weapon_kills_to_auto_id = self.weapon_kills_to_auto_id;
        derived.armor_delay_to_auto_id = self.armor_delay_to_auto_id;
        derived.ring_delay_to_auto_id = self.ring_delay_to_auto_id;

        derived.fall_damage_min = self.fall_damage_min;
        derived.fall_damage_max = self.fall_damage_max;

        derived.companion_feat_required_xp = self.companion_feat_required_xp;

        derived
    }
}

/// Owns everything Volatile Brogue needs at runtime: the shared config
/// handle it publishes through, its tuning, and the player's pending class
/// selection.
#[derive(Debug)]
pub struct VolatileRuntime {
    handle: ConfigHandle,
    tuning: VolatileTuning,
    extra_version: String,
    class_selection: Mutex<Option<VolatileClass>>,
}

impl VolatileRuntime {
    /// Build a runtime publishing through `handle`, with the
    /// build-supplied extra version suffix.
    pub fn new(handle: ConfigHandle, tuning: VolatileTuning) -> Self {
        Self {
            handle,
            tuning,
            extra_version: EXTRA_VERSION.to_string(),
            class_selection: Mutex::new(None),
        }
    }

    /// Replace the extra version suffix (normally supplied by the build).
    pub fn with_extra_version(mut self, extra: impl Into<String>) -> Self {
        self.extra_version = extra.into();
        self
    }

    /// Activate the variant.
    ///
    /// Rebuilds the canonical baseline, applies the tuning overlay, stamps
    /// the version identity, resets the class selection, and publishes the
    /// result through the config handle. Returns the published aggregate.
    ///
    /// Safe to call repeatedly: every call starts from a fresh baseline and
    /// clears any earlier class selection. Must not be called concurrently
    /// with itself; run it during single-threaded startup.
    pub fn activate(&self) -> Arc<GameConstants> {
        let base = GameConstants::brogue();
        let mut derived = self.tuning.apply(&base);

        derived.major_version = VOLATILE_VERSION.major;
        derived.minor_version = VOLATILE_VERSION.minor;
        derived.patch_version = VOLATILE_VERSION.patch;
        derived.variant_name = VOLATILE_VARIANT_NAME.to_string();

        derived.version_string =
            VOLATILE_VERSION.display_string(&self.extra_version, DISPLAY_VERSION_CAP);
        derived.dungeon_version_string = VOLATILE_VERSION.dungeon_tag();
        derived.patch_version_pattern = VOLATILE_VERSION.patch_pattern();
        derived.recording_version_string = VOLATILE_VERSION.recording_tag();

        *self.selection_slot() = None;

        let published = Arc::new(derived);
        self.handle.publish(Arc::clone(&published));

        info!(
            variant = VOLATILE_VARIANT_NAME,
            version = %published.version_string,
            out_of_depth_chance = published.monster_out_of_depth_chance,
            "Activated variant"
        );

        published
    }

    /// The handle this runtime publishes through.
    pub fn handle(&self) -> &ConfigHandle {
        &self.handle
    }

    /// Record the player's class choice. No policy here: callers decide
    /// when picking (or re-picking) is allowed.
    pub fn select_class(&self, class: VolatileClass) {
        *self.selection_slot() = Some(class);
    }

    /// The pending class choice, if one has been made since the last
    /// activation.
    pub fn class_selection(&self) -> Option<VolatileClass> {
        *self.selection_slot()
    }

    fn selection_slot(&self) -> MutexGuard<'_, Option<VolatileClass>> {
        // The selection is plain data; a poisoned lock still holds a valid
        // value.
        self.class_selection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime() -> VolatileRuntime {
        let handle = ConfigHandle::new(GameConstants::brogue());
        VolatileRuntime::new(handle, VolatileTuning::default()).with_extra_version("")
    }

    #[test]
    fn test_overlay_overrides_listed_fields() {
        let rt = runtime();
        let active = rt.activate();

        assert_eq!(active.minimum_altar_level, 10);
        assert_eq!(active.monster_out_of_depth_chance, 25);
        assert_eq!(active.deepest_level, 40);
        assert_eq!(active.amulet_level, 26);
        assert_eq!(active.deepest_level_for_machines, 26);
        assert_eq!(active.companion_feat_required_xp, 8400);
    }

    #[test]
    fn test_overlay_preserves_untouched_fields() {
        let rt = runtime();
        let base = GameConstants::brogue();
        let active = rt.activate();

        // Content-table counts and menu chrome are not on the override
        // list and must pass through from the baseline.
        assert_eq!(active.number_bolt_kinds, base.number_bolt_kinds);
        assert_eq!(active.number_hordes, base.number_hordes);
        assert_eq!(active.depth_accelerator, base.depth_accelerator);
        assert_eq!(active.main_menu_title_width, base.main_menu_title_width);
    }

    #[test]
    fn test_version_identity_installed_consistently() {
        let rt = runtime();
        let active = rt.activate();

        assert_eq!(active.major_version, 1);
        assert_eq!(active.minor_version, 0);
        assert_eq!(active.patch_version, 0);
        assert_eq!(active.variant_name, "volatileBrogue");
        assert_eq!(active.version_string, "VB 1.0.0");
        assert_eq!(active.dungeon_version_string, "VB 1.0");
        assert_eq!(active.patch_version_pattern, "VB 1.0.%hu");
        assert_eq!(active.recording_version_string, "VB 1.0.0");
    }

    #[test]
    fn test_activation_redirects_the_handle() {
        let rt = runtime();

        assert_eq!(rt.handle().active().variant_name, "brogue");

        let published = rt.activate();
        let seen = rt.handle().active();
        assert!(Arc::ptr_eq(&seen, &published));
        assert_eq!(seen.monster_out_of_depth_chance, 25);
    }

    #[test]
    fn test_activation_is_idempotent() {
        let rt = runtime();

        let first = rt.activate();
        rt.select_class(VolatileClass::Berserker);
        let second = rt.activate();

        assert_eq!(*first, *second);
        assert_eq!(rt.class_selection(), None);
    }

    #[test]
    fn test_class_selection_lifecycle() {
        let rt = runtime();
        rt.activate();
        assert_eq!(rt.class_selection(), None);

        rt.select_class(VolatileClass::Alchemist);
        assert_eq!(rt.class_selection(), Some(VolatileClass::Alchemist));

        // Reading does not clear the choice.
        assert_eq!(rt.class_selection(), Some(VolatileClass::Alchemist));

        rt.activate();
        assert_eq!(rt.class_selection(), None);
    }

    #[test]
    fn test_extra_version_flows_into_display_string_only() {
        let handle = ConfigHandle::new(GameConstants::brogue());
        let rt = VolatileRuntime::new(handle, VolatileTuning::default())
            .with_extra_version("-nightly");
        let active = rt.activate();

        assert_eq!(active.version_string, "VB 1.0.0-nightly");
        assert_eq!(active.dungeon_version_string, "VB 1.0");
        assert_eq!(active.recording_version_string, "VB 1.0.0");
    }

    #[test]
    fn test_oversized_extra_version_is_truncated() {
        let handle = ConfigHandle::new(GameConstants::brogue());
        let rt = VolatileRuntime::new(handle, VolatileTuning::default())
            .with_extra_version("-".repeat(64));
        let active = rt.activate();

        assert_eq!(
            active.version_string.len(),
            crate::constants::version::DISPLAY_VERSION_CAP
        );
        assert!(active.version_string.starts_with("VB 1.0.0"));
    }

    #[test]
    fn test_partial_tuning_file_keeps_shipped_values() {
        let tuning: VolatileTuning =
            toml::from_str("monster_out_of_depth_chance = 40\nfall_damage_max = 20\n")
                .expect("partial tuning should parse");

        assert_eq!(tuning.monster_out_of_depth_chance, 40);
        assert_eq!(tuning.fall_damage_max, 20);
        // Everything else keeps the shipped tuning.
        assert_eq!(tuning.minimum_altar_level, 10);
        assert_eq!(tuning.on_hit_weaken_duration, 220);
    }

    #[test]
    fn test_empty_tuning_file_equals_shipped_tuning() {
        let tuning: VolatileTuning = toml::from_str("").expect("empty tuning should parse");
        assert_eq!(tuning, VolatileTuning::default());
    }

    #[test]
    fn test_custom_tuning_reaches_the_active_config() {
        let mut tuning = VolatileTuning::default();
        tuning.monster_out_of_depth_chance = 50;

        let handle = ConfigHandle::new(GameConstants::brogue());
        let rt = VolatileRuntime::new(handle, tuning).with_extra_version("");
        let active = rt.activate();

        assert_eq!(active.monster_out_of_depth_chance, 50);
        // Version identity is stamped by activation, not by tuning.
        assert_eq!(active.version_string, "VB 1.0.0");
    }
}
