//! The game constants aggregate
//!
//! One flat struct of every tunable the rest of the game consults: depth
//! landmarks, dungeon-generation knobs, item and combat tuning,
//! auto-identify thresholds, content-table counts, and the version
//! identity strings. Variants never edit the baseline; they clone it and
//! patch their own copy (see [`crate::variant`]).

use serde::{Deserialize, Serialize};

/// Every tunable consulted by the game, plus the version identity of
/// whichever variant produced it.
///
/// Exactly one instance is "active" at a time, published through
/// [`crate::config::ConfigHandle`]. Values are plain assignments with no
/// cross-field validation; a variant that wants an altar above the deepest
/// level gets one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConstants {
    // Version identity
    pub major_version: u16,
    pub minor_version: u16,
    pub patch_version: u16,
    pub variant_name: String,

    pub version_string: String,
    pub dungeon_version_string: String,
    pub patch_version_pattern: String,
    pub recording_version_string: String,

    // Depth landmarks
    pub deepest_level: i32,
    pub amulet_level: i32,

    // Dungeon generation
    pub depth_accelerator: i32,
    pub minimum_altar_level: i32,
    pub minimum_lava_level: i32,
    pub minimum_brimstone_level: i32,
    pub mutations_occur_above_level: i32,
    pub monster_out_of_depth_chance: i32,

    // Items and gold
    pub extra_items_per_level: i32,
    pub gold_adjustment_start_depth: i32,

    // Machine (vault/puzzle room) placement
    pub machines_per_level_suppression_multiplier: i32,
    pub machines_per_level_suppression_offset: i32,
    pub machines_per_level_increase_factor: i32,
    pub max_level_for_bonus_machines: i32,
    pub deepest_level_for_machines: i32,

    // Combat and status effects
    pub player_transference_ratio: i32,
    pub on_hit_hallucinate_duration: i32,
    pub on_hit_weaken_duration: i32,
    pub on_hit_mercy_heal_percent: i32,

    pub fall_damage_min: i32,
    pub fall_damage_max: i32,

    // Auto-identify thresholds
    pub weapon_kills_to_auto_id: i32,
    pub armor_delay_to_auto_id: i32,
    pub ring_delay_to_auto_id: i32,

    // Content-table counts (sized by the baseline data tables)
    pub number_autogenerators: i32,
    pub number_bolt_kinds: i32,
    pub number_blueprints: i32,
    pub number_hordes: i32,

    pub number_metered_items: i32,
    pub number_charm_kinds: i32,
    pub number_potion_kinds: i32,
    pub number_good_potion_kinds: i32,
    pub number_scroll_kinds: i32,
    pub number_good_scroll_kinds: i32,
    pub number_wand_kinds: i32,
    pub number_good_wand_kinds: i32,

    // Feats
    pub number_feats: i32,
    pub companion_feat_required_xp: i32,

    // Main menu chrome
    pub main_menu_title_height: i32,
    pub main_menu_title_width: i32,
}

impl GameConstants {
    /// Canonical baseline: the stock Brogue tuning every variant starts
    /// from. The content tables these counts describe (hordes, blueprints,
    /// item kinds) live with the baseline game data, not here.
    pub fn brogue() -> Self {
        Self {
            major_version: 1,
            minor_version: 14,
            patch_version: 1,
            variant_name: "brogue".to_string(),

            version_string: "CE 1.14.1".to_string(),
            dungeon_version_string: "CE 1.14".to_string(),
            patch_version_pattern: "CE 1.14.%hu".to_string(),
            recording_version_string: "CE 1.14.1".to_string(),

            deepest_level: 40,
            amulet_level: 26,

            depth_accelerator: 1,
            minimum_altar_level: 13,
            minimum_lava_level: 4,
            minimum_brimstone_level: 17,
            mutations_occur_above_level: 10,
            monster_out_of_depth_chance: 10,

            extra_items_per_level: 0,
            gold_adjustment_start_depth: 6,

            machines_per_level_suppression_multiplier: 4,
            machines_per_level_suppression_offset: 2,
            machines_per_level_increase_factor: 1,
            max_level_for_bonus_machines: 2,
            deepest_level_for_machines: 26,

            player_transference_ratio: 20,
            on_hit_hallucinate_duration: 20,
            on_hit_weaken_duration: 300,
            on_hit_mercy_heal_percent: 50,

            fall_damage_min: 8,
            fall_damage_max: 10,

            weapon_kills_to_auto_id: 20,
            armor_delay_to_auto_id: 1000,
            ring_delay_to_auto_id: 1500,

            number_autogenerators: 49,
            number_bolt_kinds: 27,
            number_blueprints: 43,
            number_hordes: 177,

            number_metered_items: 3,
            number_charm_kinds: 14,
            number_potion_kinds: 17,
            number_good_potion_kinds: 9,
            number_scroll_kinds: 14,
            number_good_scroll_kinds: 11,
            number_wand_kinds: 9,
            number_good_wand_kinds: 5,

            number_feats: 12,
            companion_feat_required_xp: 4000,

            main_menu_title_height: 34,
            main_menu_title_width: 74,
        }
    }
}
