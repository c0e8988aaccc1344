//! Application-wide constants
//!
//! This module contains the fixed numbers and string literals shared across
//! the variant layer, providing a single source of truth for constant values.

/// Volatile Brogue release identity
pub mod version {
    /// Major release component
    pub const VOLATILE_MAJOR: u16 = 1;

    /// Minor release component
    pub const VOLATILE_MINOR: u16 = 0;

    /// Patch release component
    pub const VOLATILE_PATCH: u16 = 0;

    /// Tag prefix stamped into every version artifact
    pub const VOLATILE_PREFIX: &str = "VB";

    /// Canonical variant name recorded in the active constants
    pub const VOLATILE_VARIANT_NAME: &str = "volatileBrogue";

    /// Maximum byte length of the display version string.
    ///
    /// The C lineage formats into a 32-byte buffer with snprintf; the cap
    /// here is that buffer size minus the NUL terminator, so strings stay
    /// interchangeable with saves and recordings written by the original.
    pub const DISPLAY_VERSION_CAP: usize = 31;

    /// Optional build-supplied suffix appended to the display string
    /// (e.g. "-nightly"). Empty when the build does not define it.
    pub const EXTRA_VERSION: &str = match option_env!("BROGUE_EXTRA_VERSION") {
        Some(extra) => extra,
        None => "",
    };
}

/// Dungeon depth landmarks for the volatile variant
pub mod depth {
    /// Depth at which the amulet is placed
    pub const AMULET_LEVEL: i32 = 26;

    /// Deepest generated level
    pub const DEEPEST_LEVEL: i32 = 40;
}

/// Config file location constants
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "brogue-variants";

    /// Tuning override file name
    pub const FILENAME: &str = "volatile.toml";
}
