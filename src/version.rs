//! Version identity for game variants
//!
//! A variant's version is a (prefix, major, minor, patch) tuple expanded
//! into four text artifacts consumed by UI chrome, save-game headers, and
//! session recordings. All four are derived here from the same tuple so
//! they can never drift apart.

/// A variant's release identity and the strings derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionIdentity {
    pub prefix: &'static str,
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl VersionIdentity {
    pub const fn new(prefix: &'static str, major: u16, minor: u16, patch: u16) -> Self {
        Self { prefix, major, minor, patch }
    }

    /// Human-facing version label, e.g. `"VB 1.0.0"` or `"VB 1.0.0-nightly"`.
    ///
    /// `extra` is appended verbatim; the result is capped at `cap` bytes and
    /// truncated on a char boundary rather than overflowing. Pass the
    /// build-supplied suffix (or `""`) and
    /// [`crate::constants::version::DISPLAY_VERSION_CAP`] for the stock label.
    pub fn display_string(&self, extra: &str, cap: usize) -> String {
        let full = format!("{} {}.{}.{}{}", self.prefix, self.major, self.minor, self.patch, extra);
        truncate_to_cap(full, cap)
    }

    /// Save/dungeon format tag, e.g. `"VB 1.0"`.
    ///
    /// Patch is deliberately omitted so saves remain loadable across patch
    /// releases of the same minor line.
    pub fn dungeon_tag(&self) -> String {
        format!("{} {}.{}", self.prefix, self.major, self.minor)
    }

    /// Pattern used to match the patch component of a persisted save
    /// header, e.g. `"VB 1.0.%hu"`.
    ///
    /// The `%hu` placeholder is kept verbatim: save headers written by the
    /// C lineage are scanned with this exact pattern, and changing it would
    /// break byte-level compatibility.
    pub fn patch_pattern(&self) -> String {
        format!("{} {}.{}.%hu", self.prefix, self.major, self.minor)
    }

    /// Tag stamped into recorded sessions, e.g. `"VB 1.0.0"`.
    pub fn recording_tag(&self) -> String {
        format!("{} {}.{}.{}", self.prefix, self.major, self.minor, self.patch)
    }
}

/// Truncate `s` to at most `cap` bytes without splitting a char.
///
/// Degrades to a shorter valid string; never an error.
fn truncate_to_cap(mut s: String, cap: usize) -> String {
    if s.len() <= cap {
        return s;
    }
    let mut end = cap;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
    s
}
