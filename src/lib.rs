//! Variant configuration layer for Brogue-style games
//!
//! A variant starts from the canonical baseline constants, selectively
//! overrides its curated set of knobs, stamps its version identity, and
//! publishes the result through a single shared handle. Everything that
//! reads "the configuration" dereferences that handle and transparently
//! observes whichever variant is active.
//!
//! ```
//! use brogue_variants::config::{ConfigHandle, GameConstants};
//! use brogue_variants::variant::{VolatileRuntime, VolatileTuning};
//!
//! let handle = ConfigHandle::new(GameConstants::brogue());
//! let runtime = VolatileRuntime::new(handle.clone(), VolatileTuning::default());
//! runtime.activate();
//!
//! assert_eq!(handle.active().monster_out_of_depth_chance, 25);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod constants;
pub mod variant;
pub mod version;

pub use config::{ConfigHandle, GameConstants};
pub use variant::{VolatileClass, VolatileRuntime, VolatileTuning};
pub use version::VersionIdentity;
