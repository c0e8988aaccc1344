//! Game variants
//!
//! Each variant starts from the canonical baseline and publishes its own
//! patched copy of the game constants. Only Volatile Brogue lives here
//! today; a new variant gets its own module with its own tuning struct and
//! runtime.

pub mod volatile;

// Re-export commonly used types
pub use volatile::{VolatileClass, VolatileRuntime, VolatileTuning, VOLATILE_VERSION};
