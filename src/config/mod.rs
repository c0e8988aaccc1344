//! Configuration core for the variant layer
//!
//! This module provides the two halves of the overlay protocol:
//! - **game**: the [`GameConstants`] aggregate and its canonical baseline
//! - **handle**: the [`ConfigHandle`] every consumer dereferences to read
//!   the active configuration

pub mod game;
pub mod handle;

// Re-export commonly used types
pub use game::GameConstants;
pub use handle::ConfigHandle;
