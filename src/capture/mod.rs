//! Pointer capture
//!
//! This module provides the pointer event sources components subscribe to,
//! and replay of recorded pointer streams.

pub mod input;
pub mod replay;

// Re-export input types and sources
pub use input::{
    ManualPointerSource, PointerListener, PointerMove, PointerSource, SubscriptionId, TrailPoint,
};

// Re-export replay helpers
pub use replay::{load_moves, replay};
