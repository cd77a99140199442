//! Pointer input capture
//!
//! Event types and the injectable source that components subscribe to
//! for pointer movement.

pub mod source;
pub mod types;

pub use source::{ManualPointerSource, PointerListener, PointerSource, SubscriptionId};
pub use types::{PointerMove, TrailPoint};
