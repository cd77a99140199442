//! Trail recording
//!
//! The cursor trail component, its storage, and the lifecycle trait it
//! implements.

pub mod channel;
pub mod cursor;
pub mod trail;

pub use channel::{OverlayComponent, TrailError, TrailResult};
pub use cursor::CursorTrail;
pub use trail::{Trail, TrailPolicy};
