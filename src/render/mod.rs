//! Rendering of recorded trails to overlay markup, and trail snapshots.

pub mod polyline;
pub mod snapshot;

pub use polyline::{render_markup, render_trail, Polyline};
pub use snapshot::TrailSnapshot;
