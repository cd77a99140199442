//! Overlay component trait
//!
//! Defines the lifecycle shared by overlay components that draw from
//! pointer input, and the errors they can report.

use crate::capture::input::PointerSource;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur around a trail component
#[derive(Error, Debug)]
pub enum TrailError {
    #[error("Already active")]
    AlreadyActive,

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for trail operations
pub type TrailResult<T> = Result<T, TrailError>;

/// Trait for overlay components
///
/// A component is inert until activated against a pointer source.
/// While active it holds exactly one subscription on that source;
/// deactivation releases it.
pub trait OverlayComponent: Send {
    /// Get the component identifier (e.g., "cursor-trail")
    fn id(&self) -> &str;

    /// Subscribe to the source and start recording
    fn activate(&mut self, source: Arc<dyn PointerSource>) -> TrailResult<()>;

    /// Unsubscribe and discard recorded state. A no-op when inactive.
    fn deactivate(&mut self);

    /// Check if the component is currently subscribed
    fn is_active(&self) -> bool;
}
