//! Pointer event sources
//!
//! A `PointerSource` is the capability a component subscribes to for
//! pointer-movement events. Components never reach for a global event
//! target; the source is injected, so tests can drive one by hand.

use crate::capture::input::types::PointerMove;
use parking_lot::Mutex as ParkingMutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Handle returned by `subscribe`, needed to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Receives pointer-movement events from a source
pub trait PointerListener: Send {
    fn on_pointer_move(&mut self, event: PointerMove);
}

impl<F> PointerListener for F
where
    F: FnMut(PointerMove) + Send,
{
    fn on_pointer_move(&mut self, event: PointerMove) {
        self(event)
    }
}

/// Subscribe/unsubscribe capability over a stream of pointer events
pub trait PointerSource: Send + Sync {
    /// Register a listener. Every event emitted afterwards reaches it
    /// until it is unsubscribed.
    fn subscribe(&self, listener: Box<dyn PointerListener>) -> SubscriptionId;

    /// Remove a listener. Returns false if the id was not registered.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;

    /// Number of listeners currently registered
    fn listener_count(&self) -> usize;
}

/// In-process pointer source that delivers events synchronously.
///
/// Listeners are called on the emitting thread, in subscription order.
/// A listener must not subscribe or unsubscribe on the same source from
/// inside its callback.
#[derive(Clone, Default)]
pub struct ManualPointerSource {
    listeners: Arc<ParkingMutex<Vec<(SubscriptionId, Box<dyn PointerListener>)>>>,
}

impl ManualPointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one event to every registered listener.
    /// With no listeners this does nothing.
    pub fn emit(&self, event: PointerMove) {
        let mut listeners = self.listeners.lock();
        tracing::trace!(
            "Emitting pointer move ({}, {}) to {} listener(s)",
            event.x,
            event.y,
            listeners.len()
        );
        for (_, listener) in listeners.iter_mut() {
            listener.on_pointer_move(event);
        }
    }

    /// Convenience for emitting a plain coordinate pair
    pub fn emit_xy(&self, x: f64, y: f64) {
        self.emit(PointerMove::new(x, y));
    }
}

impl PointerSource for ManualPointerSource {
    fn subscribe(&self, listener: Box<dyn PointerListener>) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.listeners.lock().push((id, listener));
        tracing::debug!("Pointer listener {} subscribed", id);
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        let removed = listeners.len() != before;
        if removed {
            tracing::debug!("Pointer listener {} unsubscribed", id);
        }
        removed
    }

    fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl std::fmt::Debug for ManualPointerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualPointerSource")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
