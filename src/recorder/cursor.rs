use crate::capture::input::{PointerMove, PointerSource, SubscriptionId, TrailPoint};
use crate::config::TrailConfig;
use crate::recorder::channel::{OverlayComponent, TrailError, TrailResult};
use crate::recorder::trail::{Trail, TrailPolicy};
use crate::render::polyline::{render_markup, render_trail, Polyline};
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;

/// Recorded trail, shared with the listener. Frames are derived from it
/// on read, so recording a point stays constant time.
#[derive(Debug, Default)]
struct TrailState {
    trail: Trail,
}

impl TrailState {
    fn record(&mut self, point: TrailPoint) {
        self.trail.push(point);
    }

    fn reset(&mut self) {
        self.trail.clear();
    }

    fn frame(&mut self) -> Option<Polyline> {
        render_trail(self.trail.points())
    }
}

struct Subscription {
    source: Arc<dyn PointerSource>,
    id: SubscriptionId,
}

/// Cursor overlay that traces every pointer position as a polyline.
///
/// While active it owns one listener on its source; each event appends
/// a point, and the frame always reflects the current trail. Deactivating
/// (or dropping) unsubscribes and throws the trail away.
pub struct CursorTrail {
    id: String,
    config: TrailConfig,
    state: Arc<ParkingMutex<TrailState>>,
    subscription: Option<Subscription>,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self::with_config(TrailConfig::default())
    }

    pub fn with_config(config: TrailConfig) -> Self {
        let state = TrailState {
            trail: Trail::new(config.policy()),
        };
        Self {
            id: "cursor-trail".to_string(),
            config,
            state: Arc::new(ParkingMutex::new(state)),
            subscription: None,
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn policy(&self) -> TrailPolicy {
        self.state.lock().trail.policy()
    }

    pub fn len(&self) -> usize {
        self.state.lock().trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().trail.is_empty()
    }

    /// Recorded points in insertion order
    pub fn points(&self) -> Vec<TrailPoint> {
        self.state.lock().trail.to_vec()
    }

    /// Current frame, `None` while fewer than two points are recorded
    pub fn rendered(&self) -> Option<Polyline> {
        self.state.lock().frame()
    }

    /// Overlay markup for the current frame
    pub fn markup(&self) -> String {
        let frame = self.state.lock().frame();
        render_markup(frame.as_ref(), &self.config)
    }
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayComponent for CursorTrail {
    fn id(&self) -> &str {
        &self.id
    }

    fn activate(&mut self, source: Arc<dyn PointerSource>) -> TrailResult<()> {
        if self.subscription.is_some() {
            return Err(TrailError::AlreadyActive);
        }

        self.state.lock().reset();

        let state = self.state.clone();
        let id = source.subscribe(Box::new(move |event: PointerMove| {
            state.lock().record(event.point());
        }));

        self.subscription = Some(Subscription { source, id });

        tracing::info!(
            "{} activated (subscription={}, policy={:?})",
            self.id,
            id,
            self.policy()
        );
        Ok(())
    }

    fn deactivate(&mut self) {
        let Some(subscription) = self.subscription.take() else {
            return;
        };

        if !subscription.source.unsubscribe(subscription.id) {
            tracing::warn!(
                "Subscription {} was already gone from its source",
                subscription.id
            );
        }

        let mut state = self.state.lock();
        let recorded = state.trail.len();
        state.reset();

        tracing::info!("{} deactivated (points={})", self.id, recorded);
    }

    fn is_active(&self) -> bool {
        self.subscription.is_some()
    }
}

impl Drop for CursorTrail {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl std::fmt::Debug for CursorTrail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorTrail")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("active", &self.is_active())
            .field("points", &self.len())
            .finish()
    }
}
