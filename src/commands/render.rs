//! Render command
//!
//! Replays a recorded pointer stream through a cursor trail and returns
//! the overlay markup, optionally writing a snapshot of the final trail.

use crate::capture::{load_moves, replay, ManualPointerSource};
use crate::config::TrailConfig;
use crate::recorder::{CursorTrail, OverlayComponent, TrailResult};
use crate::render::TrailSnapshot;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub input: PathBuf,
    pub config: Option<PathBuf>,
    /// Overrides `maxPoints` from the config file
    pub max_points: Option<usize>,
    pub speed: f64,
    pub snapshot: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub markup: String,
    pub events: usize,
    pub points: usize,
}

pub fn resolve_config(options: &RenderOptions) -> TrailResult<TrailConfig> {
    let mut config = match &options.config {
        Some(path) => TrailConfig::load(path)?,
        None => TrailConfig::default(),
    };
    if options.max_points.is_some() {
        config.max_points = options.max_points;
    }
    config.validate()?;
    Ok(config)
}

pub async fn render_recording(options: &RenderOptions) -> TrailResult<RenderOutcome> {
    let config = resolve_config(options)?;
    let moves = load_moves(&options.input)?;

    let source = ManualPointerSource::new();
    let mut trail = CursorTrail::with_config(config);
    trail.activate(Arc::new(source.clone()))?;

    let events = replay(&moves, &source, options.speed).await;

    let markup = trail.markup();
    let points = trail.len();

    if let Some(path) = &options.snapshot {
        TrailSnapshot::capture(&trail).write(path)?;
    }

    trail.deactivate();

    if let Some(path) = &options.output {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &markup)?;
        tracing::info!("Wrote overlay markup to {:?}", path);
    }

    Ok(RenderOutcome {
        markup,
        events,
        points,
    })
}
