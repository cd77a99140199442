//! Cursor Trail - traces pointer movement as a polyline overlay.
//!
//! The library provides the cursor trail component, the injectable pointer
//! sources it subscribes to, and rendering of the trail to SVG markup.

pub mod capture;
pub mod cli;
pub mod commands;
pub mod config;
pub mod recorder;
pub mod render;

pub use capture::{ManualPointerSource, PointerMove, PointerSource, TrailPoint};
pub use config::TrailConfig;
pub use recorder::{CursorTrail, OverlayComponent, TrailError, TrailPolicy, TrailResult};
pub use render::{render_trail, Polyline, TrailSnapshot};

use anyhow::Context;
use cli::Cli;
use commands::render::{render_recording, RenderOptions};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging. Output goes to stderr so stdout carries
/// only the rendered markup.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cursor_trail=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run the CLI
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    tracing::info!("Starting cursor-trail v{}", env!("CARGO_PKG_VERSION"));

    let options = RenderOptions::from(cli);
    let outcome = render_recording(&options)
        .await
        .with_context(|| format!("failed to render trail from {:?}", options.input))?;

    tracing::info!(
        "Rendered {} events into a {}-point trail",
        outcome.events,
        outcome.points
    );

    if options.output.is_none() {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", outcome.markup).context("failed to write markup")?;
    }
    Ok(())
}
