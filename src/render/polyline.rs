//! Trail rendering
//!
//! Rendering is a pure function of the trail: the same points always
//! produce the same frame, and fewer than two points produce nothing.

use crate::capture::input::TrailPoint;
use crate::config::TrailConfig;
use serde::{Deserialize, Serialize};

/// Connected line through an ordered list of points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<TrailPoint>,
}

impl Polyline {
    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    /// SVG `points` attribute, e.g. `"10,10 20,15 30,10"`
    pub fn points_attr(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Build the frame for a trail. `None` until there are at least two points.
pub fn render_trail(points: &[TrailPoint]) -> Option<Polyline> {
    if points.len() < 2 {
        return None;
    }
    Some(Polyline {
        points: points.to_vec(),
    })
}

/// Overlay markup for a frame. The container is always emitted; the
/// `<svg>` only when there is a line to draw.
pub fn render_markup(frame: Option<&Polyline>, config: &TrailConfig) -> String {
    match frame {
        Some(line) => format!(
            r#"<div class="{}"><svg class="{}"><polyline points="{}"/></svg></div>"#,
            escape_attr(&config.container_class),
            escape_attr(&config.line_class),
            line.points_attr()
        ),
        None => format!(
            r#"<div class="{}"></div>"#,
            escape_attr(&config.container_class)
        ),
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
