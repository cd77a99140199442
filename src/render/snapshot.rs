//! Trail snapshots
//!
//! A point-in-time copy of a trail, written as pretty JSON. Trails are
//! otherwise never persisted.

use crate::capture::input::TrailPoint;
use crate::recorder::channel::TrailResult;
use crate::recorder::cursor::CursorTrail;
use crate::recorder::trail::TrailPolicy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailSnapshot {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub policy: TrailPolicy,
    pub points: Vec<TrailPoint>,
}

impl TrailSnapshot {
    pub fn capture(trail: &CursorTrail) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            policy: trail.policy(),
            points: trail.points(),
        }
    }

    pub fn write(&self, path: &Path) -> TrailResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, data)?;

        tracing::info!(
            "Wrote trail snapshot {} ({} points) to {:?}",
            self.id,
            self.points.len(),
            path
        );
        Ok(())
    }

    pub fn read(path: &Path) -> TrailResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
