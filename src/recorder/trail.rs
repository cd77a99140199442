//! Trail storage
//!
//! The ordered list of recorded positions, with an optional cap that
//! evicts the oldest point first.

use crate::capture::input::TrailPoint;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How long a trail may grow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum TrailPolicy {
    /// Keep every point for the lifetime of the activation
    #[default]
    Unbounded,
    /// Keep only the most recent `max_points` points
    Capped {
        #[serde(rename = "maxPoints")]
        max_points: usize,
    },
}

impl TrailPolicy {
    pub fn from_max_points(max_points: Option<usize>) -> Self {
        match max_points {
            Some(max_points) => TrailPolicy::Capped { max_points },
            None => TrailPolicy::Unbounded,
        }
    }
}

/// Ordered, append-only sequence of trail points
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    policy: TrailPolicy,
}

impl Trail {
    pub fn new(policy: TrailPolicy) -> Self {
        Self {
            points: VecDeque::new(),
            policy,
        }
    }

    pub fn policy(&self) -> TrailPolicy {
        self.policy
    }

    /// Append a point, evicting from the front if the cap is exceeded
    pub fn push(&mut self, point: TrailPoint) {
        self.points.push_back(point);
        if let TrailPolicy::Capped { max_points } = self.policy {
            while self.points.len() > max_points {
                self.points.pop_front();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Contiguous view of the points in insertion order
    pub fn points(&mut self) -> &[TrailPoint] {
        self.points.make_contiguous()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn to_vec(&self) -> Vec<TrailPoint> {
        self.points.iter().copied().collect()
    }
}
