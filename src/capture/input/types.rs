use serde::{Deserialize, Serialize};

/// A single pointer-movement event in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerMove {
    pub x: f64,
    pub y: f64,
    /// Milliseconds since the stream started. Only replay uses it.
    #[serde(default)]
    pub process_time_ms: f64,
}

impl PointerMove {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            process_time_ms: 0.0,
        }
    }

    pub fn at(x: f64, y: f64, process_time_ms: f64) -> Self {
        Self {
            x,
            y,
            process_time_ms,
        }
    }

    pub fn point(&self) -> TrailPoint {
        TrailPoint {
            x: self.x,
            y: self.y,
        }
    }
}

/// One recorded position on the trail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
}

impl TrailPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for TrailPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recorded_move_ignores_extra_fields() {
        let json = r#"{"x":12.0,"y":40.5,"cursorId":"arrow","unixTimeMs":1700000000000,"processTimeMs":8.33}"#;
        let mv: PointerMove = serde_json::from_str(json).unwrap();
        assert_eq!(mv.x, 12.0);
        assert_eq!(mv.y, 40.5);
        assert!((mv.process_time_ms - 8.33).abs() < f64::EPSILON);
    }

    #[test]
    fn test_process_time_defaults_to_zero() {
        let mv: PointerMove = serde_json::from_str(r#"{"x":1,"y":2}"#).unwrap();
        assert_eq!(mv.process_time_ms, 0.0);
        assert_eq!(mv.point(), TrailPoint::new(1.0, 2.0));
    }
}
