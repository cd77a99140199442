//! Replay of recorded pointer streams
//!
//! Recordings are JSON arrays of pointer moves, the same shape the input
//! tracker writes (extra per-move fields are ignored). Replay emits them
//! into a `ManualPointerSource` with the recorded spacing between events.

use crate::capture::input::{ManualPointerSource, PointerMove};
use crate::recorder::channel::TrailResult;
use std::path::Path;
use std::time::Duration;

pub fn load_moves(path: &Path) -> TrailResult<Vec<PointerMove>> {
    let content = std::fs::read_to_string(path)?;
    let moves: Vec<PointerMove> = serde_json::from_str(&content)?;
    tracing::debug!("Loaded {} pointer moves from {:?}", moves.len(), path);
    Ok(moves)
}

/// Longest pause replay will take between two events
pub const MAX_REPLAY_GAP: Duration = Duration::from_secs(5);

/// Delay before emitting `next`, scaled by `speed` and clamped to
/// `MAX_REPLAY_GAP`
fn gap(prev_ms: f64, next_ms: f64, speed: f64) -> Option<Duration> {
    if !speed.is_finite() || speed <= 0.0 {
        return None;
    }
    let delta_ms = (next_ms - prev_ms) / speed;
    if delta_ms.is_nan() || delta_ms <= 0.0 {
        return None;
    }
    if delta_ms > MAX_REPLAY_GAP.as_secs_f64() * 1000.0 {
        tracing::warn!(
            "Replay gap of {:.0}ms exceeds {:?}, clamping",
            delta_ms,
            MAX_REPLAY_GAP
        );
        return Some(MAX_REPLAY_GAP);
    }
    Some(Duration::from_micros((delta_ms * 1000.0).round() as u64))
}

/// Emit every move in order. `speed` of 1.0 keeps recorded timing,
/// 2.0 plays twice as fast, and zero or less plays without delays.
///
/// Returns the number of events emitted.
pub async fn replay(moves: &[PointerMove], source: &ManualPointerSource, speed: f64) -> usize {
    let mut prev_ms = moves.first().map(|m| m.process_time_ms).unwrap_or(0.0);

    for mv in moves {
        if let Some(delay) = gap(prev_ms, mv.process_time_ms, speed) {
            tokio::time::sleep(delay).await;
        }
        prev_ms = mv.process_time_ms;
        source.emit(*mv);
    }

    tracing::info!("Replayed {} pointer moves (speed={})", moves.len(), speed);
    moves.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::input::{PointerSource, TrailPoint};
    use crate::recorder::channel::{OverlayComponent, TrailError};
    use crate::recorder::cursor::CursorTrail;
    use std::io::Write;
    use std::sync::Arc;
    use std::time::Instant;

    #[test]
    fn test_gap_scaling() {
        assert_eq!(gap(0.0, 100.0, 1.0), Some(Duration::from_millis(100)));
        assert_eq!(gap(0.0, 100.0, 4.0), Some(Duration::from_millis(25)));
        assert_eq!(gap(0.0, 100.0, 0.0), None);
        assert_eq!(gap(0.0, 100.0, f64::INFINITY), None);
        assert_eq!(gap(50.0, 50.0, 1.0), None);
        assert_eq!(gap(80.0, 20.0, 1.0), None);
    }

    #[test]
    fn test_gap_clamped_for_large_jumps() {
        assert_eq!(gap(0.0, 1.0e12, 1.0), Some(MAX_REPLAY_GAP));
        assert_eq!(gap(0.0, f64::MAX, 0.5), Some(MAX_REPLAY_GAP));
        assert_eq!(gap(0.0, 6_000.0, 1.0), Some(MAX_REPLAY_GAP));
        assert_eq!(gap(0.0, 6_000.0, 2.0), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_load_moves_from_recording() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"x":10,"y":10,"processTimeMs":0,"cursorId":"a"}},{{"x":20,"y":15,"processTimeMs":8.3}}]"#
        )
        .unwrap();

        let moves = load_moves(file.path()).unwrap();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[1].point(), TrailPoint::new(20.0, 15.0));
    }

    #[test]
    fn test_load_moves_rejects_non_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"x":1}}"#).unwrap();
        let err = load_moves(file.path()).unwrap_err();
        assert!(matches!(err, TrailError::SerializationError(_)));
    }

    #[tokio::test]
    async fn test_replay_feeds_active_trail() {
        let source = ManualPointerSource::new();
        let mut trail = CursorTrail::new();
        trail.activate(Arc::new(source.clone())).unwrap();

        let moves = vec![
            PointerMove::at(10.0, 10.0, 0.0),
            PointerMove::at(20.0, 15.0, 5.0),
            PointerMove::at(30.0, 10.0, 10.0),
        ];
        let emitted = replay(&moves, &source, 0.0).await;

        assert_eq!(emitted, 3);
        assert_eq!(trail.rendered().unwrap().points_attr(), "10,10 20,15 30,10");
    }

    #[tokio::test]
    async fn test_replay_honours_recorded_spacing() {
        let source = ManualPointerSource::new();
        let moves = vec![PointerMove::at(0.0, 0.0, 0.0), PointerMove::at(1.0, 1.0, 40.0)];

        let started = Instant::now();
        replay(&moves, &source, 1.0).await;
        assert!(started.elapsed() >= Duration::from_millis(40));
        assert_eq!(source.listener_count(), 0);
    }

    #[tokio::test]
    async fn test_replay_empty_stream() {
        let source = ManualPointerSource::new();
        assert_eq!(replay(&[], &source, 1.0).await, 0);
    }
}
