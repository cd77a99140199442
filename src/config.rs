//! Trail configuration
//!
//! Every field is optional in the JSON form; a missing file section falls
//! back to the same look as the original cursor overlay.

use crate::recorder::channel::{TrailError, TrailResult};
use crate::recorder::trail::TrailPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONTAINER_CLASS: &str = "cursor";
pub const DEFAULT_LINE_CLASS: &str = "cursor-line";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrailConfig {
    /// Keep at most this many points. `None` keeps every point.
    pub max_points: Option<usize>,
    /// Class on the wrapping `<div>`
    pub container_class: String,
    /// Class on the `<svg>` element
    pub line_class: String,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_points: None,
            container_class: DEFAULT_CONTAINER_CLASS.to_string(),
            line_class: DEFAULT_LINE_CLASS.to_string(),
        }
    }
}

impl TrailConfig {
    pub fn from_json_str(json: &str) -> TrailResult<Self> {
        let config: TrailConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> TrailResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!("Loaded trail config from {:?}: {:?}", path, config);
        Ok(config)
    }

    pub fn validate(&self) -> TrailResult<()> {
        if self.max_points == Some(0) {
            return Err(TrailError::ConfigurationError(
                "maxPoints must be at least 1".to_string(),
            ));
        }
        if self.container_class.trim().is_empty() {
            return Err(TrailError::ConfigurationError(
                "containerClass must not be empty".to_string(),
            ));
        }
        if self.line_class.trim().is_empty() {
            return Err(TrailError::ConfigurationError(
                "lineClass must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn policy(&self) -> TrailPolicy {
        TrailPolicy::from_max_points(self.max_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_overlay_classes() {
        let config = TrailConfig::default();
        assert_eq!(config.container_class, "cursor");
        assert_eq!(config.line_class, "cursor-line");
        assert_eq!(config.policy(), TrailPolicy::Unbounded);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = TrailConfig::from_json_str(r#"{"maxPoints": 64}"#).unwrap();
        assert_eq!(config.max_points, Some(64));
        assert_eq!(config.line_class, "cursor-line");
        assert_eq!(config.policy(), TrailPolicy::Capped { max_points: 64 });
    }

    #[test]
    fn test_zero_cap_rejected() {
        let err = TrailConfig::from_json_str(r#"{"maxPoints": 0}"#).unwrap_err();
        assert!(matches!(err, TrailError::ConfigurationError(_)));
    }

    #[test]
    fn test_empty_class_rejected() {
        let err = TrailConfig::from_json_str(r#"{"lineClass": "  "}"#).unwrap_err();
        assert!(matches!(err, TrailError::ConfigurationError(_)));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let err = TrailConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, TrailError::SerializationError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"containerClass": "trail", "maxPoints": 10}}"#).unwrap();

        let config = TrailConfig::load(file.path()).unwrap();
        assert_eq!(config.container_class, "trail");
        assert_eq!(config.max_points, Some(10));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TrailConfig::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, TrailError::IoError(_)));
    }
}
