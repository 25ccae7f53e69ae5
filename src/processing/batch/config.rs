use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::core::{BackgroundColor, DEFAULT_JPEG_QUALITY, TargetSize};
use crate::utils::{SquarerError, SquarerResult, validate_settings};

/// Log file written next to the working directory unless configured otherwise
pub const DEFAULT_LOG_FILE: &str = "catalog-squarer.log";

/// Settings for one batch run.
///
/// Loaded from a JSON file when one is given; any key may be omitted and
/// falls back to the default. CLI flags are applied on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub source_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub target_size: TargetSize,
    #[serde(alias = "bg_color")]
    pub background_color: BackgroundColor,
    pub jpeg_quality: u8,
    pub log_file: Option<PathBuf>,
    /// Optional JSON report of the run
    pub report_file: Option<PathBuf>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            source_dir: None,
            output_dir: None,
            target_size: TargetSize::default(),
            background_color: BackgroundColor::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            log_file: None,
            report_file: None,
        }
    }
}

impl BatchConfig {
    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> SquarerResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SquarerError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: BatchConfig = serde_json::from_str(&content).map_err(|e| {
            SquarerError::config(format!("invalid JSON in {}: {}", path.display(), e))
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Checks size and quality; paths are checked when the run starts.
    pub fn validate(&self) -> SquarerResult<()> {
        validate_settings(self.target_size, self.jpeg_quality)
    }

    pub fn log_file_or_default(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }

    /// Source and output roots, both required to start a run.
    pub fn require_dirs(&self) -> SquarerResult<(PathBuf, PathBuf)> {
        match (&self.source_dir, &self.output_dir) {
            (Some(source), Some(output)) => Ok((source.clone(), output.clone())),
            _ => Err(SquarerError::config(
                "source and output directories are required (pass them as arguments or set source_dir/output_dir in the config file)",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = BatchConfig::default();
        assert_eq!(config.target_size, TargetSize::new(750, 750));
        assert_eq!(config.background_color, BackgroundColor::WHITE);
        assert_eq!(config.jpeg_quality, 95);
        assert_eq!(config.log_file_or_default(), PathBuf::from(DEFAULT_LOG_FILE));
        assert!(config.validate().is_ok());
        assert!(config.require_dirs().is_err());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "source_dir": "in", "output_dir": "out", "target_size": [500, 400], "bg_color": [0, 0, 0] }"#,
        )
        .unwrap();

        let config = BatchConfig::load(&path).unwrap();
        assert_eq!(config.target_size, TargetSize::new(500, 400));
        assert_eq!(config.background_color, BackgroundColor::new(0, 0, 0));
        assert_eq!(config.jpeg_quality, 95);
        assert_eq!(
            config.require_dirs().unwrap(),
            (PathBuf::from("in"), PathBuf::from("out"))
        );
    }

    #[test]
    fn test_load_errors_are_config_errors() {
        let dir = tempdir().unwrap();
        let missing = BatchConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, SquarerError::Config(_)));
        assert!(missing.is_fatal());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(BatchConfig::load(&bad), Err(SquarerError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_quality() {
        let config = BatchConfig {
            jpeg_quality: 0,
            ..BatchConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
