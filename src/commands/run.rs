use std::path::PathBuf;
use clap::Args;
use tracing::debug;
use crate::core::{BackgroundColor, BatchSummary, TargetSize};
use crate::processing::{BatchConfig, BatchProcessor, write_report};
use crate::utils::{SquarerError, SquarerResult};

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Folder holding the catalog photos
    pub source: Option<PathBuf>,

    /// Folder receiving the squared JPEGs
    pub output: Option<PathBuf>,

    /// Target canvas size [default: 750 750]
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    pub size: Option<Vec<u32>>,

    /// Padding color [default: 255 255 255]
    #[arg(long = "bg-color", num_args = 3, value_names = ["R", "G", "B"])]
    pub bg_color: Option<Vec<u8>>,

    /// JPEG quality, 1-100 [default: 95]
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// JSON config file; flags given here take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Plain-text log file [default: catalog-squarer.log]
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Write a JSON summary of the run
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl RunArgs {
    /// Loads the config file, if any, and applies the flags on top.
    pub fn resolve_config(&self) -> SquarerResult<BatchConfig> {
        let mut config = match &self.config {
            Some(path) => BatchConfig::load(path)?,
            None => BatchConfig::default(),
        };

        if let Some(source) = &self.source {
            config.source_dir = Some(source.clone());
        }
        if let Some(output) = &self.output {
            config.output_dir = Some(output.clone());
        }
        if let Some(size) = &self.size {
            config.target_size = match size.as_slice() {
                [width, height] => TargetSize::new(*width, *height),
                _ => return Err(SquarerError::config("--size takes WIDTH HEIGHT")),
            };
        }
        if let Some(color) = &self.bg_color {
            config.background_color = match color.as_slice() {
                [r, g, b] => BackgroundColor::new(*r, *g, *b),
                _ => return Err(SquarerError::config("--bg-color takes R G B")),
            };
        }
        if let Some(quality) = self.quality {
            config.jpeg_quality = quality;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
        if let Some(report) = &self.report {
            config.report_file = Some(report.clone());
        }

        config.validate()?;
        config.require_dirs()?;
        Ok(config)
    }
}

/// Runs a batch with a resolved config and writes the report if requested.
pub fn run_batch(config: &BatchConfig) -> SquarerResult<BatchSummary> {
    let (source, output) = config.require_dirs()?;
    debug!("Resolved config: {:?}", config);

    let summary = BatchProcessor::new(source, output, config).run()?;

    if let Some(report) = &config.report_file {
        write_report(&summary, report)?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "source_dir": "from-file", "output_dir": "out", "jpeg_quality": 80, "target_size": [500, 500] }"#,
        )
        .unwrap();

        let args = RunArgs {
            source: Some(PathBuf::from("from-cli")),
            size: Some(vec![800, 600]),
            bg_color: Some(vec![0, 0, 0]),
            config: Some(path),
            ..RunArgs::default()
        };

        let config = args.resolve_config().unwrap();
        assert_eq!(config.source_dir, Some(PathBuf::from("from-cli")));
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert_eq!(config.target_size, TargetSize::new(800, 600));
        assert_eq!(config.background_color, BackgroundColor::new(0, 0, 0));
        assert_eq!(config.jpeg_quality, 80);
    }

    #[test]
    fn test_missing_dirs_is_a_config_error() {
        let err = RunArgs::default().resolve_config().unwrap_err();
        assert!(matches!(err, SquarerError::Config(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let args = RunArgs {
            source: Some(PathBuf::from("in")),
            output: Some(PathBuf::from("out")),
            size: Some(vec![0, 750]),
            ..RunArgs::default()
        };
        assert!(matches!(args.resolve_config(), Err(SquarerError::Validation(_))));
    }

    #[test]
    fn test_run_batch_writes_report() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir_all(&src).unwrap();
        let report = dir.path().join("report.json");

        let config = BatchConfig {
            source_dir: Some(src),
            output_dir: Some(dir.path().join("out")),
            report_file: Some(report.clone()),
            ..BatchConfig::default()
        };

        let summary = run_batch(&config).unwrap();
        assert_eq!(summary.total, 0);
        assert!(report.is_file());
    }
}
