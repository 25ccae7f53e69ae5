//! Image task definition and creation.

use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::core::{BackgroundColor, TargetSize};

/// Represents a single squaring task.
///
/// Built once per discovered file after the output name has been derived;
/// it is read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ImageTask {
    source_path: PathBuf,
    output_path: PathBuf,
    target_size: TargetSize,
    background: BackgroundColor,
    jpeg_quality: u8,
}

impl ImageTask {
    pub fn new(
        source_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        target_size: TargetSize,
        background: BackgroundColor,
        jpeg_quality: u8,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            output_path: output_path.into(),
            target_size,
            background,
            jpeg_quality,
        }
    }

    /// Path to the source image file
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Path where the squared JPEG will be written
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn target_size(&self) -> TargetSize {
        self.target_size
    }

    pub fn background(&self) -> BackgroundColor {
        self.background
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    /// File name of the source, for log lines
    pub fn source_name(&self) -> &str {
        self.source_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
    }
}
