//! Core types for squaring settings and results.

use std::fmt;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::processing::SquaringStrategy;
use crate::utils::SourceFormat;

/// Default canvas edge used by the catalog, in pixels.
pub const DEFAULT_TARGET_EDGE: u32 = 750;
/// Default JPEG quality for squared output.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Target canvas size.
///
/// Serialized as a `[width, height]` pair to match the config file layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width / height of the canvas
    pub fn aspect(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_EDGE, DEFAULT_TARGET_EDGE)
    }
}

impl From<[u32; 2]> for TargetSize {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}

impl From<TargetSize> for [u32; 2] {
    fn from(size: TargetSize) -> Self {
        [size.width, size.height]
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Fill color for padding bands, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct BackgroundColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BackgroundColor {
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 3]> for BackgroundColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<BackgroundColor> for [u8; 3] {
    fn from(color: BackgroundColor) -> Self {
        [color.r, color.g, color.b]
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Result of squaring one image successfully.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedImage {
    /// Path to the original input file
    pub source_path: PathBuf,
    /// Path of the written JPEG
    pub output_path: PathBuf,
    /// Format the source was decoded as
    pub source_format: SourceFormat,
    /// Source dimensions as decoded
    pub source_size: (u32, u32),
    /// Output dimensions, always the task's target size
    pub output_size: (u32, u32),
    /// Strategy the squaring engine picked
    pub strategy: SquaringStrategy,
    /// Original file size in bytes
    pub original_bytes: u64,
    /// Written file size in bytes
    pub output_bytes: u64,
}

/// One image the batch could not process.
#[derive(Debug, Clone, Serialize)]
pub struct FailedImage {
    pub source_path: PathBuf,
    pub error: String,
}

/// Aggregate outcome of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    /// Number of supported images discovered
    pub total: usize,
    pub processed: Vec<ProcessedImage>,
    pub failed: Vec<FailedImage>,
    /// Wall-clock time for the whole run in milliseconds
    #[serde(rename = "elapsedMs")]
    pub elapsed_ms: u64,
}

impl BatchSummary {
    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
