//! Core types shared across the squarer.
//!
//! - [`ImageTask`]: one source image bound to its output path and settings
//! - [`TargetSize`] / [`BackgroundColor`]: canvas settings
//! - [`ProcessedImage`] / [`FailedImage`] / [`BatchSummary`]: run results
//! - [`Progress`]: progress tracking for batch operations

mod types;
mod task;
mod progress;

pub use types::{
    BackgroundColor, BatchSummary, DEFAULT_JPEG_QUALITY, DEFAULT_TARGET_EDGE, FailedImage,
    ProcessedImage, TargetSize,
};
pub use task::ImageTask;
pub use progress::{Progress, ProgressType};
