// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod commands;

// Public exports for external consumers
pub use core::{BackgroundColor, BatchSummary, ImageTask, TargetSize};
pub use processing::{BatchConfig, BatchProcessor, GeneratedName, SquaringStrategy};
pub use utils::{SquarerError, SquarerResult};

// The binary in main.rs only parses arguments and sets up logging.
