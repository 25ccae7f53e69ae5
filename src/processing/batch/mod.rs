mod config;
mod metrics;
mod processor;
mod report;

pub use config::{BatchConfig, DEFAULT_LOG_FILE};
pub use metrics::BatchMetrics;
pub use processor::BatchProcessor;
pub use report::write_report;
