use std::time::{Duration, Instant};
use tracing::{debug, info};
use crate::core::ProcessedImage;
use crate::processing::SquaringStrategy;

/// Running counters for one batch.
#[derive(Debug, Clone)]
pub struct BatchMetrics {
    started: Instant,
    pub processed: usize,
    pub failed: usize,
    /// Horizontal, vertical, square
    pub strategy_counts: [usize; 3],
    pub input_bytes: u64,
    pub output_bytes: u64,
}

impl BatchMetrics {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            processed: 0,
            failed: 0,
            strategy_counts: [0; 3],
            input_bytes: 0,
            output_bytes: 0,
        }
    }

    pub fn record_success(&mut self, result: &ProcessedImage) {
        self.processed += 1;
        self.input_bytes += result.original_bytes;
        self.output_bytes += result.output_bytes;

        let index = match result.strategy {
            SquaringStrategy::Horizontal => 0,
            SquaringStrategy::Vertical => 1,
            SquaringStrategy::Square => 2,
        };
        self.strategy_counts[index] += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn log_summary(&self) {
        let elapsed = self.elapsed();
        let handled = self.processed + self.failed;
        let per_image_ms = if handled > 0 {
            elapsed.as_secs_f64() * 1000.0 / handled as f64
        } else {
            0.0
        };

        info!(
            "Strategies: {} horizontal, {} vertical, {} square",
            self.strategy_counts[0], self.strategy_counts[1], self.strategy_counts[2]
        );
        debug!(
            "Read {} KB, wrote {} KB in {:.2}s ({:.1} ms/image)",
            self.input_bytes / 1024,
            self.output_bytes / 1024,
            elapsed.as_secs_f64(),
            per_image_ms
        );
    }
}

impl Default for BatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::SourceFormat;
    use std::path::PathBuf;

    fn processed(strategy: SquaringStrategy) -> ProcessedImage {
        ProcessedImage {
            source_path: PathBuf::from("a.png"),
            output_path: PathBuf::from("a.jpg"),
            source_format: SourceFormat::PNG,
            source_size: (10, 10),
            output_size: (750, 750),
            strategy,
            original_bytes: 100,
            output_bytes: 40,
        }
    }

    #[test]
    fn test_record() {
        let mut metrics = BatchMetrics::new();
        metrics.record_success(&processed(SquaringStrategy::Horizontal));
        metrics.record_success(&processed(SquaringStrategy::Square));
        metrics.record_success(&processed(SquaringStrategy::Square));
        metrics.record_failure();

        assert_eq!(metrics.processed, 3);
        assert_eq!(metrics.failed, 1);
        assert_eq!(metrics.strategy_counts, [1, 0, 2]);
        assert_eq!(metrics.input_bytes, 300);
        assert_eq!(metrics.output_bytes, 120);
    }
}
