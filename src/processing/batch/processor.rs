use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use crate::core::{
    BackgroundColor, BatchSummary, FailedImage, ImageTask, ProcessedImage, Progress,
    ProgressType, TargetSize,
};
use crate::processing::discovery::{DiscoveredImage, discover_images};
use crate::processing::naming::NamingDeriver;
use crate::processing::squaring::square_single;
use crate::utils::{
    SquarerResult, ValidationError, prepare_output_root, validate_settings, validate_source_dir,
    validate_task,
};
use super::config::BatchConfig;
use super::metrics::BatchMetrics;

/// Runs the whole pipeline over a source tree, one image at a time.
///
/// Setup problems (missing source, unwritable output, bad settings) abort
/// the run. Anything that goes wrong with a single image is recorded in
/// the summary and the loop moves on.
pub struct BatchProcessor {
    source_root: PathBuf,
    output_root: PathBuf,
    target_size: TargetSize,
    background: BackgroundColor,
    jpeg_quality: u8,
    naming: NamingDeriver,
}

impl BatchProcessor {
    pub fn new(
        source_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
        config: &BatchConfig,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            output_root: output_root.into(),
            target_size: config.target_size,
            background: config.background_color,
            jpeg_quality: config.jpeg_quality,
            naming: NamingDeriver::new(),
        }
    }

    /// Replaces the naming deriver, e.g. with a seeded id generator.
    pub fn with_naming(mut self, naming: NamingDeriver) -> Self {
        self.naming = naming;
        self
    }

    /// Validates settings and both roots, creating the output root.
    ///
    /// Both roots are canonicalized so an output tree nested inside the
    /// source tree is recognized during discovery. The output root must be
    /// a different directory than the source root.
    fn prepare(&mut self) -> SquarerResult<()> {
        validate_settings(self.target_size, self.jpeg_quality)?;
        validate_source_dir(&self.source_root)?;
        prepare_output_root(&self.output_root)?;

        self.source_root = std::fs::canonicalize(&self.source_root)?;
        self.output_root = std::fs::canonicalize(&self.output_root)?;

        if self.source_root == self.output_root {
            return Err(ValidationError::settings(format!(
                "output directory must differ from the source directory: {}",
                self.output_root.display()
            ))
            .into());
        }
        Ok(())
    }

    /// Processes every supported image under the source root.
    pub fn run(&mut self) -> SquarerResult<BatchSummary> {
        let started = Instant::now();
        self.prepare()?;

        info!("Source: {}", self.source_root.display());
        info!("Output: {}", self.output_root.display());
        info!(
            "Target: {} on {}, JPEG quality {}",
            self.target_size, self.background, self.jpeg_quality
        );

        let images = discover_images(&self.source_root, &self.output_root);
        let total = images.len();
        let mut summary = BatchSummary {
            total,
            ..BatchSummary::default()
        };

        if total == 0 {
            warn!("No supported images found in {}", self.source_root.display());
            summary.elapsed_ms = started.elapsed().as_millis() as u64;
            return Ok(summary);
        }

        info!("{}", Progress::new(ProgressType::Start, 0, total, "Starting batch"));
        let mut metrics = BatchMetrics::new();

        for (index, image) in images.iter().enumerate() {
            let completed = index + 1;
            match self.process_one(image) {
                Ok(result) => {
                    metrics.record_success(&result);
                    let status = format!(
                        "{} -> {} ({})",
                        image.relative_path.display(),
                        output_name(&result),
                        result.strategy
                    );
                    info!("{}", Progress::new(ProgressType::Progress, completed, total, status));
                    summary.processed.push(result);
                }
                Err(e) => {
                    metrics.record_failure();
                    let status = format!("{} failed: {}", image.relative_path.display(), e);
                    error!("{}", Progress::new(ProgressType::Error, completed, total, status));
                    summary.failed.push(FailedImage {
                        source_path: image.source_path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        summary.elapsed_ms = started.elapsed().as_millis() as u64;
        log_summary(&summary);
        metrics.log_summary();

        Ok(summary)
    }

    fn build_task(&mut self, image: &DiscoveredImage) -> ImageTask {
        let name = self
            .naming
            .derive(&image.source_path, &self.source_root, self.target_size.width);

        ImageTask::new(
            &image.source_path,
            image.output_dir.join(name.file_name()),
            self.target_size,
            self.background,
            self.jpeg_quality,
        )
    }

    fn process_one(&mut self, image: &DiscoveredImage) -> SquarerResult<ProcessedImage> {
        let task = self.build_task(image);
        debug!("Task: {} -> {}", task.source_path().display(), task.output_path().display());
        validate_task(&task)?;
        square_single(&task)
    }
}

fn output_name(result: &ProcessedImage) -> String {
    result
        .output_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn log_summary(summary: &BatchSummary) {
    let status = format!(
        "Batch finished: {} processed, {} failed, {} total in {:.2}s",
        summary.processed_count(),
        summary.failed_count(),
        summary.total,
        summary.elapsed_ms as f64 / 1000.0
    );
    info!(
        "{}",
        Progress::new(ProgressType::Complete, summary.total, summary.total, status)
    );

    if !summary.is_clean() {
        warn!("{} images could not be processed:", summary.failed_count());
        for failed in &summary.failed {
            warn!("  {}: {}", failed.source_path.display(), failed.error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::naming::{IdGenerator, FolderConvention, parse_filename};
    use crate::utils::SquarerError;
    use image::{Rgb, RgbImage};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        RgbImage::from_pixel(width, height, Rgb([200, 10, 10]))
            .save(path)
            .unwrap();
    }

    fn seeded(source: &Path, output: &Path) -> BatchProcessor {
        BatchProcessor::new(source, output, &BatchConfig::default()).with_naming(
            NamingDeriver::with_convention(Box::new(FolderConvention), IdGenerator::seeded(42)),
        )
    }

    #[test]
    fn test_run_mirrors_tree_and_names_outputs() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("catalog");
        let out = dir.path().join("squared");
        write_png(&src.join("Gourde").join("Obsidian").join("a.png"), 120, 80);
        write_png(&src.join("Gourde").join("Description").join("b.png"), 80, 120);

        let summary = seeded(&src, &out).run().unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.processed_count(), 2);
        assert!(summary.is_clean());

        let first = &summary.processed[0];
        assert!(first.output_path.starts_with(fs::canonicalize(&out).unwrap()));
        assert!(first.output_path.parent().unwrap().ends_with("Gourde/Description"));

        let name = parse_filename(&output_name(first)).unwrap();
        assert_eq!(name.product, "gourde");
        assert_eq!(name.kind, "description");
        assert_eq!(name.width, 750);
        assert_eq!(first.output_size, (750, 750));
    }

    #[test]
    fn test_failures_do_not_stop_the_batch() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("catalog");
        let out = dir.path().join("squared");
        write_png(&src.join("mug").join("selenite").join("good.png"), 50, 50);
        fs::write(src.join("mug").join("selenite").join("bad.jpg"), b"garbage").unwrap();

        let summary = seeded(&src, &out).run().unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.processed_count(), 1);
        assert_eq!(summary.failed_count(), 1);
        assert!(summary.failed[0].source_path.ends_with("bad.jpg"));
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let dir = tempdir().unwrap();
        let err = seeded(&dir.path().join("missing"), &dir.path().join("out"))
            .run()
            .unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_same_source_and_output_is_fatal() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("catalog");
        write_png(&src.join("mug").join("obsidian").join("a.png"), 40, 40);

        let err = seeded(&src, &src.join(".").join("mug").join("..")).run().unwrap_err();
        assert!(matches!(err, SquarerError::Validation(_)));
        assert!(err.is_fatal());
        assert_eq!(fs::read_dir(src.join("mug").join("obsidian")).unwrap().count(), 1);
    }

    #[test]
    fn test_bad_settings_are_fatal() {
        let dir = tempdir().unwrap();
        let config = BatchConfig {
            jpeg_quality: 101,
            ..BatchConfig::default()
        };
        let err = BatchProcessor::new(dir.path(), dir.path().join("out"), &config)
            .run()
            .unwrap_err();
        assert!(matches!(err, SquarerError::Validation(_)));
    }

    #[test]
    fn test_empty_source_yields_empty_summary() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("empty");
        fs::create_dir_all(&src).unwrap();

        let summary = seeded(&src, &dir.path().join("out")).run().unwrap();
        assert_eq!(summary.total, 0);
        assert!(summary.is_clean());
        assert!(dir.path().join("out").is_dir());
    }
}
