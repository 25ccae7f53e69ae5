//! Blocking per-image pipeline: decode, square, encode, write.

use std::path::Path;
use image::{DynamicImage, ImageReader};
use serde::Serialize;
use tracing::debug;

use crate::core::{ImageTask, ProcessedImage, TargetSize};
use crate::utils::{
    SourceFormat, SquarerError, SquarerResult, ensure_parent_dir, file_size,
    format_from_extension,
};

use super::canvas::square_image;
use super::encode::encode_jpeg;
use super::strategy::SquaringStrategy;

/// Squares one image task synchronously and writes the JPEG.
pub fn square_single(task: &ImageTask) -> SquarerResult<ProcessedImage> {
    let source = task.source_path();
    let original_bytes = file_size(source);

    let (image, source_format) = load_image(source)?;
    let source_size = (image.width(), image.height());

    debug!("Loaded '{}': {}x{}", task.source_name(), source_size.0, source_size.1);

    let (squared, strategy) = square_image(&image, task.target_size(), task.background());
    drop(image);

    let output = task.output_path();
    let bytes = encode_jpeg(&squared, task.jpeg_quality())
        .map_err(|e| SquarerError::write_failure(output, format!("JPEG encode failed: {e}")))?;

    ensure_parent_dir(output)?;
    std::fs::write(output, &bytes)
        .map_err(|e| SquarerError::write_failure(output, e))?;

    Ok(ProcessedImage {
        source_path: source.to_path_buf(),
        output_path: output.to_path_buf(),
        source_format,
        source_size,
        output_size: squared.dimensions(),
        strategy,
        original_bytes,
        output_bytes: bytes.len() as u64,
    })
}

/// Opens and decodes an image, sniffing the content before trusting the extension.
///
/// Returns the sniffed format; the extension's format is used only when
/// the content is not recognized.
pub fn load_image(path: &Path) -> SquarerResult<(DynamicImage, SourceFormat)> {
    let declared = format_from_extension(path)?;

    let mut reader = ImageReader::open(path)
        .map_err(|e| SquarerError::unreadable(path, e))?
        .with_guessed_format()
        .map_err(|e| SquarerError::unreadable(path, e))?;

    let detected = match reader.format() {
        Some(sniffed) => SourceFormat::from_image_format(sniffed).ok_or_else(|| {
            SquarerError::format(format!(
                "Unsupported image content ({:?}): {}",
                sniffed,
                path.display()
            ))
        })?,
        None => {
            reader.set_format(declared.as_image_format());
            declared
        }
    };

    if detected != declared {
        debug!("{} is {:?} content behind a {:?} extension", path.display(), detected, declared);
    }

    let image = reader
        .decode()
        .map_err(|e| SquarerError::unreadable(path, e))?;

    if image.width() == 0 || image.height() == 0 {
        return Err(SquarerError::unreadable(path, "image has a zero dimension"));
    }

    Ok((image, detected))
}

/// Facts about a source image and how it would be squared.
#[derive(Debug, Clone, Serialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: SourceFormat,
    /// Color layout as reported by the decoder, e.g. `Rgba8`
    pub color: String,
    pub size_bytes: u64,
    pub strategy: SquaringStrategy,
    /// Size the content is scaled to before padding
    pub scaled_size: (u32, u32),
}

/// Decodes `path` and reports what squaring onto `target` would do.
pub fn describe_image(path: &Path, target: TargetSize) -> SquarerResult<ImageInfo> {
    let (image, format) = load_image(path)?;
    let (width, height) = (image.width(), image.height());
    let strategy = SquaringStrategy::classify(width, height, target);

    Ok(ImageInfo {
        width,
        height,
        format,
        color: format!("{:?}", image.color()),
        size_bytes: file_size(path),
        strategy,
        scaled_size: strategy.scaled_dimensions(width, height, target),
    })
}
