use crate::core::{ImageTask, TargetSize};
use crate::utils::{
    SquarerResult, SquarerError, ValidationError, format_from_extension, validate_input_file,
};

/// Largest canvas edge accepted, in pixels.
pub const MAX_TARGET_EDGE: u32 = 10_000;

/// Validates an image squaring task before any decoding happens
pub fn validate_task(task: &ImageTask) -> SquarerResult<()> {
    validate_input_file(task.source_path())?;
    // This will validate the extension and format
    format_from_extension(task.source_path())?;
    validate_output_extension(task)?;
    validate_settings(task.target_size(), task.jpeg_quality())?;
    Ok(())
}

fn validate_output_extension(task: &ImageTask) -> SquarerResult<()> {
    let ext = task
        .output_path()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("jpg") => Ok(()),
        _ => Err(SquarerError::format(format!(
            "Output must be a .jpg file: {}",
            task.output_path().display()
        ))),
    }
}

/// Validates canvas size and JPEG quality
pub fn validate_settings(size: TargetSize, quality: u8) -> SquarerResult<()> {
    if quality == 0 || quality > 100 {
        return Err(ValidationError::settings(
            format!("Invalid quality value: {}. Must be between 1 and 100", quality)
        ).into());
    }

    validate_target_size(size)
}

/// Validates canvas size alone
pub fn validate_target_size(size: TargetSize) -> SquarerResult<()> {
    if size.width == 0 || size.height == 0 {
        return Err(ValidationError::settings(
            format!("Target size cannot have a zero edge: {}", size)
        ).into());
    }

    if size.width > MAX_TARGET_EDGE || size.height > MAX_TARGET_EDGE {
        return Err(ValidationError::settings(
            format!("Target size {} exceeds the {}px limit", size, MAX_TARGET_EDGE)
        ).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BackgroundColor;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_settings() {
        assert!(validate_settings(TargetSize::new(750, 750), 95).is_ok());
        assert!(validate_settings(TargetSize::new(0, 750), 95).is_err());
        assert!(validate_settings(TargetSize::new(750, 0), 95).is_err());
        assert!(validate_settings(TargetSize::new(750, 750), 0).is_err());
        assert!(validate_settings(TargetSize::new(750, 750), 101).is_err());
        assert!(validate_settings(TargetSize::new(MAX_TARGET_EDGE + 1, 10), 95).is_err());
    }

    #[test]
    fn test_validate_target_size() {
        assert!(validate_target_size(TargetSize::new(800, 600)).is_ok());
        assert!(matches!(
            validate_target_size(TargetSize::new(0, 0)),
            Err(SquarerError::Validation(ValidationError::Settings(_)))
        ));
    }

    #[test]
    fn test_validate_task() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("shot.png");
        fs::write(&source, b"not really a png").unwrap();

        let task = |src: &std::path::Path, out: &str| {
            ImageTask::new(
                src,
                dir.path().join(out),
                TargetSize::default(),
                BackgroundColor::WHITE,
                95,
            )
        };

        assert!(validate_task(&task(&source, "out.jpg")).is_ok());
        assert!(matches!(
            validate_task(&task(&source, "out.png")),
            Err(SquarerError::UnsupportedFormat(_))
        ));
        assert!(validate_task(&task(&dir.path().join("missing.png"), "out.jpg")).is_err());

        let gif = dir.path().join("anim.gif");
        fs::write(&gif, b"GIF89a").unwrap();
        assert!(matches!(
            validate_task(&task(&gif, "out.jpg")),
            Err(SquarerError::UnsupportedFormat(_))
        ));
    }
}
