use std::fs;
use std::path::Path;
use crate::utils::{PathError, SquarerError, SquarerResult, ValidationError};

const WRITE_PROBE: &str = ".catalog-squarer-write-test";

/// Get file size in bytes, 0 when the metadata is unavailable
pub fn file_size(path: impl AsRef<Path>) -> u64 {
    fs::metadata(path.as_ref()).map(|m| m.len()).unwrap_or(0)
}

/// Checks that the source root exists and is a directory
pub fn validate_source_dir(path: impl AsRef<Path>) -> SquarerResult<()> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ValidationError::path_not_found(path).into());
    }

    if !path.is_dir() {
        return Err(ValidationError::not_a_directory(path).into());
    }

    Ok(())
}

/// Creates the output root if needed and proves it is writable.
pub fn prepare_output_root(path: impl AsRef<Path>) -> SquarerResult<()> {
    let path = path.as_ref();

    if path.exists() && !path.is_dir() {
        return Err(ValidationError::not_a_directory(path).into());
    }

    fs::create_dir_all(path)
        .map_err(|e| ValidationError::not_writable(path, e))?;

    let probe = path.join(WRITE_PROBE);
    fs::write(&probe, b"")
        .and_then(|_| fs::remove_file(&probe))
        .map_err(|e| ValidationError::not_writable(path, e))?;

    Ok(())
}

/// Creates the parent directory of an output file
pub fn ensure_parent_dir(path: impl AsRef<Path>) -> SquarerResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| SquarerError::write_failure(path, format!("cannot create directory: {e}")))?;
    }
    Ok(())
}

/// Validates that an input path points at an existing regular file
pub fn validate_input_file(path: impl AsRef<Path>) -> SquarerResult<()> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(ValidationError::not_a_file(path).into()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ValidationError::path_not_found(path).into())
        }
        Err(e) => Err(PathError::from(e).into()),
    }
}
