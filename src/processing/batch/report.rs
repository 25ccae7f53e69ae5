use std::path::Path;
use tracing::info;
use crate::core::BatchSummary;
use crate::utils::{SquarerError, SquarerResult, ensure_parent_dir};

/// Writes the run summary as pretty-printed JSON.
pub fn write_report(summary: &BatchSummary, path: impl AsRef<Path>) -> SquarerResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| SquarerError::write_failure(path, e))?;

    ensure_parent_dir(path)?;
    std::fs::write(path, json).map_err(|e| SquarerError::write_failure(path, e))?;

    info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FailedImage;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_report_lists_failures() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports").join("run.json");
        let summary = BatchSummary {
            total: 1,
            processed: Vec::new(),
            failed: vec![FailedImage {
                source_path: PathBuf::from("mug/obsidian/bad.jpg"),
                error: "unreadable".to_string(),
            }],
            elapsed_ms: 12,
        };

        write_report(&summary, &path).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["elapsedMs"], 12);
        assert_eq!(value["failed"][0]["error"], "unreadable");
    }
}
