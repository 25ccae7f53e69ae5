//! Source tree discovery.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use crate::utils::is_supported_image;

/// A supported image found under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredImage {
    pub source_path: PathBuf,
    /// Path relative to the source root
    pub relative_path: PathBuf,
    /// Output directory mirroring the source's parent folders
    pub output_dir: PathBuf,
}

/// Walks `source_root` recursively and pairs every supported image with its
/// mirrored output directory under `output_root`.
///
/// Results are sorted by relative path. Entries under `output_root` are
/// skipped when the output tree lives inside the source tree. Symlinked
/// files are followed; symlinked directories are not descended into.
pub fn discover_images(source_root: &Path, output_root: &Path) -> Vec<DiscoveredImage> {
    let mut images = Vec::new();

    let walker = WalkDir::new(source_root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.path() != output_root);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.path_is_symlink() {
            if !entry.path().is_file() {
                debug!("Skipping symlink that is not a file: {}", entry.path().display());
                continue;
            }
        } else if !entry.file_type().is_file() {
            continue;
        }

        if !is_supported_image(entry.path()) {
            continue;
        }

        let source_path = entry.into_path();
        let relative_path = match source_path.strip_prefix(source_root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => continue,
        };
        let output_dir = match relative_path.parent() {
            Some(parent) => output_root.join(parent),
            None => output_root.to_path_buf(),
        };

        debug!("Discovered {}", relative_path.display());
        images.push(DiscoveredImage {
            source_path,
            relative_path,
            output_dir,
        });
    }

    images.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    info!("Found {} images in {}", images.len(), source_root.display());
    images
}
