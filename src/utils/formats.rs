use std::path::Path;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::utils::SquarerError;

/// Source formats the squarer accepts. Output is always JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    JPEG,
    PNG,
    WebP,
    BMP,
    TIFF,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 5] = [
        Self::JPEG,
        Self::PNG,
        Self::WebP,
        Self::BMP,
        Self::TIFF,
    ];

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
            Self::WebP => &["webp"],
            Self::BMP => &["bmp"],
            Self::TIFF => &["tiff", "tif"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Maps to the decoder format of the `image` crate
    pub fn as_image_format(&self) -> image::ImageFormat {
        match self {
            Self::JPEG => image::ImageFormat::Jpeg,
            Self::PNG => image::ImageFormat::Png,
            Self::WebP => image::ImageFormat::WebP,
            Self::BMP => image::ImageFormat::Bmp,
            Self::TIFF => image::ImageFormat::Tiff,
        }
    }

    /// Maps a decoder format back, `None` for formats the squarer does not accept
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_image_format() == format)
    }
}

impl FromStr for SourceFormat {
    type Err = SquarerError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        let ext = ext.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.matches_extension(&ext))
            .ok_or_else(|| SquarerError::format(format!("Unsupported image format: {}", ext)))
    }
}

/// Get format from file extension
pub fn format_from_extension(path: impl AsRef<Path>) -> Result<SourceFormat, SquarerError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| SquarerError::format(
            format!("File has no extension: {}", path.display())
        ))?;

    SourceFormat::from_str(ext)
}

/// True when the path carries one of the supported extensions
pub fn is_supported_image(path: impl AsRef<Path>) -> bool {
    format_from_extension(path).is_ok()
}
