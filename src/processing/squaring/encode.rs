//! JPEG encoding for squared output.

use image::RgbImage;
use jpeg_encoder::{ColorType, Encoder, EncodingError};

/// Encodes `image` as a JPEG at `quality` (1-100) with Huffman tables
/// optimized for the image content.
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, EncodingError> {
    // Canvas edges are capped well below u16::MAX by settings validation.
    let width = u16::try_from(image.width()).unwrap_or(u16::MAX);
    let height = u16::try_from(image.height()).unwrap_or(u16::MAX);

    let mut buf = Vec::new();
    let mut encoder = Encoder::new(&mut buf, quality);
    encoder.set_optimized_huffman_tables(true);
    encoder.encode(image.as_raw(), width, height, ColorType::Rgb)?;
    Ok(buf)
}
