//! Squaring engine.
//!
//! - [`SquaringStrategy`]: horizontal / vertical / square decision against the target aspect
//! - [`canvas`]: scales the source and centers it on a background-filled canvas
//! - [`encode`]: JPEG encoding of the squared canvas
//! - [`executor`]: per-task pipeline from source file to written JPEG

mod canvas;
mod encode;
mod executor;
mod strategy;

pub use canvas::{centered_offset, flatten_onto, square_image};
pub use encode::encode_jpeg;
pub use executor::{ImageInfo, describe_image, load_image, square_single};
pub use strategy::{SQUARE_TOLERANCE, SquaringStrategy};
