pub mod batch;
pub mod discovery;
pub mod naming;
pub mod squaring;

pub use batch::{BatchConfig, BatchProcessor, write_report};
pub use discovery::{DiscoveredImage, discover_images};
pub use naming::{GeneratedName, NamingDeriver, is_valid_filename, parse_filename};
pub use squaring::{ImageInfo, SquaringStrategy, describe_image, square_single};
