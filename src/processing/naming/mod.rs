//! Catalog naming: `<product>_<type>_<id>_SLY_<width>.jpg`.
//!
//! The folder layout is read through [`ProductPathConvention`] so another
//! layout can be plugged into [`NamingDeriver`] without touching squaring.

mod convention;
mod deriver;
mod filename;
mod id;

pub use convention::{
    FALLBACK_KIND, FALLBACK_PRODUCT, FolderConvention, KNOWN_KINDS, ProductPath,
    ProductPathConvention, is_known_kind, normalize_token,
};
pub use deriver::NamingDeriver;
pub use filename::{GeneratedName, OUTPUT_EXTENSION, SUFFIX, is_valid_filename, parse_filename};
pub use id::{ID_LENGTH, IdGenerator};
