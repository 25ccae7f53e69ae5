pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{PathError, SquarerError, SquarerResult, ValidationError};
pub use validation::{validate_task, validate_settings, validate_target_size};
pub use formats::{SourceFormat, format_from_extension, is_supported_image};
pub use fs::{
    file_size,
    ensure_parent_dir,
    prepare_output_root,
    validate_input_file,
    validate_source_dir,
};
