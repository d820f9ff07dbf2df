pub mod file_type;
pub mod validate;

pub use file_type::{check_upload, extension_of, mime_type_for, validate_magic_bytes};
