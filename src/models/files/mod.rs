pub mod entities;

pub use entities::{Archive, UploadFile};
