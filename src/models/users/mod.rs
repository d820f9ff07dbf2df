pub mod entities;
pub mod requests;

pub use entities::{User, UserRole};
pub use requests::RegisterRequest;
