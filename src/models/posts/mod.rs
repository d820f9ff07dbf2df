pub mod entities;
pub mod requests;

pub use entities::Post;
pub use requests::CreatePostRequest;
