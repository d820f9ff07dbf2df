pub mod entities;
pub mod requests;

pub use entities::Homework;
pub use requests::CreateHomeworkRequest;
