pub mod entities;
pub mod requests;

pub use entities::Classroom;
pub use requests::CreateClassroomRequest;
