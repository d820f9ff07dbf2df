pub mod entities;
pub mod requests;

pub use entities::{Grade, Submission, SubmissionStatus};
pub use requests::{CreateSubmissionRequest, GradeSubmissionRequest};
