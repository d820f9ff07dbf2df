pub mod datetime;
pub mod problem;

pub use problem::ProblemDetails;
