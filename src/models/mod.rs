//! 与远端 API JSON 负载一一对应的数据结构
//!
//! 这些结构只负责收发与展示，不持有任何业务不变量，权威状态全部在服务端。

pub mod auth;
pub mod classes;
pub mod common;
pub mod files;
pub mod homeworks;
pub mod posts;
pub mod submissions;
pub mod users;

pub use common::ProblemDetails;
pub use files::entities::Archive;
pub use users::entities::{User, UserRole};
