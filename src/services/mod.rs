//! 远端 REST 资源的调用封装，每个资源一个服务
//!
//! 服务只负责拼路径、发请求和解析响应，业务规则全部在服务端。

pub mod archives;
pub mod auth;
pub mod classrooms;
pub mod professor;
pub mod student;

pub use archives::ArchiveService;
pub use auth::AuthService;
pub use classrooms::ClassroomService;
pub use professor::ProfessorService;
pub use student::StudentService;
