//! 远端 API 的 HTTP 访问层
//!
//! - `request`: 请求与原始响应
//! - `backend`: 可替换的传输实现（reqwest）
//! - `client`: 带认证和错误映射的类型化客户端

pub mod backend;
pub mod client;
pub mod request;

pub use backend::{HttpBackend, ReqwestBackend};
pub use client::ApiClient;
pub use request::{ApiRequest, Method, RawResponse, RequestBody, encode_path_segment};
