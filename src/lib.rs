//! Aprenda@ - 在线课堂平台客户端
//!
//! 面向 Aprenda@ REST API 的类型化客户端，附带一个终端界面。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `http`: HTTP 传输与类型化 API 客户端
//! - `models`: 数据模型定义
//! - `session`: 认证 cookie 与登录态
//! - `routes`: 页面路由
//! - `services`: 远端资源调用层
//! - `forms`: 表单校验
//! - `views`: 展示逻辑与操作流程
//! - `notify`: 用户提示
//! - `runtime`: 运行时生命周期管理
//! - `cli`: 终端界面
//! - `utils`: 工具函数

pub mod cli;
pub mod config;
pub mod errors;
pub mod forms;
pub mod http;
pub mod models;
pub mod notify;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod session;
pub mod utils;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;
