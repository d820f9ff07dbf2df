//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 所有失败最终都表现为一次 HTTP 调用失败或本地校验失败，不做重试。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_client_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum ClientError {
            $($variant(String),)*
        }

        impl ClientError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClientError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClientError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClientError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClientError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClientError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_client_errors! {
    Network("C001", "Network Error"),
    Http("C002", "HTTP Error"),
    Authentication("C003", "Authentication Error"),
    Authorization("C004", "Authorization Error"),
    NotFound("C005", "Resource Not Found"),
    Validation("C006", "Validation Error"),
    Serialization("C007", "Serialization Error"),
    FileOperation("C008", "File Operation Error"),
    DateParse("C009", "Date Parse Error"),
    Configuration("C010", "Configuration Error"),
    Session("C011", "Session Error"),
}

impl ClientError {
    /// 根据 HTTP 状态码构造错误
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        match status {
            401 => ClientError::Authentication(detail),
            403 => ClientError::Authorization(detail),
            404 => ClientError::NotFound(detail),
            400 | 422 => ClientError::Validation(detail),
            _ => ClientError::Http(format!("HTTP {status}: {detail}")),
        }
    }

    /// 令牌无效或过期
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ClientError::Authentication(_))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClientError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ClientError::from_status(status.as_u16(), err.to_string()),
            None if err.is_decode() => ClientError::Serialization(err.to_string()),
            None => ClientError::Network(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ClientError {
    fn from(err: chrono::ParseError) -> Self {
        ClientError::DateParse(err.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
