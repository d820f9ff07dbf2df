use std::fmt;

use reqwest::Url;

use crate::errors::{ClientError, Result};
use crate::models::files::UploadFile;

/// 对单个路径段做百分号编码，`/`、`?`、`#` 不会改变请求路径
pub fn encode_path_segment(segment: &str) -> Result<String> {
    let mut url = Url::parse("http://localhost/")
        .map_err(|e| ClientError::validation(format!("Invalid path segment: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| ClientError::validation("Invalid path segment"))?
        .clear()
        .push(segment);
    Ok(url.path().trim_start_matches('/').to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    // multipart/form-data，单个 `file` 字段
    Multipart(UploadFile),
}

/// 发往 API 的一次请求，`path` 以 `/` 开头且相对于 base_url；
/// 以 http(s):// 开头时按绝对地址处理（用于下载）
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            bearer: None,
            body: RequestBody::Empty,
        }
    }

    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("AB12CD").unwrap(), "AB12CD");
        assert_eq!(encode_path_segment("ab/c?d").unwrap(), "ab%2Fc%3Fd");
        assert_eq!(encode_path_segment("a b#1").unwrap(), "a%20b%231");
    }
}
