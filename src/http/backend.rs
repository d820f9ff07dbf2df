use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use super::request::{ApiRequest, Method, RawResponse, RequestBody};
use crate::config::ApiConfig;
use crate::errors::Result;

/// 传输层抽象，测试时可替换为脚本化的实现
#[async_trait::async_trait]
pub trait HttpBackend: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse>;
}

pub struct ReqwestBackend {
    client: Client,
    base_url: String,
}

impl ReqwestBackend {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[async_trait::async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse> {
        let url = self.url_for(&request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.body {
            RequestBody::Empty => builder.header(CONTENT_TYPE, "application/json"),
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(file) => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.content_type)?;
                builder.multipart(Form::new().part("file", part))
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        debug!("{} {} -> {} ({} bytes)", request.method, url, status, body.len());

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let backend = ReqwestBackend::new(&ApiConfig::default()).unwrap();
        assert_eq!(
            backend.url_for("/auth/me"),
            "http://localhost:5183/api/auth/me"
        );
        assert_eq!(
            backend.url_for("archive/3"),
            "http://localhost:5183/api/archive/3"
        );
        assert_eq!(
            backend.url_for("https://cdn.example/a.pdf"),
            "https://cdn.example/a.pdf"
        );
    }
}
