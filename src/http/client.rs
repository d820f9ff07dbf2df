use std::sync::Arc;

use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use super::backend::HttpBackend;
use super::request::{ApiRequest, Method, RawResponse, RequestBody};
use crate::errors::{ClientError, Result};
use crate::models::ProblemDetails;
use crate::models::files::UploadFile;
use crate::session::SessionStore;

/// 类型化 API 客户端
///
/// 每次请求都从会话中重新读取 token，没有 token 时不带 Authorization 头。
/// 绝对地址只有与 API 同源时才带 token。
/// 非 2xx 响应按状态码映射为 [`ClientError`]，不做重试。
pub struct ApiClient {
    backend: Arc<dyn HttpBackend>,
    session: Arc<SessionStore>,
    api_origin: Option<Url>,
}

impl ApiClient {
    pub fn new(backend: Arc<dyn HttpBackend>, session: Arc<SessionStore>) -> Self {
        Self {
            backend,
            session,
            api_origin: None,
        }
    }

    /// 设置 API 根地址，用于判断绝对地址是否同源
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        match Url::parse(base_url) {
            Ok(url) => self.api_origin = Some(url),
            Err(e) => warn!("Invalid API base url {}: {}", base_url, e),
        }
        self
    }

    fn is_absolute(path: &str) -> bool {
        path.starts_with("http://") || path.starts_with("https://")
    }

    // 外部主机（CDN 等）不能拿到用户的 token
    fn bearer_for(&self, path: &str) -> Option<String> {
        if Self::is_absolute(path) {
            let same_origin = match (&self.api_origin, Url::parse(path)) {
                (Some(api), Ok(target)) => api.origin() == target.origin(),
                _ => false,
            };
            if !same_origin {
                debug!("Not sending credentials to foreign url {}", path);
                return None;
            }
        }
        self.session.token()
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    async fn execute(&self, method: Method, path: &str, body: RequestBody) -> Result<RawResponse> {
        let request = ApiRequest::new(method, path)
            .with_bearer(self.bearer_for(path))
            .with_body(body);

        debug!("{} {}", method, path);

        let response = self.backend.send(request).await.map_err(|e| {
            error!("{} {} failed: {}", method, path, e);
            e
        })?;

        if !response.is_success() {
            let detail = ProblemDetails::describe(&response.body);
            warn!("{} {} returned {}: {}", method, path, response.status, detail);
            return Err(ClientError::from_status(response.status, detail));
        }

        Ok(response)
    }

    fn decode<T: DeserializeOwned>(path: &str, response: &RawResponse) -> Result<T> {
        serde_json::from_slice(&response.body).map_err(|e| {
            error!("Failed to decode response of {}: {}", path, e);
            ClientError::serialization(format!("{path}: {e}"))
        })
    }

    /// GET 并解析 JSON
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.execute(Method::Get, path, RequestBody::Empty).await?;
        Self::decode(path, &response)
    }

    /// POST JSON 并解析 JSON 响应
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = RequestBody::Json(serde_json::to_value(body)?);
        let response = self.execute(Method::Post, path, body).await?;
        Self::decode(path, &response)
    }

    /// POST 后忽略响应体
    pub async fn post_unit<B>(&self, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let body = match body {
            Some(body) => RequestBody::Json(serde_json::to_value(body)?),
            None => RequestBody::Empty,
        };
        self.execute(Method::Post, path, body).await?;
        Ok(())
    }

    /// multipart 上传单个文件
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, file: UploadFile) -> Result<T> {
        let response = self
            .execute(Method::Post, path, RequestBody::Multipart(file))
            .await?;
        Self::decode(path, &response)
    }

    /// 下载原始字节
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.execute(Method::Get, url, RequestBody::Empty).await?;
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockBackend, test_client};

    #[tokio::test]
    async fn test_bearer_read_per_request() {
        let backend = MockBackend::new();
        backend.respond(Method::Get, "/auth/me", 200, r#"{"ok":true}"#);
        let api = test_client(&backend);

        let _: serde_json::Value = api.get("/auth/me").await.unwrap();
        api.session().store_token("abc.def").unwrap();
        let _: serde_json::Value = api.get("/auth/me").await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls[0].bearer, None);
        assert_eq!(calls[1].bearer.as_deref(), Some("abc.def"));
    }

    #[tokio::test]
    async fn test_download_foreign_host_has_no_bearer() {
        let backend = MockBackend::new();
        let cdn = "https://cdn.other-host.example/a.pdf";
        let same = "http://localhost:5183/api/archive/3/download";
        backend.respond(Method::Get, cdn, 200, "pdf");
        backend.respond(Method::Get, same, 200, "pdf");
        backend.respond(Method::Get, "/archive/3/download", 200, "pdf");
        let api = test_client(&backend).with_base_url("http://localhost:5183/api");
        api.session().store_token("secret-jwt").unwrap();

        assert_eq!(api.download(cdn).await.unwrap(), b"pdf".to_vec());
        api.download(same).await.unwrap();
        api.download("/archive/3/download").await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls[0].bearer, None);
        assert_eq!(calls[1].bearer.as_deref(), Some("secret-jwt"));
        assert_eq!(calls[2].bearer.as_deref(), Some("secret-jwt"));
    }

    #[tokio::test]
    async fn test_absolute_url_without_base_has_no_bearer() {
        let backend = MockBackend::new();
        backend.respond(Method::Get, "http://localhost:5183/api/a", 200, "x");
        let api = test_client(&backend);
        api.session().store_token("secret-jwt").unwrap();

        api.download("http://localhost:5183/api/a").await.unwrap();
        assert_eq!(backend.calls()[0].bearer, None);
    }

    #[tokio::test]
    async fn test_error_status_mapping() {
        let backend = MockBackend::new();
        backend.respond(
            Method::Get,
            "/classroom/9",
            404,
            r#"{"title":"Not Found","detail":"Classroom 9 not found"}"#,
        );
        backend.respond(Method::Get, "/auth/me", 401, "");
        let api = test_client(&backend);

        let err = api.get::<serde_json::Value>("/classroom/9").await.unwrap_err();
        assert_eq!(err, ClientError::not_found("Not Found: Classroom 9 not found"));

        let err = api.get::<serde_json::Value>("/auth/me").await.unwrap_err();
        assert!(err.is_auth_failure());
    }

    #[tokio::test]
    async fn test_decode_failure() {
        let backend = MockBackend::new();
        backend.respond(Method::Get, "/professor/classrooms", 200, "<html>");
        let api = test_client(&backend);

        let err = api
            .get::<Vec<serde_json::Value>>("/professor/classrooms")
            .await
            .unwrap_err();
        assert_eq!(err.code(), "C007");
    }
}
