pub mod login;
pub mod logout;
pub mod profile;
pub mod register;

use std::sync::Arc;

use crate::errors::Result;
use crate::http::ApiClient;
use crate::models::auth::LoginRequest;
use crate::models::users::{RegisterRequest, User};
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AuthService {
    api: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        self.api.session()
    }

    // 登录，返回 bearer token（不负责保存）
    pub async fn login(&self, login_request: &LoginRequest) -> Result<String> {
        login::handle_login(self, login_request).await
    }

    // 清除本地 token
    pub fn logout(&self) -> Result<()> {
        logout::handle_logout(self)
    }

    // 当前用户信息，没有 token 时返回 None
    pub async fn profile(&self) -> Result<Option<User>> {
        profile::handle_profile(self).await
    }

    // 用户注册
    pub async fn register(&self, register_request: &RegisterRequest) -> Result<()> {
        register::handle_register(self, register_request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;
    use crate::testing::{MockBackend, test_client};

    #[tokio::test]
    async fn test_profile_without_token_skips_request() {
        let backend = MockBackend::new();
        let service = AuthService::new(Arc::new(test_client(&backend)));

        assert!(service.profile().await.unwrap().is_none());
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_returns_token_without_storing() {
        let backend = MockBackend::new();
        backend.respond(Method::Post, "/auth/login", 200, r#"{"token":"abc"}"#);
        let service = AuthService::new(Arc::new(test_client(&backend)));

        let request = LoginRequest {
            email: "ana@escola.br".to_string(),
            password: "segredo1".to_string(),
        };
        assert_eq!(service.login(&request).await.unwrap(), "abc");
        assert!(service.session().token().is_none());
    }
}
