use tracing::{info, warn};

use crate::errors::{ClientError, Result};
use crate::models::auth::LoginRequest;
use crate::models::users::{RegisterRequest, User};
use crate::routes::Route;
use crate::services::AuthService;

/// 操作完成后页面应如何跳转
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    Redirect(Route),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// 登录态提供者
///
/// 启动时检查已保存的 token，登录成功后按角色跳转到对应首页。
pub struct AuthContext {
    auth: AuthService,
    state: AuthState,
}

impl AuthContext {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth,
            state: AuthState::default(),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    fn reset_to_login(&mut self) -> Navigation {
        if let Err(e) = self.auth.logout() {
            warn!("Failed to clear session: {}", e);
        }
        self.state.user = None;
        Navigation::Redirect(Route::Login)
    }

    /// 启动检查：没有 token 或 token 无效都回到登录页
    pub async fn bootstrap(&mut self) -> Navigation {
        self.state.loading = true;

        let navigation = match self.auth.profile().await {
            Ok(Some(user)) => {
                info!("Session restored for {}", user.email);
                self.state.user = Some(user);
                Navigation::Stay
            }
            Ok(None) => self.reset_to_login(),
            Err(e) => {
                warn!("Stored session rejected: {}", e);
                self.reset_to_login()
            }
        };

        self.state.loading = false;
        navigation
    }

    pub async fn login(&mut self, credentials: &LoginRequest) -> Result<Navigation> {
        match self.try_login(credentials).await {
            Ok(user) => {
                let target = Route::dashboard_for(user.role());
                self.state.user = Some(user);
                Ok(Navigation::Redirect(target))
            }
            Err(e) => {
                self.state.user = None;
                Err(e)
            }
        }
    }

    async fn try_login(&self, credentials: &LoginRequest) -> Result<User> {
        let token = self.auth.login(credentials).await?;
        self.auth.session().store_token(&token)?;

        match self.auth.profile().await? {
            Some(user) => Ok(user),
            // 刚写入的 token 读不回来，说明会话存储不可用
            None => Err(ClientError::session("Token was not persisted after login")),
        }
    }

    pub fn logout(&mut self) -> Navigation {
        info!("Logging out");
        self.reset_to_login()
    }

    /// 注册后直接用同一组凭据登录
    pub async fn register(&mut self, form: &RegisterRequest) -> Result<Navigation> {
        self.auth.register(form).await?;
        let credentials = LoginRequest {
            email: form.email.clone(),
            password: form.password.clone(),
        };
        self.login(&credentials).await
    }
}
