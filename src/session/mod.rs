//! 会话：认证 cookie 的保存、读取与登录态
//!
//! - `cookie`: 带过期时间的 token cookie
//! - `store`: cookie 的存储后端（文件 / 内存）
//! - `context`: 登录态提供者，负责启动检查、登录、登出与跳转

pub mod context;
pub mod cookie;
pub mod store;

pub use context::{AuthContext, AuthState, Navigation};
pub use cookie::AuthCookie;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore, create_token_store};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::errors::Result;

pub struct SessionStore {
    store: Box<dyn TokenStore>,
    config: SessionConfig,
}

impl SessionStore {
    pub fn new(store: Box<dyn TokenStore>, config: SessionConfig) -> Self {
        Self { store, config }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(create_token_store(config), config.clone())
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryTokenStore::new()), SessionConfig::default())
    }

    /// 当前有效的 token
    pub fn token(&self) -> Option<String> {
        self.token_at(Utc::now())
    }

    pub fn token_at(&self, now: DateTime<Utc>) -> Option<String> {
        match self.store.load() {
            Ok(Some(cookie)) if cookie.name != self.config.cookie_name => None,
            Ok(Some(cookie)) if cookie.is_expired(now) => {
                debug!("Auth cookie expired at {}, discarding", cookie.expires_at);
                if let Err(e) = self.store.clear() {
                    warn!("Failed to remove expired auth cookie: {}", e);
                }
                None
            }
            Ok(Some(cookie)) => Some(cookie.value),
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read auth cookie: {}", e);
                None
            }
        }
    }

    /// 保存新 token，返回写入的 cookie
    pub fn store_token(&self, token: &str) -> Result<AuthCookie> {
        self.store_token_at(token, Utc::now())
    }

    pub fn store_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<AuthCookie> {
        let cookie = AuthCookie::issue(&self.config, token, now);
        self.store.save(&cookie)?;
        Ok(cookie)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_token_lifecycle() {
        let session = SessionStore::in_memory();
        assert!(session.token().is_none());

        session.store_token("jwt-value").unwrap();
        assert_eq!(session.token().as_deref(), Some("jwt-value"));

        session.clear().unwrap();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_expired_token_is_dropped() {
        let session = SessionStore::in_memory();
        let now = Utc::now();
        session.store_token_at("old", now - Duration::days(8)).unwrap();

        assert!(session.token_at(now).is_none());
        // 过期 cookie 已被删除
        assert!(session.store.load().unwrap().is_none());
    }

    #[test]
    fn test_foreign_cookie_name_ignored() {
        let config = SessionConfig {
            cookie_name: "other".to_string(),
            ..SessionConfig::default()
        };
        let store = MemoryTokenStore::new();
        store
            .save(&AuthCookie::issue(&SessionConfig::default(), "jwt", Utc::now()))
            .unwrap();

        let session = SessionStore::new(Box::new(store), config);
        assert!(session.token().is_none());
    }
}
