use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;

/// 保存认证 token 的 cookie，过期后视为不存在
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCookie {
    pub name: String,
    pub value: String,
    pub expires_at: DateTime<Utc>,
    pub secure: bool,
    pub same_site: String,
}

impl AuthCookie {
    /// 按会话配置签发，默认 7 天有效
    pub fn issue(config: &SessionConfig, token: &str, now: DateTime<Utc>) -> Self {
        Self {
            name: config.cookie_name.clone(),
            value: token.to_string(),
            expires_at: now + Duration::days(config.expiry_days),
            secure: config.secure,
            same_site: config.same_site.clone(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
