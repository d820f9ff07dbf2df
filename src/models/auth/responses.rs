use serde::Deserialize;

// 登录响应，只携带 bearer token
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
