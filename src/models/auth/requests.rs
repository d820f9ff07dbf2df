use serde::Serialize;

// 用户登录请求（POST /auth/login）
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// 邮箱
    pub email: String,
    /// 密码
    pub password: String,
}
