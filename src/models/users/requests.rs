use super::entities::UserRole;
use serde::Serialize;

// 用户注册请求（POST /user）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile: UserRole,
    pub avatar_id: Option<i64>,
}
