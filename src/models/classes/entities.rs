use serde::{Deserialize, Serialize};

use crate::models::files::entities::Archive;
use crate::models::users::entities::{User, UserRole};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    // 唯一 ID
    pub id: i64,
    // 班级名称
    pub name: String,
    // 班级描述
    #[serde(default)]
    pub description: String,
    #[serde(with = "crate::models::common::datetime")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(with = "crate::models::common::datetime")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    // 成员（教师和学生）
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub banner: Option<Archive>,
    #[serde(default)]
    pub avatar: Option<Archive>,
    // 邀请码
    #[serde(default)]
    pub invite_code: String,
}

impl Classroom {
    /// 按角色筛选成员
    pub fn members_with_role(&self, role: UserRole) -> impl Iterator<Item = &User> {
        self.users.iter().filter(move |user| user.profile == role)
    }
}
