use serde::{Deserialize, Serialize};

use crate::models::classes::entities::Classroom;
use crate::models::files::entities::Archive;
use crate::models::users::entities::User;

// 班级公告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(with = "crate::models::common::datetime")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 是否置顶
    #[serde(default)]
    pub is_fixed: bool,
    // 作者
    pub user: User,
    // 所属班级，列表接口里可能省略
    #[serde(default)]
    pub classroom: Option<Box<Classroom>>,
    // 附件
    #[serde(default)]
    pub archives: Vec<Archive>,
}
