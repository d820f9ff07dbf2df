use serde::{Deserialize, Serialize};

use crate::models::posts::entities::Post;
use crate::models::submissions::entities::Submission;

/// 作业：带截止时间和提交列表的公告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Homework {
    #[serde(flatten)]
    pub post: Post,
    // 作业截止时间
    #[serde(default, with = "crate::models::common::datetime::option")]
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    // 学生提交
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

impl Homework {
    pub fn id(&self) -> i64 {
        self.post.id
    }

    pub fn title(&self) -> &str {
        &self.post.title
    }

    pub fn has_submissions(&self) -> bool {
        !self.submissions.is_empty()
    }
}
