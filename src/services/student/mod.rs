pub mod classrooms;
pub mod homeworks;
pub mod posts;
pub mod submissions;

use std::sync::Arc;

use crate::errors::Result;
use crate::http::ApiClient;
use crate::models::classes::Classroom;
use crate::models::homeworks::Homework;
use crate::models::posts::Post;
use crate::models::submissions::{CreateSubmissionRequest, Submission};

/// 学生端接口（/student/...）
#[derive(Clone)]
pub struct StudentService {
    api: Arc<ApiClient>,
}

impl StudentService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }

    // 学生加入的班级
    pub async fn list_classrooms(&self) -> Result<Vec<Classroom>> {
        classrooms::list_classrooms(self).await
    }

    // 班级公告（API 只在教师路径下提供）
    pub async fn list_posts(&self, classroom_id: i64) -> Result<Vec<Post>> {
        posts::list_posts(self, classroom_id).await
    }

    pub async fn list_homeworks(&self, classroom_id: i64) -> Result<Vec<Homework>> {
        homeworks::list_homeworks(self, classroom_id).await
    }

    // 自己对某作业的提交
    pub async fn list_submissions(&self, homework_id: i64) -> Result<Vec<Submission>> {
        submissions::list_submissions(self, homework_id).await
    }

    pub async fn send_submission(
        &self,
        homework_id: i64,
        request: &CreateSubmissionRequest,
    ) -> Result<()> {
        submissions::send_submission(self, homework_id, request).await
    }
}
