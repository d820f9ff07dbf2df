pub mod classrooms;
pub mod grade;
pub mod homeworks;
pub mod posts;
pub mod submissions;

use std::sync::Arc;

use crate::errors::Result;
use crate::http::ApiClient;
use crate::models::classes::Classroom;
use crate::models::homeworks::{CreateHomeworkRequest, Homework};
use crate::models::posts::{CreatePostRequest, Post};
use crate::models::submissions::{GradeSubmissionRequest, Submission};

/// 教师端接口（/professor/...）
#[derive(Clone)]
pub struct ProfessorService {
    api: Arc<ApiClient>,
}

impl ProfessorService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub(crate) fn api(&self) -> &ApiClient {
        &self.api
    }

    // 教师的班级列表
    pub async fn list_classrooms(&self) -> Result<Vec<Classroom>> {
        classrooms::list_classrooms(self).await
    }

    // 班级公告
    pub async fn list_posts(&self, classroom_id: i64) -> Result<Vec<Post>> {
        posts::list_posts(self, classroom_id).await
    }

    pub async fn create_post(&self, classroom_id: i64, request: &CreatePostRequest) -> Result<()> {
        posts::create_post(self, classroom_id, request).await
    }

    // 班级作业
    pub async fn list_homeworks(&self, classroom_id: i64) -> Result<Vec<Homework>> {
        homeworks::list_homeworks(self, classroom_id).await
    }

    pub async fn create_homework(
        &self,
        classroom_id: i64,
        request: &CreateHomeworkRequest,
    ) -> Result<()> {
        homeworks::create_homework(self, classroom_id, request).await
    }

    // 某个作业的全部提交
    pub async fn list_submissions(&self, homework_id: i64) -> Result<Vec<Submission>> {
        submissions::list_submissions(self, homework_id).await
    }

    // 评分
    pub async fn grade_submission(
        &self,
        submission_id: i64,
        request: &GradeSubmissionRequest,
    ) -> Result<()> {
        grade::grade_submission(self, submission_id, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Method, RequestBody};
    use crate::models::submissions::GradeSubmissionRequest;
    use crate::testing::{MockBackend, test_client};

    fn service(backend: &MockBackend) -> ProfessorService {
        ProfessorService::new(Arc::new(test_client(backend)))
    }

    #[tokio::test]
    async fn test_null_lists_are_empty() {
        let backend = MockBackend::new();
        backend.respond(Method::Get, "/professor/classrooms", 200, "null");
        backend.respond(Method::Get, "/professor/homeworks/5/submissions", 200, "null");
        let service = service(&backend);

        assert!(service.list_classrooms().await.unwrap().is_empty());
        assert!(service.list_submissions(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_post_payload() {
        let backend = MockBackend::new();
        backend.respond(Method::Post, "/professor/classrooms/4/posts", 201, "");
        let service = service(&backend);

        let request = CreatePostRequest {
            title: "Aviso".to_string(),
            content: "Prova na sexta".to_string(),
            is_fixed: Some(true),
            attachment_ids: vec![3, 4],
        };
        service.create_post(4, &request).await.unwrap();

        assert_eq!(
            backend.calls()[0].body,
            RequestBody::Json(serde_json::json!({
                "title": "Aviso",
                "content": "Prova na sexta",
                "isFixed": true,
                "AttachmentIds": [3, 4]
            }))
        );
    }

    #[tokio::test]
    async fn test_grade_submission_path() {
        let backend = MockBackend::new();
        backend.respond(Method::Post, "/professor/submissions/40/grade", 200, "");
        let service = service(&backend);

        let request = GradeSubmissionRequest {
            value: 9.0,
            feedback: "Muito bom".to_string(),
        };
        service.grade_submission(40, &request).await.unwrap();
        assert_eq!(backend.paths(), vec!["/professor/submissions/40/grade"]);
    }
}
