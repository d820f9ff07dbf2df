use serde::Serialize;

/// 学生提交作业（POST /student/homeworks/{id}/submissions）
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateSubmissionRequest {
    #[serde(rename = "AttachmentIds")]
    pub attachment_ids: Vec<i64>,
}

/// 教师评分（POST /professor/submissions/{id}/grade）
#[derive(Debug, Clone, Serialize)]
pub struct GradeSubmissionRequest {
    pub value: f64,
    pub feedback: String,
}
