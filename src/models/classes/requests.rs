use serde::Serialize;

// 创建班级请求（POST /classroom）
#[derive(Debug, Clone, Serialize)]
pub struct CreateClassroomRequest {
    pub name: String,
    pub description: String,
}
