use serde::Serialize;

// 创建公告请求（POST /professor/classrooms/{id}/posts）
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fixed: Option<bool>,
    // 先上传得到的附件 id，API 要求此字段首字母大写
    #[serde(rename = "AttachmentIds")]
    pub attachment_ids: Vec<i64>,
}
