use chrono::{DateTime, Utc};
use serde::Serialize;

/// 创建作业请求（POST /professor/classrooms/{id}/homeworks）
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHomeworkRequest {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fixed: Option<bool>,
    #[serde(rename = "AttachmentIds")]
    pub attachment_ids: Vec<i64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "crate::models::common::datetime::option"
    )]
    pub due_date: Option<DateTime<Utc>>, // ISO 8601 格式，如 "2026-01-24T12:00:00+00:00"
}
