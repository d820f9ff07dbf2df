use serde::{Deserialize, Serialize};

// 上传后的文件记录，帖子、作业和提交通过 id 引用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archive {
    pub id: i64,
    // 原始文件名
    pub original_name: String,
    // 服务端存储名
    pub stored_name: String,
    pub content_type: String,
    pub size_in_bytes: i64,
    #[serde(with = "crate::models::common::datetime")]
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
    pub download_url: String,
}

/// 待上传的文件（multipart 的 `file` 字段）
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = crate::utils::mime_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
