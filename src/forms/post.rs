use chrono::{DateTime, Utc};

use super::{FormErrors, FormSchema};
use crate::models::homeworks::CreateHomeworkRequest;
use crate::models::posts::CreatePostRequest;
use crate::utils::validate::validate_required;

const TITLE_REQUIRED: &str = "O título é obrigatório";

/// 公告表单，附件 id 在上传完成后再填入请求
#[derive(Debug, Clone, Default)]
pub struct CreatePostForm {
    pub title: String,
    pub content: String,
    pub is_fixed: bool,
}

impl FormSchema for CreatePostForm {
    type Output = CreatePostRequest;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check("title", validate_required(&self.title, TITLE_REQUIRED));
        errors
    }

    fn into_output(self) -> CreatePostRequest {
        CreatePostRequest {
            title: self.title,
            content: self.content,
            is_fixed: Some(self.is_fixed),
            attachment_ids: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateHomeworkForm {
    pub title: String,
    pub content: String,
    pub is_fixed: bool,
    pub enable_due_date: bool,
    pub due_date: Option<DateTime<Utc>>,
}

impl FormSchema for CreateHomeworkForm {
    type Output = CreateHomeworkRequest;

    fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.check("title", validate_required(&self.title, TITLE_REQUIRED));
        if self.enable_due_date && self.due_date.is_none() {
            errors.add(
                "dueDate",
                "A data de entrega é obrigatória quando habilitada.",
            );
        }
        errors
    }

    fn into_output(self) -> CreateHomeworkRequest {
        CreateHomeworkRequest {
            title: self.title,
            content: self.content,
            is_fixed: Some(self.is_fixed),
            attachment_ids: Vec::new(),
            // 未启用时即使填了日期也不发送
            due_date: if self.enable_due_date {
                self.due_date
            } else {
                None
            },
        }
    }
}
