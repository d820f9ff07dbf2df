//! 表单校验
//!
//! 提交前在本地校验输入，错误信息为葡萄牙语，按字段收集。
//! 校验通过后转换为对应的请求模型。

pub mod auth;
pub mod classroom;
pub mod grade;
pub mod post;

pub use auth::{LoginForm, RegisterForm};
pub use classroom::{CreateClassroomForm, JoinClassroomForm};
pub use grade::GradeSubmissionForm;
pub use post::{CreateHomeworkForm, CreatePostForm};

use std::fmt;

use crate::errors::ClientError;

/// 按字段收集的校验错误
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    errors: Vec<(&'static str, String)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    /// 把单个校验结果记到字段上
    pub fn check(&mut self, field: &'static str, result: Result<(), &'static str>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// 字段的第一条错误
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<FormErrors> for ClientError {
    fn from(errors: FormErrors) -> Self {
        ClientError::validation(errors.to_string())
    }
}

/// 表单：先校验，再转换为请求
pub trait FormSchema {
    type Output;

    fn validate(&self) -> FormErrors;

    fn into_output(self) -> Self::Output;

    fn parse(self) -> Result<Self::Output, FormErrors>
    where
        Self: Sized,
    {
        self.validate().into_result()?;
        Ok(self.into_output())
    }
}
