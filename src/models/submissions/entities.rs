use serde::{Deserialize, Serialize};

use crate::models::files::entities::Archive;
use crate::models::homeworks::entities::Homework;
use crate::models::users::entities::User;

// 提交状态（以整数传输）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Pending,   // 待处理
    Submitted, // 已提交
    Graded,    // 已评分
    Overdue,   // 逾期
}

impl SubmissionStatus {
    pub const PENDING: &'static str = "PENDING";
    pub const SUBMITTED: &'static str = "SUBMITTED";
    pub const GRADED: &'static str = "GRADED";
    pub const OVERDUE: &'static str = "OVERDUE";

    pub fn code(self) -> i64 {
        match self {
            SubmissionStatus::Pending => 0,
            SubmissionStatus::Submitted => 1,
            SubmissionStatus::Graded => 2,
            SubmissionStatus::Overdue => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(SubmissionStatus::Pending),
            1 => Some(SubmissionStatus::Submitted),
            2 => Some(SubmissionStatus::Graded),
            3 => Some(SubmissionStatus::Overdue),
            _ => None,
        }
    }

    /// 教师端列表使用的标签
    pub fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "Pendente",
            SubmissionStatus::Submitted => "Enviado",
            SubmissionStatus::Graded => "Avaliado",
            SubmissionStatus::Overdue => "Atrasado",
        }
    }

    pub fn all() -> &'static [SubmissionStatus] {
        &[
            SubmissionStatus::Pending,
            SubmissionStatus::Submitted,
            SubmissionStatus::Graded,
            SubmissionStatus::Overdue,
        ]
    }
}

impl Serialize for SubmissionStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, Unexpected, Visitor};
        use std::fmt;

        struct StatusVisitor;

        impl<'de> Visitor<'de> for StatusVisitor {
            type Value = SubmissionStatus;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a submission status code (0-3) or name")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: Error,
            {
                SubmissionStatus::from_code(value)
                    .ok_or_else(|| Error::invalid_value(Unexpected::Signed(value), &self))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: Error,
            {
                i64::try_from(value)
                    .ok()
                    .and_then(SubmissionStatus::from_code)
                    .ok_or_else(|| Error::invalid_value(Unexpected::Unsigned(value), &self))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                value.parse().map_err(|_| {
                    Error::custom(format!(
                        "无效的提交状态: '{value}'. 支持的状态: PENDING, SUBMITTED, GRADED, OVERDUE"
                    ))
                })
            }
        }

        deserializer.deserialize_any(StatusVisitor)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "{}", SubmissionStatus::PENDING),
            SubmissionStatus::Submitted => write!(f, "{}", SubmissionStatus::SUBMITTED),
            SubmissionStatus::Graded => write!(f, "{}", SubmissionStatus::GRADED),
            SubmissionStatus::Overdue => write!(f, "{}", SubmissionStatus::OVERDUE),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            SubmissionStatus::PENDING | "0" => Ok(SubmissionStatus::Pending),
            SubmissionStatus::SUBMITTED | "1" => Ok(SubmissionStatus::Submitted),
            SubmissionStatus::GRADED | "2" => Ok(SubmissionStatus::Graded),
            SubmissionStatus::OVERDUE | "3" => Ok(SubmissionStatus::Overdue),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 评分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub value: f64,
    // 满分，旧数据可能没有
    #[serde(default)]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub feedback: String,
    #[serde(with = "crate::models::common::datetime")]
    pub graded_at: chrono::DateTime<chrono::Utc>,
}

// 学生提交
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    #[serde(with = "crate::models::common::datetime")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub grade: Option<Grade>,
    // 提交者
    pub user: User,
    #[serde(default)]
    pub homework: Option<Box<Homework>>,
    #[serde(default)]
    pub archives: Vec<Archive>,
}

impl Submission {
    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }
}
