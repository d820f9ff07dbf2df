use serde::{Deserialize, Serialize};

// 用户角色（API 中的 profile 字段，以整数传输）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,     // 管理员
    Professor, // 教师
    Student,   // 学生
}

impl UserRole {
    pub const ADMIN: i64 = 1;
    pub const PROFESSOR: i64 = 2;
    pub const STUDENT: i64 = 3;

    pub fn code(self) -> i64 {
        match self {
            UserRole::Admin => Self::ADMIN,
            UserRole::Professor => Self::PROFESSOR,
            UserRole::Student => Self::STUDENT,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            Self::ADMIN => Some(UserRole::Admin),
            Self::PROFESSOR => Some(UserRole::Professor),
            Self::STUDENT => Some(UserRole::Student),
            _ => None,
        }
    }

    /// 可以管理班级、发布作业与评分的角色
    pub fn teaches(self) -> bool {
        matches!(self, UserRole::Professor | UserRole::Admin)
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Professor => "Professor",
            UserRole::Student => "Aluno",
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.code())
    }
}

// 兼容整数和字符串两种写法
impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, Unexpected, Visitor};
        use std::fmt;

        struct RoleVisitor;

        impl<'de> Visitor<'de> for RoleVisitor {
            type Value = UserRole;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a profile code (1, 2, 3) or a role name")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: Error,
            {
                UserRole::from_code(value)
                    .ok_or_else(|| Error::invalid_value(Unexpected::Signed(value), &self))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: Error,
            {
                i64::try_from(value)
                    .ok()
                    .and_then(UserRole::from_code)
                    .ok_or_else(|| Error::invalid_value(Unexpected::Unsigned(value), &self))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                value.parse().map_err(|_| {
                    Error::custom(format!(
                        "无效的用户角色: '{value}'. 支持的角色: admin, professor, student"
                    ))
                })
            }
        }

        deserializer.deserialize_any(RoleVisitor)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Professor => write!(f, "professor"),
            UserRole::Student => write!(f, "student"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" | "1" => Ok(UserRole::Admin),
            "professor" | "teacher" | "2" => Ok(UserRole::Professor),
            "student" | "aluno" | "3" => Ok(UserRole::Student),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(with = "crate::models::common::datetime")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub profile: UserRole,
}

impl User {
    pub fn role(&self) -> UserRole {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_json_number() {
        let json = r#"{"id":7,"email":"ana@escola.br","name":"Ana Souza","createdAt":"2025-03-01T10:00:00Z","profile":3}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.profile, UserRole::Student);
        assert_eq!(user.name, "Ana Souza");
    }

    #[test]
    fn test_role_from_json_string() {
        let role: UserRole = serde_json::from_str(r#""professor""#).unwrap();
        assert_eq!(role, UserRole::Professor);
        assert!(serde_json::from_str::<UserRole>("9").is_err());
    }

    #[test]
    fn test_role_serializes_as_code() {
        assert_eq!(serde_json::to_string(&UserRole::Professor).unwrap(), "2");
        assert!(UserRole::Admin.teaches());
        assert!(!UserRole::Student.teaches());
    }
}
