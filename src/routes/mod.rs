//! 客户端页面路由表
//!
//! 与浏览器端的页面路径保持一致，登录态检查失败时统一跳转到 `/login`。

use std::fmt;

use crate::models::users::entities::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    ProfessorDashboard,
    ProfessorClassroom { id: i64 },
    StudentDashboard,
    StudentClassroom { id: i64 },
    StudentHomework { classroom_id: i64, homework_id: i64 },
}

impl Route {
    /// 登录后按角色进入的首页
    pub fn dashboard_for(role: UserRole) -> Self {
        if role.teaches() {
            Route::ProfessorDashboard
        } else {
            Route::StudentDashboard
        }
    }

    /// 班级详情页，按角色区分
    pub fn classroom_for(role: UserRole, id: i64) -> Self {
        if role.teaches() {
            Route::ProfessorClassroom { id }
        } else {
            Route::StudentClassroom { id }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::ProfessorDashboard => "/professor/dashboard".to_string(),
            Route::ProfessorClassroom { id } => format!("/professor/dashboard/classroom/{id}"),
            Route::StudentDashboard => "/student/dashboard".to_string(),
            Route::StudentClassroom { id } => format!("/student/dashboard/classroom/{id}"),
            Route::StudentHomework {
                classroom_id,
                homework_id,
            } => format!("/student/dashboard/classroom/{classroom_id}/homework/{homework_id}"),
        }
    }

    /// 解析页面路径，忽略结尾斜杠
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["login"] => Some(Route::Login),
            ["professor", "dashboard"] => Some(Route::ProfessorDashboard),
            ["professor", "dashboard", "classroom", id] => {
                id.parse().ok().map(|id| Route::ProfessorClassroom { id })
            }
            ["student", "dashboard"] => Some(Route::StudentDashboard),
            ["student", "dashboard", "classroom", id] => {
                id.parse().ok().map(|id| Route::StudentClassroom { id })
            }
            ["student", "dashboard", "classroom", classroom_id, "homework", homework_id] => {
                match (classroom_id.parse(), homework_id.parse()) {
                    (Ok(classroom_id), Ok(homework_id)) => Some(Route::StudentHomework {
                        classroom_id,
                        homework_id,
                    }),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// 是否需要登录才能访问
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Home | Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_roundtrip() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::ProfessorDashboard,
            Route::ProfessorClassroom { id: 4 },
            Route::StudentDashboard,
            Route::StudentClassroom { id: 4 },
            Route::StudentHomework {
                classroom_id: 4,
                homework_id: 17,
            },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Route::parse("/login/"), Some(Route::Login));
        assert_eq!(Route::parse("/professor/dashboard/classroom/abc"), None);
        assert_eq!(Route::parse("/admin"), None);
    }

    #[test]
    fn test_dashboard_for_role() {
        assert_eq!(
            Route::dashboard_for(UserRole::Professor),
            Route::ProfessorDashboard
        );
        assert_eq!(Route::dashboard_for(UserRole::Admin), Route::ProfessorDashboard);
        assert_eq!(Route::dashboard_for(UserRole::Student), Route::StudentDashboard);
        assert!(!Route::Login.requires_auth());
    }
}
