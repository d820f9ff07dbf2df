//! 页面数据加载
//!
//! 每个页面先处于 `Loading`，加载完成后变为 `Ready` 或带提示文字的 `Failed`。

use async_trait::async_trait;
use tracing::error;

use super::stats::{DashboardStats, SubmissionStats, dashboard_stats, submission_stats};
use crate::errors::Result;
use crate::models::classes::Classroom;
use crate::models::homeworks::Homework;
use crate::models::posts::Post;
use crate::models::submissions::{Submission, SubmissionStatus};
use crate::services::{ClassroomService, ProfessorService, StudentService};

pub const CLASSROOMS_LOAD_ERROR: &str = "Erro ao carregar turmas";
pub const CLASSROOM_LOAD_ERROR: &str = "Erro ao carregar turma";
pub const CLASSROOM_NOT_FOUND: &str = "Turma não encontrada";
pub const HOMEWORK_LOAD_ERROR: &str = "Erro ao carregar tarefa";
pub const HOMEWORK_NOT_FOUND: &str = "Tarefa não encontrada";
pub const SUBMISSIONS_LOAD_ERROR: &str = "Erro ao carregar submissões";

#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            PageState::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// 名称或描述包含关键字（不区分大小写），空关键字匹配全部
pub fn filter_classrooms<'a>(classrooms: &'a [Classroom], term: &str) -> Vec<&'a Classroom> {
    let term = term.trim().to_lowercase();
    classrooms
        .iter()
        .filter(|classroom| {
            term.is_empty()
                || classroom.name.to_lowercase().contains(&term)
                || classroom.description.to_lowercase().contains(&term)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPage {
    pub classrooms: Vec<Classroom>,
    pub stats: DashboardStats,
    pub search: String,
}

impl DashboardPage {
    fn new(classrooms: Vec<Classroom>, search: Option<&str>) -> Self {
        Self {
            stats: dashboard_stats(&classrooms),
            classrooms,
            search: search.unwrap_or_default().to_string(),
        }
    }

    pub fn visible(&self) -> Vec<&Classroom> {
        filter_classrooms(&self.classrooms, &self.search)
    }
}

pub async fn professor_dashboard(
    professor: &ProfessorService,
    search: Option<&str>,
) -> PageState<DashboardPage> {
    match professor.list_classrooms().await {
        Ok(classrooms) => PageState::Ready(DashboardPage::new(classrooms, search)),
        Err(e) => {
            error!("Failed to load professor dashboard: {}", e);
            PageState::Failed(CLASSROOMS_LOAD_ERROR.to_string())
        }
    }
}

pub async fn student_dashboard(
    student: &StudentService,
    search: Option<&str>,
) -> PageState<DashboardPage> {
    match student.list_classrooms().await {
        Ok(classrooms) => PageState::Ready(DashboardPage::new(classrooms, search)),
        Err(e) => {
            error!("Failed to load student dashboard: {}", e);
            PageState::Failed(CLASSROOMS_LOAD_ERROR.to_string())
        }
    }
}

/// 班级页的公告与作业来源，教师与学生走不同接口
#[async_trait]
pub trait ClassroomFeed: Send + Sync {
    async fn posts(&self, classroom_id: i64) -> Result<Vec<Post>>;
    async fn homeworks(&self, classroom_id: i64) -> Result<Vec<Homework>>;
}

#[async_trait]
impl ClassroomFeed for ProfessorService {
    async fn posts(&self, classroom_id: i64) -> Result<Vec<Post>> {
        self.list_posts(classroom_id).await
    }

    async fn homeworks(&self, classroom_id: i64) -> Result<Vec<Homework>> {
        self.list_homeworks(classroom_id).await
    }
}

#[async_trait]
impl ClassroomFeed for StudentService {
    async fn posts(&self, classroom_id: i64) -> Result<Vec<Post>> {
        self.list_posts(classroom_id).await
    }

    async fn homeworks(&self, classroom_id: i64) -> Result<Vec<Homework>> {
        self.list_homeworks(classroom_id).await
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassroomPage {
    pub classroom: Classroom,
    pub posts: Vec<Post>,
    pub homeworks: Vec<Homework>,
}

/// 三个请求并发发出，任一失败整页失败
pub async fn classroom_page<F: ClassroomFeed + ?Sized>(
    classrooms: &ClassroomService,
    feed: &F,
    classroom_id: i64,
) -> PageState<ClassroomPage> {
    let loaded = tokio::try_join!(
        classrooms.get_classroom(classroom_id),
        feed.posts(classroom_id),
        feed.homeworks(classroom_id),
    );

    match loaded {
        Ok((Some(classroom), posts, homeworks)) => PageState::Ready(ClassroomPage {
            classroom,
            posts,
            homeworks,
        }),
        Ok((None, _, _)) => PageState::Failed(CLASSROOM_NOT_FOUND.to_string()),
        Err(e) => {
            error!("Failed to load classroom {}: {}", classroom_id, e);
            PageState::Failed(CLASSROOM_LOAD_ERROR.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeworkPage {
    pub homework: Homework,
    pub submissions: Vec<Submission>,
}

/// 先取作业，再取当前学生的提交
pub async fn homework_page(
    classrooms: &ClassroomService,
    student: &StudentService,
    homework_id: i64,
) -> PageState<HomeworkPage> {
    let homework = match classrooms.get_homework(homework_id).await {
        Ok(Some(homework)) => homework,
        Ok(None) => return PageState::Failed(HOMEWORK_NOT_FOUND.to_string()),
        Err(e) => {
            error!("Failed to load homework {}: {}", homework_id, e);
            return PageState::Failed(HOMEWORK_LOAD_ERROR.to_string());
        }
    };

    match student.list_submissions(homework_id).await {
        Ok(submissions) => PageState::Ready(HomeworkPage {
            homework,
            submissions,
        }),
        Err(e) => {
            error!("Failed to load submissions of homework {}: {}", homework_id, e);
            PageState::Failed(HOMEWORK_LOAD_ERROR.to_string())
        }
    }
}

/// 按状态与学生姓名过滤提交
pub fn filter_submissions<'a>(
    submissions: &'a [Submission],
    status: Option<SubmissionStatus>,
    search: &str,
) -> Vec<&'a Submission> {
    let search = search.trim().to_lowercase();
    submissions
        .iter()
        .filter(|s| status.is_none_or(|status| s.status == status))
        .filter(|s| search.is_empty() || s.user.name.to_lowercase().contains(&search))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionsPage {
    pub submissions: Vec<Submission>,
    pub stats: SubmissionStats,
    pub status_filter: Option<SubmissionStatus>,
    pub search: String,
}

impl SubmissionsPage {
    pub fn visible(&self) -> Vec<&Submission> {
        filter_submissions(&self.submissions, self.status_filter, &self.search)
    }
}

pub async fn teacher_submissions_page(
    professor: &ProfessorService,
    homework_id: i64,
    status_filter: Option<SubmissionStatus>,
    search: Option<&str>,
) -> PageState<SubmissionsPage> {
    match professor.list_submissions(homework_id).await {
        Ok(submissions) => PageState::Ready(SubmissionsPage {
            stats: submission_stats(&submissions),
            submissions,
            status_filter,
            search: search.unwrap_or_default().to_string(),
        }),
        Err(e) => {
            error!("Failed to load submissions of homework {}: {}", homework_id, e);
            PageState::Failed(SUBMISSIONS_LOAD_ERROR.to_string())
        }
    }
}
