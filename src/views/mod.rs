//! 展示逻辑：统计、徽标、格式化、页面加载与操作流程
//!
//! 与具体的渲染方式无关，终端界面和测试都直接使用这里的结果。

pub mod actions;
pub mod badges;
pub mod format;
pub mod pages;
pub mod stats;

pub use actions::Actions;
pub use badges::{DueBadge, StudentBadge, can_submit, due_badge, is_overdue, student_badge};
pub use pages::{ClassroomFeed, PageState};
pub use stats::{DashboardStats, HomeworkCounts, SubmissionStats};
