use chrono::{DateTime, TimeZone, Utc};

use crate::models::homeworks::Homework;
use crate::models::submissions::{Submission, SubmissionStatus};

/// 作业卡片上的截止状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBadge {
    Active,
    Overdue,
    Today,
}

impl DueBadge {
    pub fn label(self) -> &'static str {
        match self {
            DueBadge::Active => "Ativo",
            DueBadge::Overdue => "Vencido",
            DueBadge::Today => "Hoje",
        }
    }
}

/// 学生视角的作业状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentBadge {
    Graded,
    Submitted,
    Overdue,
    DueToday,
    Pending,
}

impl StudentBadge {
    pub fn label(self) -> &'static str {
        match self {
            StudentBadge::Graded => "Avaliado",
            StudentBadge::Submitted => "Entregue",
            StudentBadge::Overdue => "Atrasado",
            StudentBadge::DueToday => "Vence Hoje",
            StudentBadge::Pending => "Pendente",
        }
    }
}

// 按 now 所在时区比较日历日
fn same_day<Tz: TimeZone>(due: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    due.with_timezone(&now.timezone()).date_naive() == now.date_naive()
}

pub fn due_badge<Tz: TimeZone>(homework: &Homework, now: &DateTime<Tz>) -> DueBadge {
    let Some(due) = homework.due_date else {
        return DueBadge::Active;
    };

    if due < now.with_timezone(&Utc) {
        DueBadge::Overdue
    } else if same_day(&due, now) {
        DueBadge::Today
    } else {
        DueBadge::Active
    }
}

/// 已过期且没有任何提交；没有截止日期的作业永不过期
pub fn is_overdue<Tz: TimeZone>(
    homework: &Homework,
    submissions: &[Submission],
    now: &DateTime<Tz>,
) -> bool {
    match homework.due_date {
        Some(due) => submissions.is_empty() && due < now.with_timezone(&Utc),
        None => false,
    }
}

/// 有提交时只看第一条提交：已评分、已提交有标记，其余状态不显示标记
pub fn student_badge<Tz: TimeZone>(
    homework: &Homework,
    submissions: &[Submission],
    now: &DateTime<Tz>,
) -> Option<StudentBadge> {
    if let Some(first) = submissions.first() {
        return match first.status {
            SubmissionStatus::Graded => Some(StudentBadge::Graded),
            SubmissionStatus::Submitted => Some(StudentBadge::Submitted),
            SubmissionStatus::Pending | SubmissionStatus::Overdue => None,
        };
    }

    if is_overdue(homework, submissions, now) {
        return Some(StudentBadge::Overdue);
    }

    match homework.due_date {
        Some(due) if same_day(&due, now) => Some(StudentBadge::DueToday),
        _ => Some(StudentBadge::Pending),
    }
}

pub fn can_submit<Tz: TimeZone>(
    homework: &Homework,
    submissions: &[Submission],
    now: &DateTime<Tz>,
) -> bool {
    !is_overdue(homework, submissions, now)
}
