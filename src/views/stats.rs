use std::collections::HashSet;

use serde::Serialize;

use crate::models::classes::Classroom;
use crate::models::homeworks::Homework;
use crate::models::submissions::{Submission, SubmissionStatus};
use crate::models::users::{User, UserRole};

pub fn student_count(classroom: &Classroom) -> usize {
    classroom.members_with_role(UserRole::Student).count()
}

pub fn teachers(classroom: &Classroom) -> Vec<&User> {
    classroom.members_with_role(UserRole::Professor).collect()
}

/// 作业卡片上的提交计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HomeworkCounts {
    pub total: usize,
    pub submitted: usize,
    pub graded: usize,
}

pub fn homework_counts(homework: &Homework) -> HomeworkCounts {
    let submissions = &homework.submissions;
    HomeworkCounts {
        total: submissions.len(),
        submitted: submissions
            .iter()
            .filter(|s| {
                matches!(
                    s.status,
                    SubmissionStatus::Submitted | SubmissionStatus::Graded
                )
            })
            .count(),
        graded: submissions
            .iter()
            .filter(|s| s.status == SubmissionStatus::Graded)
            .count(),
    }
}

/// 教师查看提交列表时的汇总
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionStats {
    pub total: usize,
    pub pending: usize,
    pub graded: usize,
    pub late: usize,
}

pub fn submission_stats(submissions: &[Submission]) -> SubmissionStats {
    let mut stats = SubmissionStats {
        total: submissions.len(),
        ..SubmissionStats::default()
    };

    for submission in submissions {
        match submission.status {
            SubmissionStatus::Pending | SubmissionStatus::Submitted => stats.pending += 1,
            SubmissionStatus::Graded => stats.graded += 1,
            SubmissionStatus::Overdue => stats.late += 1,
        }
    }
    stats
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_classrooms: usize,
    pub total_students: usize,
    pub total_teachers: usize,
    pub average_students_per_class: f64,
}

/// 教师首页汇总，同一个人出现在多个班级只计一次
pub fn dashboard_stats(classrooms: &[Classroom]) -> DashboardStats {
    let mut students = HashSet::new();
    let mut teachers = HashSet::new();
    let mut enrolled = 0usize;

    for classroom in classrooms {
        for user in &classroom.users {
            match user.profile {
                UserRole::Student => {
                    students.insert(user.id);
                    enrolled += 1;
                }
                UserRole::Professor => {
                    teachers.insert(user.id);
                }
                UserRole::Admin => {}
            }
        }
    }

    let average = if classrooms.is_empty() {
        0.0
    } else {
        // 保留一位小数
        (enrolled as f64 / classrooms.len() as f64 * 10.0).round() / 10.0
    };

    DashboardStats {
        total_classrooms: classrooms.len(),
        total_students: students.len(),
        total_teachers: teachers.len(),
        average_students_per_class: average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{sample_classroom, sample_homework, sample_submission, sample_user};

    fn ana() -> User {
        sample_user(7, "Ana Souza", UserRole::Student)
    }

    #[test]
    fn test_classroom_members() {
        let classroom = sample_classroom(
            1,
            "Física",
            vec![
                sample_user(2, "Carlos Lima", UserRole::Professor),
                ana(),
                sample_user(8, "Bia Reis", UserRole::Student),
                sample_user(1, "Admin", UserRole::Admin),
            ],
        );
        assert_eq!(student_count(&classroom), 2);
        assert_eq!(teachers(&classroom).len(), 1);
    }

    #[test]
    fn test_homework_counts() {
        let mut homework = sample_homework(1, "Lista", None);
        homework.submissions = vec![
            sample_submission(1, ana(), SubmissionStatus::Submitted),
            sample_submission(2, ana(), SubmissionStatus::Graded),
            sample_submission(3, ana(), SubmissionStatus::Pending),
        ];

        assert_eq!(
            homework_counts(&homework),
            HomeworkCounts {
                total: 3,
                submitted: 2,
                graded: 1,
            }
        );
    }

    #[test]
    fn test_submission_stats() {
        let submissions = vec![
            sample_submission(1, ana(), SubmissionStatus::Pending),
            sample_submission(2, ana(), SubmissionStatus::Submitted),
            sample_submission(3, ana(), SubmissionStatus::Graded),
            sample_submission(4, ana(), SubmissionStatus::Overdue),
        ];
        let stats = submission_stats(&submissions);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.graded, 1);
        assert_eq!(stats.late, 1);
        assert_eq!(submission_stats(&[]), SubmissionStats::default());
    }

    #[test]
    fn test_dashboard_stats() {
        let carlos = sample_user(2, "Carlos Lima", UserRole::Professor);
        let classrooms = vec![
            sample_classroom(1, "Física", vec![carlos.clone(), ana()]),
            sample_classroom(
                2,
                "Química",
                vec![carlos, ana(), sample_user(8, "Bia Reis", UserRole::Student)],
            ),
        ];

        let stats = dashboard_stats(&classrooms);
        assert_eq!(stats.total_classrooms, 2);
        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.total_teachers, 1);
        assert_eq!(stats.average_students_per_class, 1.5);

        assert_eq!(dashboard_stats(&[]).average_students_per_class, 0.0);
    }
}
