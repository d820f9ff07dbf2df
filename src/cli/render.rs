//! 页面数据的纯文本渲染

use std::fmt::Write;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::models::files::Archive;
use crate::models::homeworks::Homework;
use crate::models::submissions::Submission;
use crate::models::users::User;
use crate::views::badges::{due_badge, student_badge};
use crate::views::format::{file_size, initials, long_date, short_date};
use crate::views::pages::{ClassroomPage, DashboardPage, HomeworkPage, SubmissionsPage};
use crate::views::stats::{homework_counts, student_count, teachers};

fn local<Tz: TimeZone>(date: &DateTime<Utc>, zone: &Tz) -> DateTime<Tz> {
    date.with_timezone(zone)
}

pub fn user(user: &User) -> String {
    format!(
        "[{}] {} <{}> ({})",
        initials(&user.name),
        user.name,
        user.email,
        user.role().label()
    )
}

fn archives(out: &mut String, archives: &[Archive]) {
    for archive in archives {
        let size = u64::try_from(archive.size_in_bytes).unwrap_or_default();
        let _ = writeln!(out, "    📎 {} ({})", archive.original_name, file_size(size));
    }
}

pub fn dashboard<Tz: TimeZone>(page: &DashboardPage, zone: &Tz) -> String {
    let mut out = String::new();
    let stats = &page.stats;
    let _ = writeln!(
        out,
        "Turmas: {}  Alunos: {}  Professores: {}  Média por turma: {:.1}",
        stats.total_classrooms,
        stats.total_students,
        stats.total_teachers,
        stats.average_students_per_class
    );

    let visible = page.visible();
    if visible.is_empty() {
        let _ = writeln!(out, "Nenhuma turma encontrada.");
        return out;
    }

    for classroom in visible {
        let _ = writeln!(
            out,
            "#{:<5} {}  ({} alunos, criada em {}, código {})",
            classroom.id,
            classroom.name,
            student_count(classroom),
            short_date(&local(&classroom.created_at, zone)),
            classroom.invite_code
        );
        if !classroom.description.is_empty() {
            let _ = writeln!(out, "       {}", classroom.description);
        }
    }
    out
}

fn homework_line<Tz: TimeZone>(out: &mut String, homework: &Homework, now: &DateTime<Tz>) {
    let counts = homework_counts(homework);
    let due = match homework.due_date {
        Some(due) => format!("entrega até {}", long_date(&local(&due, &now.timezone()))),
        None => "sem prazo".to_string(),
    };
    let _ = writeln!(
        out,
        "  #{:<5} [{}] {}  ({}, {}/{} entregues, {} avaliadas)",
        homework.id(),
        due_badge(homework, now).label(),
        homework.title(),
        due,
        counts.submitted,
        counts.total,
        counts.graded
    );
}

pub fn classroom<Tz: TimeZone>(page: &ClassroomPage, now: &DateTime<Tz>) -> String {
    let mut out = String::new();
    let classroom = &page.classroom;
    let zone = now.timezone();

    let _ = writeln!(out, "{} (#{})", classroom.name, classroom.id);
    if !classroom.description.is_empty() {
        let _ = writeln!(out, "{}", classroom.description);
    }
    let names: Vec<&str> = teachers(classroom)
        .into_iter()
        .map(|t| t.name.as_str())
        .collect();
    let _ = writeln!(
        out,
        "Professores: {}  Alunos: {}  Criada em {}  Código: {}",
        if names.is_empty() { "-".to_string() } else { names.join(", ") },
        student_count(classroom),
        short_date(&local(&classroom.created_at, &zone)),
        classroom.invite_code
    );

    let _ = writeln!(out, "\nMural ({})", page.posts.len());
    for post in &page.posts {
        let pin = if post.is_fixed { "📌 " } else { "" };
        let _ = writeln!(
            out,
            "  {pin}{} - {} ({})",
            post.title,
            post.user.name,
            long_date(&local(&post.created_at, &zone))
        );
        if !post.content.is_empty() {
            let _ = writeln!(out, "    {}", post.content);
        }
        archives(&mut out, &post.archives);
    }

    let _ = writeln!(out, "\nAtividades ({})", page.homeworks.len());
    for homework in &page.homeworks {
        homework_line(&mut out, homework, now);
    }
    out
}

pub fn homework<Tz: TimeZone>(page: &HomeworkPage, now: &DateTime<Tz>) -> String {
    let mut out = String::new();
    let homework = &page.homework;
    let zone = now.timezone();

    match student_badge(homework, &page.submissions, now) {
        Some(badge) => {
            let _ = writeln!(out, "{} [{}]", homework.title(), badge.label());
        }
        None => {
            let _ = writeln!(out, "{}", homework.title());
        }
    }
    let _ = writeln!(
        out,
        "Publicado em {} por {}",
        long_date(&local(&homework.post.created_at, &zone)),
        homework.post.user.name
    );
    if let Some(due) = homework.due_date {
        let _ = writeln!(out, "Prazo de entrega: {}", long_date(&local(&due, &zone)));
    }
    if !homework.post.content.is_empty() {
        let _ = writeln!(out, "\n{}", homework.post.content);
    }
    archives(&mut out, &homework.post.archives);

    if page.submissions.is_empty() {
        let _ = writeln!(out, "\nNenhuma entrega ainda.");
    }
    for submission in &page.submissions {
        let _ = writeln!(
            out,
            "\nEntregue em {} ({})",
            long_date(&local(&submission.submitted_at, &zone)),
            submission.status.label()
        );
        archives(&mut out, &submission.archives);
        if let Some(grade) = &submission.grade {
            let _ = writeln!(
                out,
                "  Nota: {:.1} / {}  {}",
                grade.value,
                grade.max_value.unwrap_or(10.0),
                grade.feedback
            );
            let _ = writeln!(
                out,
                "  Avaliado em {}",
                long_date(&local(&grade.graded_at, &zone))
            );
        }
    }
    out
}

fn submission_line<Tz: TimeZone>(out: &mut String, submission: &Submission, zone: &Tz) {
    let grade = submission
        .grade
        .as_ref()
        .map(|g| format!("{:.1}", g.value))
        .unwrap_or_else(|| "-".to_string());
    let _ = writeln!(
        out,
        "  #{:<5} {:<24} {:<9} {}  nota {}  {} arquivo(s)",
        submission.id,
        submission.user.name,
        submission.status.label(),
        long_date(&local(&submission.submitted_at, zone)),
        grade,
        submission.archives.len()
    );
}

pub fn submissions<Tz: TimeZone>(page: &SubmissionsPage, zone: &Tz) -> String {
    let mut out = String::new();
    let stats = &page.stats;
    let _ = writeln!(
        out,
        "Total: {}  Pendentes: {}  Avaliadas: {}  Atrasadas: {}",
        stats.total, stats.pending, stats.graded, stats.late
    );

    let visible = page.visible();
    if visible.is_empty() {
        let _ = writeln!(out, "Nenhuma submissão encontrada.");
    }
    for submission in visible {
        submission_line(&mut out, submission, zone);
    }
    out
}

pub fn now() -> DateTime<Local> {
    Local::now()
}
