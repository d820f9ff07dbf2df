//! 终端界面
//!
//! 每个子命令对应网页端的一个页面或表单。除登录、注册、登出外，
//! 命令执行前都会先检查登录态，未登录时提示并以非零状态退出。

pub mod commands;
pub mod render;

use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand};

use crate::errors::{ClientError, Result};
use crate::models::common::datetime::parse_timestamp;
use crate::models::submissions::SubmissionStatus;

pub use commands::run;

#[derive(Debug, Parser)]
#[command(name = "aprenda")]
#[command(version, about = "Aprenda@ 课堂平台客户端")]
#[command(
    after_help = "环境变量:\n  API_URL           API 根地址（默认 http://localhost:5183/api）\n  AUTH_TOKEN_PATH   会话文件位置\n  APP_ENV           development | production"
)]
pub struct Cli {
    /// 关闭彩色输出
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    /// 配置文件路径
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 登录并保存会话 cookie
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },
    /// 清除本地会话
    Logout,
    /// 显示当前登录用户
    Whoami,
    /// 注册账号并登录
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// 省略时与密码相同
        #[arg(long)]
        confirm_password: Option<String>,
        /// student | professor | admin
        #[arg(long, default_value = "student")]
        profile: String,
        #[arg(long)]
        avatar_id: Option<i64>,
    },
    /// 列出当前用户的班级
    Dashboard {
        #[arg(long)]
        search: Option<String>,
    },
    /// 查看班级及其公告和作业
    Classroom { id: i64 },
    /// 创建班级
    CreateClassroom {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// 通过邀请码加入班级
    Join { code: String },
    /// 在班级中发布公告
    Post {
        classroom: i64,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value_t = false)]
        pinned: bool,
        #[arg(long = "attach")]
        attachments: Vec<PathBuf>,
    },
    /// 作业的创建与查看
    Homework {
        #[command(subcommand)]
        command: HomeworkCommand,
    },
    /// 提交作业文件
    Submit {
        homework: i64,
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// 查看作业的提交情况
    Submissions {
        homework: i64,
        #[arg(long, value_parser = parse_status)]
        status: Option<SubmissionStatus>,
        #[arg(long)]
        search: Option<String>,
    },
    /// 给提交打分（0 到 10）
    Grade {
        submission: i64,
        #[arg(long)]
        value: f64,
        #[arg(long)]
        feedback: String,
    },
    /// 下载作业附件
    Download {
        homework: i64,
        #[arg(long, default_value = ".")]
        dest: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum HomeworkCommand {
    /// 创建作业
    Create {
        classroom: i64,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value_t = false)]
        pinned: bool,
        /// 截止时间，如 2025-09-10 或 2025-09-10T23:59:00-03:00
        #[arg(long, value_parser = parse_due_date)]
        due: Option<DateTime<Utc>>,
        #[arg(long = "attach")]
        attachments: Vec<PathBuf>,
    },
    /// 查看作业详情
    Show { id: i64 },
}

fn parse_status(value: &str) -> std::result::Result<SubmissionStatus, String> {
    value.parse()
}

/// 只给日期时取本地当天 23:59
pub fn parse_due_date(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    parse_due_date_in(value, &Local).map_err(|e| e.message().to_string())
}

pub fn parse_due_date_in<Tz: TimeZone>(value: &str, zone: &Tz) -> Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        return date
            .and_hms_opt(23, 59, 0)
            .and_then(|naive| zone.from_local_datetime(&naive).earliest())
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| ClientError::date_parse(format!("Invalid due date: {value}")));
    }
    parse_timestamp(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_parse_due_date_local_end_of_day() {
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        let due = parse_due_date_in("2025-09-10", &brt).unwrap();
        assert_eq!(due, Utc.with_ymd_and_hms(2025, 9, 11, 2, 59, 0).unwrap());

        let due = parse_due_date_in("2025-09-10T12:00:00Z", &brt).unwrap();
        assert_eq!(due, Utc.with_ymd_and_hms(2025, 9, 10, 12, 0, 0).unwrap());

        assert!(parse_due_date_in("amanhã", &brt).is_err());
    }

    #[test]
    fn test_cli_parses_submit() {
        let cli = Cli::try_parse_from(["aprenda", "submit", "12", "a.pdf", "b.png"]).unwrap();
        match cli.command {
            Command::Submit { homework, files } => {
                assert_eq!(homework, 12);
                assert_eq!(files.len(), 2);
            }
            other => panic!("unexpected command {other:?}"),
        }

        assert!(Cli::try_parse_from(["aprenda", "submit", "12"]).is_err());
    }

    #[test]
    fn test_cli_parses_status_filter() {
        let cli =
            Cli::try_parse_from(["aprenda", "submissions", "7", "--status", "graded"]).unwrap();
        match cli.command {
            Command::Submissions { status, .. } => {
                assert_eq!(status, Some(SubmissionStatus::Graded))
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
