//! 用户提示
//!
//! 界面层的 toast 在终端里表现为一行带级别的输出。

use std::fmt;
use std::sync::Mutex;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationLevel::Info => write!(f, "info"),
            NotificationLevel::Success => write!(f, "success"),
            NotificationLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn info(&self, message: &str) {
        self.notify(Notification::info(message));
    }

    fn success(&self, message: &str) {
        self.notify(Notification::success(message));
    }

    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }
}

/// 输出到终端，错误走 stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    pub colored: bool,
}

impl ConsoleNotifier {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        debug!("notify [{}] {}", notification.level, notification.message);

        let (marker, color) = match notification.level {
            NotificationLevel::Info => ("i", "\x1b[36m"),
            NotificationLevel::Success => ("✓", "\x1b[32m"),
            NotificationLevel::Error => ("✗", "\x1b[31m"),
        };

        let line = if self.colored {
            format!("{color}{marker}\x1b[0m {}", notification.message)
        } else {
            format!("{marker} {}", notification.message)
        };

        match notification.level {
            NotificationLevel::Error => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}

/// 记录所有提示，便于检查流程
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|notification| notification.message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut guard) = self.notifications.lock() {
            guard.push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.info("Enviando anexos...");
        notifier.success("Atividade enviada com sucesso!");

        let recorded = notifier.notifications();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].level, NotificationLevel::Info);
        assert_eq!(recorded[1], Notification::success("Atividade enviada com sucesso!"));
    }
}
