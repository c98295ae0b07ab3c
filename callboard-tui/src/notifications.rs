//! Operator feedback shown in the footer.
//!
//! Every call action that changes nothing (answering on a busy line, ending
//! with no call connected) still leaves a notification, so a key press is
//! never silently dropped from the agent's point of view.

use chrono::{DateTime, Duration, Utc};

/// How long the footer keeps a notification before falling back to help.
pub const NOTIFICATION_TTL_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Success,
}

impl NotificationLevel {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Success => "OK",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at < Duration::seconds(NOTIFICATION_TTL_SECS)
    }

    /// `LABEL: message`, as the footer shows it.
    pub fn footer_text(&self) -> String {
        format!("{}: {}", self.level.label(), self.message)
    }
}
