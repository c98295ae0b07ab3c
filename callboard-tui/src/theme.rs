//! Switchboard theme and color utilities.

use crate::notifications::NotificationLevel;
use callboard_core::{CallStatus, Priority};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct SwitchboardTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub scheduled: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl SwitchboardTheme {
    pub fn switchboard() -> Self {
        Self {
            bg: Color::Rgb(15, 17, 26),
            bg_highlight: Color::Rgb(40, 44, 66),
            primary: Color::Rgb(99, 102, 241),
            secondary: Color::Rgb(59, 130, 246),
            success: Color::Rgb(34, 197, 94),
            warning: Color::Rgb(234, 179, 8),
            error: Color::Rgb(239, 68, 68),
            info: Color::Rgb(59, 130, 246),
            scheduled: Color::Rgb(168, 85, 247),
            text: Color::Rgb(243, 244, 246),
            text_dim: Color::Rgb(156, 163, 175),
            border: Color::Rgb(75, 85, 99),
            border_focus: Color::Rgb(99, 102, 241),
        }
    }
}

impl Default for SwitchboardTheme {
    fn default() -> Self {
        Self::switchboard()
    }
}

pub fn call_status_color(status: CallStatus, theme: &SwitchboardTheme) -> Color {
    match status {
        CallStatus::Incoming => theme.warning,
        CallStatus::Active => theme.secondary,
        CallStatus::Completed => theme.success,
        CallStatus::Missed => theme.error,
        CallStatus::Scheduled => theme.scheduled,
    }
}

/// Short glyph shown before each call in the log.
pub fn call_status_symbol(status: CallStatus) -> &'static str {
    match status {
        CallStatus::Incoming => "☎",
        CallStatus::Active => "●",
        CallStatus::Completed => "✔",
        CallStatus::Missed => "✘",
        CallStatus::Scheduled => "◷",
    }
}

pub fn priority_color(priority: Priority, theme: &SwitchboardTheme) -> Color {
    match priority {
        Priority::High => theme.error,
        Priority::Medium => theme.warning,
        Priority::Low => theme.success,
    }
}

pub fn notification_color(level: NotificationLevel, theme: &SwitchboardTheme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Success => theme.success,
    }
}
