//! Enum types for Callboard entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CALL STATUS
// ============================================================================

/// Lifecycle status of a call.
///
/// ```text
/// incoming ──answer──> active ──end──> completed
/// incoming ──reject──> missed
/// scheduled (seed data only)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    /// Ringing, waiting for the operator
    Incoming,
    /// Answered and in progress
    Active,
    /// Ended after being answered
    Completed,
    /// Rejected by the operator
    Missed,
    /// Booked for a later time
    Scheduled,
}

impl CallStatus {
    pub const ALL: [CallStatus; 5] = [
        CallStatus::Incoming,
        CallStatus::Active,
        CallStatus::Completed,
        CallStatus::Missed,
        CallStatus::Scheduled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CallStatus::Incoming => "incoming",
            CallStatus::Active => "active",
            CallStatus::Completed => "completed",
            CallStatus::Missed => "missed",
            CallStatus::Scheduled => "scheduled",
        }
    }

    /// Terminal states accept no further lifecycle transition.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CallStatus::Completed | CallStatus::Missed | CallStatus::Scheduled
        )
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CallStatus {
    type Err = CallStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "incoming" => Ok(CallStatus::Incoming),
            "active" => Ok(CallStatus::Active),
            "completed" => Ok(CallStatus::Completed),
            "missed" => Ok(CallStatus::Missed),
            "scheduled" => Ok(CallStatus::Scheduled),
            _ => Err(CallStatusParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid call status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallStatusParseError(pub String);

impl fmt::Display for CallStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid call status: {}", self.0)
    }
}

impl std::error::Error for CallStatusParseError {}

// ============================================================================
// PRIORITY
// ============================================================================

/// Caller priority, fixed when the call is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = PriorityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(PriorityParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid priority string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityParseError(pub String);

impl fmt::Display for PriorityParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid priority: {}", self.0)
    }
}

impl std::error::Error for PriorityParseError {}

// ============================================================================
// STATUS FILTER
// ============================================================================

/// Call-log filter selection: every call, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CallStatus),
}

impl StatusFilter {
    /// Selector order as shown in the filter bar.
    pub const ALL: [StatusFilter; 6] = [
        StatusFilter::All,
        StatusFilter::Only(CallStatus::Incoming),
        StatusFilter::Only(CallStatus::Active),
        StatusFilter::Only(CallStatus::Completed),
        StatusFilter::Only(CallStatus::Missed),
        StatusFilter::Only(CallStatus::Scheduled),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, status: CallStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl From<CallStatus> for StatusFilter {
    fn from(status: CallStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = StatusFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<CallStatus>()
            .map(StatusFilter::Only)
            .map_err(|_| StatusFilterParseError(s.to_string()))
    }
}

/// Error when parsing an invalid filter string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilterParseError(pub String);

impl fmt::Display for StatusFilterParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid status filter: {}", self.0)
    }
}

impl std::error::Error for StatusFilterParseError {}
