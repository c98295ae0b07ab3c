//! The call record.

use crate::{CallId, CallStatus, Priority, Timestamp};
use serde::{Deserialize, Serialize};

/// One phone interaction, real or simulated.
///
/// `timestamp` is the creation (or scheduled) time and is never rewritten.
/// `duration` is present exactly when the call is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Call {
    pub id: CallId,
    pub caller: String,
    pub phone: String,
    pub status: CallStatus,
    /// Talk time in whole seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub priority: Priority,
}

impl Call {
    /// A freshly ringing call.
    pub fn incoming(
        id: CallId,
        caller: impl Into<String>,
        phone: impl Into<String>,
        priority: Priority,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            caller: caller.into(),
            phone: phone.into(),
            status: CallStatus::Incoming,
            duration: None,
            timestamp,
            notes: None,
            priority,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_incoming(&self) -> bool {
        self.status == CallStatus::Incoming
    }

    pub fn is_active(&self) -> bool {
        self.status == CallStatus::Active
    }

    /// Case-insensitive match on the caller name, literal match on the phone.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.caller.to_lowercase().contains(&term.to_lowercase()) || self.phone.contains(term)
    }
}
