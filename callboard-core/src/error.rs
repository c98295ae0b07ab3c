//! Error types for call store operations

use crate::{CallId, CallStatus};
use thiserror::Error;

/// Why a store event was not applied.
///
/// The operator-facing operations treat every one of these as a no-op;
/// `CallStore::apply` surfaces them for callers that care.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CallError {
    #[error("Call not found: {id}")]
    NotFound { id: CallId },

    #[error("Call {id} cannot go from {from} to {to}")]
    InvalidTransition {
        id: CallId,
        from: CallStatus,
        to: CallStatus,
    },

    #[error("Line busy: call {active} is already active")]
    LineBusy { active: CallId },

    #[error("No active call")]
    NoActiveCall,

    #[error("Timer tick for call {id} which is not active")]
    StaleTick { id: CallId },

    #[error("Duplicate call id: {id}")]
    DuplicateId { id: CallId },
}

/// Result type for call store operations.
pub type CallResult<T> = Result<T, CallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = CallError::NotFound {
            id: CallId::new("99"),
        };
        assert_eq!(err.to_string(), "Call not found: 99");
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = CallError::InvalidTransition {
            id: CallId::new("1"),
            from: CallStatus::Completed,
            to: CallStatus::Active,
        };
        let msg = err.to_string();
        assert!(msg.contains("completed"));
        assert!(msg.contains("active"));
    }

    #[test]
    fn test_line_busy_display() {
        let err = CallError::LineBusy {
            active: CallId::new("7"),
        };
        assert!(err.to_string().contains("7"));
    }
}
