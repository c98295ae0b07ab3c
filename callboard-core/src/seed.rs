//! Sample calls loaded at startup.

use crate::{Call, CallId, CallStatus, Priority, Timestamp};
use chrono::Duration;

/// The three canonical sample calls, relative to `now`:
/// a completed high-priority call an hour ago, a missed medium-priority call
/// two hours ago and a low-priority call scheduled an hour ahead.
pub fn sample_calls(now: Timestamp) -> Vec<Call> {
    vec![
        Call {
            duration: Some(324),
            ..sample(
                "1",
                "John Smith",
                "+1 (555) 123-4567",
                CallStatus::Completed,
                Priority::High,
                now - Duration::hours(1),
            )
        }
        .with_notes("Discussed project requirements"),
        sample(
            "2",
            "Sarah Johnson",
            "+1 (555) 987-6543",
            CallStatus::Missed,
            Priority::Medium,
            now - Duration::hours(2),
        ),
        sample(
            "3",
            "Mike Wilson",
            "+1 (555) 456-7890",
            CallStatus::Scheduled,
            Priority::Low,
            now + Duration::hours(1),
        )
        .with_notes("Follow-up call scheduled"),
    ]
}

fn sample(
    id: &str,
    caller: &str,
    phone: &str,
    status: CallStatus,
    priority: Priority,
    timestamp: Timestamp,
) -> Call {
    Call {
        status,
        ..Call::incoming(CallId::new(id), caller, phone, priority, timestamp)
    }
}
