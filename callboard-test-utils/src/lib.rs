//! Callboard Test Utilities
//!
//! Shared test infrastructure for the Callboard workspace:
//! - Proptest generators for calls and store event scripts
//! - Fixtures for the seeded store and deterministic generators
//! - Assertions for the call store invariants

pub use callboard_core::{
    Call, CallEvent, CallGenerator, CallId, CallStatus, CallStore, Priority, StatusFilter,
    Timestamp, ViewQuery,
};

use chrono::Utc;

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for Callboard types.

    use super::*;
    use proptest::prelude::*;

    /// Any call status.
    pub fn arb_call_status() -> impl Strategy<Value = CallStatus> {
        prop::sample::select(CallStatus::ALL.to_vec())
    }

    /// Any priority.
    pub fn arb_priority() -> impl Strategy<Value = Priority> {
        prop::sample::select(Priority::ALL.to_vec())
    }

    /// Any filter selector, `All` included.
    pub fn arb_status_filter() -> impl Strategy<Value = StatusFilter> {
        prop::sample::select(StatusFilter::ALL.to_vec())
    }

    /// A Timestamp between 2020 and 2030.
    pub fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
        (1577836800i64..1893456000i64).prop_map(|secs| {
            chrono::DateTime::from_timestamp(secs, 0).unwrap_or_else(Utc::now)
        })
    }

    /// Search text drawn from characters that appear in names and phones.
    pub fn arb_search_term() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9() +-]{0,6}"
    }

    /// A ringing call with the given id.
    pub fn arb_incoming_call(id: CallId) -> impl Strategy<Value = Call> {
        (0u32..1000, 100u32..1000, 1000u32..10000, arb_priority(), arb_timestamp()).prop_map(
            move |(n, exchange, line, priority, ts)| {
                Call::incoming(
                    id.clone(),
                    format!("Caller {}", n),
                    format!("+1 (555) {}-{}", exchange, line),
                    priority,
                    ts,
                )
            },
        )
    }

    /// A call in any status that still respects the duration invariant.
    pub fn arb_call(id: CallId) -> impl Strategy<Value = Call> {
        (arb_incoming_call(id), arb_call_status(), 0u64..7200).prop_map(
            |(mut call, status, seconds)| {
                call.status = status;
                call.duration = (status == CallStatus::Completed).then_some(seconds);
                call
            },
        )
    }

    /// Store events that refer to one of `ids`.
    pub fn arb_event(ids: Vec<CallId>) -> impl Strategy<Value = CallEvent> {
        let id = prop::sample::select(ids);
        prop_oneof![
            3 => id.clone().prop_map(CallEvent::Answer),
            2 => id.clone().prop_map(CallEvent::Reject),
            2 => Just(CallEvent::End),
            4 => id.prop_map(CallEvent::Tick),
        ]
    }

    /// A script of events against `ids`.
    pub fn arb_script(ids: Vec<CallId>, max_len: usize) -> impl Strategy<Value = Vec<CallEvent>> {
        prop::collection::vec(arb_event(ids), 0..max_len)
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built fixtures for common scenarios.

    use super::*;
    use rand::rngs::StdRng;

    /// Store holding the three sample calls.
    pub fn seeded_store() -> CallStore {
        CallStore::seeded(Utc::now())
    }

    /// Deterministic generator.
    pub fn generator() -> CallGenerator<StdRng> {
        CallGenerator::seeded(0xCA11)
    }

    /// Ringing call with a readable id.
    pub fn incoming_call(id: &str) -> Call {
        Call::incoming(
            CallId::new(id),
            format!("Caller {}", id),
            "+1 (555) 555-0100",
            Priority::Medium,
            Utc::now(),
        )
    }

    /// Empty store with one ringing call per id, first id newest.
    pub fn store_with_incoming(ids: &[&str]) -> CallStore {
        let mut store = CallStore::new();
        for id in ids.iter().rev() {
            let _ = store.apply(CallEvent::Incoming(incoming_call(id)));
        }
        store
    }

    /// Seeded store plus one answered call that has run for `seconds` ticks.
    pub fn store_with_active_call(seconds: u64) -> (CallStore, CallId) {
        let mut store = seeded_store();
        let call = store.create_incoming_call(&mut generator());
        store.answer(&call.id);
        for _ in 0..seconds {
            store.tick(&call.id);
        }
        (store, call.id)
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Invariant checks for the call store.

    use super::*;
    use std::collections::HashSet;

    /// No two calls share an id.
    #[track_caller]
    pub fn assert_unique_ids(store: &CallStore) {
        let mut seen = HashSet::new();
        for call in store.calls() {
            assert!(seen.insert(&call.id), "Duplicate call id {}", call.id);
        }
    }

    /// At most one active call, and it is the tracked one.
    #[track_caller]
    pub fn assert_single_active(store: &CallStore) {
        let active: Vec<&Call> = store.calls().iter().filter(|c| c.is_active()).collect();
        assert!(active.len() <= 1, "Expected at most one active call, got {}", active.len());
        assert_eq!(
            active.first().map(|c| &c.id),
            store.active_id(),
            "Active call pointer out of sync"
        );
        assert_eq!(
            store.active_id().is_some(),
            store.timer().is_running(),
            "Timer must run exactly while a call is active"
        );
    }

    /// `duration` present exactly on completed calls.
    #[track_caller]
    pub fn assert_duration_invariant(store: &CallStore) {
        for call in store.calls() {
            assert_eq!(
                call.duration.is_some(),
                call.status == CallStatus::Completed,
                "Call {} has status {} and duration {:?}",
                call.id,
                call.status,
                call.duration
            );
        }
    }

    /// All store invariants at once.
    #[track_caller]
    pub fn assert_store_invariants(store: &CallStore) {
        assert_unique_ids(store);
        assert_single_active(store);
        assert_duration_invariant(store);
    }
}
