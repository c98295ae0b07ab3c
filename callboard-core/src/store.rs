//! Call store: the single owner of call records.
//!
//! Every mutation is a [`CallEvent`] fed through [`CallStore::apply`], which
//! reports either the [`Transition`] that happened or the [`CallError`]
//! explaining why nothing changed. The operator-facing methods (`answer`,
//! `reject`, `end`, ...) wrap `apply` and swallow those errors, so from the
//! dashboard's point of view every operation is total.
//!
//! Invariants held after every event:
//! - call ids are unique
//! - at most one call is `Active`, and it is the one the store tracks
//! - `duration` is set exactly on `Completed` calls
//! - the timer runs exactly while a call is active

use crate::generator::CallGenerator;
use crate::seed::sample_calls;
use crate::timer::CallTimer;
use crate::{Call, CallError, CallId, CallResult, CallStatus, Timestamp};
use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};

/// A mutation request against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallEvent {
    /// Prepend a freshly ringing call.
    Incoming(Call),
    /// Pick up a ringing call.
    Answer(CallId),
    /// Turn a call away. Applies to any status.
    Reject(CallId),
    /// Hang up the active call.
    End,
    /// One timer second elapsed for the given call.
    Tick(CallId),
}

/// What an applied event changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Created { id: CallId },
    Answered { id: CallId },
    Rejected { id: CallId, from: CallStatus },
    Ended { id: CallId, duration: u64 },
    Ticked { id: CallId, elapsed: u64 },
}

#[derive(Debug, Clone, Default)]
pub struct CallStore {
    calls: Vec<Call>,
    active: Option<CallId>,
    timer: CallTimer,
}

impl CallStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the sample calls.
    pub fn seeded(now: Timestamp) -> Self {
        Self {
            calls: sample_calls(now),
            active: None,
            timer: CallTimer::new(),
        }
    }

    /// Build a store from existing records, newest first.
    ///
    /// Rejects duplicate ids and more than one active call. A single active
    /// call becomes the tracked call with its timer at zero.
    pub fn from_calls(calls: Vec<Call>) -> CallResult<Self> {
        let mut store = Self::new();
        for call in calls {
            if store.contains(&call.id) {
                return Err(CallError::DuplicateId { id: call.id });
            }
            if call.is_active() {
                if let Some(active) = &store.active {
                    return Err(CallError::LineBusy {
                        active: active.clone(),
                    });
                }
                store.active = Some(call.id.clone());
                store.timer.start();
            }
            store.calls.push(call);
        }
        Ok(store)
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn contains(&self, id: &CallId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &CallId) -> Option<&Call> {
        self.calls.iter().find(|c| &c.id == id)
    }

    pub fn active_call(&self) -> Option<&Call> {
        self.active.as_ref().and_then(|id| self.get(id))
    }

    pub fn active_id(&self) -> Option<&CallId> {
        self.active.as_ref()
    }

    pub fn timer(&self) -> &CallTimer {
        &self.timer
    }

    // ------------------------------------------------------------------------
    // Reducer
    // ------------------------------------------------------------------------

    /// Apply one event. On error the store is unchanged.
    pub fn apply(&mut self, event: CallEvent) -> CallResult<Transition> {
        match event {
            CallEvent::Incoming(call) => self.insert_incoming(call),
            CallEvent::Answer(id) => self.apply_answer(id),
            CallEvent::Reject(id) => self.apply_reject(id),
            CallEvent::End => self.apply_end(),
            CallEvent::Tick(id) => self.apply_tick(id),
        }
    }

    fn insert_incoming(&mut self, call: Call) -> CallResult<Transition> {
        if self.contains(&call.id) {
            return Err(CallError::DuplicateId { id: call.id });
        }
        if call.status != CallStatus::Incoming {
            return Err(CallError::InvalidTransition {
                id: call.id,
                from: call.status,
                to: CallStatus::Incoming,
            });
        }
        let id = call.id.clone();
        info!(call_id = %id, caller = %call.caller, priority = %call.priority, "Incoming call");
        self.calls.insert(0, call);
        Ok(Transition::Created { id })
    }

    fn apply_answer(&mut self, id: CallId) -> CallResult<Transition> {
        let index = self.position(&id).ok_or_else(|| CallError::NotFound { id: id.clone() })?;
        let status = self.calls[index].status;
        if status != CallStatus::Incoming {
            return Err(CallError::InvalidTransition {
                id,
                from: status,
                to: CallStatus::Active,
            });
        }
        if let Some(active) = &self.active {
            return Err(CallError::LineBusy {
                active: active.clone(),
            });
        }
        self.calls[index].status = CallStatus::Active;
        self.active = Some(id.clone());
        self.timer.start();
        info!(call_id = %id, "Call answered");
        Ok(Transition::Answered { id })
    }

    fn apply_reject(&mut self, id: CallId) -> CallResult<Transition> {
        let index = self.position(&id).ok_or_else(|| CallError::NotFound { id: id.clone() })?;
        let call = &mut self.calls[index];
        let from = call.status;
        call.status = CallStatus::Missed;
        call.duration = None;
        if self.active.as_ref() == Some(&id) {
            self.active = None;
            self.timer.stop();
        }
        info!(call_id = %id, from = %from, "Call rejected");
        Ok(Transition::Rejected { id, from })
    }

    fn apply_end(&mut self) -> CallResult<Transition> {
        let id = self.active.clone().ok_or(CallError::NoActiveCall)?;
        let index = self.position(&id).ok_or_else(|| CallError::NotFound { id: id.clone() })?;
        let duration = self.timer.stop();
        self.active = None;
        let call = &mut self.calls[index];
        call.status = CallStatus::Completed;
        call.duration = Some(duration);
        info!(call_id = %id, duration, "Call ended");
        Ok(Transition::Ended { id, duration })
    }

    fn apply_tick(&mut self, id: CallId) -> CallResult<Transition> {
        if self.active.as_ref() != Some(&id) || !self.timer.tick() {
            return Err(CallError::StaleTick { id });
        }
        Ok(Transition::Ticked {
            id,
            elapsed: self.timer.elapsed(),
        })
    }

    fn position(&self, id: &CallId) -> Option<usize> {
        self.calls.iter().position(|c| &c.id == id)
    }

    // ------------------------------------------------------------------------
    // Operator actions (total)
    // ------------------------------------------------------------------------

    /// Synthesize a ringing call, prepend it and return a copy.
    pub fn create_incoming_call<R: Rng>(&mut self, generator: &mut CallGenerator<R>) -> Call {
        self.create_incoming_call_at(generator, Utc::now())
    }

    pub fn create_incoming_call_at<R: Rng>(
        &mut self,
        generator: &mut CallGenerator<R>,
        now: Timestamp,
    ) -> Call {
        let mut call = generator.incoming_call(now);
        while self.contains(&call.id) {
            call.id = generator.next_id();
        }
        let created = call.clone();
        self.apply_ignoring(CallEvent::Incoming(call));
        created
    }

    pub fn answer(&mut self, id: &CallId) {
        self.apply_ignoring(CallEvent::Answer(id.clone()));
    }

    pub fn reject(&mut self, id: &CallId) {
        self.apply_ignoring(CallEvent::Reject(id.clone()));
    }

    pub fn end(&mut self) {
        self.apply_ignoring(CallEvent::End);
    }

    pub fn tick(&mut self, id: &CallId) {
        self.apply_ignoring(CallEvent::Tick(id.clone()));
    }

    fn apply_ignoring(&mut self, event: CallEvent) {
        if let Err(err) = self.apply(event) {
            debug!(error = %err, "Ignored call event");
        }
    }
}

/// Pure `(state, event) -> state` form of [`CallStore::apply`].
pub fn reduce(mut store: CallStore, event: CallEvent) -> CallStore {
    store.apply_ignoring(event);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerState;
    use crate::Priority;
    use proptest::prelude::*;

    fn seeded() -> CallStore {
        CallStore::seeded(Utc::now())
    }

    fn ringing(id: &str) -> Call {
        Call::incoming(
            CallId::new(id),
            format!("Caller {}", id),
            "+1 (555) 111-2222",
            Priority::Low,
            Utc::now(),
        )
    }

    fn active_count(store: &CallStore) -> usize {
        store.calls().iter().filter(|c| c.is_active()).count()
    }

    #[test]
    fn test_seeded_store_has_no_active_call() {
        let store = seeded();
        assert_eq!(store.len(), 3);
        assert!(store.active_call().is_none());
        assert!(!store.timer().is_running());
    }

    #[test]
    fn test_create_prepends_incoming_call() {
        let mut store = seeded();
        let mut generator = CallGenerator::seeded(1);
        let call = store.create_incoming_call(&mut generator);
        assert_eq!(store.len(), 4);
        assert_eq!(store.calls()[0], call);
        assert_eq!(call.status, CallStatus::Incoming);
    }

    #[test]
    fn test_create_redraws_colliding_id() {
        let mut store = CallStore::new();
        let now = Utc::now();
        let first = store.create_incoming_call_at(&mut CallGenerator::seeded(9), now);
        let second = store.create_incoming_call_at(&mut CallGenerator::seeded(9), now);
        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_answer_then_ticks_then_end() {
        let mut store = seeded();
        let mut generator = CallGenerator::seeded(2);
        let call = store.create_incoming_call(&mut generator);

        store.answer(&call.id);
        assert_eq!(store.active_id(), Some(&call.id));
        assert_eq!(store.timer().state(), TimerState::Running);

        for _ in 0..5 {
            store.tick(&call.id);
        }
        store.end();

        let ended = store.get(&call.id).unwrap();
        assert_eq!(ended.status, CallStatus::Completed);
        assert_eq!(ended.duration, Some(5));
        assert_eq!(store.timer().state(), TimerState::Idle);
        assert_eq!(store.timer().elapsed(), 0);
        assert!(store.active_call().is_none());
    }

    #[test]
    fn test_answer_unknown_id_is_noop() {
        let mut store = seeded();
        let before = store.calls().to_vec();
        store.answer(&CallId::new("nope"));
        assert_eq!(store.calls(), before.as_slice());
        assert_eq!(
            store.apply(CallEvent::Answer(CallId::new("nope"))),
            Err(CallError::NotFound {
                id: CallId::new("nope")
            })
        );
    }

    #[test]
    fn test_answer_non_incoming_is_refused() {
        let mut store = seeded();
        let result = store.apply(CallEvent::Answer(CallId::new("1")));
        assert!(matches!(
            result,
            Err(CallError::InvalidTransition {
                from: CallStatus::Completed,
                to: CallStatus::Active,
                ..
            })
        ));
        assert_eq!(store.get(&CallId::new("1")).unwrap().status, CallStatus::Completed);
    }

    #[test]
    fn test_second_answer_is_line_busy() {
        let mut store = CallStore::new();
        store.apply(CallEvent::Incoming(ringing("a"))).unwrap();
        store.apply(CallEvent::Incoming(ringing("b"))).unwrap();
        store.answer(&CallId::new("a"));

        let result = store.apply(CallEvent::Answer(CallId::new("b")));
        assert_eq!(
            result,
            Err(CallError::LineBusy {
                active: CallId::new("a")
            })
        );
        assert_eq!(store.get(&CallId::new("b")).unwrap().status, CallStatus::Incoming);
        assert_eq!(active_count(&store), 1);
    }

    #[test]
    fn test_end_without_active_call_is_noop() {
        let mut store = seeded();
        assert_eq!(store.apply(CallEvent::End), Err(CallError::NoActiveCall));
        store.end();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_reject_incoming_becomes_missed() {
        let mut store = CallStore::new();
        store.apply(CallEvent::Incoming(ringing("x"))).unwrap();
        let transition = store.apply(CallEvent::Reject(CallId::new("x"))).unwrap();
        assert_eq!(
            transition,
            Transition::Rejected {
                id: CallId::new("x"),
                from: CallStatus::Incoming
            }
        );
        assert_eq!(store.get(&CallId::new("x")).unwrap().status, CallStatus::Missed);
    }

    #[test]
    fn test_reject_applies_to_any_status() {
        let mut store = seeded();
        store.reject(&CallId::new("3"));
        assert_eq!(store.get(&CallId::new("3")).unwrap().status, CallStatus::Missed);

        store.reject(&CallId::new("1"));
        let call = store.get(&CallId::new("1")).unwrap();
        assert_eq!(call.status, CallStatus::Missed);
        assert_eq!(call.duration, None);
    }

    #[test]
    fn test_reject_active_call_releases_line() {
        let mut store = CallStore::new();
        store.apply(CallEvent::Incoming(ringing("a"))).unwrap();
        store.answer(&CallId::new("a"));
        store.tick(&CallId::new("a"));

        store.reject(&CallId::new("a"));
        let call = store.get(&CallId::new("a")).unwrap();
        assert_eq!(call.status, CallStatus::Missed);
        assert_eq!(call.duration, None);
        assert!(store.active_call().is_none());
        assert!(!store.timer().is_running());
        assert_eq!(store.apply(CallEvent::End), Err(CallError::NoActiveCall));
    }

    #[test]
    fn test_stale_tick_is_refused() {
        let mut store = CallStore::new();
        store.apply(CallEvent::Incoming(ringing("a"))).unwrap();
        store.apply(CallEvent::Incoming(ringing("b"))).unwrap();
        store.answer(&CallId::new("a"));
        store.end();
        store.answer(&CallId::new("b"));

        let result = store.apply(CallEvent::Tick(CallId::new("a")));
        assert_eq!(
            result,
            Err(CallError::StaleTick {
                id: CallId::new("a")
            })
        );
        assert_eq!(store.timer().elapsed(), 0);
    }

    #[test]
    fn test_incoming_duplicate_id_refused() {
        let mut store = seeded();
        let mut dup = ringing("1");
        dup.caller = "Impostor".to_string();
        assert_eq!(
            store.apply(CallEvent::Incoming(dup)),
            Err(CallError::DuplicateId {
                id: CallId::new("1")
            })
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_incoming_requires_incoming_status() {
        let mut store = CallStore::new();
        let mut call = ringing("a");
        call.status = CallStatus::Scheduled;
        assert!(matches!(
            store.apply(CallEvent::Incoming(call)),
            Err(CallError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_from_calls_tracks_active_call() {
        let mut call = ringing("a");
        call.status = CallStatus::Active;
        let store = CallStore::from_calls(vec![call, ringing("b")]).unwrap();
        assert_eq!(store.active_id(), Some(&CallId::new("a")));
        assert!(store.timer().is_running());
    }

    #[test]
    fn test_from_calls_rejects_two_active() {
        let mut a = ringing("a");
        a.status = CallStatus::Active;
        let mut b = ringing("b");
        b.status = CallStatus::Active;
        assert!(matches!(
            CallStore::from_calls(vec![a, b]),
            Err(CallError::LineBusy { .. })
        ));
    }

    #[test]
    fn test_from_calls_rejects_duplicates() {
        assert!(matches!(
            CallStore::from_calls(vec![ringing("a"), ringing("a")]),
            Err(CallError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_reduce_matches_apply() {
        let mut store = CallStore::new();
        store = reduce(store, CallEvent::Incoming(ringing("a")));
        store = reduce(store, CallEvent::Answer(CallId::new("a")));
        store = reduce(store, CallEvent::Tick(CallId::new("a")));
        store = reduce(store, CallEvent::End);
        assert_eq!(store.get(&CallId::new("a")).unwrap().duration, Some(1));
    }

    fn arb_event(ids: &'static [&'static str]) -> impl Strategy<Value = CallEvent> {
        let id = prop::sample::select(ids).prop_map(CallId::new);
        prop_oneof![
            id.clone().prop_map(CallEvent::Answer),
            id.clone().prop_map(CallEvent::Reject),
            Just(CallEvent::End),
            id.prop_map(CallEvent::Tick),
        ]
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_for_any_script(
            script in prop::collection::vec(arb_event(&["a", "b", "c", "zz"]), 0..64)
        ) {
            let mut store = CallStore::new();
            for id in ["a", "b", "c"] {
                store.apply(CallEvent::Incoming(ringing(id))).unwrap();
            }
            for event in script {
                let _ = store.apply(event);
                prop_assert!(active_count(&store) <= 1);
                for call in store.calls() {
                    prop_assert_eq!(call.duration.is_some(), call.status == CallStatus::Completed);
                }
                prop_assert_eq!(store.active_call().is_some(), store.timer().is_running());
                if let Some(active) = store.active_call() {
                    prop_assert_eq!(active.status, CallStatus::Active);
                }
            }
        }

        #[test]
        fn prop_answered_or_rejected_never_ring_again(
            script in prop::collection::vec(arb_event(&["a", "b"]), 1..32)
        ) {
            let mut store = CallStore::new();
            for id in ["a", "b"] {
                store.apply(CallEvent::Incoming(ringing(id))).unwrap();
            }
            let mut left_incoming = std::collections::HashSet::new();
            for event in script {
                let _ = store.apply(event);
                for call in store.calls() {
                    if call.status != CallStatus::Incoming {
                        left_incoming.insert(call.id.clone());
                    } else {
                        prop_assert!(!left_incoming.contains(&call.id));
                    }
                }
            }
        }

        #[test]
        fn prop_end_stamps_timer_value(ticks in 0u64..200) {
            let mut store = CallStore::new();
            store.apply(CallEvent::Incoming(ringing("a"))).unwrap();
            store.answer(&CallId::new("a"));
            for _ in 0..ticks {
                store.tick(&CallId::new("a"));
            }
            let transition = store.apply(CallEvent::End).unwrap();
            prop_assert_eq!(transition, Transition::Ended { id: CallId::new("a"), duration: ticks });
            prop_assert_eq!(store.timer().elapsed(), 0);
            prop_assert_eq!(store.timer().state(), TimerState::Idle);
        }
    }
}
