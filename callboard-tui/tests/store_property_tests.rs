//! Store and projection properties over generated calls and event scripts.

use callboard_core::{
    project, Call, CallError, CallEvent, CallId, CallStatus, CallStore, ViewQuery,
};
use callboard_test_utils::assertions::assert_store_invariants;
use callboard_test_utils::fixtures::store_with_incoming;
use callboard_test_utils::generators::{
    arb_call, arb_incoming_call, arb_script, arb_search_term, arb_status_filter,
};
use proptest::prelude::*;

/// Between zero and eight calls with distinct ids, in any status.
fn arb_calls() -> impl Strategy<Value = Vec<Call>> {
    (0usize..=8).prop_flat_map(|n| {
        (0..n)
            .map(|i| arb_call(CallId::new(format!("c{}", i))))
            .collect::<Vec<_>>()
    })
}

fn script_ids() -> Vec<CallId> {
    ["a", "b", "c", "zz"].into_iter().map(CallId::new).collect()
}

fn count(calls: &[Call], status: CallStatus) -> usize {
    calls.iter().filter(|c| c.status == status).count()
}

proptest! {
    #[test]
    fn projection_counters_match_store(
        calls in arb_calls(),
        filter in arb_status_filter(),
        search in arb_search_term(),
    ) {
        let projection = project(&calls, &ViewQuery::new(filter, search));
        prop_assert_eq!(projection.stats.total, calls.len());
        prop_assert_eq!(projection.stats.completed, count(&calls, CallStatus::Completed));
        prop_assert_eq!(projection.stats.missed, count(&calls, CallStatus::Missed));
        prop_assert_eq!(projection.stats.scheduled, count(&calls, CallStatus::Scheduled));
    }

    #[test]
    fn projection_keeps_store_order_and_excludes_non_matches(
        calls in arb_calls(),
        filter in arb_status_filter(),
        search in arb_search_term(),
    ) {
        let query = ViewQuery::new(filter, search);
        let projection = project(&calls, &query);

        let expected: Vec<&CallId> = calls
            .iter()
            .filter(|c| query.matches(c))
            .map(|c| &c.id)
            .collect();
        let actual: Vec<&CallId> = projection.calls.iter().map(|c| &c.id).collect();
        prop_assert_eq!(actual, expected);

        for call in &calls {
            let visible = projection.calls.iter().any(|c| c.id == call.id);
            let passes = filter.matches(call.status) && call.matches_search(&query.search);
            prop_assert_eq!(visible, passes);
        }
    }

    #[test]
    fn projection_is_pure_over_any_store(
        calls in arb_calls(),
        filter in arb_status_filter(),
        search in arb_search_term(),
    ) {
        let query = ViewQuery::new(filter, search);
        prop_assert_eq!(project(&calls, &query), project(&calls, &query));
    }

    #[test]
    fn from_calls_accepts_at_most_one_active(calls in arb_calls()) {
        let active = count(&calls, CallStatus::Active);
        match CallStore::from_calls(calls.clone()) {
            Ok(store) => {
                prop_assert!(active <= 1);
                prop_assert_eq!(store.calls(), calls.as_slice());
                assert_store_invariants(&store);
            }
            Err(err) => {
                prop_assert!(active > 1);
                let is_line_busy = matches!(err, CallError::LineBusy { .. });
                prop_assert!(is_line_busy);
            }
        }
    }

    #[test]
    fn scripts_preserve_store_invariants(script in arb_script(script_ids(), 64)) {
        let mut store = store_with_incoming(&["a", "b", "c"]);
        let mut left_incoming: Vec<CallId> = Vec::new();

        for event in script {
            let _ = store.apply(event);
            assert_store_invariants(&store);

            for call in store.calls() {
                if call.status != CallStatus::Incoming && !left_incoming.contains(&call.id) {
                    left_incoming.push(call.id.clone());
                }
            }
            for id in &left_incoming {
                let status = store.get(id).map(|c| c.status);
                prop_assert_ne!(status, Some(CallStatus::Incoming));
            }
        }
    }

    #[test]
    fn scripted_store_projects_consistently(
        script in arb_script(script_ids(), 32),
        filter in arb_status_filter(),
    ) {
        let mut store = store_with_incoming(&["a", "b", "c"]);
        for event in script {
            let _ = store.apply(event);
        }
        let projection = project(store.calls(), &ViewQuery::new(filter, ""));
        prop_assert_eq!(projection.stats.total, 3);
        prop_assert_eq!(
            projection.len(),
            store.calls().iter().filter(|c| filter.matches(c.status)).count()
        );
    }

    #[test]
    fn new_incoming_call_is_prepended(
        call in arb_incoming_call(CallId::new("fresh")),
        filter in arb_status_filter(),
    ) {
        let mut store = store_with_incoming(&["a", "b"]);
        store.apply(CallEvent::Incoming(call.clone())).unwrap();
        prop_assert_eq!(&store.calls()[0], &call);

        let projection = project(store.calls(), &ViewQuery::new(filter, ""));
        let expected_first = filter.matches(CallStatus::Incoming).then_some(&call.id);
        prop_assert_eq!(projection.get(0).map(|c| &c.id), expected_first);
    }
}
