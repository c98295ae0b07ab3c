//! Read-side view of the call store.
//!
//! Nothing here mutates or caches: every projection is recomputed from the
//! slice it is given.

use crate::{Call, CallStatus, StatusFilter};

/// Filter selection plus free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub filter: StatusFilter,
    pub search: String,
}

impl ViewQuery {
    pub fn new(filter: StatusFilter, search: impl Into<String>) -> Self {
        Self {
            filter,
            search: search.into(),
        }
    }

    pub fn matches(&self, call: &Call) -> bool {
        self.filter.matches(call.status) && call.matches_search(&self.search)
    }
}

/// Counters over the whole store, independent of filter and search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallStats {
    pub total: usize,
    pub completed: usize,
    pub missed: usize,
    pub scheduled: usize,
}

impl CallStats {
    pub fn from_calls(calls: &[Call]) -> Self {
        let count = |status: CallStatus| calls.iter().filter(|c| c.status == status).count();
        Self {
            total: calls.len(),
            completed: count(CallStatus::Completed),
            missed: count(CallStatus::Missed),
            scheduled: count(CallStatus::Scheduled),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection<'a> {
    /// Matching calls in store order.
    pub calls: Vec<&'a Call>,
    pub stats: CallStats,
}

impl<'a> Projection<'a> {
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Call> {
        self.calls.get(index).copied()
    }
}

pub fn project<'a>(calls: &'a [Call], query: &ViewQuery) -> Projection<'a> {
    Projection {
        calls: calls.iter().filter(|call| query.matches(call)).collect(),
        stats: CallStats::from_calls(calls),
    }
}
