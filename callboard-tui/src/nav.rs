//! Filter selector navigation.

use callboard_core::{CallStatus, StatusFilter};

/// Cycling over the filter bar in display order.
pub trait FilterNav: Sized {
    fn title(&self) -> &'static str;
    fn index(&self) -> usize;
    fn from_index(index: usize) -> Option<Self>;
    fn next(&self) -> Self;
    fn previous(&self) -> Self;
}

impl FilterNav for StatusFilter {
    fn title(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(CallStatus::Incoming) => "Incoming",
            StatusFilter::Only(CallStatus::Active) => "Active",
            StatusFilter::Only(CallStatus::Completed) => "Completed",
            StatusFilter::Only(CallStatus::Missed) => "Missed",
            StatusFilter::Only(CallStatus::Scheduled) => "Scheduled",
        }
    }

    fn index(&self) -> usize {
        StatusFilter::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or(0)
    }

    fn from_index(index: usize) -> Option<Self> {
        StatusFilter::ALL.get(index).copied()
    }

    fn next(&self) -> Self {
        let all = StatusFilter::ALL;
        all[(self.index() + 1) % all.len()]
    }

    fn previous(&self) -> Self {
        let all = StatusFilter::ALL;
        let idx = self.index();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}
