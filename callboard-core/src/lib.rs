//! Callboard Core - call model and state for the agent dashboard
//!
//! Holds everything that does not touch a terminal: the call record and its
//! enums, the store that owns calls and applies lifecycle events, the active
//! call timer, the read-side projection and display formatting.

pub mod call;
pub mod enums;
pub mod error;
pub mod format;
pub mod generator;
pub mod identity;
pub mod projection;
pub mod seed;
pub mod store;
pub mod timer;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use call::Call;
pub use enums::{
    CallStatus, CallStatusParseError, Priority, PriorityParseError, StatusFilter,
    StatusFilterParseError,
};
pub use error::{CallError, CallResult};
pub use format::{format_duration, format_timestamp};
pub use generator::CallGenerator;
pub use identity::{CallId, Timestamp};
pub use projection::{project, CallStats, Projection, ViewQuery};
pub use seed::sample_calls;
pub use store::{reduce, CallEvent, CallStore, Transition};
pub use timer::{CallTimer, TimerState};
