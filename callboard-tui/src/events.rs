//! Event types for the TUI event loop.

use callboard_core::CallId;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Input(KeyEvent),
    /// One second of talk time for the given call.
    CallTimerTick(CallId),
    Resize { width: u16, height: u16 },
}
