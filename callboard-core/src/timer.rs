//! Active call timer.
//!
//! Counts whole seconds since the current call was answered. The counter is
//! advanced by external ticks; this type never reads a clock.
//!
//! ```text
//! Idle ─── start() ──→ Running ─── stop() ──→ Idle
//!                         │
//!                      tick() ↺
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallTimer {
    state: TimerState,
    elapsed: u64,
}

impl CallTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Running` at zero, discarding any previous count.
    pub fn start(&mut self) {
        self.state = TimerState::Running;
        self.elapsed = 0;
    }

    /// Add one second. Returns false (and does nothing) while idle.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(1);
        true
    }

    /// Return the current count and go back to `Idle` at zero.
    pub fn stop(&mut self) -> u64 {
        let elapsed = self.elapsed;
        self.state = TimerState::Idle;
        self.elapsed = 0;
        elapsed
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }
}
