//! Cancellable one-second ticker for the active call.
//!
//! The ticker is a tokio task that sends `TuiEvent::CallTimerTick` on the
//! app channel once per period. Dropping the handle aborts the task, so a
//! ticker never outlives the call (or the app) that owns it.

use crate::events::TuiEvent;
use callboard_core::CallId;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

#[derive(Debug)]
pub struct ActiveCallTicker {
    call_id: CallId,
    handle: JoinHandle<()>,
}

impl ActiveCallTicker {
    /// Start ticking for `call_id`. The first tick fires one `period` from
    /// now. Must be called inside a tokio runtime.
    pub fn spawn(call_id: CallId, period: Duration, sender: mpsc::Sender<TuiEvent>) -> Self {
        let id = call_id.clone();
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(TuiEvent::CallTimerTick(id.clone())).await.is_err() {
                    break;
                }
            }
        });
        debug!(call_id = %call_id, period_ms = period.as_millis() as u64, "Call ticker started");
        Self { call_id, handle }
    }

    pub fn call_id(&self) -> &CallId {
        &self.call_id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop ticking. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for ActiveCallTicker {
    fn drop(&mut self) {
        self.handle.abort();
        debug!(call_id = %self.call_id, "Call ticker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(1);

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let (tx, mut rx) = mpsc::channel(16);
        let start = Instant::now();
        let _ticker = ActiveCallTicker::spawn(CallId::new("a"), PERIOD, tx);

        for _ in 0..5 {
            let event = rx.recv().await;
            assert_eq!(event, Some(TuiEvent::CallTimerTick(CallId::new("a"))));
        }
        assert_eq!(start.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_ticks() {
        let (tx, mut rx) = mpsc::channel(16);
        let ticker = ActiveCallTicker::spawn(CallId::new("a"), PERIOD, tx);
        ticker.cancel();

        let result = time::timeout(Duration::from_secs(10), rx.recv()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_channel_ends_task() {
        let (tx, rx) = mpsc::channel(16);
        let ticker = ActiveCallTicker::spawn(CallId::new("a"), PERIOD, tx);
        drop(rx);

        time::sleep(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert!(ticker.is_finished());
    }
}
