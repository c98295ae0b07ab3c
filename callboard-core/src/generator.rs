//! Synthetic incoming-call generator.
//!
//! All randomness flows through the injected `Rng`, so a seeded source gives
//! a reproducible stream of calls.

use crate::{Call, CallId, Priority, Timestamp};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces random incoming calls.
#[derive(Debug, Clone)]
pub struct CallGenerator<R = StdRng> {
    rng: R,
}

impl CallGenerator<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CallGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn next_id(&mut self) -> CallId {
        CallId::random(&mut self.rng)
    }

    /// `Caller N` with N in 0..1000.
    pub fn caller_name(&mut self) -> String {
        format!("Caller {}", self.rng.random_range(0..1000u32))
    }

    /// `+1 (555) AAA-BBBB` with AAA in 100..=999 and BBBB in 1000..=9999.
    pub fn phone_number(&mut self) -> String {
        let exchange = self.rng.random_range(100..1000u32);
        let line = self.rng.random_range(1000..10000u32);
        format!("+1 (555) {}-{}", exchange, line)
    }

    pub fn priority(&mut self) -> Priority {
        Priority::ALL[self.rng.random_range(0..Priority::ALL.len())]
    }

    /// A ringing call stamped with `now`.
    pub fn incoming_call(&mut self, now: Timestamp) -> Call {
        let id = self.next_id();
        let caller = self.caller_name();
        let phone = self.phone_number();
        let priority = self.priority();
        Call::incoming(id, caller, phone, priority, now)
    }
}
