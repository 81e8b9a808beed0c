//! Fixed-rate tick scheduling with drift compensation.
//!
//! Each tick reports how long its own work took; the next tick is due
//! `max(0, period - work)` after the previous one finished.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct FixedRate {
    period: Duration,
    delay: Duration,
    last_finished: Instant,
    overruns: u64,
}

impl FixedRate {
    /// Schedule ticks at `hz` per second, first one due a full period after `now`
    pub fn new(hz: u32, now: Instant) -> Self {
        let period = Duration::from_secs(1) / hz.max(1);
        Self {
            period,
            delay: period,
            last_finished: now,
            overruns: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Delay in effect for the next tick
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// How many ticks ran longer than the period
    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Instant at which the next tick becomes due
    pub fn next_due(&self) -> Instant {
        self.last_finished + self.delay
    }

    /// Check whether the next tick is due at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due()
    }

    /// Time left until the next tick, zero if already due
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due().saturating_duration_since(now)
    }

    /// Record a finished tick and derive the next delay from its duration
    pub fn complete(&mut self, started: Instant, finished: Instant) {
        let work = finished.saturating_duration_since(started);
        if work > self.period {
            self.overruns += 1;
            log::debug!("tick overran: {:?} > {:?}", work, self.period);
        }
        self.delay = self.period.saturating_sub(work);
        self.last_finished = finished;
    }

    /// Run `work` if due, timing it and rescheduling. Returns whether it ran.
    pub fn run_if_due<F: FnOnce()>(&mut self, now: Instant, work: F) -> bool {
        if !self.is_due(now) {
            return false;
        }
        let started = Instant::now();
        work();
        self.complete(started, Instant::now());
        true
    }
}
