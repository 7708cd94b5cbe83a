// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer bookkeeping for the three cooperative periodic tasks (spec §4.5).
//! `sw-worker` drives the actual cooperative timeline; this module only
//! tracks *when* the status-log and flush-states tasks are next due, using
//! an injected [`Clock`] so the logic is testable against a [`FakeClock`]
//! without real sleeping (`C: Clock`, the same pattern as `oj-engine`'s
//! `Executor<S, A, N, C: Clock>`).

use rand::Rng;
use std::time::{Duration, Instant};
use sw_core::Clock;

/// Which periodic task fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Status,
    Flush,
}

/// Tracks next-due instants for the status-log and flush-states tasks. The
/// work task has no period (it reruns back-to-back, spec §4.5) and so has
/// no timer here.
pub struct Scheduler<C: Clock> {
    clock: C,
    status_interval: Duration,
    flush_interval: Duration,
    next_status: Instant,
    next_flush: Instant,
}

impl<C: Clock> Scheduler<C> {
    /// `clock.now()` anchors both timers. The flush task's first delay is
    /// sampled uniformly in `[0, flush_interval]` inclusive, to
    /// desynchronize workers in a fleet (spec §4.5, §8 property 6); `rng`
    /// supplies that sample.
    pub fn new(
        status_interval: Duration,
        flush_interval: Duration,
        clock: C,
        rng: &mut impl Rng,
    ) -> Self {
        let now = clock.now();
        let initial_flush_delay = sample_initial_flush_delay(flush_interval, rng);
        Self {
            clock,
            status_interval,
            flush_interval,
            next_status: now + status_interval,
            next_flush: now + initial_flush_delay,
        }
    }

    /// Tasks due to run right now (per the injected clock), in a fixed
    /// order (status before flush), re-arming each one it returns for its
    /// next period.
    pub fn fired(&mut self) -> Vec<Task> {
        let now = self.clock.now();
        let mut fired = Vec::new();
        if now >= self.next_status {
            fired.push(Task::Status);
            self.next_status = now + self.status_interval;
        }
        if now >= self.next_flush {
            fired.push(Task::Flush);
            self.next_flush = now + self.flush_interval;
        }
        fired
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_status.min(self.next_flush)
    }
}

/// Uniform sample in `[0, interval]` inclusive (spec §8 property 6).
pub fn sample_initial_flush_delay(interval: Duration, rng: &mut impl Rng) -> Duration {
    if interval.is_zero() {
        return Duration::ZERO;
    }
    let millis = interval.as_millis() as u64;
    Duration::from_millis(rng.gen_range(0..=millis))
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
