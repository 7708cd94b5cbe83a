// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rand::thread_rng;
use sw_core::FakeClock;

#[test]
fn status_fires_after_its_interval() {
    let clock = FakeClock::new();
    let mut scheduler = Scheduler::new(
        Duration::from_secs(30),
        Duration::from_secs(60),
        clock.clone(),
        &mut thread_rng(),
    );

    assert!(scheduler.fired().is_empty());
    clock.advance(Duration::from_secs(30));
    let fired = scheduler.fired();
    assert!(fired.contains(&Task::Status));
}

#[test]
fn flush_initial_delay_is_within_interval() {
    let clock = FakeClock::new();
    let interval = Duration::from_secs(100);
    let now = clock.now();
    let scheduler = Scheduler::new(Duration::from_secs(30), interval, clock, &mut thread_rng());
    assert!(scheduler.next_deadline() <= now + interval);
}

#[test]
fn fired_tasks_rearm_for_next_period() {
    let clock = FakeClock::new();
    let mut scheduler = Scheduler::new(
        Duration::from_secs(10),
        Duration::from_secs(10),
        clock.clone(),
        &mut thread_rng(),
    );

    // Force a deterministic flush deadline so this test doesn't depend on
    // the random initial delay.
    clock.advance(Duration::from_secs(10));

    let fired_once = scheduler.fired();
    assert!(fired_once.contains(&Task::Status));

    let fired_again = scheduler.fired();
    assert!(fired_again.is_empty(), "status must not fire twice for the same tick");

    clock.advance(Duration::from_secs(10));
    let fired_later = scheduler.fired();
    assert!(fired_later.contains(&Task::Status));
}

#[test]
fn sample_initial_flush_delay_never_exceeds_interval() {
    let interval = Duration::from_secs(42);
    let mut rng = thread_rng();
    for _ in 0..100 {
        let delay = sample_initial_flush_delay(interval, &mut rng);
        assert!(delay <= interval);
    }
}

#[test]
fn sample_initial_flush_delay_of_zero_interval_is_zero() {
    let mut rng = thread_rng();
    assert_eq!(sample_initial_flush_delay(Duration::ZERO, &mut rng), Duration::ZERO);
}
