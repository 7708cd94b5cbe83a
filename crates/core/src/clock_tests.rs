// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_moves_forward() {
    let clock = SystemClock;
    let t0 = clock.now();
    std::thread::sleep(Duration::from_millis(1));
    assert!(clock.now() >= t0);
}

#[test]
fn fake_clock_only_advances_when_told() {
    let clock = FakeClock::new();
    let t0 = clock.now();
    assert_eq!(clock.now(), t0);
    clock.advance(Duration::from_secs(5));
    assert_eq!(clock.now(), t0 + Duration::from_secs(5));
}

#[test]
fn fake_clock_clones_share_state() {
    let clock = FakeClock::new();
    let clone = clock.clone();
    clock.advance(Duration::from_secs(1));
    assert_eq!(clock.now(), clone.now());
}
