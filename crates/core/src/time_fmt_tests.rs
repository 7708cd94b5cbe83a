// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::{Duration, UNIX_EPOCH};

#[test]
fn formats_seconds() {
    assert_eq!(format_elapsed(5), "5s");
    assert_eq!(format_elapsed(59), "59s");
}

#[test]
fn formats_minutes() {
    assert_eq!(format_elapsed(60), "1m");
    assert_eq!(format_elapsed(125), "2m");
}

#[test]
fn formats_hours_with_and_without_minutes() {
    assert_eq!(format_elapsed(3600), "1h");
    assert_eq!(format_elapsed(3600 + 30 * 60), "1h30m");
}

#[test]
fn formats_days() {
    assert_eq!(format_elapsed(86400 * 3), "3d");
}

#[test]
fn formats_elapsed_ms() {
    assert_eq!(format_elapsed_ms(5_000), "5s");
}

#[test]
fn asctime_epoch() {
    assert_eq!(format_asctime(UNIX_EPOCH), "Thu Jan  1 00:00:00 1970");
}

#[test]
fn asctime_one_day_later() {
    let t = UNIX_EPOCH + Duration::from_secs(86400 + 3661);
    assert_eq!(format_asctime(t), "Fri Jan  2 01:01:01 1970");
}
