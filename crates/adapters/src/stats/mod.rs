// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pluggable stats export (spec §4.6, §9 "mixin stats export → interface
//! composition"): the engine owns the counters, this trait only receives
//! periodic snapshots.

mod noop;
#[cfg(any(test, feature = "test-support"))]
mod fake;
mod logging;

pub use logging::LoggingStatsSink;
pub use noop::NoOpStatsSink;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStatsSink, StatsSnapshot};

use std::collections::BTreeMap;

/// Fixed export tags, matching `StrategyWorker.get_stats_tags` in the
/// source system verbatim: `{source: "sw", partition_id: <pid>}`.
pub fn export_tags(partition_id: &str) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();
    tags.insert("source".to_string(), "sw".to_string());
    tags.insert("partition_id".to_string(), partition_id.to_string());
    tags
}

/// Receives a periodic snapshot of the worker's counters (spec §4.6).
/// Counters are stringified so the same map can carry both integer
/// counters and `last_consumption_run`'s human-readable timestamp.
pub trait StatsSink: Send + Sync + 'static {
    fn emit(&self, tags: &BTreeMap<String, String>, counters: &BTreeMap<String, String>);
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
