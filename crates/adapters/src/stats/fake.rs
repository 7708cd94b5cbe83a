// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Call-recording stats sink for tests.

use super::StatsSink;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// One recorded `emit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub tags: BTreeMap<String, String>,
    pub counters: BTreeMap<String, String>,
}

#[derive(Clone, Default)]
pub struct FakeStatsSink {
    snapshots: Arc<Mutex<Vec<StatsSnapshot>>>,
}

impl FakeStatsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> Vec<StatsSnapshot> {
        self.snapshots.lock().clone()
    }
}

impl StatsSink for FakeStatsSink {
    fn emit(&self, tags: &BTreeMap<String, String>, counters: &BTreeMap<String, String>) {
        self.snapshots.lock().push(StatsSnapshot {
            tags: tags.clone(),
            counters: counters.clone(),
        });
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
