// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory counters (spec §4.6). Persist for process lifetime; the
//! single-threaded scheduling model means no locking is needed around
//! them (spec §5).

use std::collections::BTreeMap;
use std::time::SystemTime;
use sw_core::format_asctime;

#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub consumed_since_start: i64,
    pub consumed_add_seeds: i64,
    pub consumed_page_crawled: i64,
    pub consumed_links_extracted: i64,
    pub consumed_request_error: i64,
    pub last_consumed: i64,
    pub last_consumption_run: Option<String>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one work tick's results: `consumed` is however many raw
    /// messages were pulled this tick (spec §4.3 step 6) — including
    /// decode failures and unknown tags, which still count as consumed.
    pub fn record_tick(&mut self, consumed: i64, now: SystemTime) {
        self.last_consumed = consumed;
        self.consumed_since_start += consumed;
        self.last_consumption_run = Some(format_asctime(now));
    }

    /// Render every counter for a [`sw_adapters::StatsSink`] snapshot,
    /// `last_consumption_run` included — the source's `log_status` logs
    /// every key of `self.stats` generically, string or not, and spec §4.6
    /// lists `last_consumption_run` among the counters the status task
    /// must log. Stringified so one map can carry both the integer
    /// counters and that human-readable timestamp.
    pub fn as_counters(&self) -> BTreeMap<String, String> {
        let mut counters = BTreeMap::new();
        counters.insert("consumed_since_start".to_string(), self.consumed_since_start.to_string());
        counters.insert("consumed_add_seeds".to_string(), self.consumed_add_seeds.to_string());
        counters.insert("consumed_page_crawled".to_string(), self.consumed_page_crawled.to_string());
        counters.insert(
            "consumed_links_extracted".to_string(),
            self.consumed_links_extracted.to_string(),
        );
        counters.insert(
            "consumed_request_error".to_string(),
            self.consumed_request_error.to_string(),
        );
        counters.insert("last_consumed".to_string(), self.last_consumed.to_string());
        counters.insert(
            "last_consumption_run".to_string(),
            self.last_consumption_run.clone().unwrap_or_default(),
        );
        counters
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
