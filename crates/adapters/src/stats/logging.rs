// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::StatsSink;
use std::collections::BTreeMap;

/// Logs each snapshot at `info` level. The default sink for `sw-worker`
/// when no richer exporter is wired in — the status-log interval (spec
/// §4.5) already prints counters; this is what actually implements that
/// printing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingStatsSink;

impl StatsSink for LoggingStatsSink {
    fn emit(&self, tags: &BTreeMap<String, String>, counters: &BTreeMap<String, String>) {
        tracing::info!(?tags, ?counters, "stats");
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
