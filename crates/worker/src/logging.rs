// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup (spec §6.1's `LOGGING_CONFIG`/`--log-level`).
//!
//! The worker logs to stdout rather than a rotated file — unlike a
//! long-lived daemon, it is expected to run under a process supervisor
//! that owns log capture.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Build the filter the worker's subscriber is initialized with, falling
/// back to `info` on an unparseable `--log-level`.
fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the global tracing subscriber from the resolved
/// `--log-level`. `logging_config` names an external logging config file
/// in the source system (a dict-config module); there is no equivalent
/// here, so a non-empty value is logged once and otherwise ignored.
pub fn init(log_level: &str, logging_config: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(log_level))
        .with(fmt::layer())
        .init();

    if let Some(path) = logging_config {
        tracing::warn!(path, "LOGGING_CONFIG is not supported; using --log-level only");
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
