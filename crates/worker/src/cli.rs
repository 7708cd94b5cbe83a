// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line surface (spec §6.2): `--config` is required, the rest
//! override whatever the config module supplies.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "sw-worker", about = "Strategy worker for a crawl frontier")]
pub struct Cli {
    /// Path to the worker's configuration module.
    #[arg(long)]
    pub config: String,

    /// Overrides the configured crawling strategy.
    #[arg(long)]
    pub strategy: Option<String>,

    /// Overrides `SCORING_PARTITION_ID`.
    #[arg(long = "partition-id")]
    pub partition_id: Option<i64>,

    /// Log level, e.g. `info`, `debug`, `sw_worker=debug`.
    #[arg(long = "log-level", short = 'L', default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
