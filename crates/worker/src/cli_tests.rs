// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::Parser;

#[test]
fn requires_config() {
    let err = Cli::try_parse_from(["sw-worker"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn log_level_defaults_to_info() {
    let cli = Cli::try_parse_from(["sw-worker", "--config", "settings.toml"]).unwrap();
    assert_eq!(cli.log_level, "info");
    assert!(cli.strategy.is_none());
    assert!(cli.partition_id.is_none());
}

#[test]
fn overrides_parse() {
    let cli = Cli::try_parse_from([
        "sw-worker",
        "--config",
        "settings.toml",
        "--strategy",
        "strategies::MyStrategy",
        "--partition-id",
        "3",
        "--log-level",
        "debug",
    ])
    .unwrap();
    assert_eq!(cli.strategy.as_deref(), Some("strategies::MyStrategy"));
    assert_eq!(cli.partition_id, Some(3));
    assert_eq!(cli.log_level, "debug");
}
