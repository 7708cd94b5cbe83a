// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use clap::Parser;

fn cli() -> Cli {
    Cli::try_parse_from(["sw-worker", "--config", "settings.toml"]).unwrap()
}

#[test]
fn partition_id_out_of_range_is_rejected() {
    let mut source = ConfigSource { spider_log_partitions: 4, ..Default::default() };
    source.scoring_partition_id = 9;
    let err = Config::resolve(source, &cli()).unwrap_err();
    assert!(matches!(err, ConfigError::PartitionOutOfRange { .. }));
}

#[test]
fn negative_partition_id_is_rejected() {
    let mut source = ConfigSource { spider_log_partitions: 4, ..Default::default() };
    source.scoring_partition_id = -1;
    let err = Config::resolve(source, &cli()).unwrap_err();
    assert!(matches!(err, ConfigError::PartitionOutOfRange { .. }));
}

#[test]
fn cli_partition_overrides_source() {
    let source = ConfigSource {
        scoring_partition_id: 0,
        spider_log_partitions: 4,
        crawling_strategy: Some("strategies::Demo".to_string()),
        ..Default::default()
    };
    let cli = Cli::try_parse_from([
        "sw-worker",
        "--config",
        "settings.toml",
        "--partition-id",
        "2",
    ])
    .unwrap();
    let config = Config::resolve(source, &cli).unwrap();
    assert_eq!(config.partition_id.as_str(), "2");
}

#[test]
fn missing_strategy_is_rejected() {
    let source = ConfigSource { spider_log_partitions: 4, ..Default::default() };
    let err = Config::resolve(source, &cli()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingStrategy));
}

#[test]
fn cli_strategy_overrides_source() {
    let source = ConfigSource {
        spider_log_partitions: 4,
        crawling_strategy: Some("strategies::FromConfig".to_string()),
        ..Default::default()
    };
    let cli = Cli::try_parse_from([
        "sw-worker",
        "--config",
        "settings.toml",
        "--strategy",
        "strategies::FromCli",
    ])
    .unwrap();
    let config = Config::resolve(source, &cli).unwrap();
    assert_eq!(config.strategy, "strategies::FromCli");
}
