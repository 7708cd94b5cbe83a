// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved worker configuration: the `--config` module's settings merged
//! with CLI overrides, validated at startup (spec §6.1, §7).

use std::time::Duration;
use thiserror::Error;

use crate::cli::Cli;
use sw_core::{JobId, PartitionId};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("partition id {partition_id} out of range: must be in [0, {spider_log_partitions})")]
    PartitionOutOfRange {
        partition_id: i64,
        spider_log_partitions: i64,
    },
    #[error("no crawling strategy configured (pass --strategy or set CRAWLING_STRATEGY)")]
    MissingStrategy,
}

/// Settings a `--config` module is expected to supply (spec §6.1). In the
/// source system these are loaded by evaluating the module; here they are
/// a plain struct the binary's `main` constructs — see `ConfigSource` for
/// where a real module loader would plug in.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    pub scoring_partition_id: i64,
    pub spider_log_partitions: i64,
    pub message_bus: String,
    pub message_bus_codec: String,
    pub spider_log_consumer_batch_size: usize,
    pub sw_flush_interval: Duration,
    pub crawling_strategy: Option<String>,
    pub logging_config: Option<String>,
    /// Not part of the spec's enumerated config table — the source system
    /// tracks this as strategy-worker-internal state seeded to `0` and
    /// advanced by job-start control messages it doesn't show in the
    /// distilled strategy module. Exposed here as `JOB_ID` so a real
    /// deployment can still pin it.
    pub job_id: String,
}

impl ConfigSource {
    /// Read the spec's environment-variable config keys (§6.1), falling
    /// back to [`ConfigSource::default`] field-by-field for anything unset
    /// or unparseable (logged at `warn`).
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            scoring_partition_id: env_parsed("SCORING_PARTITION_ID", default.scoring_partition_id),
            spider_log_partitions: env_parsed("SPIDER_LOG_PARTITIONS", default.spider_log_partitions),
            message_bus: std::env::var("MESSAGE_BUS").unwrap_or(default.message_bus),
            message_bus_codec: std::env::var("MESSAGE_BUS_CODEC").unwrap_or(default.message_bus_codec),
            spider_log_consumer_batch_size: env_parsed(
                "SPIDER_LOG_CONSUMER_BATCH_SIZE",
                default.spider_log_consumer_batch_size,
            ),
            sw_flush_interval: std::env::var("SW_FLUSH_INTERVAL")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(default.sw_flush_interval),
            crawling_strategy: std::env::var("CRAWLING_STRATEGY").ok().or(default.crawling_strategy),
            logging_config: std::env::var("LOGGING_CONFIG").ok().or(default.logging_config),
            job_id: std::env::var("JOB_ID").unwrap_or(default.job_id),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key = %key, raw = %raw, "unparseable env var, using default");
            default
        }),
        Err(_) => default,
    }
}

impl Default for ConfigSource {
    fn default() -> Self {
        Self {
            scoring_partition_id: 0,
            spider_log_partitions: 1,
            message_bus: String::new(),
            message_bus_codec: String::new(),
            spider_log_consumer_batch_size: 512,
            sw_flush_interval: Duration::from_secs(60),
            crawling_strategy: None,
            logging_config: None,
            job_id: "0".to_string(),
        }
    }
}

/// Fully resolved, validated configuration for one worker instance.
#[derive(Debug, Clone)]
pub struct Config {
    pub partition_id: PartitionId,
    pub spider_log_partitions: i64,
    pub message_bus: String,
    pub message_bus_codec: String,
    pub batch_size: usize,
    pub flush_interval: Duration,
    pub strategy: String,
    pub log_level: String,
    pub logging_config: Option<String>,
    pub job_id: JobId,
}

impl Config {
    /// Merge CLI overrides onto a loaded `ConfigSource` and validate the
    /// result (partition range, strategy presence — spec §6.2, §7).
    pub fn resolve(source: ConfigSource, cli: &Cli) -> Result<Self, ConfigError> {
        let partition_id = cli.partition_id.unwrap_or(source.scoring_partition_id);
        if partition_id < 0 || partition_id >= source.spider_log_partitions {
            return Err(ConfigError::PartitionOutOfRange {
                partition_id,
                spider_log_partitions: source.spider_log_partitions,
            });
        }

        let strategy = cli
            .strategy
            .clone()
            .or(source.crawling_strategy)
            .ok_or(ConfigError::MissingStrategy)?;

        Ok(Self {
            partition_id: PartitionId::new(partition_id.to_string()),
            spider_log_partitions: source.spider_log_partitions,
            message_bus: source.message_bus,
            message_bus_codec: source.message_bus_codec,
            batch_size: source.spider_log_consumer_batch_size,
            flush_interval: source.sw_flush_interval,
            strategy,
            log_level: cli.log_level.clone(),
            logging_config: source.logging_config,
            job_id: JobId::new(source.job_id),
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
