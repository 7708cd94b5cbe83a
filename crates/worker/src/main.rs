// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sw-worker`: the strategy-worker binary. Wires the reference local-run
//! adapters (stdio bus, in-memory states backend, no-op strategy, JSON
//! codec — spec.md §1/§9, SPEC_FULL.md §1/§9) into the cooperative event
//! loop and drives it to completion or shutdown.
//!
//! A production deployment replaces `MemoryStatesBackend`/`StdioConsumer`/
//! `StdioProducer`/`NoopStrategy` with its own `MessageBusConsumer`/
//! `MessageBusProducer`/`StatesBackend`/`CrawlingStrategy` implementations
//! and links them in through the same generic `BatchPipeline` — this
//! binary is the reference wiring, not the only one (DESIGN.md "Open
//! Question decisions": Rust has no dynamic class-path loading, so
//! concrete adapter types are named once, here).

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::time::Duration;

use clap::Parser;
use tokio::signal::unix::{signal, Signal, SignalKind};

use sw_adapters::{
    export_tags, JsonCodec, LoggingStatsSink, MemoryStatesBackend, NoopStrategy, StatsSink,
    StdioConsumer, StdioProducer,
};
use sw_core::SystemClock;
use sw_engine::{BatchPipeline, Scheduler, ScoreEmitter, Task, TickOutcome};
use sw_storage::StatesContext;
use sw_worker::{Cli, Config, ConfigSource, DrainTrigger, Lifecycle, LifecycleState};

const STATUS_INTERVAL: Duration = Duration::from_secs(30);
const POLL_TIMEOUT: Duration = Duration::from_secs(1);

/// `PartitionId` is a validated small non-negative integer by the time
/// `main` gets it (spec §7 "partition out of range is fatal"); the stdio
/// bus just needs it as an `i32` tag on each raw message.
fn parse_partition(raw: &str) -> i32 {
    raw.parse().unwrap_or(0)
}

/// Check whether `sig` already has a pending notification, without
/// blocking: a zero-duration timeout polls the receiver exactly once and
/// resolves immediately regardless of the outcome.
async fn poll_signal(sig: &mut Signal) -> bool {
    matches!(
        tokio::time::timeout(Duration::ZERO, sig.recv()).await,
        Ok(Some(()))
    )
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let source = ConfigSource::from_env();
    let config = match Config::resolve(source, &cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("sw-worker: {err}");
            std::process::exit(1);
        }
    };

    sw_worker::logging::init(&config.log_level, config.logging_config.as_deref());

    tracing::info!(
        partition_id = %config.partition_id,
        strategy = %config.strategy,
        batch_size = config.batch_size,
        flush_interval_secs = config.flush_interval.as_secs(),
        "starting strategy worker"
    );
    if config.strategy != "noop" {
        tracing::warn!(
            configured = %config.strategy,
            "no dynamic strategy loader in this binary; running the no-op reference strategy instead"
        );
    }

    let partition = parse_partition(config.partition_id.as_str());
    let consumer = StdioConsumer::new(partition);
    let producer = StdioProducer::new();
    let states = StatesContext::new(MemoryStatesBackend::new());
    let emitter = ScoreEmitter::new(producer, JsonCodec);
    let mut pipeline = BatchPipeline::new(
        consumer,
        JsonCodec,
        NoopStrategy,
        states,
        emitter,
        config.batch_size,
        POLL_TIMEOUT,
        config.job_id.clone(),
    );

    let mut lifecycle = Lifecycle::new();
    lifecycle.mark_running();

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("sw-worker: failed to install SIGTERM handler: {err}");
            std::process::exit(1);
        }
    };
    let mut sigint = match signal(SignalKind::interrupt()) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("sw-worker: failed to install SIGINT handler: {err}");
            std::process::exit(1);
        }
    };
    let mut sigusr1 = match signal(SignalKind::user_defined1()) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("sw-worker: failed to install SIGUSR1 handler: {err}");
            std::process::exit(1);
        }
    };

    let mut scheduler = Scheduler::new(
        STATUS_INTERVAL,
        config.flush_interval,
        SystemClock,
        &mut rand::thread_rng(),
    );

    let stats_sink = LoggingStatsSink;
    let export_tags = export_tags(config.partition_id.as_str());

    // Each `work()` tick runs to completion before anything else is
    // inspected: spec §5 requires that "between suspension points all data
    // structures are private to the current handler", and `collect_batch`
    // pulls messages off the bus into a local `Vec<Event>` that belongs to
    // nobody but the in-flight tick. Racing `work()` inside a `tokio::select!`
    // against the timer/signal branches would let a winning branch cancel
    // the tick mid-flight and drop already-consumed-but-undispatched events
    // on the floor. So there is no such `select!` here: every loop iteration
    // awaits `work()` alone, then checks the scheduler and signals once the
    // tick is fully done — cooperative, not pre-emptive. `collect_batch`'s
    // own bounded ≤1s poll is what gives the loop a steady cadence to check
    // those in between ticks.
    loop {
        if lifecycle.state() == LifecycleState::Draining {
            break;
        }

        match pipeline.work().await {
            Ok(TickOutcome::Continue) => {}
            Ok(TickOutcome::Finished) => {
                tracing::info!("strategy reported finished(), starting drain");
                lifecycle.begin_drain(DrainTrigger::StrategyFinished);
            }
            Err(err) => {
                tracing::error!(error = %err, "work tick failed, retrying");
            }
        }

        if lifecycle.state() == LifecycleState::Draining {
            continue;
        }

        for task in scheduler.fired() {
            match task {
                Task::Status => {
                    stats_sink.emit(&export_tags, &pipeline.stats().as_counters());
                }
                Task::Flush => {
                    if let Err(err) = pipeline.flush_states().await {
                        tracing::error!(error = %err, "periodic state flush failed, retrying next interval");
                    }
                }
            }
        }

        // Non-blocking: a zero-duration timeout polls each signal receiver
        // exactly once and returns immediately either way, so checking for
        // a signal never delays the next `work()` tick.
        if poll_signal(&mut sigterm).await || poll_signal(&mut sigint).await {
            tracing::info!("received shutdown signal, draining");
            lifecycle.begin_drain(DrainTrigger::ShutdownSignal);
        } else if poll_signal(&mut sigusr1).await {
            tracing::error!(
                state = ?lifecycle.state(),
                stats = ?pipeline.stats(),
                "diagnostic dump (SIGUSR1)"
            );
        }
    }

    let (strategy, states, producer, consumer) = pipeline.drain_parts();
    lifecycle.drain(strategy, states, producer, consumer).await;
    tracing::info!("strategy worker stopped");
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
