// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message-bus adapters: the spider-log consumer and the scoring-log
//! producer. Concrete drivers (Kafka, SQS, whatever) live outside this
//! crate; only the trait boundary is defined here.

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{ConsumerCall, FakeConsumer, FakeProducer, ProducerCall};

mod stdio;
pub use stdio::{StdioConsumer, StdioProducer};

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors from bus operations. Per spec §7, these propagate out of the
/// task that hit them — the scheduler logs and restarts, it does not crash
/// the worker.
#[derive(Debug, Error)]
pub enum BusError {
    #[error("consumer error: {0}")]
    Consume(String),
    #[error("producer error: {0}")]
    Produce(String),
    #[error("bus closed")]
    Closed,
}

/// A single raw message pulled from the spider log, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub partition: i32,
    pub offset: i64,
    pub payload: Vec<u8>,
}

/// Consumes the spider log for one partition. Implementations own offset
/// commit policy — the core never commits explicitly (spec §4.3).
#[async_trait]
pub trait MessageBusConsumer: Send + Sync + 'static {
    /// Pull up to `count` messages, waiting at most `timeout` for the
    /// first one. Returns fewer than `count` (including zero) if the
    /// timeout elapses first.
    async fn get_messages(
        &self,
        count: usize,
        timeout: Duration,
    ) -> Result<Vec<RawMessage>, BusError>;

    async fn close(&self) -> Result<(), BusError>;
}

/// Produces onto the scoring log. No routing key is ever used (spec §4.2,
/// §6.3).
#[async_trait]
pub trait MessageBusProducer: Send + Sync + 'static {
    async fn send(&self, payload: Vec<u8>) -> Result<(), BusError>;

    /// Named synchronization point; the default emitter treats this as a
    /// no-op (spec §9) but a buffered producer may flush here.
    async fn flush(&self) -> Result<(), BusError>;

    async fn close(&self) -> Result<(), BusError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
