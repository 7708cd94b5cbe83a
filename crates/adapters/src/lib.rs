// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sw-adapters: trait surfaces for the strategy worker's external
//! collaborators (message bus, codec, states backend, crawling strategy,
//! stats sink), plus fake/no-op implementations for tests and defaults.

pub mod bus;
pub mod codec;
pub mod states;
pub mod stats;
pub mod strategy;

pub use bus::{BusError, MessageBusConsumer, MessageBusProducer, RawMessage, StdioConsumer, StdioProducer};
pub use codec::{Decoder, DecodeError, Encoder, EventCodec, JsonCodec, ScoreUpdate};
pub use states::{MemoryStatesBackend, StatesBackend, StatesError};
pub use stats::{export_tags, LoggingStatsSink, NoOpStatsSink, StatsSink};
pub use strategy::{CrawlingStrategy, NoopStrategy};

#[cfg(any(test, feature = "test-support"))]
pub use bus::{ConsumerCall, FakeConsumer, FakeProducer, ProducerCall};
#[cfg(any(test, feature = "test-support"))]
pub use states::{InMemoryStatesBackend, StatesCall};
#[cfg(any(test, feature = "test-support"))]
pub use stats::{FakeStatsSink, StatsSnapshot};
#[cfg(any(test, feature = "test-support"))]
pub use strategy::{FakeStrategy, StrategyCall};
