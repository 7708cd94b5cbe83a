// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory consumer/producer pair for tests.

use super::{BusError, MessageBusConsumer, MessageBusProducer, RawMessage};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// A recorded call to [`FakeConsumer::get_messages`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerCall {
    pub count: usize,
    pub timeout: Duration,
}

struct FakeConsumerState {
    queue: VecDeque<RawMessage>,
    calls: Vec<ConsumerCall>,
    closed: bool,
}

/// Consumer backed by a preloaded in-memory queue. `get_messages` drains
/// up to `count` messages immediately rather than actually waiting out
/// `timeout` — tests don't want to sleep.
#[derive(Clone)]
pub struct FakeConsumer {
    inner: Arc<Mutex<FakeConsumerState>>,
}

impl FakeConsumer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeConsumerState {
                queue: VecDeque::new(),
                calls: Vec::new(),
                closed: false,
            })),
        }
    }

    /// Enqueue a message to be returned by a future `get_messages` call.
    pub fn push(&self, msg: RawMessage) {
        self.inner.lock().queue.push_back(msg);
    }

    pub fn calls(&self) -> Vec<ConsumerCall> {
        self.inner.lock().calls.clone()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }
}

impl Default for FakeConsumer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageBusConsumer for FakeConsumer {
    async fn get_messages(
        &self,
        count: usize,
        timeout: Duration,
    ) -> Result<Vec<RawMessage>, BusError> {
        let mut state = self.inner.lock();
        state.calls.push(ConsumerCall { count, timeout });
        let mut out = Vec::with_capacity(count.min(state.queue.len()));
        for _ in 0..count {
            match state.queue.pop_front() {
                Some(m) => out.push(m),
                None => break,
            }
        }
        Ok(out)
    }

    async fn close(&self) -> Result<(), BusError> {
        self.inner.lock().closed = true;
        Ok(())
    }
}

/// A recorded call to [`FakeProducer::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerCall {
    pub payload: Vec<u8>,
}

struct FakeProducerState {
    sent: Vec<ProducerCall>,
    flushes: usize,
    closed: bool,
}

#[derive(Clone)]
pub struct FakeProducer {
    inner: Arc<Mutex<FakeProducerState>>,
}

impl FakeProducer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeProducerState {
                sent: Vec::new(),
                flushes: 0,
                closed: false,
            })),
        }
    }

    pub fn sent(&self) -> Vec<ProducerCall> {
        self.inner.lock().sent.clone()
    }

    pub fn flush_count(&self) -> usize {
        self.inner.lock().flushes
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }
}

impl Default for FakeProducer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageBusProducer for FakeProducer {
    async fn send(&self, payload: Vec<u8>) -> Result<(), BusError> {
        self.inner.lock().sent.push(ProducerCall { payload });
        Ok(())
    }

    async fn flush(&self) -> Result<(), BusError> {
        self.inner.lock().flushes += 1;
        Ok(())
    }

    async fn close(&self) -> Result<(), BusError> {
        self.inner.lock().closed = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
