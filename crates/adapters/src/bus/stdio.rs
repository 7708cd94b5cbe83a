// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Newline-delimited stdin/stdout bus. Not a production message-bus driver
//! (spec §1 names the concrete driver out of scope) — this is the
//! reference transport wired into `sw-worker`'s binary for local runs and
//! demos, the way `InMemoryStatesBackend` stands in for a real states
//! store (spec.md §9, SPEC_FULL.md §1/§2).
//!
//! Each line on stdin is one raw spider-log payload; each outgoing score
//! update is written as one line on stdout. No framing beyond the newline,
//! so payloads must not themselves contain one (the JSON codec's output
//! never does).

use super::{BusError, MessageBusConsumer, MessageBusProducer, RawMessage};
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::Mutex;

/// Reads spider-log messages as newline-delimited payloads from stdin.
pub struct StdioConsumer {
    lines: Mutex<tokio::io::Lines<BufReader<Stdin>>>,
    partition: i32,
    next_offset: Mutex<i64>,
}

impl StdioConsumer {
    pub fn new(partition: i32) -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
            partition,
            next_offset: Mutex::new(0),
        }
    }
}

#[async_trait]
impl MessageBusConsumer for StdioConsumer {
    /// Reads up to `count` lines, waiting at most `timeout` for the first
    /// one; returns early (possibly empty) once the timeout elapses or
    /// stdin reaches EOF.
    async fn get_messages(
        &self,
        count: usize,
        timeout: Duration,
    ) -> Result<Vec<RawMessage>, BusError> {
        let mut out = Vec::new();
        let mut lines = self.lines.lock().await;
        let mut offset = self.next_offset.lock().await;

        for i in 0..count {
            let per_line_timeout = if i == 0 { timeout } else { Duration::ZERO };
            let next = tokio::time::timeout(per_line_timeout, lines.next_line()).await;
            match next {
                Ok(Ok(Some(line))) => {
                    out.push(RawMessage {
                        partition: self.partition,
                        offset: *offset,
                        payload: line.into_bytes(),
                    });
                    *offset += 1;
                }
                Ok(Ok(None)) => break, // EOF
                Ok(Err(err)) => return Err(BusError::Consume(err.to_string())),
                Err(_) => break, // timed out waiting for the next line
            }
        }

        Ok(out)
    }

    async fn close(&self) -> Result<(), BusError> {
        Ok(())
    }
}

/// Writes score-update payloads as newline-delimited lines on stdout.
pub struct StdioProducer {
    stdout: Mutex<Stdout>,
}

impl StdioProducer {
    pub fn new() -> Self {
        Self {
            stdout: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for StdioProducer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageBusProducer for StdioProducer {
    async fn send(&self, mut payload: Vec<u8>) -> Result<(), BusError> {
        payload.push(b'\n');
        let mut stdout = self.stdout.lock().await;
        stdout
            .write_all(&payload)
            .await
            .map_err(|e| BusError::Produce(e.to_string()))
    }

    /// The producer is unbuffered (one `write_all` per `send`); flushing
    /// stdout is still worth doing so a piped consumer sees output
    /// promptly (spec §4.2's "named synchronization point").
    async fn flush(&self) -> Result<(), BusError> {
        self.stdout
            .lock()
            .await
            .flush()
            .await
            .map_err(|e| BusError::Produce(e.to_string()))
    }

    async fn close(&self) -> Result<(), BusError> {
        self.flush().await
    }
}

#[cfg(test)]
#[path = "stdio_tests.rs"]
mod tests;
