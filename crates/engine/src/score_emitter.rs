// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thin adapter handing `(request, score, schedule)` tuples to the
//! scoring-log producer (spec §4.2). Injected into the strategy so the
//! strategy decides when and with what score to emit.

use sw_adapters::{BusError, Encoder, MessageBusProducer, ScoreUpdate};
use sw_core::Request;

#[derive(Clone)]
pub struct ScoreEmitter<P, E> {
    producer: P,
    encoder: E,
}

impl<P, E> ScoreEmitter<P, E>
where
    P: MessageBusProducer,
    E: Encoder,
{
    pub fn new(producer: P, encoder: E) -> Self {
        Self { producer, encoder }
    }

    /// The underlying producer, for drain (spec §4.7 step 5: close
    /// producer before consumer).
    pub fn producer(&self) -> &P {
        &self.producer
    }

    /// Encode and send a score update. `schedule = !dont_queue` at call
    /// sites that mirror the source API's `dont_queue` flag (spec §8 S6).
    pub async fn send(
        &self,
        request: Request,
        score: f64,
        schedule: bool,
    ) -> Result<(), BusError> {
        let update = ScoreUpdate { request, score, schedule };
        let payload = self.encoder.encode(&update);
        self.producer.send(payload).await
    }

    /// Named synchronization point; the default emitter has nothing to
    /// flush of its own (spec §9) but still delegates to the producer in
    /// case it buffers.
    pub async fn flush(&self) -> Result<(), BusError> {
        self.producer.flush().await
    }
}

#[cfg(test)]
#[path = "score_emitter_tests.rs"]
mod tests;
