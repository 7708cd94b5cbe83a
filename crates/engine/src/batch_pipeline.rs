// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pulls events off the spider log, pre-fetches their states, dispatches
//! them to the strategy, and releases state back (spec §4.3).

use std::time::{Duration, SystemTime};

use sw_adapters::{
    BusError, CrawlingStrategy, Decoder, Encoder, MessageBusConsumer, MessageBusProducer,
    StatesBackend, StatesError,
};
use sw_core::{Event, JobId};
use sw_storage::StatesContext;
use thiserror::Error;

use crate::score_emitter::ScoreEmitter;
use crate::stats::Stats;
use crate::strategy_adapter::{self, Dispatched};

#[derive(Debug, Error)]
pub enum WorkError {
    #[error(transparent)]
    Bus(#[from] BusError),
    #[error(transparent)]
    States(#[from] StatesError),
}

/// Whether the worker should keep ticking after this `work()` call
/// (spec §4.3 step 5, §4.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Finished,
}

pub struct BatchPipeline<C, D, S, B, P, E> {
    consumer: C,
    decoder: D,
    strategy: S,
    states: StatesContext<B>,
    emitter: ScoreEmitter<P, E>,
    stats: Stats,
    batch_size: usize,
    poll_timeout: Duration,
    job_id: JobId,
}

impl<C, D, S, B, P, E> BatchPipeline<C, D, S, B, P, E>
where
    C: MessageBusConsumer,
    D: Decoder,
    S: CrawlingStrategy,
    B: StatesBackend,
    P: MessageBusProducer,
    E: Encoder,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        consumer: C,
        decoder: D,
        strategy: S,
        states: StatesContext<B>,
        emitter: ScoreEmitter<P, E>,
        batch_size: usize,
        poll_timeout: Duration,
        job_id: JobId,
    ) -> Self {
        Self {
            consumer,
            decoder,
            strategy,
            states,
            emitter,
            stats: Stats::new(),
            batch_size,
            poll_timeout,
            job_id,
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn states(&self) -> &StatesContext<B> {
        &self.states
    }

    /// Run a flush task tick outside the ordinary batch cycle (spec §4.5):
    /// `StatesContext::flush` may interleave between batches at arbitrary
    /// points once `SW_FLUSH_INTERVAL` elapses.
    pub async fn flush_states(&mut self) -> Result<(), WorkError> {
        self.states.flush().await.map_err(WorkError::from)
    }

    /// The four collaborators the drain sequence needs (spec §4.7): the
    /// strategy, the states context (for the final flush), the scoring-log
    /// producer, and the spider-log consumer.
    pub fn drain_parts(&mut self) -> (&S, &mut StatesContext<B>, &P, &C) {
        (&self.strategy, &mut self.states, self.emitter.producer(), &self.consumer)
    }

    /// Pull up to `batch_size` raw messages (bounded by `poll_timeout`),
    /// decode and classify each one, and enroll referenced fingerprints
    /// for the upcoming bulk `fetch` (spec §4.3 steps 1-4).
    ///
    /// Returns the decoded batch and how many raw messages were consumed —
    /// every message counts, including decode failures and unknown tags.
    async fn collect_batch(&mut self) -> Result<(Vec<Event>, usize), BusError> {
        let raw = self
            .consumer
            .get_messages(self.batch_size, self.poll_timeout)
            .await?;

        let mut batch = Vec::with_capacity(raw.len());
        for message in &raw {
            let event = match self.decoder.decode(&message.payload) {
                Ok(event) => event,
                Err(err) => {
                    tracing::error!(
                        error = %err,
                        payload = %hex::encode(&message.payload),
                        "failed to decode spider-log message"
                    );
                    continue;
                }
            };

            match &event {
                Event::AddSeeds(seeds) => self.states.to_fetch(&seeds.to_vec()),
                Event::PageCrawled(response) => {
                    self.states.to_fetch(&response.request.clone())
                }
                Event::LinksExtracted(request, links) => {
                    self.states.to_fetch(&request.clone());
                    self.states.to_fetch(&links.to_vec());
                }
                Event::RequestError(request, _) => self.states.to_fetch(&request.clone()),
                Event::Offset { .. } => {}
                Event::Unknown(tag) => {
                    tracing::warn!(tag = %tag, "collected unknown spider-log message");
                }
            }

            batch.push(event);
        }

        Ok((batch, raw.len()))
    }

    /// One full work tick (spec §4.3): collect, fetch, dispatch, flush the
    /// emitter, release, then record stats and check for `finished()`.
    pub async fn work(&mut self) -> Result<TickOutcome, WorkError> {
        let (batch, consumed) = self.collect_batch().await?;

        self.states.fetch().await?;

        for event in batch {
            match strategy_adapter::dispatch(
                &self.strategy,
                &mut self.states,
                &mut self.stats,
                &self.job_id,
                event,
            )
            .await?
            {
                Dispatched::Unknown(tag) => {
                    tracing::warn!(tag = %tag, "dispatch saw an unrecognized event tag");
                }
                Dispatched::Handled | Dispatched::Stale | Dispatched::Offset => {}
            }
        }

        self.emitter.flush().await?;
        self.states.release().await?;

        let outcome = if self.strategy.finished() {
            TickOutcome::Finished
        } else {
            TickOutcome::Continue
        };

        self.stats.record_tick(consumed as i64, SystemTime::now());

        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "batch_pipeline_tests.rs"]
mod tests;
