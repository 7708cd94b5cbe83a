// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The drain/shutdown state machine (spec §4.7): `Init → Running →
//! Draining → Stopped`, with an idempotent, strictly-ordered drain
//! sequence.

use sw_adapters::{CrawlingStrategy, MessageBusConsumer, MessageBusProducer, StatesBackend};
use sw_storage::StatesContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Init,
    Running,
    Draining,
    Stopped,
}

/// What triggered `Running → Draining`, logged for
/// operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainTrigger {
    StrategyFinished,
    ShutdownSignal,
    FatalError,
}

/// Tracks the worker's lifecycle state and runs the idempotent drain
/// sequence. Stopping an already-stopped worker is silently tolerated
/// (spec §4.7, §8 property 5).
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self { state: LifecycleState::Init }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn mark_running(&mut self) {
        if self.state == LifecycleState::Init {
            self.state = LifecycleState::Running;
        }
    }

    /// Begin draining. Idempotent — calling this while already draining
    /// or stopped does nothing.
    pub fn begin_drain(&mut self, trigger: DrainTrigger) -> bool {
        if self.state == LifecycleState::Running {
            tracing::info!(?trigger, "draining");
            self.state = LifecycleState::Draining;
            true
        } else {
            false
        }
    }

    /// Run the strict-order drain sequence (spec §4.7): final
    /// `flush_states`, `strategy.close()`, close producer then consumer.
    /// "Stop periodic tasks" and "stop the scheduler runtime" bracket this
    /// from the caller's side (`sw-worker`'s main loop exits `select!`
    /// before calling this, and exits the process after).
    ///
    /// Every step runs even if an earlier one failed — logged and
    /// continued, matching the source's teardown that never aborts
    /// partway (mirrors the "log and continue per step" drain idiom).
    pub async fn drain<S, B, C, P>(
        &mut self,
        strategy: &S,
        states: &mut StatesContext<B>,
        producer: &P,
        consumer: &C,
    ) where
        S: CrawlingStrategy,
        B: StatesBackend,
        C: MessageBusConsumer,
        P: MessageBusProducer,
    {
        if let Err(err) = states.flush().await {
            tracing::error!(error = %err, "final state flush failed during drain");
        }
        if let Err(err) = strategy.close().await {
            tracing::error!(error = %err, "strategy close failed during drain");
        }
        if let Err(err) = producer.close().await {
            tracing::error!(error = %err, "scoring-log producer close failed during drain");
        }
        if let Err(err) = consumer.close().await {
            tracing::error!(error = %err, "spider-log consumer close failed during drain");
        }
        self.state = LifecycleState::Stopped;
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
