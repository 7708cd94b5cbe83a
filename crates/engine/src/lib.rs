// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sw-engine: the batch pipeline, strategy dispatch, score emission,
//! stats, and the flush/status timer bookkeeping.

mod batch_pipeline;
mod score_emitter;
mod scheduler;
mod stats;
mod strategy_adapter;

pub use batch_pipeline::{BatchPipeline, TickOutcome, WorkError};
pub use scheduler::{sample_initial_flush_delay, Scheduler, Task};
pub use score_emitter::ScoreEmitter;
pub use stats::Stats;
pub use strategy_adapter::{dispatch, Dispatched};
