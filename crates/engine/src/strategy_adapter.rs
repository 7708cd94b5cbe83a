// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatches classified events to the crawling strategy's handlers,
//! applying the job-id staleness filter and the state-cache protocol
//! around each one (spec §4.4).

use sw_adapters::{CrawlingStrategy, StatesBackend, StatesError};
use sw_core::{Event, JobId, Request};
use sw_storage::StatesContext;

use crate::stats::Stats;

/// Outcome of dispatching one event, for the batch pipeline's logging.
pub enum Dispatched {
    /// The event was handled (possibly with a swallowed strategy error,
    /// already logged).
    Handled,
    /// Dropped by the job-id staleness filter (spec §3, §8 property 3).
    Stale,
    /// An unrecognized tag (spec §4.4).
    Unknown(String),
    /// Bookkeeping only, ignored by design (spec §3).
    Offset,
}

/// Dispatch one decoded event. `job_id` is the worker's current job id,
/// used to filter stale `page_crawled`/`links_extracted`/`request_error`
/// events; `add_seeds` is never filtered and always stamps `jid` on its
/// seeds (spec §3, §4.4).
///
/// Strategy handler errors are caught, logged, and swallowed — one bad
/// event must not halt the batch. Backend errors (`set_states`,
/// `update_cache`) propagate per spec §7: they are not this function's to
/// absorb, the task scheduler restarts the whole work tick on them.
pub async fn dispatch<S, B>(
    strategy: &S,
    states: &mut StatesContext<B>,
    stats: &mut Stats,
    job_id: &JobId,
    event: Event,
) -> Result<Dispatched, StatesError>
where
    S: CrawlingStrategy,
    B: StatesBackend,
{
    match event {
        Event::AddSeeds(mut seeds) => {
            for seed in &mut seeds {
                seed.set_job_id(job_id.as_str());
            }
            states.set_states(&seeds).await?;
            if let Err(err) = strategy.add_seeds(&seeds).await {
                tracing::error!(error = %err, "add_seeds handler failed");
            }
            states.update_cache(&seeds).await?;
            stats.consumed_add_seeds += 1;
            Ok(Dispatched::Handled)
        }
        Event::PageCrawled(response) => {
            if !matches_job(response.job_id(), job_id) {
                return Ok(Dispatched::Stale);
            }
            let request = response.request.clone();
            states.set_states(std::slice::from_ref(&request)).await?;
            if let Err(err) = strategy.page_crawled(&response).await {
                tracing::error!(error = %err, "page_crawled handler failed");
            }
            states.update_cache(std::slice::from_ref(&request)).await?;
            stats.consumed_page_crawled += 1;
            Ok(Dispatched::Handled)
        }
        Event::LinksExtracted(request, links) => {
            if !matches_job(request.job_id(), job_id) {
                return Ok(Dispatched::Stale);
            }
            states.set_states(&links).await?;
            if let Err(err) = strategy.links_extracted(&request, &links).await {
                tracing::error!(error = %err, "links_extracted handler failed");
            }
            states.update_cache(&links).await?;
            stats.consumed_links_extracted += 1;
            Ok(Dispatched::Handled)
        }
        Event::RequestError(request, error) => {
            if !matches_job(request.job_id(), job_id) {
                return Ok(Dispatched::Stale);
            }
            states.set_states(std::slice::from_ref(&request)).await?;
            if let Err(err) = strategy.page_error(&request, &error).await {
                tracing::error!(error = %err, "page_error handler failed");
            }
            states.update_cache(std::slice::from_ref(&request)).await?;
            stats.consumed_request_error += 1;
            Ok(Dispatched::Handled)
        }
        Event::Offset { .. } => Ok(Dispatched::Offset),
        Event::Unknown(tag) => Ok(Dispatched::Unknown(tag)),
    }
}

fn matches_job(event_job_id: Option<&str>, worker_job_id: &JobId) -> bool {
    event_job_id == Some(worker_job_id.as_str())
}

#[cfg(test)]
#[path = "strategy_adapter_tests.rs"]
mod tests;
