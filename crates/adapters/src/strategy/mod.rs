// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The crawling strategy: the user plug-in the batch pipeline dispatches
//! decoded events to (spec §4.4, GLOSSARY). Out of scope per spec §1 —
//! only the trait boundary plus a fake recorder live here.

mod noop;
pub use noop::NoopStrategy;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeStrategy, StrategyCall};

use async_trait::async_trait;
use sw_core::{Link, Request, Response};

/// User-supplied crawl policy. Per-event handler errors are caught by the
/// strategy adapter, logged, and swallowed — one bad event must not halt
/// the batch (spec §4.4, §7).
#[async_trait]
pub trait CrawlingStrategy: Send + Sync + 'static {
    async fn add_seeds(&self, seeds: &[Request]) -> anyhow::Result<()>;

    async fn page_crawled(&self, response: &Response) -> anyhow::Result<()>;

    async fn links_extracted(&self, request: &Request, links: &[Link]) -> anyhow::Result<()>;

    async fn page_error(&self, request: &Request, error: &str) -> anyhow::Result<()>;

    /// Called once per work tick, after processing the batch. Returning
    /// `true` initiates graceful shutdown (spec §4.3, §4.7).
    fn finished(&self) -> bool {
        false
    }

    /// Called during the drain sequence, before `manager.stop()` (spec
    /// §4.7).
    async fn close(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
