// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Call-recording strategy for exercising the batch pipeline/strategy
//! adapter without a real crawl policy.

use super::CrawlingStrategy;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use sw_core::{Link, Request, Response};

/// One recorded dispatch into the fake strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyCall {
    AddSeeds(Vec<Request>),
    PageCrawled(Response),
    LinksExtracted(Request, Vec<Link>),
    PageError(Request, String),
    Close,
}

struct Inner {
    calls: Vec<StrategyCall>,
}

#[derive(Clone)]
pub struct FakeStrategy {
    inner: Arc<Mutex<Inner>>,
    finished: Arc<AtomicBool>,
}

impl FakeStrategy {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner { calls: Vec::new() })),
            finished: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn calls(&self) -> Vec<StrategyCall> {
        self.inner.lock().calls.clone()
    }

    /// Make a subsequent call to `finished()` return `true`.
    pub fn set_finished(&self, finished: bool) {
        self.finished.store(finished, Ordering::SeqCst);
    }
}

impl Default for FakeStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrawlingStrategy for FakeStrategy {
    async fn add_seeds(&self, seeds: &[Request]) -> anyhow::Result<()> {
        self.inner.lock().calls.push(StrategyCall::AddSeeds(seeds.to_vec()));
        Ok(())
    }

    async fn page_crawled(&self, response: &Response) -> anyhow::Result<()> {
        self.inner.lock().calls.push(StrategyCall::PageCrawled(response.clone()));
        Ok(())
    }

    async fn links_extracted(&self, request: &Request, links: &[Link]) -> anyhow::Result<()> {
        self.inner
            .lock()
            .calls
            .push(StrategyCall::LinksExtracted(request.clone(), links.to_vec()));
        Ok(())
    }

    async fn page_error(&self, request: &Request, error: &str) -> anyhow::Result<()> {
        self.inner
            .lock()
            .calls
            .push(StrategyCall::PageError(request.clone(), error.to_string()));
        Ok(())
    }

    fn finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    async fn close(&self) -> anyhow::Result<()> {
        self.inner.lock().calls.push(StrategyCall::Close);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
