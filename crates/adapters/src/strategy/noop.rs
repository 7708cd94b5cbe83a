// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::CrawlingStrategy;
use async_trait::async_trait;
use sw_core::{Link, Request, Response};

/// Logs each dispatch and never finishes. The reference strategy for
/// local runs when no real crawl policy is plugged in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStrategy;

#[async_trait]
impl CrawlingStrategy for NoopStrategy {
    async fn add_seeds(&self, seeds: &[Request]) -> anyhow::Result<()> {
        tracing::info!(count = seeds.len(), "add_seeds");
        Ok(())
    }

    async fn page_crawled(&self, response: &Response) -> anyhow::Result<()> {
        tracing::info!(url = %response.request.url, "page_crawled");
        Ok(())
    }

    async fn links_extracted(&self, request: &Request, links: &[Link]) -> anyhow::Result<()> {
        tracing::info!(url = %request.url, count = links.len(), "links_extracted");
        Ok(())
    }

    async fn page_error(&self, request: &Request, error: &str) -> anyhow::Result<()> {
        tracing::info!(url = %request.url, error, "page_error");
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
