// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoded spider-log events.

use crate::request::{Link, Request, Response};

/// A decoded spider-log message, classified by its leading tag (spec §3,
/// §6.3). `Offset` is bookkeeping the core ignores; any tag the codec
/// doesn't recognize decodes to `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    AddSeeds(Vec<Request>),
    PageCrawled(Response),
    LinksExtracted(Request, Vec<Link>),
    RequestError(Request, String),
    Offset { partition: i32, offset: i64 },
    Unknown(String),
}

impl Event {
    /// Name of the event's leading tag, for log lines and stats.
    pub fn tag(&self) -> &'static str {
        match self {
            Event::AddSeeds(_) => "add_seeds",
            Event::PageCrawled(_) => "page_crawled",
            Event::LinksExtracted(..) => "links_extracted",
            Event::RequestError(..) => "request_error",
            Event::Offset { .. } => "offset",
            Event::Unknown(_) => "unknown",
        }
    }
}

/// Per-fingerprint crawl-progress label, owned by the external states
/// backend and mirrored through [`crate::Meta`]-adjacent cache protocol
/// (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    NotCrawled,
    Queued,
    Crawled,
    Error,
}

impl Default for State {
    fn default() -> Self {
        State::NotCrawled
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
