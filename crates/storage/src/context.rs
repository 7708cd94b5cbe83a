// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The per-batch state-cache scratch area (spec §3, §4.1).

use std::collections::HashSet;
use sw_adapters::{StatesBackend, StatesError};
use sw_core::{Fingerprint, Request};

/// Anything that can hand over a finite sequence of fingerprint-bearing
/// requests to `to_fetch` — a single request or any slice of them (spec
/// §9: "prefer always passing a sequence at call sites").
pub trait ToFetch {
    fn fingerprints(&self) -> Vec<Fingerprint>;
}

impl ToFetch for Request {
    fn fingerprints(&self) -> Vec<Fingerprint> {
        vec![self.fingerprint.clone()]
    }
}

impl ToFetch for [Request] {
    fn fingerprints(&self) -> Vec<Fingerprint> {
        self.iter().map(|r| r.fingerprint.clone()).collect()
    }
}

impl ToFetch for Vec<Request> {
    fn fingerprints(&self) -> Vec<Fingerprint> {
        self.as_slice().fingerprints()
    }
}

/// Mediates the fetch → set → mutate → update-cache → flush protocol
/// against a [`StatesBackend`] for one worker instance's whole lifetime;
/// `pending_fetch` and `touched` are reset every batch (spec §3).
pub struct StatesContext<B: StatesBackend> {
    backend: B,
    pending_fetch: HashSet<Fingerprint>,
    touched: Vec<Request>,
}

impl<B: StatesBackend> StatesContext<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            pending_fetch: HashSet::new(),
            touched: Vec::new(),
        }
    }

    /// Enroll a request's (or requests') fingerprints for the next
    /// `fetch()` call.
    pub fn to_fetch(&mut self, item: &impl ToFetch) {
        self.pending_fetch.extend(item.fingerprints());
    }

    /// Bulk-load cache entries for everything enrolled since the last
    /// `fetch()`, then clear `pending_fetch`.
    pub async fn fetch(&mut self) -> Result<(), StatesError> {
        let fingerprints: Vec<_> = self.pending_fetch.drain().collect();
        self.backend.fetch(&fingerprints).await
    }

    /// Overwrite cached state for `requests` and remember them so
    /// `release()` writes them back.
    pub async fn set_states(&mut self, requests: &[Request]) -> Result<(), StatesError> {
        self.backend.set_states(requests).await?;
        self.touched.extend_from_slice(requests);
        Ok(())
    }

    /// Write `requests`' cached state back to durable storage immediately,
    /// independent of `touched`. Handlers call this directly (spec §4.4);
    /// the redundancy with `release()`'s batch-level write-back is
    /// intentional — see the design notes on double state I/O.
    pub async fn update_cache(&mut self, requests: &[Request]) -> Result<(), StatesError> {
        self.backend.update_cache(requests).await
    }

    /// Shorthand: `to_fetch` + `fetch` + `set_states`, appending to
    /// `touched`.
    pub async fn refresh_and_keep(&mut self, requests: &[Request]) -> Result<(), StatesError> {
        self.to_fetch(&requests.to_vec());
        self.fetch().await?;
        self.set_states(requests).await
    }

    /// Write back everything touched since the last `release()`, then
    /// clear `touched`.
    pub async fn release(&mut self) -> Result<(), StatesError> {
        let touched = std::mem::take(&mut self.touched);
        self.backend.update_cache(&touched).await
    }

    /// Persist the entire cache to durable storage. May interleave with
    /// ordinary batches at arbitrary points — the backend guarantees this
    /// is safe (spec §4.1, §5).
    pub async fn flush(&mut self) -> Result<(), StatesError> {
        self.backend.flush().await
    }

    pub fn pending_fetch_len(&self) -> usize {
        self.pending_fetch.len()
    }

    pub fn touched_len(&self) -> usize {
        self.touched.len()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
