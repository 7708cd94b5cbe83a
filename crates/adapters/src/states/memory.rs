// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory `StatesBackend` with no call-recording, safe to run for a
//! long-lived process. This is the reference states backend `sw-worker`'s
//! binary wires for local runs (spec.md §1, §9 — a real deployment swaps
//! this for a persistent key-value store); [`super::InMemoryStatesBackend`]
//! is the call-recording sibling used only in tests.

use super::{StatesBackend, StatesError};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use sw_core::{Fingerprint, Request, State};

#[derive(Clone, Default)]
pub struct MemoryStatesBackend {
    cache: Arc<RwLock<HashMap<Fingerprint, State>>>,
}

impl MemoryStatesBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatesBackend for MemoryStatesBackend {
    async fn fetch(&self, fingerprints: &[Fingerprint]) -> Result<(), StatesError> {
        let mut cache = self.cache.write();
        for fp in fingerprints {
            cache.entry(fp.clone()).or_insert(State::NotCrawled);
        }
        Ok(())
    }

    async fn set_states(&self, requests: &[Request]) -> Result<(), StatesError> {
        let mut cache = self.cache.write();
        for request in requests {
            cache.entry(request.fingerprint.clone()).or_insert(State::NotCrawled);
        }
        Ok(())
    }

    /// No-op beyond what `set_states` already wrote: this backend has no
    /// separate dirty/clean distinction, matching
    /// [`super::InMemoryStatesBackend::update_cache`].
    async fn update_cache(&self, _requests: &[Request]) -> Result<(), StatesError> {
        Ok(())
    }

    async fn flush(&self) -> Result<(), StatesError> {
        Ok(())
    }

    async fn state(&self, fingerprint: &Fingerprint) -> Option<State> {
        self.cache.read().get(fingerprint).copied()
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
