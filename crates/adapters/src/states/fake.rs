// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory states backend for tests. Idempotent under repeated
//! `set_states`/`update_cache` for the same fingerprint, per the
//! double-state-I/O contract (spec §4.4, §9).

use super::{StatesBackend, StatesError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use sw_core::{Fingerprint, Request, State};

/// A recorded call, for assertions in tests exercising the batch pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatesCall {
    Fetch(Vec<Fingerprint>),
    SetStates(Vec<Fingerprint>),
    UpdateCache(Vec<Fingerprint>),
    Flush,
}

struct Inner {
    cache: HashMap<Fingerprint, State>,
    calls: Vec<StatesCall>,
    flush_count: usize,
}

#[derive(Clone)]
pub struct InMemoryStatesBackend {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryStatesBackend {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                cache: HashMap::new(),
                calls: Vec::new(),
                flush_count: 0,
            })),
        }
    }

    pub fn calls(&self) -> Vec<StatesCall> {
        self.inner.lock().calls.clone()
    }

    pub fn flush_count(&self) -> usize {
        self.inner.lock().flush_count
    }

    pub fn seed_state(&self, fp: Fingerprint, state: State) {
        self.inner.lock().cache.insert(fp, state);
    }
}

impl Default for InMemoryStatesBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatesBackend for InMemoryStatesBackend {
    async fn fetch(&self, fingerprints: &[Fingerprint]) -> Result<(), StatesError> {
        let mut inner = self.inner.lock();
        inner.calls.push(StatesCall::Fetch(fingerprints.to_vec()));
        for fp in fingerprints {
            inner.cache.entry(fp.clone()).or_insert(State::NotCrawled);
        }
        Ok(())
    }

    async fn set_states(&self, requests: &[Request]) -> Result<(), StatesError> {
        let fps: Vec<_> = requests.iter().map(|r| r.fingerprint.clone()).collect();
        let mut inner = self.inner.lock();
        inner.calls.push(StatesCall::SetStates(fps.clone()));
        for fp in fps {
            inner.cache.entry(fp).or_insert(State::NotCrawled);
        }
        Ok(())
    }

    async fn update_cache(&self, requests: &[Request]) -> Result<(), StatesError> {
        let fps: Vec<_> = requests.iter().map(|r| r.fingerprint.clone()).collect();
        self.inner.lock().calls.push(StatesCall::UpdateCache(fps));
        Ok(())
    }

    async fn flush(&self) -> Result<(), StatesError> {
        let mut inner = self.inner.lock();
        inner.calls.push(StatesCall::Flush);
        inner.flush_count += 1;
        Ok(())
    }

    async fn state(&self, fingerprint: &Fingerprint) -> Option<State> {
        self.inner.lock().cache.get(fingerprint).copied()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
