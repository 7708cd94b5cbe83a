// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The external per-fingerprint state store. This module only defines the
//! trait boundary; `StatesContext` in `sw-storage` mediates the
//! fetch/set/update/release/flush protocol against it.

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{InMemoryStatesBackend, StatesCall};

mod memory;
pub use memory::MemoryStatesBackend;

use async_trait::async_trait;
use sw_core::{Fingerprint, Request, State};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatesError {
    #[error("states backend error: {0}")]
    Backend(String),
}

/// The external store backing per-fingerprint crawl state. Implementations
/// may perform I/O in every method (spec §4.1).
#[async_trait]
pub trait StatesBackend: Send + Sync + 'static {
    /// Load cache entries for the given fingerprints from durable storage
    /// into whatever in-memory representation the backend keeps.
    async fn fetch(&self, fingerprints: &[Fingerprint]) -> Result<(), StatesError>;

    /// Overwrite cached state for each request's fingerprint, deriving the
    /// state from the request's current in-memory representation (e.g. a
    /// freshly-discovered link starts `NOT_CRAWLED`).
    async fn set_states(&self, requests: &[Request]) -> Result<(), StatesError>;

    /// Write the given requests' cached state back to durable storage.
    async fn update_cache(&self, requests: &[Request]) -> Result<(), StatesError>;

    /// Persist the entire in-memory cache to durable storage. May be
    /// long-running; safe to call concurrently with `set_states`/
    /// `update_cache` only because the worker's single-threaded model
    /// ensures they never actually overlap (spec §5).
    async fn flush(&self) -> Result<(), StatesError>;

    /// Current cached state for a fingerprint, if loaded.
    async fn state(&self, fingerprint: &Fingerprint) -> Option<State>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
