// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sw-storage: `StatesContext`, the per-batch state-cache scratch area
//! mediating the fetch/set/update/release/flush protocol against an
//! external `StatesBackend`.

mod context;

pub use context::{StatesContext, ToFetch};
