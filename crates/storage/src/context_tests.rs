// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sw_adapters::InMemoryStatesBackend;
use sw_core::Request;

fn ctx() -> StatesContext<InMemoryStatesBackend> {
    StatesContext::new(InMemoryStatesBackend::new())
}

#[tokio::test]
async fn to_fetch_then_fetch_clears_pending() {
    let mut ctx = ctx();
    let req = Request::new("aa", "http://example.com/a");
    ctx.to_fetch(&req);
    assert_eq!(ctx.pending_fetch_len(), 1);
    ctx.fetch().await.unwrap();
    assert_eq!(ctx.pending_fetch_len(), 0);
}

#[tokio::test]
async fn to_fetch_accepts_a_slice() {
    let mut ctx = ctx();
    let reqs = vec![
        Request::new("aa", "http://example.com/a"),
        Request::new("bb", "http://example.com/b"),
    ];
    ctx.to_fetch(&reqs);
    assert_eq!(ctx.pending_fetch_len(), 2);
}

#[tokio::test]
async fn set_states_marks_touched_for_release() {
    let mut ctx = ctx();
    let req = Request::new("aa", "http://example.com/a");
    ctx.set_states(&[req.clone()]).await.unwrap();
    assert_eq!(ctx.touched_len(), 1);
    ctx.release().await.unwrap();
    assert_eq!(ctx.touched_len(), 0);
}

#[tokio::test]
async fn refresh_and_keep_fetches_sets_and_tracks() {
    let mut ctx = ctx();
    let req = Request::new("aa", "http://example.com/a");
    ctx.refresh_and_keep(&[req.clone()]).await.unwrap();
    assert_eq!(ctx.pending_fetch_len(), 0);
    assert_eq!(ctx.touched_len(), 1);
}

#[tokio::test]
async fn release_resets_touched_between_batches() {
    let mut ctx = ctx();
    let req = Request::new("aa", "http://example.com/a");
    ctx.set_states(&[req.clone()]).await.unwrap();
    ctx.release().await.unwrap();

    let calls = ctx.backend().calls();
    assert!(calls.iter().any(|c| matches!(c, sw_adapters::StatesCall::UpdateCache(_))));
    assert_eq!(ctx.touched_len(), 0);
    assert_eq!(ctx.pending_fetch_len(), 0);
}

#[tokio::test]
async fn update_cache_is_independent_of_touched() {
    let mut ctx = ctx();
    let req = Request::new("aa", "http://example.com/a");
    // Calling update_cache directly (as a per-event handler would) must
    // not affect what release() later writes back.
    ctx.update_cache(&[req.clone()]).await.unwrap();
    assert_eq!(ctx.touched_len(), 0);
}
