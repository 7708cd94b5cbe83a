// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sw_core::Request;

#[tokio::test]
async fn records_add_seeds() {
    let strategy = FakeStrategy::new();
    let seeds = vec![Request::new("aa", "http://example.com/a")];
    strategy.add_seeds(&seeds).await.unwrap();
    assert_eq!(strategy.calls(), vec![StrategyCall::AddSeeds(seeds)]);
}

#[tokio::test]
async fn finished_defaults_to_false_and_is_settable() {
    let strategy = FakeStrategy::new();
    assert!(!strategy.finished());
    strategy.set_finished(true);
    assert!(strategy.finished());
}

#[tokio::test]
async fn close_is_recorded() {
    let strategy = FakeStrategy::new();
    strategy.close().await.unwrap();
    assert_eq!(strategy.calls(), vec![StrategyCall::Close]);
}
