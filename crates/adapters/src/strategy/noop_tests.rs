// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sw_core::{Request, Response};

#[tokio::test]
async fn every_handler_succeeds_and_never_finishes() {
    let strategy = NoopStrategy;
    let req = Request::new(b"fp".to_vec(), "https://example.com");

    strategy.add_seeds(&[req.clone()]).await.unwrap();
    strategy
        .page_crawled(&Response { request: req.clone(), status_code: 200, body: Vec::new() })
        .await
        .unwrap();
    strategy.links_extracted(&req, &[]).await.unwrap();
    strategy.page_error(&req, "boom").await.unwrap();

    assert!(!strategy.finished());
    strategy.close().await.unwrap();
}
