// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Duration;

#[tokio::test]
async fn producer_send_and_flush_succeed() {
    let producer = StdioProducer::new();
    assert!(producer.send(b"hello".to_vec()).await.is_ok());
    assert!(producer.flush().await.is_ok());
    assert!(producer.close().await.is_ok());
}

#[tokio::test]
async fn consumer_returns_promptly_on_timeout() {
    let consumer = StdioConsumer::new(0);
    let got = consumer
        .get_messages(4, Duration::from_millis(10))
        .await
        .unwrap();
    assert!(got.len() <= 4);
}

#[tokio::test]
async fn consumer_close_is_a_no_op() {
    let consumer = StdioConsumer::new(0);
    assert!(consumer.close().await.is_ok());
}
