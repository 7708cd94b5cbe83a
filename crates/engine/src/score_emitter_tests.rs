// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sw_adapters::{FakeProducer, JsonCodec};
use sw_core::Request;

#[tokio::test]
async fn send_encodes_and_forwards_exactly_once() {
    let producer = FakeProducer::new();
    let emitter = ScoreEmitter::new(producer.clone(), JsonCodec);

    let req = Request::new("aa", "http://example.com/a");
    emitter.send(req, 0.5, false).await.unwrap();

    let sent = producer.sent();
    assert_eq!(sent.len(), 1);
    let value: serde_json::Value = serde_json::from_slice(&sent[0].payload).unwrap();
    assert_eq!(value["score"], 0.5);
    assert_eq!(value["schedule"], false);
}

#[tokio::test]
async fn flush_delegates_to_producer() {
    let producer = FakeProducer::new();
    let emitter = ScoreEmitter::new(producer.clone(), JsonCodec);
    emitter.flush().await.unwrap();
    assert_eq!(producer.flush_count(), 1);
}
