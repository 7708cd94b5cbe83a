// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sw_adapters::{FakeConsumer, FakeProducer, FakeStrategy, InMemoryStatesBackend, StrategyCall};
use sw_storage::StatesContext;

#[tokio::test]
async fn begin_drain_transitions_running_to_draining() {
    let mut lifecycle = Lifecycle::new();
    lifecycle.mark_running();
    assert_eq!(lifecycle.state(), LifecycleState::Running);
    assert!(lifecycle.begin_drain(DrainTrigger::StrategyFinished));
    assert_eq!(lifecycle.state(), LifecycleState::Draining);
}

#[tokio::test]
async fn begin_drain_is_idempotent() {
    let mut lifecycle = Lifecycle::new();
    lifecycle.mark_running();
    assert!(lifecycle.begin_drain(DrainTrigger::ShutdownSignal));
    assert!(!lifecycle.begin_drain(DrainTrigger::ShutdownSignal));
    assert_eq!(lifecycle.state(), LifecycleState::Draining);
}

#[tokio::test]
async fn begin_drain_before_running_does_nothing() {
    let mut lifecycle = Lifecycle::new();
    assert!(!lifecycle.begin_drain(DrainTrigger::FatalError));
    assert_eq!(lifecycle.state(), LifecycleState::Init);
}

#[tokio::test]
async fn drain_runs_every_step_and_reaches_stopped() {
    let mut lifecycle = Lifecycle::new();
    lifecycle.mark_running();
    lifecycle.begin_drain(DrainTrigger::ShutdownSignal);

    let strategy = FakeStrategy::new();
    let backend = InMemoryStatesBackend::new();
    let mut states = StatesContext::new(backend);
    let producer = FakeProducer::new();
    let consumer = FakeConsumer::new();

    lifecycle.drain(&strategy, &mut states, &producer, &consumer).await;

    assert_eq!(lifecycle.state(), LifecycleState::Stopped);
    assert!(strategy.calls().iter().any(|c| matches!(c, StrategyCall::Close)));
    assert!(producer.is_closed());
    assert!(consumer.is_closed());
}

#[tokio::test]
async fn drain_twice_is_safe_and_stable() {
    let mut lifecycle = Lifecycle::new();
    lifecycle.mark_running();
    lifecycle.begin_drain(DrainTrigger::ShutdownSignal);

    let strategy = FakeStrategy::new();
    let backend = InMemoryStatesBackend::new();
    let mut states = StatesContext::new(backend);
    let producer = FakeProducer::new();
    let consumer = FakeConsumer::new();

    lifecycle.drain(&strategy, &mut states, &producer, &consumer).await;
    lifecycle.drain(&strategy, &mut states, &producer, &consumer).await;

    assert_eq!(lifecycle.state(), LifecycleState::Stopped);
}
