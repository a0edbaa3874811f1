//! Ergonomics and usage pattern tests — the builder surface and shared
//! instances, no behavior semantics.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use courier_contracts::{Notification, Request};
use courier_engine::{Mediator, NotificationHandler, Registry, RequestHandler, SendError};
use tokio_util::sync::CancellationToken;

// ---------------------------------------------------------------------------
// Test messages
// ---------------------------------------------------------------------------

struct Echo {
    msg: String,
}

impl Request for Echo {
    type Response = String;
}

#[derive(Debug)]
struct Pinged;

impl Notification for Pinged {}

struct CountingEchoHandler {
    hits: AtomicUsize,
}

#[async_trait]
impl RequestHandler<Echo> for CountingEchoHandler {
    async fn handle(&self, request: Echo, _cancel: &CancellationToken) -> Result<String> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        Ok(format!("Handled: {}", request.msg))
    }
}

struct CountingSub {
    seen: AtomicUsize,
}

#[async_trait]
impl NotificationHandler<Pinged> for CountingSub {
    async fn handle(&self, _notification: &Pinged, _cancel: &CancellationToken) -> Result<()> {
        self.seen.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn registration_order_across_kinds_doesnt_matter() {
    let handler = Arc::new(CountingEchoHandler {
        hits: AtomicUsize::new(0),
    });
    let sub = Arc::new(CountingSub {
        seen: AtomicUsize::new(0),
    });

    // Subscriber first, handler second — builds and dispatches the same.
    let mediator = Mediator::new(
        Registry::builder()
            .subscriber(sub.clone())
            .handler(handler.clone())
            .build(),
    );

    let cancel = CancellationToken::new();
    mediator
        .send(Echo { msg: "hi".into() }, &cancel)
        .await
        .unwrap();
    mediator.publish(&Pinged, &cancel).await;

    assert_eq!(handler.hits.load(Ordering::SeqCst), 1);
    assert_eq!(sub.seen.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn shared_handler_accumulates_across_sends() {
    // The Arc blanket impl lets a caller keep a handle to the handler's
    // state while the registry owns a clone.
    let handler = Arc::new(CountingEchoHandler {
        hits: AtomicUsize::new(0),
    });
    let mediator = Mediator::new(Registry::builder().handler(handler.clone()).build());

    let cancel = CancellationToken::new();
    for _ in 0..3 {
        mediator
            .send(Echo { msg: "hi".into() }, &cancel)
            .await
            .unwrap();
    }

    assert_eq!(handler.hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn registering_only_behaviors_does_not_bind_a_handler() {
    use courier_engine::behaviors::TimingBehavior;

    // Shared via Arc to exercise the behavior blanket impl.
    let mediator = Mediator::new(
        Registry::builder()
            .behavior::<Echo, _>(Arc::new(TimingBehavior))
            .build(),
    );

    let err = mediator
        .send(Echo { msg: "hi".into() }, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, SendError::HandlerNotFound { .. }));
}

#[tokio::test]
async fn mediator_instances_are_isolated() {
    let a = Mediator::new(
        Registry::builder()
            .handler(Arc::new(CountingEchoHandler {
                hits: AtomicUsize::new(0),
            }))
            .build(),
    );
    let b = Mediator::new(Registry::builder().build());

    let cancel = CancellationToken::new();
    a.send(Echo { msg: "hi".into() }, &cancel).await.unwrap();

    let err = b
        .send(Echo { msg: "hi".into() }, &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, SendError::HandlerNotFound { .. }));
}
