//! Core seams for the mediator engine.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use courier_contracts::{Notification, Request};
use tokio_util::sync::CancellationToken;

use crate::chain::Next;

/// Terminal executor of a request. Exactly one must be bound per request type.
///
/// The cancellation token is caller-owned; the engine threads it through
/// unchanged. Handlers doing long work should observe it themselves.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(&self, request: R, cancel: &CancellationToken) -> Result<R::Response>;
}

/// One subscriber to a notification. Zero or many may be bound per type.
///
/// Every subscriber receives the same notification instance by reference.
/// A subscriber's failure never reaches the publisher and never stops a
/// sibling; it only becomes a diagnostic.
#[async_trait]
pub trait NotificationHandler<N: Notification>: Send + Sync {
    async fn handle(&self, notification: &N, cancel: &CancellationToken) -> Result<()>;
}

/// Composable wrapper around request dispatch for cross-cutting concerns.
///
/// Implementations either run `next` exactly once and return its result
/// (possibly with pre/post side effects), short-circuit by failing without
/// running `next`, or run `next` and transform its failure. Running `next`
/// consumes it, so calling it twice does not compile.
#[async_trait]
pub trait PipelineBehavior<R: Request>: Send + Sync {
    async fn handle(
        &self,
        request: R,
        next: Next<'_, R>,
        cancel: &CancellationToken,
    ) -> Result<R::Response>;
}

// ---------------------------------------------------------------------------
// Arc blankets — let tests and callers register shared instances directly
// ---------------------------------------------------------------------------

#[async_trait]
impl<R: Request, H: RequestHandler<R> + ?Sized> RequestHandler<R> for Arc<H> {
    async fn handle(&self, request: R, cancel: &CancellationToken) -> Result<R::Response> {
        (**self).handle(request, cancel).await
    }
}

#[async_trait]
impl<N: Notification, H: NotificationHandler<N> + ?Sized> NotificationHandler<N> for Arc<H> {
    async fn handle(&self, notification: &N, cancel: &CancellationToken) -> Result<()> {
        (**self).handle(notification, cancel).await
    }
}

#[async_trait]
impl<R: Request, B: PipelineBehavior<R> + ?Sized> PipelineBehavior<R> for Arc<B> {
    async fn handle(
        &self,
        request: R,
        next: Next<'_, R>,
        cancel: &CancellationToken,
    ) -> Result<R::Response> {
        (**self).handle(request, next, cancel).await
    }
}
