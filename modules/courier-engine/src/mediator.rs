//! The dispatch engine.

use std::any::type_name;
use std::sync::Arc;

use courier_contracts::{Notification, Request};
use futures::future::join_all;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::chain::Next;
use crate::error::{SendError, SendResult};
use crate::registry::{HandlerSource, Registry};

/// In-process mediator: resolves handlers by message type and dispatches.
///
/// Owns its handler source; independent instances share nothing, so tests
/// can build isolated registries. The source is read-only during dispatch.
pub struct Mediator<S: HandlerSource = Registry> {
    source: S,
}

impl<S: HandlerSource> Mediator<S> {
    /// Create a mediator over a handler source, taking ownership of it.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Dispatch a request to its single bound handler, through any registered
    /// behavior chain, and return the handler's response.
    ///
    /// Fails with [`SendError::HandlerNotFound`] when nothing is bound,
    /// [`SendError::AmbiguousHandler`] when more than one handler is bound,
    /// and [`SendError::Handler`] carrying the original error when the
    /// handler or a behavior fails. An already-cancelled token aborts before
    /// any lookup. The engine never retries; retry, if wanted, is a behavior's
    /// job.
    pub async fn send<R: Request>(
        &self,
        request: R,
        cancel: &CancellationToken,
    ) -> SendResult<R::Response> {
        let request_type = type_name::<R>();

        if cancel.is_cancelled() {
            return Err(SendError::Cancelled { request_type });
        }

        let handlers = self.source.request_handlers::<R>()?;
        let handler = match handlers.as_slice() {
            [] => return Err(SendError::HandlerNotFound { request_type }),
            [only] => Arc::clone(only),
            many => {
                return Err(SendError::AmbiguousHandler {
                    request_type,
                    count: many.len(),
                })
            }
        };

        let behaviors = self.source.pipeline::<R>()?;
        debug!(
            request = request_type,
            behaviors = behaviors.len(),
            "dispatching request"
        );

        Next::new(&behaviors, handler.as_ref())
            .run(request, cancel)
            .await
            .map_err(SendError::Handler)
    }

    /// Broadcast a notification to every subscriber, concurrently.
    ///
    /// All subscriber invocations are started, then joined. Zero subscribers
    /// is a no-op, not an error. Subscriber failures — including cancellation
    /// aborts inside a subscriber — are recorded as diagnostics and swallowed;
    /// one subscriber's bug must not break delivery to its siblings or the
    /// publisher's view of the call. No ordering among siblings, no
    /// atomicity, no rollback.
    pub async fn publish<N: Notification>(&self, notification: &N, cancel: &CancellationToken) {
        let notification_type = type_name::<N>();

        let subscribers = match self.source.subscribers::<N>() {
            Ok(subscribers) => subscribers,
            Err(e) => {
                warn!(
                    notification = notification_type,
                    error = %e,
                    "subscriber lookup failed; notification dropped"
                );
                return;
            }
        };

        if subscribers.is_empty() {
            debug!(
                notification = notification_type,
                "no subscribers registered"
            );
            return;
        }

        debug!(
            notification = notification_type,
            subscribers = subscribers.len(),
            "fanning out notification"
        );

        let deliveries = subscribers
            .iter()
            .map(|subscriber| subscriber.handle(notification, cancel));

        for outcome in join_all(deliveries).await {
            if let Err(e) = outcome {
                warn!(
                    notification = notification_type,
                    error = %e,
                    "subscriber failed during fan-out"
                );
            }
        }
    }
}
