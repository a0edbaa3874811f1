//! Stock pipeline behaviors.
//!
//! Optional cross-cutting wrappers registered like any other behavior.
//! Typical ordering: `LoggingBehavior` first (outermost), `TimingBehavior`
//! last so it measures only the handler.

use std::fmt;
use std::time::Instant;

use anyhow::Result;
use async_trait::async_trait;
use courier_contracts::Request;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::chain::Next;
use crate::traits::PipelineBehavior;

/// Logs a request entering the pipeline and its outcome.
pub struct LoggingBehavior;

#[async_trait]
impl<R> PipelineBehavior<R> for LoggingBehavior
where
    R: Request + fmt::Debug,
{
    async fn handle(
        &self,
        request: R,
        next: Next<'_, R>,
        cancel: &CancellationToken,
    ) -> Result<R::Response> {
        let request_type = std::any::type_name::<R>();
        debug!(request = request_type, payload = ?request, "request entering pipeline");

        let result = next.run(request, cancel).await;

        match &result {
            Ok(_) => debug!(request = request_type, "request handled"),
            Err(e) => warn!(request = request_type, error = %e, "request failed"),
        }
        result
    }
}

/// Measures wall-clock time spent below it in the chain.
pub struct TimingBehavior;

#[async_trait]
impl<R: Request> PipelineBehavior<R> for TimingBehavior {
    async fn handle(
        &self,
        request: R,
        next: Next<'_, R>,
        cancel: &CancellationToken,
    ) -> Result<R::Response> {
        let start = Instant::now();
        let result = next.run(request, cancel).await;
        debug!(
            request = std::any::type_name::<R>(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "request timing"
        );
        result
    }
}
