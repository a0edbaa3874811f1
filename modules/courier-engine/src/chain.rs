//! The behavior chain.
//!
//! Behaviors wrap dispatch in registration order: the first-registered
//! behavior is outermost and observes the call before and after everything
//! else, the last-registered one wraps only the handler.

use std::sync::Arc;

use anyhow::Result;
use courier_contracts::Request;
use tokio_util::sync::CancellationToken;

use crate::traits::{PipelineBehavior, RequestHandler};

/// The continuation handed to a behavior: the rest of the chain plus the
/// terminal handler invocation.
///
/// [`run`](Next::run) consumes `self`, so a behavior can invoke its
/// continuation at most once. Dropping it without running short-circuits the
/// chain and the handler never executes.
pub struct Next<'a, R: Request> {
    behaviors: &'a [Arc<dyn PipelineBehavior<R>>],
    terminal: &'a dyn RequestHandler<R>,
}

impl<'a, R: Request> Next<'a, R> {
    pub(crate) fn new(
        behaviors: &'a [Arc<dyn PipelineBehavior<R>>],
        terminal: &'a dyn RequestHandler<R>,
    ) -> Self {
        Self {
            behaviors,
            terminal,
        }
    }

    /// Run the remainder of the chain: the next behavior if one is left,
    /// otherwise the terminal handler.
    pub async fn run(self, request: R, cancel: &CancellationToken) -> Result<R::Response> {
        match self.behaviors.split_first() {
            Some((outermost, rest)) => {
                let next = Next {
                    behaviors: rest,
                    terminal: self.terminal,
                };
                outermost.handle(request, next, cancel).await
            }
            None => self.terminal.handle(request, cancel).await,
        }
    }
}
