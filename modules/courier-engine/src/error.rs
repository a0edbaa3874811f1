//! Typed errors for request dispatch.

use thiserror::Error;

/// A handler source returned a slot whose typed shape could not be recovered.
///
/// With the in-crate [`Registry`](crate::registry::Registry) this cannot
/// happen; a custom [`HandlerSource`](crate::registry::HandlerSource) that
/// stores type-erased entries under the wrong key surfaces here.
#[derive(Debug, Error)]
#[error("`{type_name}` is mis-wired in the handler source: {detail}")]
pub struct SourceError {
    /// The message type whose slot was malformed.
    pub type_name: &'static str,
    /// What the source expected to find.
    pub detail: String,
}

impl SourceError {
    pub fn new(type_name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            type_name,
            detail: detail.into(),
        }
    }
}

/// Errors a `send` caller can observe. Notification fan-out never produces
/// these — per-subscriber failures are swallowed as diagnostics.
#[derive(Debug, Error)]
pub enum SendError {
    /// Zero handlers bound for the request type.
    #[error("no handler registered for request `{request_type}`")]
    HandlerNotFound { request_type: &'static str },

    /// More than one handler bound where exactly one is required.
    #[error("{count} handlers registered for request `{request_type}`, exactly one expected")]
    AmbiguousHandler {
        request_type: &'static str,
        count: usize,
    },

    /// The cancellation signal was already set when dispatch was entered;
    /// no handler ran.
    #[error("dispatch of `{request_type}` cancelled before reaching a handler")]
    Cancelled { request_type: &'static str },

    /// Handler wiring is broken (see [`SourceError`]).
    #[error(transparent)]
    Misconfigured(#[from] SourceError),

    /// A handler or behavior failed. The original error is preserved
    /// unwrapped — recover it with `downcast_ref`.
    #[error(transparent)]
    Handler(anyhow::Error),
}

/// Result type alias for request dispatch.
pub type SendResult<T> = std::result::Result<T, SendError>;
