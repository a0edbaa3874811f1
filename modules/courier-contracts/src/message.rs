//! Marker traits for dispatchable messages.

use crate::unit::Unit;

/// A message expecting exactly one response value from exactly one handler.
///
/// The engine treats the message as opaque: it is moved into dispatch, never
/// mutated, and dropped once the response flows back. The concrete type is
/// the routing key.
pub trait Request: Send + Sync + 'static {
    /// The value the single bound handler produces for this request.
    type Response: Send + 'static;
}

/// A request that expects no meaningful value back.
///
/// Modeled as a `Request` whose response is [`Unit`] so the void path shares
/// all request machinery — cardinality checks, behavior chains, error
/// normalization. Callers never need to name `Unit`; type inference fills it
/// in, and this marker documents the role.
pub trait VoidRequest: Request<Response = Unit> {}

impl<R: Request<Response = Unit>> VoidRequest for R {}

/// A message broadcast to zero or more independent subscribers.
///
/// No response, no cardinality rule: absence of subscribers is normal, and
/// sibling subscribers neither observe nor depend on each other.
pub trait Notification: Send + Sync + 'static {}
