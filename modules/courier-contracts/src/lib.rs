//! Message contracts for the courier mediator.
//!
//! Pure data-shape declarations, no dispatch logic. A message's identity is
//! its Rust type: requests declare the response they expect through an
//! associated type, notifications declare nothing and fan out to any number
//! of subscribers.
//!
//! Consumers define their own message types and implement `Request` or
//! `Notification` on them; the engine crate never inspects their fields.

pub mod message;
pub mod unit;

pub use message::{Notification, Request, VoidRequest};
pub use unit::Unit;
