//! In-process mediator engine.
//!
//! Decouples callers from request handlers and notification subscribers
//! through a registry keyed by message type: `send` resolves the single
//! handler bound to a request and runs it inside an ordered behavior chain,
//! `publish` fans a notification out to every subscriber concurrently.
//!
//! Consumers define messages in `courier-contracts`, implement the seams in
//! [`traits`], and wire everything up with [`Registry::builder`]. The engine
//! performs no I/O of its own and holds no state beyond a single call.

pub mod behaviors;
pub mod chain;
pub mod error;
pub mod mediator;
pub mod registry;
pub mod traits;

pub use chain::Next;
pub use error::{SendError, SendResult, SourceError};
pub use mediator::Mediator;
pub use registry::{HandlerSource, Registry, RegistryBuilder};
pub use traits::{NotificationHandler, PipelineBehavior, RequestHandler};
