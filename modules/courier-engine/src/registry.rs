//! Handler registry — the lookup seam and its in-crate implementation.
//!
//! The engine consumes bindings through [`HandlerSource`]; it never mutates
//! them. [`Registry`] is the provided implementation: a type-indexed map
//! populated once through [`RegistryBuilder`] and read-only afterwards, so
//! concurrent `send`/`publish` calls share it freely.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use courier_contracts::{Notification, Request};

use crate::error::SourceError;
use crate::traits::{NotificationHandler, PipelineBehavior, RequestHandler};

/// Read-only lookup of handler, behavior, and subscriber bindings.
///
/// `pipeline` must preserve registration order — it is the chain order.
/// Returning multiple request handlers is representable; the cardinality
/// rule (exactly one per request type) is enforced by the dispatcher, not
/// the source.
pub trait HandlerSource: Send + Sync {
    fn request_handlers<R: Request>(
        &self,
    ) -> Result<Vec<Arc<dyn RequestHandler<R>>>, SourceError>;

    fn pipeline<R: Request>(&self) -> Result<Vec<Arc<dyn PipelineBehavior<R>>>, SourceError>;

    fn subscribers<N: Notification>(
        &self,
    ) -> Result<Vec<Arc<dyn NotificationHandler<N>>>, SourceError>;
}

// ---------------------------------------------------------------------------
// Type-erased slots
// ---------------------------------------------------------------------------

// Each slot's `Box<dyn Any>` holds the typed vector for the message type it
// is keyed under: Vec<Arc<dyn RequestHandler<R>>> and friends.
type AnySlot = Box<dyn Any + Send + Sync>;

struct RequestSlot {
    request_type: &'static str,
    handlers: AnySlot,
    behaviors: AnySlot,
}

struct NotificationSlot {
    notification_type: &'static str,
    subscribers: AnySlot,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Explicit-registration handler registry, immutable after `build()`.
///
/// Keys are request/notification `TypeId`s. A request's response type is an
/// associated type of the request, so the (request type, response type) pair
/// collapses to a single key.
pub struct Registry {
    requests: HashMap<TypeId, RequestSlot>,
    notifications: HashMap<TypeId, NotificationSlot>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }
}

impl HandlerSource for Registry {
    fn request_handlers<R: Request>(
        &self,
    ) -> Result<Vec<Arc<dyn RequestHandler<R>>>, SourceError> {
        let Some(slot) = self.requests.get(&TypeId::of::<R>()) else {
            return Ok(Vec::new());
        };
        slot.handlers
            .downcast_ref::<Vec<Arc<dyn RequestHandler<R>>>>()
            .cloned()
            .ok_or_else(|| {
                SourceError::new(slot.request_type, "request handler slot has the wrong shape")
            })
    }

    fn pipeline<R: Request>(&self) -> Result<Vec<Arc<dyn PipelineBehavior<R>>>, SourceError> {
        let Some(slot) = self.requests.get(&TypeId::of::<R>()) else {
            return Ok(Vec::new());
        };
        slot.behaviors
            .downcast_ref::<Vec<Arc<dyn PipelineBehavior<R>>>>()
            .cloned()
            .ok_or_else(|| {
                SourceError::new(slot.request_type, "behavior slot has the wrong shape")
            })
    }

    fn subscribers<N: Notification>(
        &self,
    ) -> Result<Vec<Arc<dyn NotificationHandler<N>>>, SourceError> {
        let Some(slot) = self.notifications.get(&TypeId::of::<N>()) else {
            return Ok(Vec::new());
        };
        slot.subscribers
            .downcast_ref::<Vec<Arc<dyn NotificationHandler<N>>>>()
            .cloned()
            .ok_or_else(|| {
                SourceError::new(
                    slot.notification_type,
                    "subscriber slot has the wrong shape",
                )
            })
    }
}

// ---------------------------------------------------------------------------
// RegistryBuilder
// ---------------------------------------------------------------------------

/// Builds a [`Registry`] through explicit registration.
///
/// Behaviors chain in registration order: the first registered for a request
/// type runs outermost.
#[derive(Default)]
pub struct RegistryBuilder {
    requests: HashMap<TypeId, RequestSlot>,
    notifications: HashMap<TypeId, NotificationSlot>,
}

impl RegistryBuilder {
    /// Bind a request handler. Binding a second handler for the same request
    /// type is representable here and rejected at dispatch time.
    pub fn handler<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        self.request_slot::<R>()
            .handlers
            .downcast_mut::<Vec<Arc<dyn RequestHandler<R>>>>()
            .expect("slot created with this request type")
            .push(Arc::new(handler));
        self
    }

    /// Append a pipeline behavior for a request type.
    pub fn behavior<R, B>(mut self, behavior: B) -> Self
    where
        R: Request,
        B: PipelineBehavior<R> + 'static,
    {
        self.request_slot::<R>()
            .behaviors
            .downcast_mut::<Vec<Arc<dyn PipelineBehavior<R>>>>()
            .expect("slot created with this request type")
            .push(Arc::new(behavior));
        self
    }

    /// Subscribe a handler to a notification type.
    pub fn subscriber<N, H>(mut self, subscriber: H) -> Self
    where
        N: Notification,
        H: NotificationHandler<N> + 'static,
    {
        let slot = self
            .notifications
            .entry(TypeId::of::<N>())
            .or_insert_with(|| NotificationSlot {
                notification_type: type_name::<N>(),
                subscribers: Box::new(Vec::<Arc<dyn NotificationHandler<N>>>::new()),
            });
        slot.subscribers
            .downcast_mut::<Vec<Arc<dyn NotificationHandler<N>>>>()
            .expect("slot created with this notification type")
            .push(Arc::new(subscriber));
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            requests: self.requests,
            notifications: self.notifications,
        }
    }

    fn request_slot<R: Request>(&mut self) -> &mut RequestSlot {
        self.requests
            .entry(TypeId::of::<R>())
            .or_insert_with(|| RequestSlot {
                request_type: type_name::<R>(),
                handlers: Box::new(Vec::<Arc<dyn RequestHandler<R>>>::new()),
                behaviors: Box::new(Vec::<Arc<dyn PipelineBehavior<R>>>::new()),
            })
    }
}
