//! Event storage.
//!
//! Handlers reach the store through `Arc<dyn EventStore>`, so the trait
//! returns boxed futures instead of using `async fn`. Each future carries the
//! span opened by `#[tracing::instrument]` on the method that built it.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use sanctuary_events::Event;
use tokio::sync::RwLock;
use tracing::Instrument;

use crate::error::{ServiceError, ServiceResult};

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = ServiceResult<T>> + Send + 'a>>;

pub trait EventStore: Send + Sync {
    /// Adds a new event; fails with `Conflict` if the id is taken.
    fn insert<'a>(&'a self, event: Event) -> StoreFuture<'a, ()>;

    /// Overwrites an existing event; fails with `NotFound` if it is absent.
    fn replace<'a>(&'a self, event: Event) -> StoreFuture<'a, ()>;

    /// Removes and returns an event, if present.
    fn remove<'a>(&'a self, id: uuid::Uuid) -> StoreFuture<'a, Option<Event>>;

    fn get<'a>(&'a self, id: uuid::Uuid) -> StoreFuture<'a, Option<Event>>;

    /// All events, ordered by start.
    fn list<'a>(&'a self) -> StoreFuture<'a, Vec<Event>>;
}

/// In-process store backed by an ordered map.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventStore {
    events: Arc<RwLock<BTreeMap<uuid::Uuid, Event>>>,
}

impl MemoryEventStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Boxes a store future, keeping it inside the caller's current span.
fn traced<'a, T>(future: impl Future<Output = ServiceResult<T>> + Send + 'a) -> StoreFuture<'a, T> {
    Box::pin(future.instrument(tracing::Span::current()))
}

impl EventStore for MemoryEventStore {
    #[tracing::instrument(skip(self, event), fields(event_id = %event.id))]
    fn insert<'a>(&'a self, event: Event) -> StoreFuture<'a, ()> {
        traced(async move {
            let mut events = self.events.write().await;
            if events.contains_key(&event.id) {
                return Err(ServiceError::Conflict(format!(
                    "event {} already exists",
                    event.id
                )));
            }
            events.insert(event.id, event);
            Ok(())
        })
    }

    #[tracing::instrument(skip(self, event), fields(event_id = %event.id))]
    fn replace<'a>(&'a self, event: Event) -> StoreFuture<'a, ()> {
        traced(async move {
            let mut events = self.events.write().await;
            let Some(slot) = events.get_mut(&event.id) else {
                return Err(ServiceError::NotFound(format!("event {}", event.id)));
            };
            *slot = event;
            Ok(())
        })
    }

    #[tracing::instrument(skip(self))]
    fn remove<'a>(&'a self, id: uuid::Uuid) -> StoreFuture<'a, Option<Event>> {
        traced(async move { Ok(self.events.write().await.remove(&id)) })
    }

    #[tracing::instrument(skip(self))]
    fn get<'a>(&'a self, id: uuid::Uuid) -> StoreFuture<'a, Option<Event>> {
        traced(async move { Ok(self.events.read().await.get(&id).cloned()) })
    }

    #[tracing::instrument(skip(self))]
    fn list<'a>(&'a self) -> StoreFuture<'a, Vec<Event>> {
        traced(async move {
            let mut events: Vec<Event> = self.events.read().await.values().cloned().collect();
            events.sort_by_key(|event| (event.start_date, event.id));
            tracing::trace!(count = events.len(), "Listed events");
            Ok(events)
        })
    }
}
