//! Event management and occurrence lookups.

use sanctuary_core::clock::Clock;
use sanctuary_events::validate::validate_draft;
use sanctuary_events::{Event, EventDraft, Expander, Occurrence, QueryWindow};

use crate::error::{ServiceError, ServiceResult};
use crate::store::EventStore;

fn not_found(id: uuid::Uuid) -> ServiceError {
    ServiceError::NotFound(format!("event {id}"))
}

/// ## Summary
/// Validates a draft and stores it as a new event.
///
/// ## Side Effects
/// - Inserts the event into the store
///
/// ## Errors
/// Returns a validation error for a malformed draft, or the store's error.
#[tracing::instrument(skip(store, clock, draft), fields(title = %draft.title))]
pub async fn create_event(
    store: &dyn EventStore,
    clock: &dyn Clock,
    draft: EventDraft,
) -> ServiceResult<Event> {
    validate_draft(&draft)?;

    let event = Event::from_draft(uuid::Uuid::now_v7(), draft, clock.now());
    store.insert(event.clone()).await?;

    tracing::info!(event_id = %event.id, recurring = event.is_recurring, "Event created");
    Ok(event)
}

/// ## Summary
/// Overwrites an existing event with a validated draft.
///
/// ## Side Effects
/// - Replaces the stored event; `created_at` is kept, `updated_at` refreshed
///
/// ## Errors
/// Returns `NotFound` if the event does not exist, or a validation error.
#[tracing::instrument(skip(store, clock, draft))]
pub async fn update_event(
    store: &dyn EventStore,
    clock: &dyn Clock,
    id: uuid::Uuid,
    draft: EventDraft,
) -> ServiceResult<Event> {
    validate_draft(&draft)?;

    let mut event = store.get(id).await?.ok_or_else(|| not_found(id))?;
    event.apply_draft(draft, clock.now());
    store.replace(event.clone()).await?;

    tracing::info!(event_id = %id, "Event updated");
    Ok(event)
}

/// ## Summary
/// Deletes an event and returns what was stored.
///
/// ## Errors
/// Returns `NotFound` if the event does not exist.
#[tracing::instrument(skip(store))]
pub async fn delete_event(store: &dyn EventStore, id: uuid::Uuid) -> ServiceResult<Event> {
    let event = store.remove(id).await?.ok_or_else(|| not_found(id))?;
    tracing::info!(event_id = %id, "Event deleted");
    Ok(event)
}

/// ## Errors
/// Returns `NotFound` if the event does not exist.
#[tracing::instrument(skip(store))]
pub async fn get_event(store: &dyn EventStore, id: uuid::Uuid) -> ServiceResult<Event> {
    store.get(id).await?.ok_or_else(|| not_found(id))
}

/// ## Errors
/// Returns the store's error.
#[tracing::instrument(skip(store))]
pub async fn list_events(store: &dyn EventStore) -> ServiceResult<Vec<Event>> {
    store.list().await
}

/// ## Summary
/// Expands a single event over `window`.
///
/// ## Errors
/// Returns `NotFound` if the event does not exist.
#[tracing::instrument(skip(store, expander), fields(start = %window.start, end = %window.end))]
pub async fn event_occurrences(
    store: &dyn EventStore,
    expander: &Expander,
    id: uuid::Uuid,
    window: QueryWindow,
) -> ServiceResult<Vec<Occurrence>> {
    let event = store.get(id).await?.ok_or_else(|| not_found(id))?;
    Ok(expander.expand(&event, window.start, window.end))
}

/// ## Summary
/// Every occurrence inside `window`, across all stored events, ordered by start.
///
/// Recurring events are expanded; a non-recurring event is included when its
/// span overlaps the window. Both treat the window end as inclusive.
///
/// ## Errors
/// Returns the store's error.
#[tracing::instrument(skip(store, expander), fields(start = %window.start, end = %window.end))]
pub async fn occurrences_in_window(
    store: &dyn EventStore,
    expander: &Expander,
    window: QueryWindow,
) -> ServiceResult<Vec<Occurrence>> {
    let events = store.list().await?;

    let mut occurrences: Vec<Occurrence> = events
        .iter()
        .flat_map(|event| {
            if event.rule().is_some() {
                expander.expand(event, window.start, window.end)
            } else if event.overlaps(window.start, window.end) {
                vec![Occurrence::of_event(event)]
            } else {
                Vec::new()
            }
        })
        .collect();
    occurrences.sort_by_key(|occurrence| occurrence.start_date);

    tracing::debug!(
        events = events.len(),
        occurrences = occurrences.len(),
        "Resolved occurrences in window"
    );
    Ok(occurrences)
}
