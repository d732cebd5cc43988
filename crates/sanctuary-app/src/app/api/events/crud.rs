use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};
use sanctuary_events::{Event, EventDraft};
use sanctuary_service::event;

use super::params::event_id;
use super::response::respond;
use crate::clock_handler::get_clock_from_depot;
use crate::error::{AppError, AppResult};
use crate::store_handler::get_store_from_depot;

async fn parse_draft(req: &mut Request) -> AppResult<EventDraft> {
    req.parse_json::<EventDraft>()
        .await
        .map_err(|err| AppError::InvalidRequest(format!("invalid request body: {err}")))
}

async fn list(depot: &mut Depot) -> AppResult<Vec<Event>> {
    let store = get_store_from_depot(depot)?;
    Ok(event::list_events(store.as_ref()).await?)
}

async fn create(req: &mut Request, depot: &mut Depot) -> AppResult<Event> {
    let draft = parse_draft(req).await?;
    let store = get_store_from_depot(depot)?;
    let clock = get_clock_from_depot(depot)?;
    Ok(event::create_event(store.as_ref(), clock.as_ref(), draft).await?)
}

async fn fetch(req: &mut Request, depot: &mut Depot) -> AppResult<Event> {
    let id = event_id(req)?;
    let store = get_store_from_depot(depot)?;
    Ok(event::get_event(store.as_ref(), id).await?)
}

async fn update(req: &mut Request, depot: &mut Depot) -> AppResult<Event> {
    let id = event_id(req)?;
    let draft = parse_draft(req).await?;
    let store = get_store_from_depot(depot)?;
    let clock = get_clock_from_depot(depot)?;
    Ok(event::update_event(store.as_ref(), clock.as_ref(), id, draft).await?)
}

async fn delete(req: &mut Request, depot: &mut Depot) -> AppResult<Event> {
    let id = event_id(req)?;
    let store = get_store_from_depot(depot)?;
    Ok(event::delete_event(store.as_ref(), id).await?)
}

/// ## Summary
/// GET /api/events - Lists all events ordered by start.
#[handler]
pub async fn list_events_handler(depot: &mut Depot, res: &mut Response) {
    respond(res, StatusCode::OK, list(depot).await);
}

/// ## Summary
/// POST /api/events - Creates an event from a JSON draft.
///
/// ## Errors
/// Returns HTTP 400 if the body is not a valid draft.
#[handler]
pub async fn create_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    respond(res, StatusCode::CREATED, create(req, depot).await);
}

/// ## Summary
/// GET /api/events/{id} - Fetches one event.
///
/// ## Errors
/// Returns HTTP 400 for a malformed id and HTTP 404 if the event does not exist.
#[handler]
pub async fn get_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    respond(res, StatusCode::OK, fetch(req, depot).await);
}

/// ## Summary
/// PUT /api/events/{id} - Overwrites an event from a JSON draft.
///
/// ## Errors
/// Returns HTTP 400 for a malformed id or body and HTTP 404 if the event does not exist.
#[handler]
pub async fn update_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    respond(res, StatusCode::OK, update(req, depot).await);
}

/// ## Summary
/// DELETE /api/events/{id} - Deletes an event and returns it.
///
/// ## Errors
/// Returns HTTP 400 for a malformed id and HTTP 404 if the event does not exist.
#[handler]
pub async fn delete_event_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    respond(res, StatusCode::OK, delete(req, depot).await);
}
