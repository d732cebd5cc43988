use salvo::http::StatusCode;
use salvo::{Depot, Request, Response, handler};
use sanctuary_events::{Expander, Occurrence};
use sanctuary_service::event;

use super::params::{event_id, window};
use super::response::respond;
use crate::clock_handler::get_clock_from_depot;
use crate::config::get_config_from_depot;
use crate::error::AppResult;
use crate::store_handler::get_store_from_depot;

async fn in_window(req: &mut Request, depot: &mut Depot) -> AppResult<Vec<Occurrence>> {
    let settings = get_config_from_depot(depot)?;
    let clock = get_clock_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;
    let window = window(req, &settings, clock.as_ref())?;
    let expander = Expander::new(settings.events.timezone);

    Ok(event::occurrences_in_window(store.as_ref(), &expander, window).await?)
}

async fn for_event(req: &mut Request, depot: &mut Depot) -> AppResult<Vec<Occurrence>> {
    let id = event_id(req)?;
    let settings = get_config_from_depot(depot)?;
    let clock = get_clock_from_depot(depot)?;
    let store = get_store_from_depot(depot)?;
    let window = window(req, &settings, clock.as_ref())?;
    let expander = Expander::new(settings.events.timezone);

    Ok(event::event_occurrences(store.as_ref(), &expander, id, window).await?)
}

/// ## Summary
/// GET /api/events/occurrences?start&end - Every occurrence inside the window.
///
/// `start` and `end` take RFC 3339 timestamps or `YYYY-MM-DD` dates and
/// default to now through `events.lookahead` months later.
///
/// ## Errors
/// Returns HTTP 400 if a boundary cannot be parsed, start is after end, or
/// the window spans more than `events.horizon` months.
#[handler]
pub async fn occurrences_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    respond(res, StatusCode::OK, in_window(req, depot).await);
}

/// ## Summary
/// GET /api/events/{id}/occurrences?start&end - Expansion of a single event.
///
/// ## Errors
/// Returns HTTP 400 for a malformed id or window and HTTP 404 if the event does not exist.
#[handler]
pub async fn event_occurrences_handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    respond(res, StatusCode::OK, for_event(req, depot).await);
}
