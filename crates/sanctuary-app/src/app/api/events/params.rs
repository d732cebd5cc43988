use salvo::Request;
use sanctuary_core::clock::Clock;
use sanctuary_core::config::Settings;
use sanctuary_events::QueryWindow;
use sanctuary_events::window::parse_boundary;

use crate::error::{AppError, AppResult};

/// ## Summary
/// Reads the `{id}` path parameter as an event id.
///
/// ## Errors
/// Returns `InvalidRequest` if the parameter is missing or not a UUID.
pub fn event_id(req: &Request) -> AppResult<uuid::Uuid> {
    let raw = req
        .param::<String>("id")
        .ok_or_else(|| AppError::InvalidRequest("missing event id".to_string()))?;
    uuid::Uuid::parse_str(&raw)
        .map_err(|err| AppError::InvalidRequest(format!("invalid event id {raw:?}: {err}")))
}

/// ## Summary
/// Builds the query window from the optional `start` and `end` query
/// parameters, defaulting to now through `events.lookahead` months later.
///
/// ## Errors
/// Returns an error if a parameter cannot be parsed, start is after end, or
/// the window is longer than `events.horizon` months.
pub fn window(req: &Request, settings: &Settings, clock: &dyn Clock) -> AppResult<QueryWindow> {
    let start = req
        .query::<String>("start")
        .as_deref()
        .map(parse_boundary)
        .transpose()?;
    let end = req
        .query::<String>("end")
        .as_deref()
        .map(parse_boundary)
        .transpose()?;

    Ok(QueryWindow::resolve(
        start,
        end,
        clock.now(),
        settings.events.lookahead,
        settings.events.horizon,
    )?)
}
