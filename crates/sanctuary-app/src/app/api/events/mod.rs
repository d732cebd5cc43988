//! `/api/events`: event administration and occurrence lookups.

mod crud;
mod occurrences;
mod params;
mod response;

use salvo::Router;

use super::{EVENTS_ROUTE_COMPONENT, OCCURRENCES_ROUTE_COMPONENT};

#[must_use]
pub fn routes() -> Router {
    Router::with_path(EVENTS_ROUTE_COMPONENT)
        .get(crud::list_events_handler)
        .post(crud::create_event_handler)
        .push(Router::with_path(OCCURRENCES_ROUTE_COMPONENT).get(occurrences::occurrences_handler))
        .push(
            Router::with_path("{id}")
                .get(crud::get_event_handler)
                .put(crud::update_event_handler)
                .delete(crud::delete_event_handler)
                .push(
                    Router::with_path(OCCURRENCES_ROUTE_COMPONENT)
                        .get(occurrences::event_occurrences_handler),
                ),
        )
}
