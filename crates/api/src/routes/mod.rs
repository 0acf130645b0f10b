pub mod event;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events                          create (POST)
/// /events/upcoming                 active events from now on (GET)
/// /events/categories               all categories (GET)
/// /events/search                   filtered active events (GET)
/// /events/{event_id}               detail, replace, delete (GET, PUT, DELETE)
/// /events/{event_id}/register      register attendee (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/events", event::router())
}
