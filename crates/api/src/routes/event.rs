//! Route definitions for charity events.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// Static segments take priority over `{event_id}`, so `/upcoming`,
/// `/categories` and `/search` never reach the detail handler.
///
/// ```text
/// POST   /                        -> create
/// GET    /upcoming                -> list_upcoming
/// GET    /categories              -> list_categories
/// GET    /search                  -> search
/// GET    /{event_id}              -> get_by_id
/// PUT    /{event_id}              -> update
/// DELETE /{event_id}              -> delete
/// POST   /{event_id}/register     -> register
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(event::create))
        .route("/upcoming", get(event::list_upcoming))
        .route("/categories", get(event::list_categories))
        .route("/search", get(event::search))
        .route(
            "/{event_id}",
            get(event::get_by_id)
                .put(event::update)
                .delete(event::delete),
        )
        .route("/{event_id}/register", post(event::register))
}
