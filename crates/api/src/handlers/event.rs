//! Handlers for the `/events` resource.
//!
//! Each handler validates its input, calls the repository layer, and runs
//! the rows through [`charity_db::normalize`] before responding.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use charity_core::error::CoreError;
use charity_core::types::DbId;
use charity_db::models::event::EventInput;
use charity_db::models::registration::RegistrationInput;
use charity_db::normalize;
use charity_db::repositories::{CategoryRepo, DeleteOutcome, EventRepo, RegistrationRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::SearchParams;
use crate::response::{EventCreatedResponse, MessageResponse, RegistrationCreatedResponse};
use crate::state::AppState;

fn event_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Event", id })
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /events/upcoming
///
/// Active events whose date has not passed yet, earliest first.
pub async fn list_upcoming(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let now = chrono::Utc::now().naive_utc();
    let rows = EventRepo::list_upcoming(&state.pool, now).await?;
    Ok(Json(normalize::event_list(rows)?))
}

/// GET /events/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// GET /events/search?date=&location=&categoryId=
pub async fn search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.to_filter()?;
    let rows = EventRepo::search(&state.pool, &filter).await?;
    Ok(Json(normalize::event_list(rows)?))
}

/// GET /events/{event_id}
///
/// Event detail with category, organization and registrations. Inactive
/// events are reported as not found.
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(event_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = EventRepo::find_active_detail(&state.pool, event_id)
        .await?
        .ok_or_else(|| event_not_found(event_id))?;
    let registrations = RegistrationRepo::list_for_event(&state.pool, event_id).await?;
    Ok(Json(normalize::event_detail(row, registrations)?))
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /events
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<EventInput>,
) -> AppResult<impl IntoResponse> {
    let event = input.validate()?;
    let event_id = EventRepo::create(&state.pool, &event).await?;
    tracing::info!(event_id, name = %event.event_name, "Event created");

    Ok((
        StatusCode::CREATED,
        Json(EventCreatedResponse {
            message: "Event created successfully".to_string(),
            event_id,
        }),
    ))
}

/// PUT /events/{event_id}
///
/// Replaces every mutable field; omitted optional fields fall back to the
/// same defaults as on create.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(event_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<EventInput>,
) -> AppResult<impl IntoResponse> {
    let event = input.validate()?;
    if !EventRepo::update(&state.pool, event_id, &event).await? {
        return Err(event_not_found(event_id));
    }
    tracing::info!(event_id, is_active = event.is_active, "Event updated");

    Ok(Json(MessageResponse::new("Event updated successfully")))
}

/// DELETE /events/{event_id}
///
/// Refused while the event has registrations.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(event_id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    match EventRepo::delete_unless_registered(&state.pool, event_id).await? {
        DeleteOutcome::Deleted => {
            tracing::info!(event_id, "Event deleted");
            Ok(Json(MessageResponse::new("Event deleted successfully")))
        }
        DeleteOutcome::NotFound => Err(event_not_found(event_id)),
        DeleteOutcome::HasRegistrations(count) => {
            tracing::info!(event_id, registrations = count, "Refused to delete registered event");
            Err(AppError::Core(CoreError::Conflict(format!(
                "Cannot delete event {event_id}: it has {count} registration(s)"
            ))))
        }
    }
}

/// POST /events/{event_id}/register
pub async fn register(
    State(state): State<AppState>,
    ApiPath(event_id): ApiPath<DbId>,
    ApiJson(input): ApiJson<RegistrationInput>,
) -> AppResult<impl IntoResponse> {
    let registration = input.validate()?;
    let created = RegistrationRepo::create_for_active_event(&state.pool, event_id, &registration)
        .await?
        .ok_or_else(|| event_not_found(event_id))?;
    tracing::info!(
        event_id,
        registration_id = created.registration_id,
        tickets = created.ticket_quantity,
        "Registration created"
    );

    Ok((
        StatusCode::CREATED,
        Json(RegistrationCreatedResponse {
            message: "Registration successful".to_string(),
            registration_id: created.registration_id,
        }),
    ))
}
