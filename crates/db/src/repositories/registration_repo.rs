//! Repository for the `event_registrations` table.

use charity_core::types::DbId;
use sqlx::PgPool;

use crate::models::registration::{NewRegistration, Registration};

const COLUMNS: &str = "\
    registration_id, event_id, full_name, email, phone, \
    ticket_quantity, registration_date";

/// Provides insert and listing operations for registrations.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// Register against an event, provided it exists and is active.
    ///
    /// The event row is locked `FOR SHARE` for the duration of the insert, so
    /// a concurrent delete or deactivation cannot slip in between the check
    /// and the write. Returns `None` when the event is missing or inactive.
    pub async fn create_for_active_event(
        pool: &PgPool,
        event_id: DbId,
        input: &NewRegistration,
    ) -> Result<Option<Registration>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let is_active = sqlx::query_scalar::<_, bool>(
            "SELECT is_active FROM charity_events WHERE event_id = $1 FOR SHARE",
        )
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await?;

        if is_active != Some(true) {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO event_registrations (event_id, full_name, email, phone, ticket_quantity) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let registration = sqlx::query_as::<_, Registration>(&query)
            .bind(event_id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.ticket_quantity)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(registration))
    }

    /// All registrations for an event, newest first.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<Registration>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM event_registrations \
             WHERE event_id = $1 \
             ORDER BY registration_date DESC, registration_id DESC"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }
}
