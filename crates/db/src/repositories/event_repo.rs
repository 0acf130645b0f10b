//! Repository for the `charity_events` table.

use charity_core::types::{DbId, EventTimestamp};
use sqlx::PgPool;

use crate::models::event::{EventDetailRow, EventListRow, NewEvent};
use crate::query::{self, bind_values, EventFilter, EVENT_COLUMNS, EVENT_JOINS};

/// Outcome of [`EventRepo::delete_unless_registered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    /// The event still has this many registrations and was left in place.
    HasRegistrations(i64),
}

/// Provides query and write operations for charity events.
pub struct EventRepo;

impl EventRepo {
    /// Active events dated at or after `now`, earliest first.
    pub async fn list_upcoming(
        pool: &PgPool,
        now: EventTimestamp,
    ) -> Result<Vec<EventListRow>, sqlx::Error> {
        let built = query::upcoming_events(now);
        bind_values(sqlx::query_as::<_, EventListRow>(&built.sql), &built.binds)
            .fetch_all(pool)
            .await
    }

    /// Active events matching every supplied filter, earliest first.
    pub async fn search(
        pool: &PgPool,
        filter: &EventFilter,
    ) -> Result<Vec<EventListRow>, sqlx::Error> {
        let built = query::search_events(filter);
        tracing::debug!(binds = built.binds.len(), "Searching events");
        bind_values(sqlx::query_as::<_, EventListRow>(&built.sql), &built.binds)
            .fetch_all(pool)
            .await
    }

    /// Find an active event with its category and organization details.
    ///
    /// Inactive events are reported as absent.
    pub async fn find_active_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EventDetailRow>, sqlx::Error> {
        let query = format!(
            "SELECT {EVENT_COLUMNS}, \
                c.category_name, c.category_description, \
                o.organization_name, o.mission_statement, o.contact_email \
             {EVENT_JOINS} \
             WHERE e.event_id = $1 AND e.is_active = true"
        );
        sqlx::query_as::<_, EventDetailRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new event, returning its id.
    pub async fn create(pool: &PgPool, input: &NewEvent) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO charity_events \
                (event_name, description, event_date, event_location, ticket_price, \
                 category_id, organization_id, fund_target, current_fund, is_active) \
             VALUES ($1, $2, $3, $4, $5::NUMERIC, $6, $7, $8::NUMERIC, $9::NUMERIC, $10) \
             RETURNING event_id",
        )
        .bind(&input.event_name)
        .bind(&input.description)
        .bind(input.event_date)
        .bind(&input.event_location)
        .bind(input.ticket_price)
        .bind(input.category_id)
        .bind(input.organization_id)
        .bind(input.fund_target)
        .bind(input.current_fund)
        .bind(input.is_active)
        .fetch_one(pool)
        .await
    }

    /// Overwrite every mutable column of an event.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, id: DbId, input: &NewEvent) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE charity_events SET \
                event_name = $2, \
                description = $3, \
                event_date = $4, \
                event_location = $5, \
                ticket_price = $6::NUMERIC, \
                category_id = $7, \
                organization_id = $8, \
                fund_target = $9::NUMERIC, \
                current_fund = $10::NUMERIC, \
                is_active = $11 \
             WHERE event_id = $1",
        )
        .bind(id)
        .bind(&input.event_name)
        .bind(&input.description)
        .bind(input.event_date)
        .bind(&input.event_location)
        .bind(input.ticket_price)
        .bind(input.category_id)
        .bind(input.organization_id)
        .bind(input.fund_target)
        .bind(input.current_fund)
        .bind(input.is_active)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Hard-delete an event that has no registrations.
    ///
    /// The event row is locked `FOR UPDATE` before counting registrations,
    /// which blocks concurrent registrations (they take `FOR SHARE`) until
    /// this transaction finishes.
    pub async fn delete_unless_registered(
        pool: &PgPool,
        id: DbId,
    ) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let found = sqlx::query_scalar::<_, DbId>(
            "SELECT event_id FROM charity_events WHERE event_id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if found.is_none() {
            return Ok(DeleteOutcome::NotFound);
        }

        let registrations = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*)::BIGINT FROM event_registrations WHERE event_id = $1",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if registrations > 0 {
            return Ok(DeleteOutcome::HasRegistrations(registrations));
        }

        sqlx::query("DELETE FROM charity_events WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(DeleteOutcome::Deleted)
    }
}
