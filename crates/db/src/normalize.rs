//! Raw row to API shape coercion.
//!
//! The driver hands back `NUMERIC` columns as text; everything leaving this
//! module has them as `f64`.

use charity_core::amount::parse_stored_amount;
use charity_core::error::CoreError;

use crate::models::event::{Event, EventDetail, EventDetailRow, EventListRow, EventRow, EventSummary};
use crate::models::registration::Registration;

/// Coerce the monetary columns of a single event row.
pub fn event(row: EventRow) -> Result<Event, CoreError> {
    Ok(Event {
        ticket_price: parse_stored_amount("ticket_price", &row.ticket_price)?,
        fund_target: parse_stored_amount("fund_target", &row.fund_target)?,
        current_fund: parse_stored_amount("current_fund", &row.current_fund)?,
        event_id: row.event_id,
        event_name: row.event_name,
        description: row.description,
        event_date: row.event_date,
        event_location: row.event_location,
        category_id: row.category_id,
        organization_id: row.organization_id,
        is_active: row.is_active,
    })
}

/// Normalize a listing, failing on the first corrupt row.
pub fn event_list(rows: Vec<EventListRow>) -> Result<Vec<EventSummary>, CoreError> {
    rows.into_iter()
        .map(|row| {
            Ok(EventSummary {
                event: event(row.event)?,
                category_name: row.category_name,
                organization_name: row.organization_name,
            })
        })
        .collect()
}

/// Build the detail view from the joined row and the event's registrations.
///
/// `registrations` are expected newest first, as returned by
/// [`crate::repositories::RegistrationRepo::list_for_event`].
pub fn event_detail(
    row: EventDetailRow,
    registrations: Vec<Registration>,
) -> Result<EventDetail, CoreError> {
    Ok(EventDetail {
        event: event(row.event)?,
        category_name: row.category_name,
        category_description: row.category_description,
        organization_name: row.organization_name,
        mission_statement: row.mission_statement,
        contact_email: row.contact_email,
        registrations,
    })
}
