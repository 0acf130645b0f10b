//! Charity event model and DTOs.
//!
//! Monetary columns are `NUMERIC` in storage and are selected as text
//! (`::TEXT`). The `*Row` structs carry that raw text; the `Serialize`
//! structs carry `f64` and are produced by [`crate::normalize`].

use charity_core::error::CoreError;
use charity_core::types::{DbId, EventTimestamp};
use charity_core::validation::{
    non_negative_amount, require_event_date, require_id, require_text,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::lenient;
use super::registration::Registration;

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

/// A row from `charity_events` with monetary columns still in text form.
#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub event_id: DbId,
    pub event_name: String,
    pub description: String,
    pub event_date: EventTimestamp,
    pub event_location: String,
    pub ticket_price: String,
    pub category_id: DbId,
    pub organization_id: DbId,
    pub fund_target: String,
    pub current_fund: String,
    pub is_active: bool,
}

/// An event joined with the names of its category and organization.
#[derive(Debug, Clone, FromRow)]
pub struct EventListRow {
    #[sqlx(flatten)]
    pub event: EventRow,
    pub category_name: String,
    pub organization_name: String,
}

/// An event joined with the full category and organization records.
#[derive(Debug, Clone, FromRow)]
pub struct EventDetailRow {
    #[sqlx(flatten)]
    pub event: EventRow,
    pub category_name: String,
    pub category_description: String,
    pub organization_name: String,
    pub mission_statement: String,
    pub contact_email: String,
}

// ---------------------------------------------------------------------------
// API shapes
// ---------------------------------------------------------------------------

/// An event with numeric monetary fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub event_id: DbId,
    pub event_name: String,
    pub description: String,
    pub event_date: EventTimestamp,
    pub event_location: String,
    pub ticket_price: f64,
    pub category_id: DbId,
    pub organization_id: DbId,
    pub fund_target: f64,
    pub current_fund: f64,
    pub is_active: bool,
}

/// Listing entry: event plus category and organization names.
#[derive(Debug, Clone, Serialize)]
pub struct EventSummary {
    #[serde(flatten)]
    pub event: Event,
    pub category_name: String,
    pub organization_name: String,
}

/// Detail view: event, its category and organization, and its registrations.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub category_name: String,
    pub category_description: String,
    pub organization_name: String,
    pub mission_statement: String,
    pub contact_email: String,
    /// Newest first; empty when nobody has registered.
    pub registrations: Vec<Registration>,
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Request body for creating or fully replacing an event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub event_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub ticket_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub category_id: Option<DbId>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub organization_id: Option<DbId>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub fund_target: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub current_fund: Option<f64>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// A fully validated set of event fields, ready to insert or write over a row.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub event_name: String,
    pub description: String,
    pub event_date: EventTimestamp,
    pub event_location: String,
    pub ticket_price: f64,
    pub category_id: DbId,
    pub organization_id: DbId,
    pub fund_target: f64,
    pub current_fund: f64,
    pub is_active: bool,
}

impl EventInput {
    /// Check required fields and apply defaults.
    ///
    /// Required: `event_name`, `event_date`, `event_location`, `category_id`,
    /// `organization_id`. Defaults: empty description, zero amounts, active.
    pub fn validate(&self) -> Result<NewEvent, CoreError> {
        Ok(NewEvent {
            event_name: require_text("event_name", self.event_name.as_deref())?,
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            event_date: require_event_date("event_date", self.event_date.as_deref())?,
            event_location: require_text("event_location", self.event_location.as_deref())?,
            ticket_price: non_negative_amount("ticket_price", self.ticket_price)?,
            category_id: require_id("category_id", self.category_id)?,
            organization_id: require_id("organization_id", self.organization_id)?,
            fund_target: non_negative_amount("fund_target", self.fund_target)?,
            current_fund: non_negative_amount("current_fund", self.current_fund)?,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}
