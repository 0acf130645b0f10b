//! Event registration model and DTOs.
//!
//! Registrations are created once and never modified.

use charity_core::error::CoreError;
use charity_core::types::{DbId, Timestamp};
use charity_core::validation::{require_email, require_text, require_ticket_quantity};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::lenient;

/// A row from the `event_registrations` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Registration {
    pub registration_id: DbId,
    pub event_id: DbId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub ticket_quantity: i32,
    pub registration_date: Timestamp,
}

/// Request body for `POST /events/{eventId}/register`.
///
/// An `event_id` in the body is ignored; the path decides the event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationInput {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub ticket_quantity: Option<i64>,
}

/// Validated registration fields.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub ticket_quantity: i32,
}

impl RegistrationInput {
    /// All four fields are required and `ticket_quantity` must be positive.
    pub fn validate(&self) -> Result<NewRegistration, CoreError> {
        Ok(NewRegistration {
            full_name: require_text("full_name", self.full_name.as_deref())?,
            email: require_email("email", self.email.as_deref())?,
            phone: require_text("phone", self.phone.as_deref())?,
            ticket_quantity: require_ticket_quantity("ticket_quantity", self.ticket_quantity)?,
        })
    }
}
