//! Response bodies for write endpoints.
//!
//! Read endpoints return their records directly (arrays or objects); writes
//! answer with a human-readable `message` and, on creation, the new id.

use charity_core::types::DbId;
use serde::Serialize;

/// `{ "message": ... }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "message": ..., "eventId": ... }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreatedResponse {
    pub message: String,
    pub event_id: DbId,
}

/// `{ "message": ..., "registrationId": ... }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationCreatedResponse {
    pub message: String,
    pub registration_id: DbId,
}
