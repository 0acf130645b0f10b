//! Minimal HTTP client for the charity events API.
//!
//! Fetches one event for display and submits a registration for it. Types
//! here mirror only the JSON fields the client reads; the server remains the
//! source of truth for the full contract.

use chrono::NaiveDateTime;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Api { status: StatusCode, message: String },

    /// Transport failure or an undecodable response body.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// The parts of an event the registration page displays.
#[derive(Debug, Clone, Deserialize)]
pub struct EventInfo {
    pub event_id: i64,
    pub event_name: String,
    pub event_date: NaiveDateTime,
    pub event_location: String,
    pub ticket_price: f64,
    #[serde(default)]
    pub registrations: Vec<serde_json::Value>,
}

/// Registration form contents.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub ticket_quantity: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReceipt {
    pub message: String,
    pub registration_id: i64,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client bound to one API base URL (e.g. `http://localhost:3000` or
/// `https://example.org/api`).
#[derive(Debug, Clone)]
pub struct EventsClient {
    http: reqwest::Client,
    base_url: Url,
}

impl EventsClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let url = Url::parse(base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: url,
        })
    }

    /// Append `segments` to the base URL's path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn event_url(&self, event_id: i64, tail: Option<&str>) -> Result<Url, ClientError> {
        let id = event_id.to_string();
        match tail {
            Some(tail) => self.endpoint(&["events", &id, tail]),
            None => self.endpoint(&["events", &id]),
        }
    }

    /// GET `/events/{event_id}`.
    pub async fn get_event(&self, event_id: i64) -> Result<EventInfo, ClientError> {
        let url = self.event_url(event_id, None)?;
        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    /// POST `/events/{event_id}/register`.
    pub async fn register(
        &self,
        event_id: i64,
        form: &RegistrationForm,
    ) -> Result<RegistrationReceipt, ClientError> {
        let url = self.event_url(event_id, Some("register"))?;
        let response = self.http.post(url).json(form).send().await?;
        let receipt: RegistrationReceipt = decode(response).await?;
        tracing::debug!(event_id, registration_id = receipt.registration_id, "Registered");
        Ok(receipt)
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    let body = response.text().await?;
    Err(api_error(status, &body))
}

/// Build an [`ClientError::Api`] from a failed response, preferring the
/// server's `error` field over the raw body.
fn api_error(status: StatusCode, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("Request failed").to_string()
            } else {
                body.trim().to_string()
            }
        });
    ClientError::Api { status, message }
}

/// Render the event header shown above the registration form.
pub fn render_event_info(event: &EventInfo) -> String {
    format!(
        "{}\nDate & Time: {}\nLocation: {}\nTicket Price: ${:.2}",
        event.event_name,
        event.event_date.format("%Y-%m-%d %H:%M"),
        event.event_location,
        event.ticket_price
    )
}
