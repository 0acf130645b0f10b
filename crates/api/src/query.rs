//! Query-string parameter types for API handlers.

use charity_core::error::CoreError;
use charity_core::validation::{optional_date_filter, optional_id_filter, present};
use charity_db::query::EventFilter;
use serde::Deserialize;

/// `GET /events/search?date=&location=&categoryId=`
///
/// Every parameter is optional; blank values count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub date: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
}

impl SearchParams {
    /// Parse into a typed filter, rejecting malformed dates and ids.
    pub fn to_filter(&self) -> Result<EventFilter, CoreError> {
        Ok(EventFilter {
            date: optional_date_filter("date", self.date.as_deref())?,
            location: present(self.location.as_deref()).map(str::to_string),
            category_id: optional_id_filter("categoryId", self.category_id.as_deref())?,
        })
    }
}
