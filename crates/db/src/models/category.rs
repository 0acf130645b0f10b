//! Event category model. Categories are reference data seeded by migration.

use charity_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `event_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub category_id: DbId,
    pub category_name: String,
    pub category_description: String,
}
