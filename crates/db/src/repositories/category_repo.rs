//! Repository for the `event_categories` table.

use sqlx::PgPool;

use crate::models::category::Category;

const COLUMNS: &str = "category_id, category_name, category_description";

/// Read-only access to event categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM event_categories ORDER BY category_name, category_id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }
}
