//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` struct matching the database row
//! - A `Serialize` shape returned by the API, where it differs from the row
//! - A `Deserialize` input DTO whose fields are all optional, so missing
//!   fields surface as validation errors instead of deserialization failures

pub mod category;
pub mod event;
pub mod lenient;
pub mod registration;
