//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and return raw rows; turning rows
//! into API shapes is [`crate::normalize`]'s job.

pub mod category_repo;
pub mod event_repo;
pub mod registration_repo;

pub use category_repo::CategoryRepo;
pub use event_repo::{DeleteOutcome, EventRepo};
pub use registration_repo::RegistrationRepo;
