//! Domain primitives shared by the charity events crates.
//!
//! Nothing in here touches the database or HTTP: error taxonomy, id and
//! timestamp aliases, and the pure parsing/validation rules that the
//! repository and handler layers build on.

pub mod amount;
pub mod datetime;
pub mod error;
pub mod types;
pub mod validation;
