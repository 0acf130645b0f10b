//! Extractors whose rejections use the API's JSON error shape.
//!
//! Axum's stock `Json`, `Path` and `Query` reject with plain-text bodies
//! and, for JSON, a 422 status. These wrappers reject with [`AppError::BadRequest`]
//! instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` with 400 `{ "error": ... }` rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with 400 `{ "error": ... }` rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// `axum::extract::Query` with 400 `{ "error": ... }` rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
