//! Liveness and database readiness.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"unavailable"` when the database cannot be reached.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Open connections in the pool, idle or not.
    pub db_connections: u32,
    pub db_idle_connections: usize,
    pub db_max_connections: u32,
}

/// GET /health
///
/// Responds 503 while the database is unreachable or the pool cannot hand
/// out a connection within its acquire timeout, so load balancers stop
/// routing to this instance until it recovers.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = match charity_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };

    let (code, status) = if db_healthy {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        db_connections: state.pool.size(),
        db_idle_connections: state.pool.num_idle(),
        db_max_connections: state.config.db_max_connections,
    };
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
