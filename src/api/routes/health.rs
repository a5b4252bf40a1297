//! Health Routes
//!
//! Health check endpoints for monitoring and container probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (snapshot can be loaded)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the snapshot source can produce data.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if check_snapshot_health(&state).await {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let snapshot_ok = check_snapshot_health(&state).await;

    Json(HealthResponse {
        status: if snapshot_ok { "healthy" } else { "degraded" }.to_string(),
        snapshot_source: state.source.name().to_string(),
        snapshot: if snapshot_ok { "ok" } else { "error" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn check_snapshot_health(state: &AppState) -> bool {
    match state.source.load().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!(source = state.source.name(), "Snapshot unavailable: {}", e);
            false
        }
    }
}
