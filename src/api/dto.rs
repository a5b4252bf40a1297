//! Data Transfer Objects
//!
//! Response types for the JSON endpoints.

use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// Name of the configured snapshot source
    pub snapshot_source: String,
    /// Snapshot status: "ok" or "error"
    pub snapshot: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
}
