//! Dashboard Snapshot Sources
//!
//! A snapshot is one [`DashboardData`] value: everything a dashboard render
//! consumes. Figures are produced upstream (loan servicing, risk scoring);
//! this module only fetches them.
//!
//! - [`FileSnapshotSource`]: JSON file, re-read on every load
//! - [`StaticSnapshotSource`]: fixed in-memory value (sample data, tests)

mod sample;

pub use sample::sample_snapshot;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::view::DashboardData;

/// Common trait for all snapshot sources
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Short name used in logs and health output
    fn name(&self) -> &str;

    /// Fetch the current snapshot
    async fn load(&self) -> Result<DashboardData, SnapshotError>;
}

/// Snapshot loading errors
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Snapshot stored as a JSON file
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self) -> Result<DashboardData, SnapshotError> {
        let content = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SnapshotError::Io {
                path: self.path.clone(),
                source,
            })?;

        let data: DashboardData =
            serde_json::from_slice(&content).map_err(|source| SnapshotError::Parse {
                path: self.path.clone(),
                source,
            })?;

        // Loaded on every page view and probe
        tracing::debug!(
            path = %self.path.display(),
            activities = data.activities.len(),
            payments = data.payments.len(),
            categories = data.categories.len(),
            "Loaded dashboard snapshot"
        );

        Ok(data)
    }
}

/// Snapshot held in memory
#[derive(Debug, Clone)]
pub struct StaticSnapshotSource {
    data: DashboardData,
}

impl StaticSnapshotSource {
    pub fn new(data: DashboardData) -> Self {
        Self { data }
    }

    /// The built-in sample portfolio, dated relative to today
    pub fn sample() -> Self {
        Self::new(sample_snapshot(chrono::Utc::now().date_naive()))
    }
}

#[async_trait]
impl SnapshotSource for StaticSnapshotSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn load(&self) -> Result<DashboardData, SnapshotError> {
        Ok(self.data.clone())
    }
}
