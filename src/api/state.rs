//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::api::flash::FlashQueue;
use crate::config::UiConfig;
use crate::snapshot::SnapshotSource;
use crate::view::Formatter;

/// Shared application state for all handlers
pub struct AppState {
    /// Where dashboard snapshots come from
    pub source: Arc<dyn SnapshotSource>,
    /// Flash messages waiting for the next page render
    pub flashes: FlashQueue,
    /// Presentation settings, shared with error pages
    pub ui: Arc<UiConfig>,
    /// Formatter built from `ui`
    pub formatter: Formatter,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(source: Arc<dyn SnapshotSource>, ui: UiConfig) -> Self {
        Self {
            source,
            flashes: FlashQueue::new(),
            formatter: Formatter::from_config(&ui),
            ui: Arc::new(ui),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
