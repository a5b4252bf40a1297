//! # Loanboard
//!
//! Loan Portfolio Dashboard - server-rendered pages for a loan-portfolio
//! management web application.
//!
//! ## Features
//!
//! - **Layout shell**: sidebar navigation, top bar, flash messages and
//!   per-page extension blocks shared by every page
//! - **Dashboard**: metric cards with trend arrows, loan-status and cash-flow
//!   charts, recent activity, upcoming payments and a category breakdown
//! - **Snapshots**: dashboard figures read from a JSON file or a built-in
//!   sample portfolio
//!
//! ## Modules
//!
//! - [`view`]: Templates, formatting and presentation rules
//! - [`snapshot`]: Where dashboard data comes from
//! - [`api`]: Web host with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use loanboard::api::{serve, AppState};
//! use loanboard::config::Config;
//! use loanboard::snapshot::FileSnapshotSource;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default().config;
//!     let source = Arc::new(FileSnapshotSource::new("portfolio.json"));
//!
//!     serve(AppState::new(source, config.ui.clone()), &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod snapshot;
pub mod view;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoadedConfig};

pub use snapshot::{
    sample_snapshot, FileSnapshotSource, SnapshotError, SnapshotSource, StaticSnapshotSource,
};

pub use view::{
    DashboardData, DashboardView, Endpoint, FlashCategory, FlashMessage, Formatter,
    LayoutContext, ShellPage, ViewError,
};
