//! Server-Rendered Views
//!
//! The presentation layer: a layout shell and the dashboard page, compiled
//! from the askama templates under `templates/`.
//!
//! # Example
//!
//! ```rust,no_run
//! use loanboard::config::UiConfig;
//! use loanboard::snapshot::sample_snapshot;
//! use loanboard::view::{DashboardView, Endpoint, FlashMessage, Formatter, LayoutContext};
//!
//! let ui = UiConfig::default();
//! let data = sample_snapshot(chrono::Utc::now().date_naive());
//! let layout = LayoutContext::new(&ui, "Dashboard", Endpoint::Dashboard)
//!     .flashes(vec![FlashMessage::success("Loan added")]);
//!
//! let html = DashboardView::new(&data, layout, &Formatter::from_config(&ui))?
//!     .render_html()?;
//! # Ok::<(), loanboard::view::ViewError>(())
//! ```

pub mod charts;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod layout;
pub mod model;
pub mod nav;
pub mod style;

pub use dashboard::DashboardView;
pub use error::{ViewError, ViewResult};
pub use format::Formatter;
pub use layout::{Assets, LayoutContext, ShellPage};
pub use model::{
    Activity, CashFlowSeries, ChartSeries, DashboardData, DashboardSummary, FlashCategory,
    FlashMessage, LoanCategory, Payment,
};
pub use nav::{Endpoint, NavLink};
pub use style::{RiskBand, Trend, UrgencyTier};
