//! Dashboard Routes
//!
//! - GET / - Portfolio dashboard
//! - POST /reload - Re-read the snapshot and report the outcome as a flash

use axum::{
    extract::State,
    response::{Html, Redirect},
};
use std::sync::Arc;

use crate::api::error::{ApiError, PageResult};
use crate::api::state::AppState;
use crate::view::{DashboardView, Endpoint, FlashMessage, LayoutContext};

/// GET /
///
/// Renders the dashboard from a fresh snapshot. Pending flash messages are
/// consumed only when the page renders successfully.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> PageResult<Html<String>> {
    let data = state
        .source
        .load()
        .await
        .map_err(|e| ApiError::from(e).page(&state.ui))?;

    let html = state
        .flashes
        .consume_with(|flashes| {
            let layout =
                LayoutContext::new(&state.ui, "Dashboard", Endpoint::Dashboard).flashes(flashes);
            DashboardView::new(&data, layout, &state.formatter)?
                .with_reload(true)
                .render_html()
        })
        .await
        .map_err(|e| ApiError::from(e).page(&state.ui))?;

    Ok(Html(html))
}

/// POST /reload
pub async fn reload(State(state): State<Arc<AppState>>) -> Redirect {
    let message = match state.source.load().await {
        Ok(data) => {
            tracing::info!(
                source = state.source.name(),
                payments = data.payments.len(),
                "Dashboard data reloaded"
            );
            FlashMessage::success("Dashboard data reloaded")
        }
        Err(e) => {
            tracing::warn!(source = state.source.name(), "Reload failed: {}", e);
            FlashMessage::danger(format!("Failed to reload dashboard data: {}", e))
        }
    };

    state.flashes.push(message).await;
    // 303 See Other
    Redirect::to(Endpoint::Dashboard.path())
}
