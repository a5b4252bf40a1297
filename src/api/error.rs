//! API Error Types
//!
//! Errors raised by page handlers. They are logged with a request id and
//! rendered as an HTML error page inside the layout shell, styled with the
//! server's own UI settings.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use thiserror::Error;

use crate::config::UiConfig;
use crate::snapshot::SnapshotError;
use crate::view::layout::error_page;
use crate::view::ViewError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Snapshot could not be loaded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// View rendering failed
    #[error("View error: {0}")]
    View(#[from] ViewError),

    /// Listener or server IO failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Stable code shown on the error page and in logs
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Snapshot(_) => "SNAPSHOT_ERROR",
            ApiError::View(_) => "VIEW_ERROR",
            ApiError::Io(_) => "IO_ERROR",
        }
    }

    /// Attach the UI settings the error page is rendered with
    pub fn page(self, ui: &Arc<UiConfig>) -> PageError {
        PageError {
            error: self,
            ui: Arc::clone(ui),
        }
    }
}

/// A handler error bound to the server's UI settings
#[derive(Debug)]
pub struct PageError {
    pub error: ApiError,
    pub ui: Arc<UiConfig>,
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let code = self.error.code();
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self.error,
            "Request failed"
        );

        let message = self.error.to_string();
        match error_page(&self.ui, &message, code, &request_id) {
            Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
            Err(e) => {
                tracing::error!(request_id = %request_id, "Failed to render error page: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!(
                        "Error loading dashboard: {} ({}, request {})",
                        message, code, request_id
                    ),
                )
                    .into_response()
            }
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;
