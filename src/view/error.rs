//! View error types

use thiserror::Error;

/// Errors raised while rendering a view
#[derive(Error, Debug)]
pub enum ViewError {
    /// Template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Chart configuration could not be serialized
    #[error("Chart serialization error: {0}")]
    ChartSerialization(#[from] serde_json::Error),
}

/// Result type for view rendering
pub type ViewResult<T> = Result<T, ViewError>;
