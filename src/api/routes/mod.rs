//! Route Handlers
//!
//! Page and probe handlers, organized by functionality.

pub mod dashboard;
pub mod health;
