//! View Data Contracts
//!
//! Read-only projections handed to the views for a single render pass.
//! Every value here is computed upstream; the views never mutate them.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Headline numbers for the four metric cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_active_loans: i64,
    /// Signed percentage change vs. the previous period
    pub active_loans_change: f64,
    pub total_principal: Decimal,
    pub principal_change: f64,
    pub at_risk_loans: i64,
    pub risk_loans_change: f64,
    pub expected_interest: Decimal,
    pub interest_change: f64,
}

/// One entry in the recent activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub user: String,
}

/// An upcoming scheduled payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub borrower: String,
    pub amount: Decimal,
    pub loan_id: String,
    pub due_date: NaiveDate,
    /// Days from today until `due_date`; negative when overdue
    pub days_until: i64,
}

/// Aggregate figures for one loan category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanCategory {
    pub name: String,
    pub count: i64,
    pub principal: Decimal,
    pub avg_interest_rate: f64,
    /// Average term in months
    pub avg_term: i64,
    /// 0-100, not clamped
    pub risk_level: i64,
}

/// Ordered labels with a single ordered dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Ordered labels with paired income and expense datasets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSeries {
    pub labels: Vec<String>,
    pub income: Vec<f64>,
    pub expenses: Vec<f64>,
}

/// Everything a dashboard render consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub summary: DashboardSummary,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub categories: Vec<LoanCategory>,
    pub loan_status: ChartSeries,
    pub cash_flow: CashFlowSeries,
}

/// Flash message category, mapped onto alert styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Info,
    Warning,
    #[serde(alias = "error")]
    Danger,
}

impl FlashCategory {
    /// Alert modifier class, e.g. `alert-success`
    pub fn alert_class(&self) -> &'static str {
        match self {
            FlashCategory::Success => "alert-success",
            FlashCategory::Info => "alert-info",
            FlashCategory::Warning => "alert-warning",
            FlashCategory::Danger => "alert-danger",
        }
    }
}

impl fmt::Display for FlashCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlashCategory::Success => "success",
            FlashCategory::Info => "info",
            FlashCategory::Warning => "warning",
            FlashCategory::Danger => "danger",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for FlashCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(FlashCategory::Success),
            "info" | "message" => Ok(FlashCategory::Info),
            "warning" => Ok(FlashCategory::Warning),
            "danger" | "error" => Ok(FlashCategory::Danger),
            other => Err(format!("Unknown flash category: {}", other)),
        }
    }
}

/// A one-shot notification shown once at the top of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub category: FlashCategory,
    pub text: String,
}

impl FlashMessage {
    pub fn new(category: FlashCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(FlashCategory::Success, text)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(FlashCategory::Danger, text)
    }

    pub fn alert_class(&self) -> &'static str {
        self.category.alert_class()
    }
}
