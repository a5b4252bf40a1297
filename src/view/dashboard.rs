//! Dashboard View
//!
//! Portfolio overview page: four metric cards, the loan status and cash flow
//! charts, recent activity, upcoming payments and the category breakdown.
//!
//! All formatting and style selection happens here, while the rows are
//! built; `templates/dashboard.html` only interpolates finished strings.

use askama::Template;

use crate::view::charts::{chart_script, CASH_FLOW_CANVAS, LOAN_STATUS_CANVAS};
use crate::view::error::ViewResult;
use crate::view::format::Formatter;
use crate::view::layout::LayoutContext;
use crate::view::model::{Activity, DashboardData, DashboardSummary, LoanCategory, Payment};
use crate::view::nav::Endpoint;
use crate::view::style::{RiskBand, Trend, UrgencyTier};

/// One summary card
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub border_class: &'static str,
    pub value: String,
    pub trend: Trend,
    /// Unsigned change, e.g. `4.5%`
    pub change: String,
}

impl MetricCard {
    pub fn has_arrow(&self) -> bool {
        self.trend.icon_class().is_some()
    }

    pub fn arrow_class(&self) -> &'static str {
        self.trend.icon_class().unwrap_or("")
    }

    pub fn trend_text_class(&self) -> &'static str {
        self.trend.text_class()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    pub title: String,
    pub description: String,
    pub timestamp: String,
    pub user: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    pub borrower: String,
    pub tier: UrgencyTier,
    pub badge_class: &'static str,
    pub badge_text: String,
    pub amount: String,
    pub loan_id: String,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub name: String,
    pub count: String,
    pub principal: String,
    pub avg_interest_rate: String,
    pub avg_term: String,
    pub risk_level: i64,
    pub band: RiskBand,
    pub bar_class: &'static str,
}

/// Build the four cards in display order
pub fn metric_cards(summary: &DashboardSummary, fmt: &Formatter) -> Vec<MetricCard> {
    let card = |title: &'static str,
                icon: &'static str,
                border_class: &'static str,
                value: String,
                change: f64| MetricCard {
        title,
        icon,
        border_class,
        value,
        trend: Trend::from_change(change),
        change: fmt.change_magnitude(change),
    };

    vec![
        card(
            "Active Loans",
            "bi-cash-stack",
            "border-start-primary",
            fmt.count(summary.total_active_loans),
            summary.active_loans_change,
        ),
        card(
            "Total Principal",
            "bi-bank",
            "border-start-success",
            fmt.currency(summary.total_principal),
            summary.principal_change,
        ),
        card(
            "At-Risk Loans",
            "bi-exclamation-triangle",
            "border-start-warning",
            fmt.count(summary.at_risk_loans),
            summary.risk_loans_change,
        ),
        card(
            "Expected Interest",
            "bi-percent",
            "border-start-info",
            fmt.currency(summary.expected_interest),
            summary.interest_change,
        ),
    ]
}

pub fn activity_row(activity: &Activity, fmt: &Formatter) -> ActivityRow {
    ActivityRow {
        title: activity.title.clone(),
        description: activity.description.clone(),
        timestamp: fmt.datetime(activity.timestamp),
        user: activity.user.clone(),
    }
}

pub fn payment_row(payment: &Payment, fmt: &Formatter) -> PaymentRow {
    let tier = UrgencyTier::from_days_until(payment.days_until);
    PaymentRow {
        borrower: payment.borrower.clone(),
        tier,
        badge_class: tier.badge_class(),
        badge_text: format!("Due in {} days", payment.days_until),
        amount: fmt.currency(payment.amount),
        loan_id: payment.loan_id.clone(),
        due_date: fmt.date(payment.due_date),
    }
}

pub fn category_row(category: &LoanCategory, fmt: &Formatter) -> CategoryRow {
    let band = RiskBand::from_level(category.risk_level);
    CategoryRow {
        name: category.name.clone(),
        count: fmt.count(category.count),
        principal: fmt.currency(category.principal),
        avg_interest_rate: fmt.rate(category.avg_interest_rate),
        avg_term: fmt.term_months(category.avg_term),
        risk_level: category.risk_level,
        band,
        bar_class: band.bar_class(),
    }
}

/// The dashboard page, rendered into the layout shell
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardView {
    pub layout: LayoutContext,
    pub cards: Vec<MetricCard>,
    pub activities: Vec<ActivityRow>,
    pub payments: Vec<PaymentRow>,
    pub categories: Vec<CategoryRow>,
    pub chart_script: String,
    pub status_canvas: &'static str,
    pub cash_flow_canvas: &'static str,
    pub activity_log_href: &'static str,
    pub payment_calendar_href: &'static str,
    /// Show the reload button (only meaningful when served over HTTP)
    pub show_reload: bool,
}

impl DashboardView {
    pub fn new(data: &DashboardData, layout: LayoutContext, fmt: &Formatter) -> ViewResult<Self> {
        Ok(Self {
            layout,
            cards: metric_cards(&data.summary, fmt),
            activities: data.activities.iter().map(|a| activity_row(a, fmt)).collect(),
            payments: data.payments.iter().map(|p| payment_row(p, fmt)).collect(),
            categories: data.categories.iter().map(|c| category_row(c, fmt)).collect(),
            chart_script: chart_script(&data.loan_status, &data.cash_flow, fmt.currency_symbol())?,
            status_canvas: LOAN_STATUS_CANVAS,
            cash_flow_canvas: CASH_FLOW_CANVAS,
            activity_log_href: Endpoint::ActivityLog.path(),
            payment_calendar_href: Endpoint::PaymentCalendar.path(),
            show_reload: false,
        })
    }

    pub fn with_reload(mut self, show_reload: bool) -> Self {
        self.show_reload = show_reload;
        self
    }

    pub fn render_html(&self) -> ViewResult<String> {
        let html = self.render()?;
        tracing::debug!(
            activities = self.activities.len(),
            payments = self.payments.len(),
            categories = self.categories.len(),
            bytes = html.len(),
            "Rendered dashboard"
        );
        Ok(html)
    }
}
