//! Navigation Endpoints
//!
//! Named route identifiers the views link to, and the sidebar built from them.

use std::fmt;
use std::str::FromStr;

/// Route identifiers the views resolve URLs for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Dashboard,
    Loans,
    AddLoan,
    Reports,
    Settings,
    ActivityLog,
    PaymentCalendar,
}

impl Endpoint {
    pub const ALL: [Endpoint; 7] = [
        Endpoint::Dashboard,
        Endpoint::Loans,
        Endpoint::AddLoan,
        Endpoint::Reports,
        Endpoint::Settings,
        Endpoint::ActivityLog,
        Endpoint::PaymentCalendar,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Endpoint::Dashboard => "dashboard",
            Endpoint::Loans => "loans",
            Endpoint::AddLoan => "add_loan",
            Endpoint::Reports => "reports",
            Endpoint::Settings => "settings",
            Endpoint::ActivityLog => "activity_log",
            Endpoint::PaymentCalendar => "payment_calendar",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Dashboard => "/",
            Endpoint::Loans => "/loans",
            Endpoint::AddLoan => "/loans/new",
            Endpoint::Reports => "/reports",
            Endpoint::Settings => "/settings",
            Endpoint::ActivityLog => "/activity",
            Endpoint::PaymentCalendar => "/payments/calendar",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .iter()
            .copied()
            .find(|endpoint| endpoint.id() == s)
            .ok_or_else(|| format!("Unknown endpoint: {}", s))
    }
}

/// Sidebar entries in display order: (endpoint, label, icon)
const SIDEBAR: [(Endpoint, &str, &str); 5] = [
    (Endpoint::Dashboard, "Dashboard", "bi-speedometer2"),
    (Endpoint::Loans, "All Loans", "bi-list-ul"),
    (Endpoint::AddLoan, "Add New Loan", "bi-plus-circle"),
    (Endpoint::Reports, "Reports", "bi-graph-up"),
    (Endpoint::Settings, "Settings", "bi-gear"),
];

/// A rendered sidebar link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub endpoint: Endpoint,
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
    pub active: bool,
}

impl NavLink {
    pub fn link_class(&self) -> &'static str {
        if self.active {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

/// Build the sidebar, marking the link whose endpoint is `active`
pub fn sidebar(active: Endpoint) -> Vec<NavLink> {
    SIDEBAR
        .iter()
        .map(|(endpoint, label, icon)| NavLink {
            endpoint: *endpoint,
            label: *label,
            icon: *icon,
            href: endpoint.path(),
            active: *endpoint == active,
        })
        .collect()
}
