//! Sample Portfolio
//!
//! Demonstration snapshot used when no snapshot file is configured.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::view::{
    Activity, CashFlowSeries, ChartSeries, DashboardData, DashboardSummary, LoanCategory, Payment,
};

/// Build the sample portfolio with dates relative to `today`
pub fn sample_snapshot(today: NaiveDate) -> DashboardData {
    DashboardData {
        summary: DashboardSummary {
            total_active_loans: 128,
            active_loans_change: 3.2,
            total_principal: Decimal::new(48_250_000_00, 2),
            principal_change: 5.7,
            at_risk_loans: 9,
            risk_loans_change: -12.5,
            expected_interest: Decimal::new(2_871_450_00, 2),
            interest_change: 0.0,
        },
        activities: sample_activities(today),
        payments: sample_payments(today),
        categories: sample_categories(),
        loan_status: ChartSeries {
            labels: ["Current", "Late", "Default", "Paid Off", "Other"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            data: vec![104.0, 11.0, 4.0, 37.0, 2.0],
        },
        cash_flow: CashFlowSeries {
            labels: (0..6).map(|offset| month_label(today, offset)).collect(),
            income: vec![412_500.0, 398_200.0, 431_750.0, 445_000.0, 420_300.0, 452_900.0],
            expenses: vec![118_300.0, 124_900.0, 109_400.0, 131_200.0, 127_800.0, 121_500.0],
        },
    }
}

fn sample_activities(today: NaiveDate) -> Vec<Activity> {
    let at = |days_ago: i64, hour: u32, minute: u32| {
        (today - Duration::days(days_ago))
            .and_hms_opt(hour, minute, 0)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .unwrap_or_else(Utc::now)
    };

    vec![
        Activity {
            title: "Payment received".to_string(),
            description: "Quarterly interest payment from Acme Corporation on LN-2023-001"
                .to_string(),
            timestamp: at(0, 9, 42),
            user: "j.martinez".to_string(),
        },
        Activity {
            title: "Loan syndicated".to_string(),
            description: "35% of LN-2024-006 allocated to Northern Trust Bank".to_string(),
            timestamp: at(1, 16, 5),
            user: "a.chen".to_string(),
        },
        Activity {
            title: "Covenant review".to_string(),
            description: "Debt service coverage below threshold for Atlas Construction"
                .to_string(),
            timestamp: at(2, 11, 30),
            user: "r.okafor".to_string(),
        },
        Activity {
            title: "New loan added".to_string(),
            description: "LN-2024-009 originated for TechNova Inc.".to_string(),
            timestamp: at(4, 14, 18),
            user: "a.chen".to_string(),
        },
    ]
}

fn sample_payments(today: NaiveDate) -> Vec<Payment> {
    let payment = |borrower: &str, cents: i64, loan_id: &str, days_until: i64| Payment {
        borrower: borrower.to_string(),
        amount: Decimal::new(cents, 2),
        loan_id: loan_id.to_string(),
        due_date: today + Duration::days(days_until),
        days_until,
    };

    vec![
        payment("Oceanic Shipping Ltd.", 187_500_00, "LN-2023-004", 2),
        payment("Atlas Construction", 96_250_00, "LN-2023-011", 5),
        payment("MediHealth Systems", 142_000_00, "LN-2024-002", 9),
        payment("Global Energy Partners", 310_875_00, "LN-2022-017", 14),
    ]
}

fn sample_categories() -> Vec<LoanCategory> {
    let category = |name: &str, count, cents: i64, rate, term, risk| LoanCategory {
        name: name.to_string(),
        count,
        principal: Decimal::new(cents, 2),
        avg_interest_rate: rate,
        avg_term: term,
        risk_level: risk,
    };

    vec![
        category("Commercial Real Estate", 34, 18_400_000_00, 6.35, 84, 42),
        category("Corporate Term Loans", 41, 14_750_000_00, 5.80, 60, 25),
        category("Equipment Finance", 29, 6_300_000_00, 7.15, 48, 18),
        category("Leveraged Buyouts", 12, 7_150_000_00, 8.90, 72, 76),
        category("Working Capital", 12, 1_650_000_00, 9.25, 18, 55),
    ]
}

/// Short month name `offset` months after `today`, e.g. `Jun`
fn month_label(today: NaiveDate, offset: u32) -> String {
    today
        .checked_add_months(chrono::Months::new(offset))
        .unwrap_or(today)
        .format("%b")
        .to_string()
}
