//! Chart Configurations
//!
//! Builds Chart.js configuration objects for the dashboard and the inline
//! script that instantiates them. Configs are serialized with serde_json;
//! the only hand-written JavaScript is the currency tick callback, which
//! JSON cannot express.

use serde::Serialize;
use serde_json::json;

use crate::view::error::ViewResult;
use crate::view::model::{CashFlowSeries, ChartSeries};

/// Canvas id of the loan status doughnut
pub const LOAN_STATUS_CANVAS: &str = "loanStatusChart";

/// Canvas id of the cash flow bar chart
pub const CASH_FLOW_CANVAS: &str = "cashFlowChart";

/// Loan status slice colors: current, late, default, paid off, other
pub const LOAN_STATUS_COLORS: [&str; 5] = [
    "#28a745", // Green
    "#ffc107", // Amber
    "#dc3545", // Red
    "#20c997", // Teal
    "#6c757d", // Gray
];

pub const INCOME_COLOR: &str = "#28a745";
pub const EXPENSE_COLOR: &str = "#dc3545";

/// A complete Chart.js configuration
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: ColorSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorSpec>,
    pub border_width: u32,
}

/// One color for the whole dataset, or one per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(&'static str),
    PerPoint(Vec<&'static str>),
}

/// Doughnut of loans by status, legend on the right
pub fn loan_status_chart(series: &ChartSeries) -> ChartConfig {
    ChartConfig {
        kind: "doughnut",
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![Dataset {
                label: None,
                data: series.data.clone(),
                background_color: ColorSpec::PerPoint(LOAN_STATUS_COLORS.to_vec()),
                border_color: None,
                border_width: 1,
            }],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "position": "right" }
            }
        }),
    }
}

/// Income vs. expenses bars, value axis from zero
pub fn cash_flow_chart(series: &CashFlowSeries) -> ChartConfig {
    ChartConfig {
        kind: "bar",
        data: ChartData {
            labels: series.labels.clone(),
            datasets: vec![
                Dataset {
                    label: Some("Income".to_string()),
                    data: series.income.clone(),
                    background_color: ColorSpec::Single(INCOME_COLOR),
                    border_color: Some(ColorSpec::Single(INCOME_COLOR)),
                    border_width: 1,
                },
                Dataset {
                    label: Some("Expenses".to_string()),
                    data: series.expenses.clone(),
                    background_color: ColorSpec::Single(EXPENSE_COLOR),
                    border_color: Some(ColorSpec::Single(EXPENSE_COLOR)),
                    border_width: 1,
                },
            ],
        },
        options: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "ticks": {}
                }
            }
        }),
    }
}

/// Serialize for embedding inside a `<script>` element
fn script_json<T: Serialize>(value: &T) -> ViewResult<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Inline script constructing both dashboard charts
pub fn chart_script(
    loan_status: &ChartSeries,
    cash_flow: &CashFlowSeries,
    currency_symbol: &str,
) -> ViewResult<String> {
    let status_config = script_json(&loan_status_chart(loan_status))?;
    let cash_flow_config = script_json(&cash_flow_chart(cash_flow))?;
    let symbol = script_json(&currency_symbol)?;

    Ok(format!(
        r#"
(function () {{
    var statusCanvas = document.getElementById('{status_canvas}');
    if (statusCanvas) {{
        new Chart(statusCanvas, {status_config});
    }}

    var cashFlowConfig = {cash_flow_config};
    cashFlowConfig.options.scales.y.ticks.callback = function (value) {{
        return {symbol} + Number(value).toLocaleString('en-US');
    }};
    var cashFlowCanvas = document.getElementById('{cash_flow_canvas}');
    if (cashFlowCanvas) {{
        new Chart(cashFlowCanvas, cashFlowConfig);
    }}
}})();
"#,
        status_canvas = LOAN_STATUS_CANVAS,
        cash_flow_canvas = CASH_FLOW_CANVAS,
    ))
}
