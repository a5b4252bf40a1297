//! Display Formatting
//!
//! Currency, percentage, count and date formatting for the views.
//! Currency amounts are rounded half away from zero to cents and grouped
//! with comma thousands separators.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::UiConfig;

/// Formatter configured from the UI section of the config
#[derive(Debug, Clone)]
pub struct Formatter {
    currency_symbol: String,
    date_format: String,
    datetime_format: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

impl Formatter {
    pub fn new(
        currency_symbol: impl Into<String>,
        date_format: impl Into<String>,
        datetime_format: impl Into<String>,
    ) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            date_format: date_format.into(),
            datetime_format: datetime_format.into(),
        }
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(
            config.currency_symbol.clone(),
            config.date_format.clone(),
            config.datetime_format.clone(),
        )
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// `$1,234,567.89`, negatives as `-$12.50`
    pub fn currency(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let digits = format!("{:.2}", rounded.abs());
        let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        format!(
            "{}{}{}.{}",
            sign,
            self.currency_symbol,
            group_thousands(whole),
            cents
        )
    }

    /// Whole number with thousands separators
    pub fn count(&self, value: i64) -> String {
        let grouped = group_thousands(&value.unsigned_abs().to_string());
        if value < 0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Unsigned magnitude of a percentage change, e.g. `-3.26` -> `3.3%`
    pub fn change_magnitude(&self, change: f64) -> String {
        format!("{:.1}%", change.abs())
    }

    /// Interest rate with two decimals
    pub fn rate(&self, rate: f64) -> String {
        format!("{:.2}%", rate)
    }

    pub fn term_months(&self, months: i64) -> String {
        format!("{} months", months)
    }

    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }

    pub fn datetime(&self, timestamp: DateTime<Utc>) -> String {
        timestamp.format(&self.datetime_format).to_string()
    }
}

/// Insert comma separators into a run of ASCII digits
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("100000"), "100,000");
    }

    #[test]
    fn test_currency() {
        let fmt = Formatter::default();
        assert_eq!(fmt.currency(dec!(0)), "$0.00");
        assert_eq!(fmt.currency(dec!(1250000)), "$1,250,000.00");
        assert_eq!(fmt.currency(dec!(1234.5)), "$1,234.50");
        assert_eq!(fmt.currency(dec!(999.999)), "$1,000.00");
        assert_eq!(fmt.currency(dec!(0.005)), "$0.01");
        assert_eq!(fmt.currency(dec!(-42.125)), "-$42.13");
        assert_eq!(fmt.currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn test_currency_symbol_is_configurable() {
        let fmt = Formatter::new("€", "%d.%m.%Y", "%d.%m.%Y %H:%M");
        assert_eq!(fmt.currency(dec!(1500.75)), "€1,500.75");
        assert_eq!(fmt.currency_symbol(), "€");
    }

    #[test]
    fn test_count() {
        let fmt = Formatter::default();
        assert_eq!(fmt.count(0), "0");
        assert_eq!(fmt.count(42), "42");
        assert_eq!(fmt.count(12500), "12,500");
        assert_eq!(fmt.count(-1200), "-1,200");
    }

    #[test]
    fn test_change_magnitude_drops_sign() {
        let fmt = Formatter::default();
        assert_eq!(fmt.change_magnitude(5.0), "5.0%");
        assert_eq!(fmt.change_magnitude(-3.26), "3.3%");
        assert_eq!(fmt.change_magnitude(-12.0), "12.0%");
        assert_eq!(fmt.change_magnitude(0.0), "0.0%");
    }

    #[test]
    fn test_rate_and_term() {
        let fmt = Formatter::default();
        assert_eq!(fmt.rate(5.126), "5.13%");
        assert_eq!(fmt.rate(7.0), "7.00%");
        assert_eq!(fmt.term_months(36), "36 months");
    }

    #[test]
    fn test_dates() {
        let fmt = Formatter::default();
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(fmt.date(date), "2024-03-09");

        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(fmt.datetime(ts), "2024-03-09 14:05");

        let custom = Formatter::new("$", "%b %d, %Y", "%b %d, %H:%M");
        assert_eq!(custom.date(date), "Mar 09, 2024");
        assert_eq!(custom.datetime(ts), "Mar 09, 14:05");
    }
}
