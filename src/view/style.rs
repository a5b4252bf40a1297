//! Conditional Styling
//!
//! Pure functions from numbers to discrete style choices. The templates
//! only ever see the resulting class names.

/// Direction of a period-over-period change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Classify a signed change. NaN counts as flat.
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    /// Bootstrap Icons class for the arrow, `None` when flat
    pub fn icon_class(&self) -> Option<&'static str> {
        match self {
            Trend::Up => Some("bi-arrow-up"),
            Trend::Down => Some("bi-arrow-down"),
            Trend::Flat => None,
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            Trend::Up => "text-success",
            Trend::Down => "text-danger",
            Trend::Flat => "text-muted",
        }
    }
}

/// Color band of a category's risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Success,
    Warning,
    Danger,
}

impl RiskBand {
    pub fn from_level(risk_level: i64) -> Self {
        if risk_level < 30 {
            RiskBand::Success
        } else if risk_level < 70 {
            RiskBand::Warning
        } else {
            RiskBand::Danger
        }
    }

    /// Progress bar background class
    pub fn bar_class(&self) -> &'static str {
        match self {
            RiskBand::Success => "bg-success",
            RiskBand::Warning => "bg-warning",
            RiskBand::Danger => "bg-danger",
        }
    }
}

/// Urgency of an upcoming payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyTier {
    Danger,
    Warning,
    Info,
}

impl UrgencyTier {
    pub fn from_days_until(days_until: i64) -> Self {
        if days_until <= 3 {
            UrgencyTier::Danger
        } else if days_until <= 7 {
            UrgencyTier::Warning
        } else {
            UrgencyTier::Info
        }
    }

    /// Badge background class
    pub fn badge_class(&self) -> &'static str {
        match self {
            UrgencyTier::Danger => "bg-danger",
            UrgencyTier::Warning => "bg-warning",
            UrgencyTier::Info => "bg-info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_follows_sign() {
        assert_eq!(Trend::from_change(4.2), Trend::Up);
        assert_eq!(Trend::from_change(0.0001), Trend::Up);
        assert_eq!(Trend::from_change(-3.0), Trend::Down);
        assert_eq!(Trend::from_change(0.0), Trend::Flat);
        assert_eq!(Trend::from_change(-0.0), Trend::Flat);
        assert_eq!(Trend::from_change(f64::NAN), Trend::Flat);
    }

    #[test]
    fn test_trend_icons() {
        assert_eq!(Trend::Up.icon_class(), Some("bi-arrow-up"));
        assert_eq!(Trend::Down.icon_class(), Some("bi-arrow-down"));
        assert_eq!(Trend::Flat.icon_class(), None);
    }

    #[test]
    fn test_risk_band_thresholds() {
        for level in [-5, 0, 15, 29] {
            assert_eq!(RiskBand::from_level(level), RiskBand::Success, "level {}", level);
        }
        for level in [30, 50, 69] {
            assert_eq!(RiskBand::from_level(level), RiskBand::Warning, "level {}", level);
        }
        for level in [70, 85, 100, 140] {
            assert_eq!(RiskBand::from_level(level), RiskBand::Danger, "level {}", level);
        }
    }

    #[test]
    fn test_urgency_tier_thresholds() {
        for days in [-2, 0, 1, 3] {
            assert_eq!(UrgencyTier::from_days_until(days), UrgencyTier::Danger, "days {}", days);
        }
        for days in [4, 5, 7] {
            assert_eq!(UrgencyTier::from_days_until(days), UrgencyTier::Warning, "days {}", days);
        }
        for days in [8, 14, 30] {
            assert_eq!(UrgencyTier::from_days_until(days), UrgencyTier::Info, "days {}", days);
        }
    }

    #[test]
    fn test_class_names() {
        assert_eq!(RiskBand::Warning.bar_class(), "bg-warning");
        assert_eq!(UrgencyTier::Info.badge_class(), "bg-info");
        assert_eq!(Trend::Down.text_class(), "text-danger");
    }
}
