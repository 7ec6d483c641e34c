//! Settings types for the timeclock engine.
//!
//! This module contains the strongly-typed settings structures that are
//! deserialized from the YAML settings file. Every field has a default
//! matching the engine's built-in constants, so a partial (or empty)
//! settings file is valid.

use chrono::NaiveDate;
use serde::Deserialize;

/// Default per-shift overtime threshold in minutes (8 hours).
pub const DEFAULT_OVERTIME_THRESHOLD_MINUTES: i64 = 480;

/// Default length of a pay period in days (bi-weekly).
pub const DEFAULT_PAY_PERIOD_LENGTH_DAYS: i64 = 14;

/// The bi-weekly pay-period schedule.
///
/// Pay periods are rolling windows of `length_days` days anchored at a fixed
/// reference date, so every period begins on the same weekday as the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PayPeriodSchedule {
    /// The reference date the schedule is anchored at.
    #[serde(default = "default_anchor")]
    pub anchor: NaiveDate,
    /// The length of one pay period in days.
    #[serde(default = "default_length_days")]
    pub length_days: i64,
}

impl Default for PayPeriodSchedule {
    fn default() -> Self {
        PayPeriodSchedule {
            anchor: default_anchor(),
            length_days: default_length_days(),
        }
    }
}

/// Engine settings loaded from `engine.yaml`.
///
/// # Example
///
/// ```
/// use timeclock_engine::config::EngineSettings;
///
/// let settings = EngineSettings::default();
/// assert_eq!(settings.overtime_threshold_minutes, 480);
/// assert_eq!(settings.pay_period.length_days, 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EngineSettings {
    /// Per-shift overtime threshold in minutes of worked time.
    #[serde(default = "default_overtime_threshold")]
    pub overtime_threshold_minutes: i64,
    /// The pay-period schedule used by the `pay-period` reporting window.
    #[serde(default)]
    pub pay_period: PayPeriodSchedule,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            overtime_threshold_minutes: default_overtime_threshold(),
            pay_period: PayPeriodSchedule::default(),
        }
    }
}

fn default_overtime_threshold() -> i64 {
    DEFAULT_OVERTIME_THRESHOLD_MINUTES
}

fn default_length_days() -> i64 {
    DEFAULT_PAY_PERIOD_LENGTH_DAYS
}

// The organization-wide payroll reference date. Periods are counted forward
// from here in whole-period steps.
fn default_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("2024-01-01 is a valid date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_engine_constants() {
        let settings = EngineSettings::default();
        assert_eq!(settings.overtime_threshold_minutes, 480);
        assert_eq!(
            settings.pay_period.anchor,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(settings.pay_period.length_days, 14);
    }

    #[test]
    fn test_deserialize_full_settings() {
        let yaml = r#"
overtime_threshold_minutes: 600
pay_period:
  anchor: 2025-06-02
  length_days: 7
"#;
        let settings: EngineSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.overtime_threshold_minutes, 600);
        assert_eq!(
            settings.pay_period.anchor,
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
        );
        assert_eq!(settings.pay_period.length_days, 7);
    }

    #[test]
    fn test_deserialize_partial_settings_fills_defaults() {
        let yaml = "overtime_threshold_minutes: 540\n";
        let settings: EngineSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.overtime_threshold_minutes, 540);
        assert_eq!(settings.pay_period, PayPeriodSchedule::default());
    }
}
