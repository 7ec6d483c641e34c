//! Timesheet, totals, and reporting window models.
//!
//! These are the roll-up structures returned to the caller: one timesheet
//! per employee in the queried population, a population-wide totals block,
//! and the resolved reporting window the query covered. None of them are
//! persisted; they exist for the duration of one computation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::punch::EmployeeRef;
use super::shift::Shift;

/// Per-employee minute totals across a reporting window.
///
/// `total_shifts` counts complete shifts only. The minute fields sum the
/// corresponding field across all shifts; incomplete shifts contribute zero
/// to every sum because their metrics are zero by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimesheetSummary {
    /// Number of complete shifts in the window.
    pub total_shifts: i64,
    /// Sum of shift `total_minutes`.
    pub total_minutes: i64,
    /// Sum of shift `break_minutes`.
    pub break_minutes: i64,
    /// Sum of shift `work_minutes`.
    pub work_minutes: i64,
    /// Sum of shift `regular_minutes`.
    pub regular_minutes: i64,
    /// Sum of shift `overtime_minutes`.
    pub overtime_minutes: i64,
    /// `work_minutes / total_shifts`, rounded to the nearest minute
    /// (0 when there are no complete shifts).
    pub average_shift_minutes: i64,
}

/// One employee's reconstructed shifts and summary for a reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeTimesheet {
    /// The employee the timesheet belongs to.
    pub employee: EmployeeRef,
    /// The employee's shifts in punch order, complete or not.
    pub shifts: Vec<Shift>,
    /// Minute totals across the shifts.
    pub summary: TimesheetSummary,
}

/// Population-wide totals across every employee in the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Number of distinct employees with punches in the window.
    pub total_employees: i64,
    /// Sum of per-employee `total_shifts`.
    pub total_shifts: i64,
    /// Sum of per-employee `total_minutes`.
    pub total_minutes: i64,
    /// Sum of per-employee `break_minutes`.
    pub break_minutes: i64,
    /// Sum of per-employee `work_minutes`.
    pub work_minutes: i64,
    /// Sum of per-employee `regular_minutes`.
    pub regular_minutes: i64,
    /// Sum of per-employee `overtime_minutes`.
    pub overtime_minutes: i64,
}

/// The concrete `[start, end]` instant pair a report covers.
///
/// When the end is derived from a calendar date it is normalized to the last
/// instant of that day (23:59:59.999). The label echoes the requested period
/// keyword, or `"custom"` when none was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// First instant of the window (inclusive).
    pub start: NaiveDateTime,
    /// Last instant of the window (inclusive).
    pub end: NaiveDateTime,
    /// Echo of the requested period keyword, or `"custom"`.
    pub label: String,
}

/// The full output of one timesheet computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetReport {
    /// The resolved reporting window.
    pub period: ReportWindow,
    /// Per-employee timesheets in first-appearance order.
    pub timesheets: Vec<EmployeeTimesheet>,
    /// Population-wide totals.
    pub totals: Totals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_default_is_all_zero() {
        let summary = TimesheetSummary::default();
        assert_eq!(summary.total_shifts, 0);
        assert_eq!(summary.work_minutes, 0);
        assert_eq!(summary.average_shift_minutes, 0);
    }

    #[test]
    fn test_totals_default_is_all_zero() {
        let totals = Totals::default();
        assert_eq!(totals.total_employees, 0);
        assert_eq!(totals.overtime_minutes, 0);
    }

    #[test]
    fn test_report_window_serialization() {
        let window = ReportWindow {
            start: NaiveDateTime::parse_from_str("2026-01-11 00:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            end: NaiveDateTime::parse_from_str("2026-01-15 23:59:59.999", "%Y-%m-%d %H:%M:%S%.3f")
                .unwrap(),
            label: "week".to_string(),
        };

        let json = serde_json::to_string(&window).unwrap();
        assert!(json.contains("\"label\":\"week\""));

        let deserialized: ReportWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(window, deserialized);
    }

    #[test]
    fn test_summary_roundtrip() {
        let summary = TimesheetSummary {
            total_shifts: 3,
            total_minutes: 1500,
            break_minutes: 90,
            work_minutes: 1410,
            regular_minutes: 1380,
            overtime_minutes: 30,
            average_shift_minutes: 470,
        };

        let json = serde_json::to_string(&summary).unwrap();
        let deserialized: TimesheetSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
