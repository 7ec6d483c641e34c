//! Timesheet computation for the timeclock engine.
//!
//! This module contains the pure computation pipeline: reporting-window
//! resolution, punch grouping, shift reconstruction, overtime splitting,
//! aggregation into timesheets and totals, and live presence derivation.
//! Data flows strictly forward through those stages; no stage performs I/O
//! or carries state across invocations.

mod aggregate;
mod grouping;
mod overtime;
mod presence;
mod reconstruct;
mod window;

use chrono::NaiveDateTime;

use crate::config::EngineSettings;
use crate::models::{EmployeeTimesheet, PunchRecord, TimesheetReport};

pub use aggregate::{aggregate_totals, summarize_shifts};
pub use grouping::{EmployeePunches, group_by_employee};
pub use overtime::{DEFAULT_OVERTIME_THRESHOLD_MINUTES, OvertimeSplit, split_overtime};
pub use presence::{
    AttendanceState, CurrentShift, EmployeeStatus, LastPunch, PresenceReport, PresenceSummary,
    derive_presence, derive_status,
};
pub use reconstruct::reconstruct_shifts;
pub use window::{PeriodRequest, pay_period_start, resolve_window};

/// Builds a full timesheet report from a window-scoped punch stream.
///
/// The punches must already be filtered to the requested window (and to any
/// employee/shop constraints); retrieval is the caller's concern. The
/// report covers the resolved window, one timesheet per employee in
/// first-appearance order, and population-wide totals.
///
/// # Example
///
/// ```
/// use timeclock_engine::config::EngineSettings;
/// use timeclock_engine::engine::{PeriodRequest, build_timesheet_report};
/// use chrono::NaiveDateTime;
///
/// let now = NaiveDateTime::parse_from_str("2026-01-15 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let report = build_timesheet_report(
///     Vec::new(),
///     &PeriodRequest::default(),
///     now,
///     &EngineSettings::default(),
/// );
/// assert_eq!(report.totals.total_employees, 0);
/// ```
pub fn build_timesheet_report(
    punches: Vec<PunchRecord>,
    request: &PeriodRequest,
    now: NaiveDateTime,
    settings: &EngineSettings,
) -> TimesheetReport {
    let period = resolve_window(request, now, &settings.pay_period);

    let timesheets: Vec<EmployeeTimesheet> = group_by_employee(punches)
        .into_iter()
        .map(|group| {
            let shifts = reconstruct_shifts(&group.punches, settings.overtime_threshold_minutes);
            let summary = summarize_shifts(&shifts);
            EmployeeTimesheet {
                employee: group.employee,
                shifts,
                summary,
            }
        })
        .collect();

    let totals = aggregate_totals(&timesheets);

    TimesheetReport {
        period,
        timesheets,
        totals,
    }
}
