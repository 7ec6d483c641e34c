//! Timesheet summarization and population roll-up.
//!
//! Rolls reconstructed shifts up into per-employee summaries and the
//! per-employee summaries up into population-wide totals. Summation is
//! plain field-wise addition: incomplete shifts carry zero in every metric,
//! so summing all shifts equals summing only the complete ones.

use crate::models::{EmployeeTimesheet, Shift, TimesheetSummary, Totals};

/// Summarizes one employee's shift list.
///
/// `total_shifts` counts complete shifts only; the minute fields sum across
/// the whole list. `average_shift_minutes` is worked minutes per complete
/// shift, rounded to the nearest minute, or 0 with no complete shifts.
///
/// # Example
///
/// ```
/// use timeclock_engine::engine::summarize_shifts;
///
/// let summary = summarize_shifts(&[]);
/// assert_eq!(summary.total_shifts, 0);
/// assert_eq!(summary.average_shift_minutes, 0);
/// ```
pub fn summarize_shifts(shifts: &[Shift]) -> TimesheetSummary {
    let total_shifts = shifts.iter().filter(|s| s.is_complete).count() as i64;
    let total_minutes: i64 = shifts.iter().map(|s| s.total_minutes).sum();
    let break_minutes: i64 = shifts.iter().map(|s| s.break_minutes).sum();
    let work_minutes: i64 = shifts.iter().map(|s| s.work_minutes).sum();
    let regular_minutes: i64 = shifts.iter().map(|s| s.regular_minutes).sum();
    let overtime_minutes: i64 = shifts.iter().map(|s| s.overtime_minutes).sum();

    let average_shift_minutes = if total_shifts > 0 {
        (work_minutes as f64 / total_shifts as f64).round() as i64
    } else {
        0
    };

    TimesheetSummary {
        total_shifts,
        total_minutes,
        break_minutes,
        work_minutes,
        regular_minutes,
        overtime_minutes,
        average_shift_minutes,
    }
}

/// Rolls per-employee summaries up into population-wide totals.
///
/// Every summary field is summed across employees; `total_employees` is the
/// number of timesheets, which equals the number of distinct employees with
/// punches in the window.
pub fn aggregate_totals(timesheets: &[EmployeeTimesheet]) -> Totals {
    timesheets.iter().fold(
        Totals {
            total_employees: timesheets.len() as i64,
            ..Totals::default()
        },
        |mut totals, timesheet| {
            totals.total_shifts += timesheet.summary.total_shifts;
            totals.total_minutes += timesheet.summary.total_minutes;
            totals.break_minutes += timesheet.summary.break_minutes;
            totals.work_minutes += timesheet.summary.work_minutes;
            totals.regular_minutes += timesheet.summary.regular_minutes;
            totals.overtime_minutes += timesheet.summary.overtime_minutes;
            totals
        },
    )
}
