//! Live attendance derivation.
//!
//! Classifies each employee's current attendance state from the tail of
//! their punch sequence: the last punch alone decides whether they are
//! clocked in, on break, or clocked out, and the most recent clock-in
//! anchors the running shift duration. Like the rest of the engine this is
//! a pure function of its inputs; "now" is supplied by the caller.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeRef, PunchRecord, PunchType, ShopRef};

use super::grouping::EmployeePunches;

/// An employee's current attendance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceState {
    /// The employee is on the clock and not on a break.
    ClockedIn,
    /// The employee is on the clock but currently on a break.
    OnBreak,
    /// The employee is off the clock (or has no punches at all).
    ClockedOut,
}

/// The last punch an employee recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastPunch {
    /// The kind of time-clock event.
    #[serde(rename = "type")]
    pub punch_type: PunchType,
    /// When the punch was recorded.
    pub timestamp: NaiveDateTime,
    /// The shop where the punch was recorded, if known.
    pub shop: Option<ShopRef>,
}

/// The running shift of an employee who is currently on the clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentShift {
    /// When the running shift's clock-in was recorded.
    pub clock_in_time: NaiveDateTime,
    /// Whole minutes elapsed since clock-in.
    pub elapsed_minutes: i64,
    /// Elapsed time rendered as `"{hours}h {minutes}m"`.
    pub formatted: String,
    /// The shop of the clock-in punch, if known.
    pub shop: Option<ShopRef>,
}

/// One employee's derived attendance status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeStatus {
    /// The employee the status belongs to.
    pub employee: EmployeeRef,
    /// The derived attendance state.
    pub state: AttendanceState,
    /// The employee's most recent punch, if any.
    pub last_punch: Option<LastPunch>,
    /// The running shift, present while clocked in or on break.
    pub current_shift: Option<CurrentShift>,
}

/// Population counts by attendance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresenceSummary {
    /// Number of employees in the input.
    pub total_employees: i64,
    /// Employees currently clocked in and not on break.
    pub clocked_in: i64,
    /// Employees currently on break.
    pub on_break: i64,
    /// Employees currently off the clock.
    pub clocked_out: i64,
}

/// The full presence roll-up for a population of employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceReport {
    /// Counts by attendance state.
    pub summary: PresenceSummary,
    /// Per-employee statuses in first-appearance order.
    pub statuses: Vec<EmployeeStatus>,
}

/// Derives one employee's attendance status from their ordered punches.
///
/// The last punch decides the state: `BREAK_START` means on break,
/// `CLOCK_IN` or `BREAK_END` mean clocked in, and anything else (including
/// an empty list) means clocked out. While on the clock, the running shift
/// is anchored at the most recent `CLOCK_IN`.
pub fn derive_status(
    employee: &EmployeeRef,
    punches: &[PunchRecord],
    now: NaiveDateTime,
) -> EmployeeStatus {
    let last = punches.last();
    let state = match last.map(|p| p.punch_type) {
        Some(PunchType::ClockIn | PunchType::BreakEnd) => AttendanceState::ClockedIn,
        Some(PunchType::BreakStart) => AttendanceState::OnBreak,
        Some(PunchType::ClockOut) | None => AttendanceState::ClockedOut,
    };

    let current_shift = if state == AttendanceState::ClockedOut {
        None
    } else {
        punches
            .iter()
            .rev()
            .find(|p| p.punch_type == PunchType::ClockIn)
            .map(|clock_in| {
                let elapsed_minutes = (now - clock_in.timestamp).num_minutes();
                CurrentShift {
                    clock_in_time: clock_in.timestamp,
                    elapsed_minutes,
                    formatted: format_elapsed(elapsed_minutes),
                    shop: clock_in.shop.clone(),
                }
            })
    };

    EmployeeStatus {
        employee: employee.clone(),
        state,
        last_punch: last.map(|p| LastPunch {
            punch_type: p.punch_type,
            timestamp: p.timestamp,
            shop: p.shop.clone(),
        }),
        current_shift,
    }
}

/// Derives statuses for a grouped population and counts them by state.
///
/// # Example
///
/// ```
/// use timeclock_engine::engine::derive_presence;
/// use chrono::NaiveDateTime;
///
/// let now = NaiveDateTime::parse_from_str("2026-01-15 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let report = derive_presence(&[], now);
/// assert_eq!(report.summary.total_employees, 0);
/// ```
pub fn derive_presence(groups: &[EmployeePunches], now: NaiveDateTime) -> PresenceReport {
    let statuses: Vec<EmployeeStatus> = groups
        .iter()
        .map(|group| derive_status(&group.employee, &group.punches, now))
        .collect();

    let summary = statuses.iter().fold(
        PresenceSummary {
            total_employees: statuses.len() as i64,
            ..PresenceSummary::default()
        },
        |mut summary, status| {
            match status.state {
                AttendanceState::ClockedIn => summary.clocked_in += 1,
                AttendanceState::OnBreak => summary.on_break += 1,
                AttendanceState::ClockedOut => summary.clocked_out += 1,
            }
            summary
        },
    );

    PresenceReport { summary, statuses }
}

fn format_elapsed(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}
