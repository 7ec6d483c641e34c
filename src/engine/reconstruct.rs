//! Shift reconstruction from the punch stream.
//!
//! A per-employee state machine walks punches in timestamp order and folds
//! them into a list of shifts. The state is the tail of the list: a punch
//! either opens a new shift, mutates the most recent one while it is open,
//! or is dropped. Malformed orderings never raise; orphan events degrade to
//! no-ops and an unterminated shift stays in the list with
//! `is_complete = false` and all derived minutes at zero.

use crate::models::{Break, PunchRecord, PunchType, Shift};

use super::overtime::split_overtime;

/// Reconstructs one employee's shifts from their ordered punch list.
///
/// Punches must be in ascending timestamp order. The transition rules:
///
/// - `CLOCK_IN` always opens a new shift. A shift still open at that point
///   is left behind permanently incomplete, never merged or auto-closed.
/// - `CLOCK_OUT` closes the most recent shift if it is open; the shift's
///   durations and its regular/overtime split against `overtime_threshold`
///   are computed at this point. Without an open shift it is dropped.
/// - `BREAK_START` appends an open break to the open shift, if any.
/// - `BREAK_END` closes the open shift's last break if that break is open.
///
/// # Example
///
/// ```
/// use timeclock_engine::engine::reconstruct_shifts;
///
/// let shifts = reconstruct_shifts(&[], 480);
/// assert!(shifts.is_empty());
/// ```
pub fn reconstruct_shifts(punches: &[PunchRecord], overtime_threshold: i64) -> Vec<Shift> {
    punches.iter().fold(Vec::new(), |mut shifts, punch| {
        apply_punch(&mut shifts, punch, overtime_threshold);
        shifts
    })
}

/// Applies one punch to the shift list, mutating at most the last shift.
fn apply_punch(shifts: &mut Vec<Shift>, punch: &PunchRecord, overtime_threshold: i64) {
    match punch.punch_type {
        PunchType::ClockIn => {
            shifts.push(Shift::open(punch));
        }
        PunchType::ClockOut => {
            if let Some(shift) = open_shift(shifts) {
                shift.close(punch);
                let split = split_overtime(shift.work_minutes, overtime_threshold);
                shift.regular_minutes = split.regular_minutes;
                shift.overtime_minutes = split.overtime_minutes;
            }
        }
        PunchType::BreakStart => {
            if let Some(shift) = open_shift(shifts) {
                shift.breaks.push(Break::open(punch.timestamp));
            }
        }
        PunchType::BreakEnd => {
            if let Some(shift) = open_shift(shifts) {
                if shift.last_break_open() {
                    if let Some(brk) = shift.breaks.last_mut() {
                        brk.close(punch.timestamp);
                    }
                }
            }
        }
    }
}

/// Guard: the most recent shift, if there is one and it is still open.
fn open_shift(shifts: &mut [Shift]) -> Option<&mut Shift> {
    shifts.last_mut().filter(|shift| shift.is_open())
}
