//! Shift model and related types.
//!
//! A shift is the span between a clock-in and its matching clock-out for one
//! employee, containing zero or more breaks. Shifts are derived values: they
//! are reconstructed from the punch stream, mutated while open, and become
//! immutable once closed by a clock-out.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::punch::{PunchRecord, PunchRef, ShopRef};

/// A break taken during a shift.
///
/// A break with no end is open; open breaks report a duration of zero and
/// are excluded from the enclosing shift's break total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Break {
    /// The start time of the break.
    pub start: NaiveDateTime,
    /// The end time of the break, or `None` while the break is open.
    pub end: Option<NaiveDateTime>,
    /// Whole minutes between start and end (0 while open).
    pub duration_minutes: i64,
}

impl Break {
    /// Opens a new break at the given instant.
    pub fn open(start: NaiveDateTime) -> Self {
        Break {
            start,
            end: None,
            duration_minutes: 0,
        }
    }

    /// Returns true if the break has not been ended yet.
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Closes the break at the given instant.
    ///
    /// The duration is the floor of the elapsed seconds divided by 60.
    pub fn close(&mut self, end: NaiveDateTime) {
        self.duration_minutes = (end - self.start).num_minutes();
        self.end = Some(end);
    }
}

/// A reconstructed work shift with its breaks and derived minute totals.
///
/// All derived metrics stay at 0 until the shift is completed by a
/// clock-out. `work_minutes` always equals `regular_minutes +
/// overtime_minutes`, and `break_minutes` counts closed breaks only.
///
/// # Example
///
/// ```
/// use timeclock_engine::models::{PunchRef, Shift};
/// use chrono::NaiveDateTime;
///
/// let shift = Shift {
///     clock_in: PunchRef {
///         id: "punch_001".to_string(),
///         timestamp: NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///         latitude: None,
///         longitude: None,
///         is_within_geofence: None,
///         punch_method: "mobile".to_string(),
///         photo_url: None,
///     },
///     clock_out: None,
///     breaks: vec![],
///     shop: None,
///     is_complete: false,
///     total_minutes: 0,
///     break_minutes: 0,
///     work_minutes: 0,
///     regular_minutes: 0,
///     overtime_minutes: 0,
/// };
/// assert!(shift.is_open());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// The clock-in punch that opened the shift.
    pub clock_in: PunchRef,
    /// The clock-out punch that closed the shift, or `None` while open.
    pub clock_out: Option<PunchRef>,
    /// Breaks taken during the shift, in punch order.
    pub breaks: Vec<Break>,
    /// The shop the clock-in punch was recorded at, if known.
    pub shop: Option<ShopRef>,
    /// Whether the shift has been closed by a clock-out.
    pub is_complete: bool,
    /// Whole minutes between clock-in and clock-out (0 while open).
    pub total_minutes: i64,
    /// Sum of closed break durations in whole minutes (0 while open).
    pub break_minutes: i64,
    /// `total_minutes - break_minutes` (0 while open).
    pub work_minutes: i64,
    /// The portion of `work_minutes` at or under the overtime threshold.
    pub regular_minutes: i64,
    /// The portion of `work_minutes` over the overtime threshold.
    pub overtime_minutes: i64,
}

impl Shift {
    /// Opens a new shift from a clock-in punch.
    ///
    /// The shift's shop is taken from the clock-in punch.
    pub fn open(clock_in: &PunchRecord) -> Self {
        Shift {
            clock_in: PunchRef::from(clock_in),
            clock_out: None,
            breaks: Vec::new(),
            shop: clock_in.shop.clone(),
            is_complete: false,
            total_minutes: 0,
            break_minutes: 0,
            work_minutes: 0,
            regular_minutes: 0,
            overtime_minutes: 0,
        }
    }

    /// Returns true if the shift has not been closed yet.
    pub fn is_open(&self) -> bool {
        !self.is_complete
    }

    /// Returns true if the shift's most recent break is still open.
    pub fn last_break_open(&self) -> bool {
        self.breaks.last().is_some_and(Break::is_open)
    }

    /// Closes the shift with a clock-out punch and computes its durations.
    ///
    /// `total_minutes` is the floor of the elapsed seconds between clock-in
    /// and clock-out divided by 60. `break_minutes` sums the already
    /// truncated durations of closed breaks; a break still open at clock-out
    /// contributes nothing. `work_minutes` is the difference and is not
    /// clamped at zero.
    ///
    /// The regular/overtime split is applied separately by the
    /// reconstructor, since the threshold is not a property of the shift.
    pub fn close(&mut self, clock_out: &PunchRecord) {
        self.clock_out = Some(PunchRef::from(clock_out));
        self.is_complete = true;
        self.total_minutes = (clock_out.timestamp - self.clock_in.timestamp).num_minutes();
        self.break_minutes = self
            .breaks
            .iter()
            .filter(|b| !b.is_open())
            .map(|b| b.duration_minutes)
            .sum();
        self.work_minutes = self.total_minutes - self.break_minutes;
    }
}
