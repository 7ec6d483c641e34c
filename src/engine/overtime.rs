//! Per-shift overtime splitting.
//!
//! Worked minutes are split against a fixed per-shift threshold: everything
//! at or under the threshold is regular time, everything over it is
//! overtime. The threshold is evaluated shift by shift, not per calendar
//! day across multiple shifts.

use serde::{Deserialize, Serialize};

pub use crate::config::DEFAULT_OVERTIME_THRESHOLD_MINUTES;

/// The regular/overtime split of one shift's worked minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Worked minutes at or under the threshold.
    pub regular_minutes: i64,
    /// Worked minutes over the threshold.
    pub overtime_minutes: i64,
}

/// Splits a shift's worked minutes at the overtime threshold.
///
/// The threshold is exclusive on the overtime side: a shift worked exactly
/// at the threshold has no overtime. Worked minutes at or under the
/// threshold pass through unchanged, including a negative value produced by
/// malformed break data.
///
/// # Arguments
///
/// * `work_minutes` - The shift's worked minutes (total minus breaks)
/// * `threshold` - The per-shift overtime threshold in minutes
///
/// # Examples
///
/// ```
/// use timeclock_engine::engine::{split_overtime, DEFAULT_OVERTIME_THRESHOLD_MINUTES};
///
/// let at_threshold = split_overtime(480, DEFAULT_OVERTIME_THRESHOLD_MINUTES);
/// assert_eq!(at_threshold.regular_minutes, 480);
/// assert_eq!(at_threshold.overtime_minutes, 0);
///
/// let over = split_overtime(500, DEFAULT_OVERTIME_THRESHOLD_MINUTES);
/// assert_eq!(over.regular_minutes, 480);
/// assert_eq!(over.overtime_minutes, 20);
/// ```
pub fn split_overtime(work_minutes: i64, threshold: i64) -> OvertimeSplit {
    if work_minutes > threshold {
        OvertimeSplit {
            regular_minutes: threshold,
            overtime_minutes: work_minutes - threshold,
        }
    } else {
        OvertimeSplit {
            regular_minutes: work_minutes,
            overtime_minutes: 0,
        }
    }
}
