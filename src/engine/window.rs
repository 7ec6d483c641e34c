//! Reporting window resolution.
//!
//! Turns a period keyword or explicit calendar-date bounds into a concrete
//! `[start, end]` instant pair. Resolution never fails: a missing or
//! unrecognized keyword silently falls back to the current week, and the
//! label always echoes what was asked for.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::PayPeriodSchedule;
use crate::models::ReportWindow;

/// The caller's description of the window a report should cover.
///
/// Explicit `start_date`/`end_date` bounds take precedence over the
/// `period` keyword when both dates are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// Explicit first calendar day of the window.
    pub start_date: Option<NaiveDate>,
    /// Explicit last calendar day of the window.
    pub end_date: Option<NaiveDate>,
    /// Period keyword: `today`, `week`, `month`, or `pay-period`.
    pub period: Option<String>,
}

/// Resolves a period request into a concrete reporting window.
///
/// - Explicit dates (both present) win: start is the first instant of
///   `start_date`, end the last instant of `end_date`.
/// - `today` starts at the beginning of the current day; `week` at the most
///   recent Sunday; `month` at the first of the current month;
///   `pay-period` at the start of the pay period containing `now` per the
///   given schedule.
/// - Anything else, including no keyword at all, resolves like `week`.
/// - The end defaults to the last instant (23:59:59.999) of `now`'s day.
/// - The label echoes the requested keyword, or `"custom"` when none was
///   given.
///
/// # Examples
///
/// ```
/// use timeclock_engine::config::PayPeriodSchedule;
/// use timeclock_engine::engine::{resolve_window, PeriodRequest};
/// use chrono::NaiveDateTime;
///
/// let now = NaiveDateTime::parse_from_str("2026-01-15 10:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let request = PeriodRequest {
///     period: Some("today".to_string()),
///     ..PeriodRequest::default()
/// };
///
/// let window = resolve_window(&request, now, &PayPeriodSchedule::default());
/// assert_eq!(window.start.to_string(), "2026-01-15 00:00:00");
/// assert_eq!(window.label, "today");
/// ```
pub fn resolve_window(
    request: &PeriodRequest,
    now: NaiveDateTime,
    schedule: &PayPeriodSchedule,
) -> ReportWindow {
    let label = request
        .period
        .clone()
        .unwrap_or_else(|| "custom".to_string());

    if let (Some(start_date), Some(end_date)) = (request.start_date, request.end_date) {
        return ReportWindow {
            start: start_of_day(start_date),
            end: end_of_day(end_date),
            label,
        };
    }

    let start = match request.period.as_deref() {
        Some("today") => start_of_day(now.date()),
        Some("month") => start_of_day(first_of_month(now.date())),
        Some("pay-period") => start_of_day(pay_period_start(now, schedule)),
        // "week" and every unrecognized keyword
        _ => start_of_day(most_recent_sunday(now.date())),
    };

    ReportWindow {
        start,
        end: end_of_day(now.date()),
        label,
    }
}

/// Returns the first day of the pay period containing `now`.
///
/// Whole days elapsed since the anchor are rounded down to a multiple of
/// the period length, so every period begins on the anchor's weekday.
pub fn pay_period_start(now: NaiveDateTime, schedule: &PayPeriodSchedule) -> NaiveDate {
    let anchor = start_of_day(schedule.anchor);
    let days_since_anchor = (now - anchor).num_days();
    let offset = days_since_anchor - days_since_anchor.rem_euclid(schedule.length_days);
    schedule.anchor + Duration::days(offset)
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid wall-clock time")
}

fn most_recent_sunday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("every month has a first day")
}
