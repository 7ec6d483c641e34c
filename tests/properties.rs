//! Property-based tests for the timeclock engine.
//!
//! These tests feed arbitrary (but per-employee time-ordered) punch
//! streams through the engine and assert the invariants that must hold for
//! every input: determinism, additivity of the roll-ups, the
//! regular/overtime identity, and grouping stability under interleaving.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use timeclock_engine::config::EngineSettings;
use timeclock_engine::engine::{
    PeriodRequest, build_timesheet_report, group_by_employee, reconstruct_shifts, split_overtime,
};
use timeclock_engine::models::{EmployeeRef, PunchRecord, PunchType};

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 12)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn make_punch(employee_index: usize, punch_type: PunchType, minute_offset: i64) -> PunchRecord {
    let employee_id = format!("emp_{:02}", employee_index);
    PunchRecord {
        id: format!("{}_{}", employee_id, minute_offset),
        employee: EmployeeRef {
            id: employee_id.clone(),
            name: format!("Employee {}", employee_id),
            role: "technician".to_string(),
            photo_url: None,
        },
        shop: None,
        punch_type,
        timestamp: base_time() + Duration::minutes(minute_offset),
        latitude: None,
        longitude: None,
        is_within_geofence: None,
        punch_method: "mobile".to_string(),
        photo_url: None,
    }
}

fn arb_punch_type() -> impl Strategy<Value = PunchType> {
    prop_oneof![
        Just(PunchType::ClockIn),
        Just(PunchType::ClockOut),
        Just(PunchType::BreakStart),
        Just(PunchType::BreakEnd),
    ]
}

/// A punch stream over up to three employees with globally ascending
/// timestamps (which implies per-employee ascending order).
fn arb_punch_stream() -> impl Strategy<Value = Vec<PunchRecord>> {
    prop::collection::vec((0usize..3, arb_punch_type(), 1i64..120), 0..60).prop_map(|events| {
        let mut offset = 0;
        events
            .into_iter()
            .map(|(employee_index, punch_type, gap)| {
                offset += gap;
                make_punch(employee_index, punch_type, offset)
            })
            .collect()
    })
}

fn build_report(punches: Vec<PunchRecord>) -> timeclock_engine::models::TimesheetReport {
    let request = PeriodRequest {
        period: Some("week".to_string()),
        ..PeriodRequest::default()
    };
    let now = base_time() + Duration::days(6);
    build_timesheet_report(punches, &request, now, &EngineSettings::default())
}

proptest! {
    /// The engine is a pure function: identical input, identical output.
    #[test]
    fn prop_report_is_deterministic(punches in arb_punch_stream()) {
        let first = build_report(punches.clone());
        let second = build_report(punches);
        prop_assert_eq!(first, second);
    }

    /// Every complete shift satisfies work = regular + overtime, and every
    /// incomplete shift carries zero in all derived fields.
    #[test]
    fn prop_shift_minute_identity(punches in arb_punch_stream()) {
        let report = build_report(punches);
        for timesheet in &report.timesheets {
            for shift in &timesheet.shifts {
                if shift.is_complete {
                    prop_assert_eq!(
                        shift.work_minutes,
                        shift.regular_minutes + shift.overtime_minutes
                    );
                    prop_assert_eq!(
                        shift.work_minutes,
                        shift.total_minutes - shift.break_minutes
                    );
                } else {
                    prop_assert_eq!(shift.total_minutes, 0);
                    prop_assert_eq!(shift.work_minutes, 0);
                    prop_assert_eq!(shift.regular_minutes, 0);
                    prop_assert_eq!(shift.overtime_minutes, 0);
                }
            }
        }
    }

    /// Summaries are the field-wise sums of their shifts, and totals are the
    /// field-wise sums of the summaries.
    #[test]
    fn prop_aggregation_is_additive(punches in arb_punch_stream()) {
        let report = build_report(punches);

        for timesheet in &report.timesheets {
            let work: i64 = timesheet.shifts.iter().map(|s| s.work_minutes).sum();
            let complete = timesheet.shifts.iter().filter(|s| s.is_complete).count() as i64;
            prop_assert_eq!(timesheet.summary.work_minutes, work);
            prop_assert_eq!(timesheet.summary.total_shifts, complete);
        }

        let total_work: i64 = report
            .timesheets
            .iter()
            .map(|ts| ts.summary.work_minutes)
            .sum();
        prop_assert_eq!(report.totals.work_minutes, total_work);
        prop_assert_eq!(
            report.totals.total_employees,
            report.timesheets.len() as i64
        );
    }

    /// Grouping an already-partitioned stream reproduces the same groups as
    /// grouping the interleaved original.
    #[test]
    fn prop_regrouping_is_idempotent(punches in arb_punch_stream()) {
        let grouped = group_by_employee(punches.clone());
        let partitioned: Vec<PunchRecord> = grouped
            .iter()
            .flat_map(|group| group.punches.clone())
            .collect();
        prop_assert_eq!(group_by_employee(partitioned), grouped);
    }

    /// Strictly alternating clock-in/clock-out pairs produce one complete
    /// shift per pair.
    #[test]
    fn prop_alternating_pairs_all_complete(pairs in 0usize..20) {
        let mut punches = Vec::new();
        for pair in 0..pairs {
            let start = (pair as i64) * 600;
            punches.push(make_punch(0, PunchType::ClockIn, start));
            punches.push(make_punch(0, PunchType::ClockOut, start + 480));
        }

        let shifts = reconstruct_shifts(&punches, 480);
        prop_assert_eq!(shifts.len(), pairs);
        prop_assert!(shifts.iter().all(|s| s.is_complete));
    }

    /// The overtime split always reassembles into the input and never
    /// produces overtime at or under the threshold.
    #[test]
    fn prop_overtime_split_identity(work in -1000i64..2000, threshold in 1i64..1000) {
        let split = split_overtime(work, threshold);
        prop_assert_eq!(split.regular_minutes + split.overtime_minutes, work);
        prop_assert!(split.overtime_minutes >= 0);
        if work <= threshold {
            prop_assert_eq!(split.overtime_minutes, 0);
        } else {
            prop_assert_eq!(split.regular_minutes, threshold);
        }
    }
}
