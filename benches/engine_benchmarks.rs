//! Performance benchmarks for the timeclock engine.
//!
//! This benchmark suite tracks the cost of the two hot paths:
//! - Shift reconstruction for a single employee's punch stream
//! - Full report computation over growing employee populations
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, NaiveDate, NaiveDateTime};

use timeclock_engine::config::EngineSettings;
use timeclock_engine::engine::{PeriodRequest, build_timesheet_report, reconstruct_shifts};
use timeclock_engine::models::{EmployeeRef, PunchRecord, PunchType};

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 12)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn make_punch(employee_index: usize, punch_type: PunchType, minute_offset: i64) -> PunchRecord {
    let employee_id = format!("emp_{:04}", employee_index);
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

/// One day's punches for one employee: clock-in, lunch break, clock-out.
fn day_punches(employee_index: usize, day: i64) -> Vec<PunchRecord> {
    let start = day * 1440 + 9 * 60;
    vec![
        make_punch(employee_index, PunchType::ClockIn, start),
        make_punch(employee_index, PunchType::BreakStart, start + 180),
        make_punch(employee_index, PunchType::BreakEnd, start + 210),
        make_punch(employee_index, PunchType::ClockOut, start + 480),
    ]
}

fn punches_for_population(employees: usize, days: i64) -> Vec<PunchRecord> {
    let mut punches = Vec::new();
    for day in 0..days {
        for employee in 0..employees {
            punches.extend(day_punches(employee, day));
        }
    }
    punches
}

fn bench_reconstruct_single_employee(c: &mut Criterion) {
    let punches = punches_for_population(1, 14);

    c.bench_function("reconstruct_14_day_employee", |b| {
        b.iter(|| reconstruct_shifts(black_box(&punches), black_box(480)))
    });
}

fn bench_full_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("timesheet_report");
    let request = PeriodRequest {
        period: Some("pay-period".to_string()),
        ..PeriodRequest::default()
    };
    let now = base_time() + Duration::days(13);
    let settings = EngineSettings::default();

    for employees in [1usize, 10, 100, 500] {
        let punches = punches_for_population(employees, 14);
        group.throughput(Throughput::Elements(punches.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employees),
            &punches,
            |b, punches| {
                b.iter(|| {
                    build_timesheet_report(
                        black_box(punches.clone()),
                        black_box(&request),
                        black_box(now),
                        black_box(&settings),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_reconstruct_single_employee, bench_full_report);
criterion_main!(benches);
