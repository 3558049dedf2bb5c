//! Performance benchmarks for the attendance engine.
//!
//! This benchmark suite verifies that the ingestion pipeline meets
//! performance targets:
//! - Single employee, one-week period: < 100μs mean
//! - Single employee, 15-day period: < 1ms mean
//! - 50 employees, 15-day period: < 10ms mean
//! - HTTP round trip for a 50-employee paste: < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::api::{AppState, create_router};
use attendance_engine::calculation::dates_in_range;
use attendance_engine::config::ConfigLoader;
use attendance_engine::ingest::process_pasted_data;
use attendance_engine::models::Holidays;

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/attendance").expect("Failed to load config");
    AppState::new(config)
}

/// Expands a payroll period starting on Monday 03/04/2024.
fn period_dates(day_count: usize) -> Vec<String> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid start date");
    let end = start + chrono::Duration::days(day_count as i64 - 1);
    dates_in_range(start, end)
}

/// Builds one pasted row covering `day_count` days, alternating shift shapes
/// and sprinkling absences the way real timecards do.
fn pasted_row(name: &str, day_count: usize) -> String {
    let mut fields = vec![name.to_string()];
    for day in 0..day_count {
        match day % 4 {
            0 => {
                fields.push("8:00 AM".to_string());
                fields.push("5:00 PM".to_string());
            }
            1 => {
                fields.push("8:00 AM".to_string());
                fields.push("7:30 PM".to_string());
            }
            2 => {
                fields.push("10:00 PM".to_string());
                fields.push("6:00 AM".to_string());
            }
            _ => {
                fields.push("-".to_string());
                fields.push("-".to_string());
            }
        }
    }
    fields.join("\t")
}

/// Builds a multi-employee paste block.
fn pasted_block(employee_count: usize, day_count: usize) -> String {
    (0..employee_count)
        .map(|i| pasted_row(&format!("EMPLOYEE, {:03}", i), day_count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Benchmark: one employee over a one-week period.
///
/// Target: < 100μs mean
fn bench_single_employee_week(c: &mut Criterion) {
    let dates = period_dates(7);
    let pasted = pasted_block(1, 7);
    let holidays = Holidays::default();

    c.bench_function("single_employee_week", |b| {
        b.iter(|| {
            let employees =
                process_pasted_data(black_box(&dates), black_box(&pasted), &holidays).unwrap();
            black_box(employees)
        })
    });
}

/// Benchmark: one employee over a semi-monthly 15-day period.
///
/// Target: < 1ms mean
fn bench_single_employee_period(c: &mut Criterion) {
    let dates = period_dates(15);
    let pasted = pasted_block(1, 15);
    let holidays = Holidays {
        regular: ["03/05/2024".to_string()].into(),
        special_non_working: ["03/09/2024".to_string()].into(),
        ..Default::default()
    };

    c.bench_function("single_employee_period", |b| {
        b.iter(|| {
            let employees =
                process_pasted_data(black_box(&dates), black_box(&pasted), &holidays).unwrap();
            black_box(employees)
        })
    });
}

/// Benchmark: full department paste, 50 employees over 15 days.
///
/// Target: < 10ms mean
fn bench_department_paste(c: &mut Criterion) {
    let dates = period_dates(15);
    let pasted = pasted_block(50, 15);
    let holidays = Holidays::default();

    let mut group = c.benchmark_group("department_paste");
    group.throughput(Throughput::Elements(50));

    group.bench_function("employees_50_days_15", |b| {
        b.iter(|| {
            let employees =
                process_pasted_data(black_box(&dates), black_box(&pasted), &holidays).unwrap();
            black_box(employees)
        })
    });

    group.finish();
}

/// Benchmark: employee-count scaling over a fixed 15-day period.
fn bench_scaling(c: &mut Criterion) {
    let dates = period_dates(15);
    let holidays = Holidays::default();

    let mut group = c.benchmark_group("scaling");

    for employee_count in [1, 5, 10, 25, 50].iter() {
        let pasted = pasted_block(*employee_count, 15);

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| {
                b.iter(|| {
                    let employees =
                        process_pasted_data(black_box(&dates), black_box(&pasted), &holidays)
                            .unwrap();
                    black_box(employees)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: HTTP round trip through the router for a 50-employee paste.
///
/// Target: < 50ms mean
fn bench_http_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);

    let request_json = serde_json::json!({
        "period": {"start_date": "2024-03-04", "end_date": "2024-03-18"},
        "pasted_text": pasted_block(50, 15),
        "holidays": {"regular": ["03/05/2024"]}
    });
    let body = serde_json::to_string(&request_json).unwrap();

    c.bench_function("http_summaries_50_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/summaries")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_single_employee_week,
    bench_single_employee_period,
    bench_department_paste,
    bench_scaling,
    bench_http_round_trip,
);
criterion_main!(benches);
