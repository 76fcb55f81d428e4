//! Performance benchmarks for the Approval Routing and Compensation Engine.
//!
//! This benchmark suite verifies that the evaluators meet performance targets:
//! - Single compensation calculation: < 100μs mean
//! - Compensation request over HTTP: < 1ms mean
//! - Batch of 100 compensation requests: < 100ms mean
//! - Approver resolution: < 10μs mean
//! - 12-month loan schedule: < 10μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use hrflow_engine::api::{AppState, create_router};
use hrflow_engine::calculation::{resolve_approver, schedule_by_duration};
use hrflow_engine::config::ConfigLoader;
use hrflow_engine::models::{RequestSubject, RequestType};

use axum::{body::Body, http::Request};
use rust_decimal::Decimal;
use std::str::FromStr;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a compensation request body with the given number of assignments.
fn create_compensation_body(employee_id: &str, assignment_count: usize) -> String {
    let allowances: Vec<serde_json::Value> = (0..assignment_count)
        .map(|i| {
            if i % 2 == 0 {
                serde_json::json!({
                    "label": format!("Allowance {}", i),
                    "template": {
                        "name": format!("Allowance {}", i),
                        "amount_type": "flat",
                        "amount": "250.00"
                    }
                })
            } else {
                serde_json::json!({
                    "label": format!("Allowance {}", i),
                    "template": {
                        "name": format!("Allowance {}", i),
                        "amount_type": "percentage",
                        "amount": "10",
                        "percentage_of": "base_salary"
                    }
                })
            }
        })
        .collect();

    let request = serde_json::json!({
        "employee": {
            "id": employee_id,
            "nationality": "Saudi Arabia",
            "base_salary": "5000.00",
            "is_subject_to_gosi": true,
            "work_location_id": "riyadh_hq"
        },
        "allowances": allowances,
        "deductions": [{
            "label": "Pension Top-up",
            "template": {
                "name": "Pension Top-up",
                "amount_type": "percentage",
                "amount": "5",
                "percentage_of": "base_salary"
            }
        }]
    });

    serde_json::to_string(&request).unwrap()
}

/// Benchmark: Single compensation request over HTTP.
///
/// Target: < 1ms mean
fn bench_compensation_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_compensation_body("emp_bench_001", 4);

    c.bench_function("compensation_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/compensation/calculate")
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

/// Benchmark: Batch of 100 compensation requests.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    // Pre-create 100 different requests (vary employee IDs and assignment
    // counts for a realistic payroll-run shape).
    let requests: Vec<String> = (0..100)
        .map(|i| create_compensation_body(&format!("emp_batch_{:03}", i), 1 + i % 5))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/compensation/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Direct approver resolution, no HTTP layer.
///
/// Target: < 10μs mean
fn bench_approver_resolution(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let workflow = config
        .workflow_for(RequestType::TimeOff)
        .expect("workflow configured")
        .clone();
    let subject = RequestSubject {
        id: "emp_bench_001".to_string(),
        manager_id: None,
    };

    c.bench_function("approver_resolution_fallback", |b| {
        b.iter(|| black_box(resolve_approver(&workflow, 1, &subject, 1).unwrap()))
    });
}

/// Benchmark: Loan schedule derivation for various durations.
fn bench_loan_schedule(c: &mut Criterion) {
    let principal = Decimal::from_str("25000.00").unwrap();
    let start = chrono::NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();

    let mut group = c.benchmark_group("loan_schedule");

    for months in [6u32, 12, 24, 48].iter() {
        group.throughput(Throughput::Elements(*months as u64));
        group.bench_with_input(BenchmarkId::new("months", months), months, |b, &months| {
            b.iter(|| black_box(schedule_by_duration(principal, months, start).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compensation_request,
    bench_batch_100,
    bench_approver_resolution,
    bench_loan_schedule,
);
criterion_main!(benches);
