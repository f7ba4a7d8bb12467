//! Performance benchmarks for the Compensation Status Engine.
//!
//! This benchmark suite tracks the cost of the two hot paths:
//! - Pure rule-engine evaluation over a salary history
//! - End-to-end status endpoint latency, cache hit vs. cold computation
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use std::str::FromStr;
use std::sync::Arc;

use axum::{Router, body::Body, http::Request};
use rust_decimal::Decimal;
use tower::ServiceExt;

use compensation_engine::api::{AppState, create_router};
use compensation_engine::cache::StatusCache;
use compensation_engine::config::CacheSettings;
use compensation_engine::models::SalaryRecord;
use compensation_engine::retry::RetryOptions;
use compensation_engine::rules;
use compensation_engine::service::StatusService;
use compensation_engine::store::InMemoryRecordStore;

/// Builds a salary history of the given length cycling through the year.
fn create_history(records: usize) -> Vec<SalaryRecord> {
    (0..records)
        .map(|i| {
            SalaryRecord::new(
                Decimal::from_str("5350.00").unwrap(),
                (i as u32 % 12) + 1,
                2025 - (i as i32 / 12),
            )
        })
        .collect()
}

/// Creates a router over the seeded store, with the cache as configured.
fn create_bench_router(cache: StatusCache) -> Router {
    let service = StatusService::new(
        Arc::new(InMemoryRecordStore::seeded()),
        cache,
        RetryOptions::immediate(3),
    );
    create_router(AppState::new(service))
}

fn status_request() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/employees/NAT1001/status")
        .body(Body::empty())
        .unwrap()
}

/// Benchmarks pure rule-engine evaluation.
fn bench_rule_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_engine");

    for size in [12usize, 100] {
        let records = create_history(size);
        group.bench_with_input(
            BenchmarkId::new("evaluate", size),
            &records,
            |b, records| b.iter(|| rules::evaluate(black_box(records))),
        );
    }

    group.finish();
}

/// Benchmarks the status endpoint when every request hits the cache.
fn bench_endpoint_cache_hit(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_bench_router(StatusCache::connect(&CacheSettings::default()));

    // Warm the cache so every measured request is a hit.
    rt.block_on(async {
        let response = router.clone().oneshot(status_request()).await.unwrap();
        assert!(response.status().is_success());
    });

    c.bench_function("status_endpoint_cache_hit", |b| {
        b.to_async(&rt).iter(|| {
            let router = router.clone();
            async move {
                let response = router.oneshot(status_request()).await.unwrap();
                black_box(response.status())
            }
        })
    });
}

/// Benchmarks the status endpoint with the cache degraded, so every
/// request runs the full fetch-and-compute path.
fn bench_endpoint_cold(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_bench_router(StatusCache::disconnected());

    c.bench_function("status_endpoint_cold", |b| {
        b.to_async(&rt).iter(|| {
            let router = router.clone();
            async move {
                let response = router.oneshot(status_request()).await.unwrap();
                black_box(response.status())
            }
        })
    });
}

criterion_group!(
    benches,
    bench_rule_engine,
    bench_endpoint_cache_hit,
    bench_endpoint_cold
);
criterion_main!(benches);
