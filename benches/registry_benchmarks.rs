//! Criterion benchmarks for rust_logger_tree

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rust_logger_tree::prelude::*;
use std::sync::Arc;

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn bench_get_or_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_or_create");
    group.throughput(Throughput::Elements(1));

    let registry = SharedLoggerTree::new();
    registry.get_or_create("svc.http.server");

    group.bench_function("existing_name", |b| {
        b.iter(|| {
            let logger = registry.get_or_create(black_box("svc.http.server"));
            black_box(logger)
        });
    });

    group.bench_function("existing_name_no_lock", |b| {
        let registry = LocalLoggerTree::new();
        registry.get_or_create("svc.http.server");
        b.iter(|| {
            let logger = registry.get_or_create(black_box("svc.http.server"));
            black_box(logger)
        });
    });

    group.bench_function("fresh_deep_name", |b| {
        b.iter_batched(
            SharedLoggerTree::new,
            |registry| {
                let logger = registry.get_or_create(black_box("a.b.c.d.e"));
                black_box(logger)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_bulk_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_operations");

    let registry = SharedLoggerTree::new();
    for i in 0..100 {
        registry.get_or_create(&format!("svc.worker{}.queue", i));
    }

    group.bench_function("set_tree_severity_100_nodes", |b| {
        b.iter(|| {
            registry.set_tree_severity(black_box(Severity::Warn));
        });
    });

    group.bench_function("set_branch_severity_100_nodes", |b| {
        b.iter(|| {
            registry
                .set_branch_severity(black_box("svc"), black_box(Severity::Warn))
                .unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Logging Hot Path Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let registry = SharedLoggerTree::new();
    let logger = registry.get_or_create("bench");
    logger.set_severity(Severity::Warn);
    logger.add_sink(SinkFactory::noop());

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.debug(black_box("This should be filtered"));
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger.error(black_box("This should be logged"));
        });
    });

    group.finish();
}

fn bench_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("fanout");
    group.throughput(Throughput::Elements(1));

    let registry = SharedLoggerTree::new();
    let logger = registry.get_or_create("bench.fanout");
    for _ in 0..4 {
        logger.add_sink(SinkFactory::noop());
    }

    group.bench_function("four_noop_sinks", |b| {
        b.iter(|| {
            logger.info(black_box("Fan-out message"));
        });
    });

    group.bench_function("four_noop_sinks_with_pattern", |b| {
        logger.set_formatter(PatternFormatter::with_pattern("[bench] %(message)\n"));
        b.iter(|| {
            logger.info(black_box("Fan-out message"));
        });
    });

    group.finish();
}

fn bench_concurrent_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_creation");

    group.bench_function("four_threads_distinct_names", |b| {
        b.iter_batched(
            || Arc::new(SharedLoggerTree::new()),
            |registry| {
                let handles: Vec<_> = (0..4)
                    .map(|thread_id| {
                        let registry = Arc::clone(&registry);
                        std::thread::spawn(move || {
                            for i in 0..25 {
                                registry.get_or_create(&format!("t{}.n{}", thread_id, i));
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_get_or_create,
    bench_bulk_operations,
    bench_level_filtering,
    bench_fanout,
    bench_concurrent_creation
);

criterion_main!(benches);
