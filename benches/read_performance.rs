//! Performance benchmarks for layered-config.
//!
//! These benchmarks cover the read paths:
//! - Raw and typed accessor latency
//! - Reads scaling with concurrent reader threads
//! - Reads while a writer keeps merging sources
//! - Snapshot and validation cost

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use layered_config::prelude::*;
use layered_config::sources::DefaultSource;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

fn populated_store(keys: usize) -> ConfigStore {
    let store = ConfigStore::new();
    store.set("server.port", 8080).unwrap();
    store.set("server.host", "localhost").unwrap();
    store.set("ratio", 0.5).unwrap();
    store.set("debug", true).unwrap();
    store.set("hosts", vec!["a", "b", "c"]).unwrap();
    for i in 0..keys {
        store.set(format!("filler.{}", i), i as i64).unwrap();
    }
    store
}

/// Benchmark single-threaded accessor latency
fn benchmark_read_latency(c: &mut Criterion) {
    let store = populated_store(100);

    let mut group = c.benchmark_group("read_latency");
    group.bench_function("get", |b| {
        b.iter(|| black_box(store.get(black_box("server.port"))));
    });
    group.bench_function("get_int", |b| {
        b.iter(|| black_box(store.get_int(black_box("server.port"))));
    });
    group.bench_function("get_int_from_float", |b| {
        b.iter(|| black_box(store.get_int(black_box("ratio"))));
    });
    group.bench_function("get_string", |b| {
        b.iter(|| black_box(store.get_string(black_box("server.host"))));
    });
    group.bench_function("get_string_slice", |b| {
        b.iter(|| black_box(store.get_string_slice(black_box("hosts"))));
    });
    group.bench_function("get_missing", |b| {
        b.iter(|| black_box(store.get_int(black_box("nonexistent"))));
    });
    group.finish();
}

/// Benchmark concurrent reads with varying thread counts
fn benchmark_concurrent_reads(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_reads");

    for num_threads in [1, 2, 4, 8, 16] {
        group.throughput(Throughput::Elements(num_threads as u64 * 1000));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_threads", num_threads)),
            &num_threads,
            |b, &num_threads| {
                let store = Arc::new(populated_store(100));
                let barrier = Arc::new(Barrier::new(num_threads + 1));

                b.iter_custom(|iters| {
                    let mut handles = vec![];
                    let start_barrier = Arc::clone(&barrier);

                    for _ in 0..num_threads {
                        let store = Arc::clone(&store);
                        let b = Arc::clone(&barrier);

                        let handle = thread::spawn(move || {
                            // Wait for all threads to be ready
                            b.wait();

                            let start = std::time::Instant::now();
                            for _ in 0..iters {
                                black_box(store.get_int("server.port"));
                            }
                            start.elapsed()
                        });

                        handles.push(handle);
                    }

                    // Start all threads
                    start_barrier.wait();

                    let total_duration: Duration =
                        handles.into_iter().map(|h| h.join().unwrap()).sum();

                    // Return average duration across threads
                    total_duration / num_threads as u32
                });
            },
        );
    }

    group.finish();
}

/// Benchmark merges while readers keep reading
fn benchmark_load_under_readers(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_under_readers");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("load_with_8_readers", |b| {
        b.iter_custom(|iters| {
            let store = Arc::new(populated_store(100));
            let keep_running = Arc::new(AtomicBool::new(true));
            let reads_completed = Arc::new(AtomicUsize::new(0));

            let readers: Vec<_> = (0..8)
                .map(|_| {
                    let store = Arc::clone(&store);
                    let running = Arc::clone(&keep_running);
                    let counter = Arc::clone(&reads_completed);
                    thread::spawn(move || {
                        while running.load(Ordering::Relaxed) {
                            black_box(store.get_int("server.port"));
                            counter.fetch_add(1, Ordering::Relaxed);
                        }
                    })
                })
                .collect();

            let start = std::time::Instant::now();
            for i in 0..iters {
                let source = DefaultSource::new()
                    .with_value("server.port", 8080 + (i % 100) as i64)
                    .with_value("server.host", format!("host-{}", i));
                store.load(&source).unwrap();
            }
            let duration = start.elapsed();

            keep_running.store(false, Ordering::Relaxed);
            for handle in readers {
                handle.join().unwrap();
            }

            let total_reads = reads_completed.load(Ordering::Relaxed);
            println!("  Completed {} reads during {} loads", total_reads, iters);

            duration
        });
    });

    group.finish();
}

/// Benchmark snapshot and validation cost by store size
fn benchmark_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for keys in [10, 100, 1000] {
        let store = populated_store(keys);
        store.add_validator(RequiredValidator::new(["server.port", "server.host"]));
        store.add_validator(RangeValidator::new("server.port", 1024.0, 65535.0).integer());
        store.add_validator(TypeValidator::new("server.host", ValueKind::String));

        group.bench_with_input(BenchmarkId::from_parameter(keys), &store, |b, store| {
            b.iter(|| store.validate().unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_read_latency,
    benchmark_concurrent_reads,
    benchmark_load_under_readers,
    benchmark_validate,
);

criterion_main!(benches);
