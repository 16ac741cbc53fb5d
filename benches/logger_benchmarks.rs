//! Criterion benchmarks for mutex_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mutex_logger::prelude::*;
use std::sync::Arc;
use tempfile::TempDir;

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .console(Arc::new(MemoryConsole::new()))
        .build();

    group.bench_function("info_below_mask", |b| {
        b.iter(|| logger.info(black_box("filtered message")));
    });

    group.bench_function("none_level", |b| {
        b.iter(|| logger.log_level(black_box("never written"), LogLevel::NONE));
    });

    group.finish();
}

// ============================================================================
// Console Benchmarks
// ============================================================================

fn bench_console(c: &mut Criterion) {
    let mut group = c.benchmark_group("console");
    group.throughput(Throughput::Elements(1));

    let console = MemoryConsole::new();
    let logger = Logger::builder()
        .level(LogLevel::ALL | LogLevel::DEBUG)
        .console(Arc::new(console.clone()))
        .build();

    group.bench_function("error", |b| {
        b.iter(|| {
            logger.error(black_box("Error message"));
            console.clear();
        });
    });

    group.bench_function("debug_with_thread", |b| {
        b.iter(|| {
            logger.debug(black_box("Debug message"));
            console.clear();
        });
    });

    group.finish();
}

// ============================================================================
// File Benchmarks
// ============================================================================

fn bench_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("file");
    group.throughput(Throughput::Elements(1));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    for (name, format) in [("text", LogFormat::Text), ("xhtml", LogFormat::Xhtml)] {
        let logger = Logger::builder()
            .format(format)
            .level(LogLevel::ALL)
            .file(temp_dir.path().join(format!("bench.{}", name)))
            .build();

        group.bench_function(name, |b| {
            b.iter(|| logger.error(black_box("File message")));
        });
    }

    group.finish();
}

fn bench_file_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_contended");
    let threads = 4;
    let per_thread = 25;
    group.throughput(Throughput::Elements((threads * per_thread) as u64));

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Arc::new(
        Logger::builder()
            .format(LogFormat::Text)
            .level(LogLevel::ALL)
            .file(temp_dir.path().join("contended.log"))
            .build(),
    );

    group.bench_function("4_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..threads)
                .map(|t| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for i in 0..per_thread {
                            logger.warning(format!("thread {} message {}", t, i));
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_filtered,
    bench_console,
    bench_file,
    bench_file_contended
);
criterion_main!(benches);
