//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use logtree::{LogTree, PeriodMap, TimestampMap};

fn synthetic_maps(streams: u32, messages_per_stream: usize) -> (PeriodMap, TimestampMap) {
    let periods: PeriodMap = (0..streams).map(|id| (id, 100 + id % 400)).collect();
    let timestamps: TimestampMap = (0..streams)
        .map(|id| {
            let period = f64::from(100 + id % 400);
            let jitter = f64::from(id % 7) - 3.0;
            let observed = (0..messages_per_stream)
                .map(|i| i as f64 * period + jitter)
                .collect();
            (id, observed)
        })
        .collect();
    (periods, timestamps)
}

fn benchmark_build(c: &mut Criterion) {
    let (periods, timestamps) = synthetic_maps(1024, 16);

    c.bench_function("build_streams=1024", |b| {
        b.iter(|| {
            let tree = LogTree::build(
                Some(black_box(periods.clone())),
                Some(black_box(timestamps.clone())),
            )
            .unwrap();
            black_box(tree)
        });
    });
}

fn benchmark_lookup(c: &mut Criterion) {
    let (periods, timestamps) = synthetic_maps(1024, 16);
    let tree = LogTree::build(Some(periods), Some(timestamps)).unwrap();

    c.bench_function("find_streams=1024", |b| {
        b.iter(|| {
            for id in 0..1024 {
                black_box(tree.find(black_box(id)));
            }
        });
    });
}

fn benchmark_report(c: &mut Criterion) {
    let (periods, timestamps) = synthetic_maps(1024, 16);
    let tree = LogTree::build(Some(periods), Some(timestamps)).unwrap();

    c.bench_function("accuracy_report_streams=1024", |b| {
        b.iter(|| black_box(tree.accuracy_report()));
    });
}

criterion_group!(benches, benchmark_build, benchmark_lookup, benchmark_report);
criterion_main!(benches);
