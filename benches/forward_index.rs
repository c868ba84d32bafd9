//! 转发索引性能基准测试

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use phone_forward::PhoneForward;
use std::hint::black_box;

fn populated(size: usize) -> PhoneForward {
    let mut pf = PhoneForward::new();
    for i in 0..size {
        pf.add(&format!("{}", 100_000 + i), &format!("{}", 900 + i % 50))
            .unwrap();
    }
    pf
}

// ============== add 基准测试 ==============

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward/add");

    for size in [100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("redirections", size), &size, |b, &size| {
            b.iter_batched(
                PhoneForward::new,
                |mut pf| {
                    for i in 0..size {
                        pf.add(&format!("{}", 100_000 + i), "42").unwrap();
                    }
                    pf
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// ============== get / reverse 基准测试 ==============

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward/query");
    let pf = populated(10_000);

    group.bench_function("get_hit", |b| {
        b.iter(|| black_box(pf.get(black_box("1050001234"))));
    });

    group.bench_function("get_miss", |b| {
        b.iter(|| black_box(pf.get(black_box("555123456"))));
    });

    group.bench_function("reverse_shared_target", |b| {
        b.iter(|| black_box(pf.reverse(black_box("9201234"))));
    });

    group.finish();
}

// ============== remove 基准测试 ==============

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward/remove");

    for size in [1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("subtree", size), &size, |b, &size| {
            b.iter_batched(
                || populated(size),
                |mut pf| {
                    pf.remove("1");
                    pf
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============== non_trivial_count 基准测试 ==============

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward/non_trivial_count");
    let pf = populated(10_000);

    for len in [4, 8, 32] {
        group.bench_with_input(BenchmarkId::new("len", len), &len, |b, &len| {
            b.iter(|| black_box(pf.non_trivial_count(black_box("0123456789"), len)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_queries, bench_remove, bench_count);
criterion_main!(benches);
