// Trie router benchmarks
//
// Run with: cargo bench -p waypoint-router --bench router_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use waypoint_core::RouteId;
use waypoint_router::{Router, RouterBuilder};

fn param_route(i: usize) -> String {
    format!("/{}/::{}/::{}/::{}", i, i + 1, i + 2, i + 3)
}

fn concrete_path(i: usize) -> String {
    format!("/{}/{}/{}/{}", i, i + 1, i + 2, i + 3)
}

fn build_router(size: usize) -> Router {
    let mut builder = RouterBuilder::new();
    for i in 1..=size {
        builder
            .add(&param_route(i), RouteId::new(i).unwrap())
            .unwrap();
    }
    builder.build()
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_insert");

    for size in [100usize, 1_000, 10_000] {
        let paths: Vec<String> = (1..=size).map(param_route).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &paths, |b, paths| {
            b.iter(|| {
                let mut builder = RouterBuilder::new();
                for (i, path) in paths.iter().enumerate() {
                    let _ = builder.add(black_box(path), RouteId::new(i + 1).unwrap());
                }
                builder
            });
        });
    }

    group.finish();
}

fn benchmark_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_match");
    group.throughput(Throughput::Elements(1));

    for size in [100usize, 1_000, 10_000] {
        let router = build_router(size);
        let request = concrete_path(size / 2);

        group.bench_with_input(BenchmarkId::new("params", size), &request, |b, request| {
            b.iter(|| router.find(black_box(request)));
        });
    }

    let mut builder = RouterBuilder::new();
    builder
        .add("GET/api/v1/users/profile", RouteId::new(1).unwrap())
        .unwrap();
    let router = builder.build();
    group.bench_function("static", |b| {
        b.iter(|| router.find(black_box("GET/api/v1/users/profile")));
    });

    group.bench_function("miss", |b| {
        b.iter(|| router.find(black_box("GET/api/v2/users/profile")));
    });

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_match);
criterion_main!(benches);
