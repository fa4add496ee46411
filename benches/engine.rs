use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use route_sssp::graph::generators::{generate_random_graph, generate_street_grid, intersection_id};
use route_sssp::ShortestPathEngine;

fn street_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("street_grid");
    for side in [20usize, 60, 120] {
        let graph = generate_street_grid(side, side, 7).unwrap();
        let engine = ShortestPathEngine::new(&graph);
        let start = intersection_id(0, 0);
        let end = intersection_id(side - 1, side - 1);

        group.bench_with_input(BenchmarkId::new("query", side), &side, |b, _| {
            b.iter(|| engine.query(black_box(&start), black_box(&end)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("query_all", side), &side, |b, _| {
            b.iter(|| engine.query_all(black_box(&start)).unwrap())
        });
    }
    group.finish();
}

fn random_graph(c: &mut Criterion) {
    let graph = generate_random_graph(20_000, 3.0, 42).unwrap();
    let engine = ShortestPathEngine::new(&graph);
    let pairs: Vec<(String, String)> = (0..64)
        .map(|i| (format!("v{}", i), format!("v{}", 19_999 - i)))
        .collect();

    c.bench_function("random_query_many_64", |b| {
        b.iter(|| engine.query_many(black_box(&pairs)))
    });
}

criterion_group!(benches, street_grid, random_graph);
criterion_main!(benches);
