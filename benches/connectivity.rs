//! Benchmarks for connectivity analysis
//!
//! Measures bridge and articulation point search on paths (deepest DFS),
//! cycles, grids, and chains of triangles, up to a million vertices.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cutscope::analysis::{analyze, articulation_points, bridges};
use cutscope::graph::UndirectedGraph;

/// Create a path 0 - 1 - ... - (n - 1)
fn create_path(n: usize) -> UndirectedGraph {
    let edges = (0..n - 1).map(|i| (i, i + 1)).collect();
    UndirectedGraph::new(n, edges).expect("valid path")
}

/// Create a cycle over n vertices
fn create_cycle(n: usize) -> UndirectedGraph {
    let edges = (0..n).map(|i| (i, (i + 1) % n)).collect();
    UndirectedGraph::new(n, edges).expect("valid cycle")
}

/// Create a side x side grid
fn create_grid(side: usize) -> UndirectedGraph {
    let mut edges = Vec::with_capacity(2 * side * side);
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            if col + 1 < side {
                edges.push((v, v + 1));
            }
            if row + 1 < side {
                edges.push((v, v + side));
            }
        }
    }
    UndirectedGraph::new(side * side, edges).expect("valid grid")
}

/// Create triangles chained by bridges: every third vertex starts a triangle
fn create_triangle_chain(triangles: usize) -> UndirectedGraph {
    let mut edges = Vec::with_capacity(4 * triangles);
    for t in 0..triangles {
        let a = 3 * t;
        edges.push((a, a + 1));
        edges.push((a + 1, a + 2));
        edges.push((a + 2, a));
        if t + 1 < triangles {
            edges.push((a + 2, a + 3));
        }
    }
    UndirectedGraph::new(3 * triangles, edges).expect("valid chain")
}

/// Benchmark bridge search on deep paths
fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_bridges");

    for size in [1_000, 10_000, 100_000, 1_000_000].iter() {
        let graph = create_path(*size);

        group.bench_with_input(BenchmarkId::new("vertices", size), &graph, |b, g| {
            b.iter(|| black_box(bridges(g).expect("analysis succeeds")));
        });
    }

    group.finish();
}

/// Benchmark articulation point search on cycles
fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_articulation_points");

    for size in [1_000, 10_000, 100_000].iter() {
        let graph = create_cycle(*size);

        group.bench_with_input(BenchmarkId::new("vertices", size), &graph, |b, g| {
            b.iter(|| black_box(articulation_points(g).expect("analysis succeeds")));
        });
    }

    group.finish();
}

/// Benchmark combined analysis against the two separate passes
fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    for side in [32, 100, 316].iter() {
        let graph = create_grid(*side);

        group.bench_with_input(BenchmarkId::new("combined", side), &graph, |b, g| {
            b.iter(|| black_box(analyze(g).expect("analysis succeeds")));
        });
        group.bench_with_input(BenchmarkId::new("separate", side), &graph, |b, g| {
            b.iter(|| {
                black_box(bridges(g).expect("analysis succeeds"));
                black_box(articulation_points(g).expect("analysis succeeds"));
            });
        });
    }

    group.finish();
}

/// Benchmark graphs dense in both bridges and cut vertices
fn bench_triangle_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle_chain");

    for triangles in [1_000, 10_000, 100_000].iter() {
        let graph = create_triangle_chain(*triangles);

        group.bench_with_input(BenchmarkId::new("triangles", triangles), &graph, |b, g| {
            b.iter(|| black_box(analyze(g).expect("analysis succeeds")));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_path,
    bench_cycle,
    bench_grid,
    bench_triangle_chain
);
criterion_main!(benches);
