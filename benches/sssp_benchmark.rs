use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graph_search::{Graph, dijkstra_shortest_path};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn create_sparse_graph(n: usize, density: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(n);

    let m = ((n as f64) * density).round() as usize;

    // Ensure connectivity by creating a spanning tree first
    for i in 1..n {
        let parent = rng.random_range(0..i);
        let weight = rng.random_range(1..10);
        graph.add_edge(parent, i, weight);
    }

    let remaining_edges = m.saturating_sub(n - 1);
    for _ in 0..remaining_edges {
        let from = rng.random_range(0..n);
        let to = rng.random_range(0..n);
        if from != to {
            graph.add_edge(from, to, rng.random_range(1..10));
        }
    }

    graph
}

fn create_dense_graph(n: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(n);

    // ~n^1.5 edges
    let num_edges = ((n as f64).powf(1.5)) as usize;

    for _ in 0..num_edges {
        let from = rng.random_range(0..n);
        let to = rng.random_range(0..n);
        if from != to {
            graph.add_edge(from, to, rng.random_range(0..20));
        }
    }

    graph
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dijkstra");

    for &n in &[100, 1_000, 10_000, 100_000] {
        let sparse_graph = create_sparse_graph(n, 4.0, 42);
        group.bench_with_input(BenchmarkId::new("Sparse", n), &sparse_graph, |b, graph| {
            b.iter(|| black_box(dijkstra_shortest_path(graph, 0)))
        });
    }

    for &n in &[100, 1_000, 5_000] {
        let dense_graph = create_dense_graph(n, 42);
        group.bench_with_input(BenchmarkId::new("Dense", n), &dense_graph, |b, graph| {
            b.iter(|| black_box(dijkstra_shortest_path(graph, 0)))
        });
    }

    group.finish();
}

fn bench_path_extraction(c: &mut Criterion) {
    let graph = create_sparse_graph(10_000, 4.0, 7);
    let result = dijkstra_shortest_path(&graph, 0).unwrap();

    c.bench_function("Extract all paths 10k", |b| {
        b.iter(|| {
            for v in 0..graph.vertices {
                black_box(result.path_to(v).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_dijkstra, bench_path_extraction);
criterion_main!(benches);
