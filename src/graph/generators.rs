use crate::graph::DirectedGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a width x height lattice with unit weights and both directions
/// of every grid edge, mirroring the classic disjoint-path test topology
pub fn generate_lattice(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                let _ = graph.add_undirected_edge(vertex, vertex + 1, OrderedFloat(1.0));
            }
            if y + 1 < height {
                let _ = graph.add_undirected_edge(vertex, vertex + width, OrderedFloat(1.0));
            }
        }
    }

    graph
}

/// Generates a random directed graph with `n` vertices and up to `m` edges,
/// weights drawn from `1.0..max_weight`
///
/// Seeded so repeated calls with the same arguments produce the same graph;
/// self-loops are skipped, parallel edges are allowed.
pub fn generate_random(
    n: usize,
    m: usize,
    max_weight: f64,
    seed: u64,
) -> DirectedGraph<OrderedFloat<f64>> {
    assert!(n > 1, "need at least two vertices");
    assert!(max_weight > 1.0, "max_weight must exceed 1.0");

    let mut graph = DirectedGraph::with_vertices(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..m {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from == to {
            continue;
        }
        let weight = OrderedFloat(rng.gen_range(1.0..max_weight));
        let _ = graph.add_edge(from, to, weight);
    }

    graph
}
