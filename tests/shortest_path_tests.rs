use ordered_float::OrderedFloat;
use suurballe::graph::generators::generate_lattice;
use suurballe::{Dijkstra, DirectedGraph, Error, ShortestPathAlgorithm};

type W = OrderedFloat<f64>;

fn w(value: f64) -> W {
    OrderedFloat(value)
}

#[test]
fn distances_and_predecessor_edges_on_a_small_graph() {
    let mut g = DirectedGraph::with_vertices(4);
    let ab = g.add_edge(0, 1, w(1.0)).unwrap();
    let ac = g.add_edge(0, 2, w(4.0)).unwrap();
    let bc = g.add_edge(1, 2, w(2.0)).unwrap();
    let cd = g.add_edge(2, 3, w(1.0)).unwrap();

    let dijkstra = Dijkstra::new();
    let tree = dijkstra.shortest_path_tree(&g, &g, 0).unwrap();

    assert_eq!(tree.distances[0], Some(w(0.0)));
    assert_eq!(tree.distances[1], Some(w(1.0)));
    assert_eq!(tree.distances[2], Some(w(3.0)));
    assert_eq!(tree.distances[3], Some(w(4.0)));

    assert_eq!(tree.pred_edge[0], None);
    assert_eq!(tree.pred_edge[1], Some(ab));
    assert_eq!(tree.pred_edge[2], Some(bc), "the 0->1->2 route beats {}", ac);
    assert_eq!(tree.pred_edge[3], Some(cd));

    let path = dijkstra.edge_path(&tree, &g, 3).unwrap();
    let ids: Vec<usize> = path.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![ab, bc, cd]);
}

#[test]
fn equal_distance_ties_break_by_vertex_index() {
    // Both middle vertices sit at distance 1 and both reach the sink at 2;
    // the lower-indexed vertex settles first and keeps the predecessor slot
    let mut g = DirectedGraph::with_vertices(4);
    g.add_edge(0, 1, w(1.0)).unwrap();
    g.add_edge(0, 2, w(1.0)).unwrap();
    let via_b = g.add_edge(1, 3, w(1.0)).unwrap();
    g.add_edge(2, 3, w(1.0)).unwrap();

    let dijkstra = Dijkstra::new();
    for _ in 0..5 {
        let tree = dijkstra.shortest_path_tree(&g, &g, 0).unwrap();
        assert_eq!(tree.pred_edge[3], Some(via_b));
    }
}

#[test]
fn unreached_vertices_keep_no_distance() {
    let mut g = DirectedGraph::with_vertices(4);
    g.add_edge(0, 1, w(1.0)).unwrap();
    g.add_edge(2, 3, w(1.0)).unwrap();

    let dijkstra = Dijkstra::new();
    let tree = dijkstra.shortest_path_tree(&g, &g, 0).unwrap();

    assert!(tree.reached(1));
    assert!(!tree.reached(2));
    assert!(!tree.reached(3));
    assert!(dijkstra.edge_path(&tree, &g, 3).is_none());
}

#[test]
fn invalid_source_is_rejected() {
    let g: DirectedGraph<W> = DirectedGraph::with_vertices(2);
    let dijkstra = Dijkstra::new();
    let err = dijkstra.shortest_path_tree(&g, &g, 5).unwrap_err();
    assert_eq!(err, Error::InvalidVertex(5));
}

#[test]
fn lattice_distances_match_manhattan_distance() {
    let width = 8;
    let g = generate_lattice(width, 8);
    let dijkstra = Dijkstra::new();
    let tree = dijkstra.shortest_path_tree(&g, &g, 0).unwrap();

    for y in 0..8 {
        for x in 0..width {
            let vertex = y * width + x;
            assert_eq!(
                tree.distances[vertex],
                Some(w((x + y) as f64)),
                "vertex ({}, {})",
                x,
                y
            );
        }
    }

    let path = dijkstra.edge_path(&tree, &g, 63).unwrap();
    assert_eq!(path.len(), 14);
    assert_eq!(path[0].source, 0);
    assert_eq!(path[13].target, 63);
}
