use crate::graph::traits::{EdgeRef, EdgeWeights, Graph};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
///
/// Edges are assigned dense indices in insertion order; weights live in an
/// edge-indexed vector so the graph doubles as its own weight map.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex
    outgoing: Vec<Vec<EdgeRef>>,

    /// Endpoints for each edge: edge_id -> (tail, head)
    edges: Vec<(usize, usize)>,

    /// Weight for each edge, indexed by edge id
    weights: Vec<W>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing: Vec::new(),
            edges: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            outgoing: vec![Vec::new(); vertices],
            edges: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Adds a vertex to the graph and returns its ID
    pub fn add_vertex(&mut self) -> usize {
        self.outgoing.push(Vec::new());
        self.outgoing.len() - 1
    }

    /// Adds a directed edge between vertices with the given weight and
    /// returns its edge ID. Returns `None` for an unknown endpoint or a
    /// negative weight. Parallel edges are allowed and get distinct IDs.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Option<usize> {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight < W::zero() {
            return None;
        }

        let id = self.edges.len();
        self.edges.push((from, to));
        self.weights.push(weight);
        self.outgoing[from].push(EdgeRef {
            id,
            source: from,
            target: to,
        });
        Some(id)
    }

    /// Adds a pair of directed edges, one in each direction, with the same
    /// weight. Each direction gets its own edge ID so the two can carry
    /// different reduced costs during a search.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: W) -> Option<(usize, usize)> {
        let forward = self.add_edge(a, b, weight)?;
        let backward = self.add_edge(b, a, weight)?;
        Some((forward, backward))
    }

    /// Returns the weight of an edge by its ID
    pub fn edge_weight(&self, edge: usize) -> Option<W> {
        self.weights.get(edge).copied()
    }

    /// Returns the edge weights as an edge-indexed slice
    pub fn weights(&self) -> &[W] {
        &self.weights
    }

    /// Returns true if there's an edge between the two vertices
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing
            .get(from)
            .map_or(false, |edges| edges.iter().any(|e| e.target == to))
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeRef> + '_> {
        if let Some(edges) = self.outgoing.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn endpoints(&self, edge: usize) -> Option<(usize, usize)> {
        self.edges.get(edge).copied()
    }
}

impl<W> EdgeWeights<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn weight(&self, edge: usize) -> W {
        self.weights[edge]
    }
}
