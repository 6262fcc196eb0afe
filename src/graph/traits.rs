use std::fmt::Debug;
use std::marker::PhantomData;

use num_traits::One;

/// A directed edge as seen during traversal: a dense edge index plus its
/// two endpoints. Edge indices are stable for the lifetime of the graph and
/// index into edge-keyed working arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    /// Dense edge index
    pub id: usize,
    /// Tail vertex (edge origin)
    pub source: usize,
    /// Head vertex (edge destination)
    pub target: usize,
}

/// Trait representing a directed graph with dense vertex and edge indices
///
/// This is the whole surface the path algorithms depend on: any
/// representation that can enumerate outgoing edges and resolve edge
/// endpoints can be searched, including transient overlays.
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeRef> + '_>;

    /// Returns the (tail, head) endpoints of an edge, if it exists
    fn endpoints(&self, edge: usize) -> Option<(usize, usize)>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// Read-only lookup from edge index to weight
///
/// Kept separate from [`Graph`] so the same topology can be searched under
/// different cost functions (original weights, reduced costs) without
/// touching the graph.
pub trait EdgeWeights<W> {
    /// Gets the weight of the edge with the given index
    fn weight(&self, edge: usize) -> W;
}

impl<W: Copy> EdgeWeights<W> for Vec<W> {
    fn weight(&self, edge: usize) -> W {
        self[edge]
    }
}

impl<W: Copy> EdgeWeights<W> for [W] {
    fn weight(&self, edge: usize) -> W {
        self[edge]
    }
}

/// Weight map assigning every edge the same unit weight, for unweighted
/// graphs where the cheapest disjoint paths are simply the shortest ones
#[derive(Debug, Default, Clone, Copy)]
pub struct UnitWeights<W>(PhantomData<W>);

impl<W> UnitWeights<W> {
    /// Creates a unit weight map
    pub fn new() -> Self {
        UnitWeights(PhantomData)
    }
}

impl<W: One> EdgeWeights<W> for UnitWeights<W> {
    fn weight(&self, _edge: usize) -> W {
        W::one()
    }
}
