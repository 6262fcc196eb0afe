use log::warn;
use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::graph::{EdgeRef, EdgeWeights, Graph};
use crate::Result;

/// Shortest path tree produced by a single-source run
///
/// Owned by the run that produced it; distances double as the vertex
/// potential for the reduced-cost transform of the following run.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance from source to each vertex, `None` for unreached vertices
    pub distances: Vec<Option<W>>,

    /// Edge used to reach each vertex on the tree, indexed by vertex
    pub pred_edge: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns true if the vertex was reached from the source
    pub fn reached(&self, vertex: usize) -> bool {
        self.distances.get(vertex).map_or(false, Option::is_some)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Compute shortest paths from a source vertex to all reachable vertices
    fn shortest_path_tree<G, M>(
        &self,
        graph: &G,
        weights: &M,
        source: usize,
    ) -> Result<ShortestPathTree<W>>
    where
        G: Graph,
        M: EdgeWeights<W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as an edge sequence
    ///
    /// Follows predecessor edges back from the target. Returns `None` if the
    /// target was never reached or the tree is malformed.
    fn edge_path<G>(&self, tree: &ShortestPathTree<W>, graph: &G, target: usize) -> Option<Vec<EdgeRef>>
    where
        G: Graph,
    {
        if target >= tree.distances.len() || tree.distances[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != tree.source {
            if !visited.insert(current) {
                warn!("cycle detected in path reconstruction at vertex {}", current);
                return None;
            }

            let edge = tree.pred_edge[current]?;
            let (tail, head) = graph.endpoints(edge)?;
            if head != current {
                warn!("predecessor edge {} does not end at vertex {}", edge, current);
                return None;
            }

            path.push(EdgeRef {
                id: edge,
                source: tail,
                target: head,
            });
            current = tail;

            if path.len() > tree.pred_edge.len() {
                warn!("path length exceeds graph size, likely a cycle");
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}
