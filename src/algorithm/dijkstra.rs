use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{EdgeWeights, Graph};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Requires non-negative weights, which the disjoint-path orchestrator
/// validates before the first run and the reduced-cost transform preserves
/// for later runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path_tree<G, M>(
        &self,
        graph: &G,
        weights: &M,
        source: usize,
    ) -> Result<ShortestPathTree<W>>
    where
        G: Graph,
        M: EdgeWeights<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut pred_edge: Vec<Option<usize>> = vec![None; n];

        distances[source] = Some(W::zero());

        // Equal distances pop in vertex-index order, so the settled order
        // and the resulting tree are reproducible for a fixed input
        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Skip stale queue entries
            if let Some(current_dist) = distances[u] {
                if current_dist < dist_u {
                    continue;
                }
            }

            for edge in graph.outgoing_edges(u) {
                let new_dist = dist_u + weights.weight(edge.id);

                let should_update = match distances[edge.target] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[edge.target] = Some(new_dist);
                    pred_edge[edge.target] = Some(edge.id);
                    queue.push(edge.target, new_dist);
                }
            }
        }

        Ok(ShortestPathTree {
            distances,
            pred_edge,
            source,
        })
    }
}
