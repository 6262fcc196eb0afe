use crate::graph::traits::{EdgeRef, EdgeWeights, Graph};
use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

/// A residual view over a base graph, used to search for an augmenting path
///
/// Edges currently carried by already-found paths are hidden from forward
/// traversal and replaced by a reversed copy charging the negation of their
/// reduced cost, so a later search can undo a segment of an earlier path
/// when a cheaper combined routing exists. Carried edges are tight or
/// over-tight under the current potentials, so the reversed copies never
/// cost less than zero. Edges flagged as excluded (an endpoint was never
/// reached by the first pass) disappear entirely.
///
/// This is a borrow-only overlay: the base graph is never copied or mutated.
/// Residual edge IDs below `base.edge_count()` are base edges; IDs at or
/// above it index the reversed copies.
#[derive(Debug)]
pub struct ResidualGraph<'a, G, W>
where
    G: Graph,
    W: Float + Zero + Debug + Copy,
{
    base: &'a G,

    /// Base edge ids hidden from forward traversal
    used: &'a HashSet<usize>,

    /// Base edges dropped entirely, indexed by edge id
    excluded: &'a [bool],

    /// Reduced cost per base edge; a reversed copy costs the negation of
    /// its base edge's value
    costs: &'a [W],

    /// Base edge id behind each reversed copy
    reversed: Vec<usize>,

    /// Indices into `reversed` anchored at each vertex
    reversed_out: Vec<Vec<usize>>,
}

impl<'a, G, W> ResidualGraph<'a, G, W>
where
    G: Graph,
    W: Float + Zero + Debug + Copy,
{
    /// Builds the residual view. `used` holds the edge ids carried by the
    /// paths found so far; each gets a reversed copy anchored at its head.
    pub fn new(base: &'a G, used: &'a HashSet<usize>, excluded: &'a [bool], costs: &'a [W]) -> Self {
        // Sorted so reversed copy ids do not depend on hash order
        let mut carried: Vec<usize> = used.iter().copied().collect();
        carried.sort_unstable();

        let mut reversed_out = vec![Vec::new(); base.vertex_count()];
        for (i, &edge) in carried.iter().enumerate() {
            if let Some((_, head)) = base.endpoints(edge) {
                reversed_out[head].push(i);
            }
        }

        ResidualGraph {
            base,
            used,
            excluded,
            costs,
            reversed: carried,
            reversed_out,
        }
    }

    /// Returns true if the residual edge is a reversed copy
    pub fn is_reversal(&self, edge: usize) -> bool {
        edge >= self.base.edge_count()
    }

    /// Maps a residual edge id back to the base edge it represents
    pub fn base_edge(&self, edge: usize) -> usize {
        if self.is_reversal(edge) {
            self.reversed[edge - self.base.edge_count()]
        } else {
            edge
        }
    }
}

impl<'a, G, W> Graph for ResidualGraph<'a, G, W>
where
    G: Graph,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.base.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.base.edge_count() + self.reversed.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeRef> + '_> {
        let forward = self
            .base
            .outgoing_edges(vertex)
            .filter(|e| !self.used.contains(&e.id) && !self.excluded[e.id]);

        let offset = self.base.edge_count();
        let backward = self
            .reversed_out
            .get(vertex)
            .into_iter()
            .flatten()
            .filter_map(move |&i| {
                let (tail, head) = self.base.endpoints(self.reversed[i])?;
                Some(EdgeRef {
                    id: offset + i,
                    source: head,
                    target: tail,
                })
            });

        Box::new(forward.chain(backward))
    }

    fn endpoints(&self, edge: usize) -> Option<(usize, usize)> {
        if self.is_reversal(edge) {
            let base = *self.reversed.get(edge - self.base.edge_count())?;
            self.base.endpoints(base).map(|(tail, head)| (head, tail))
        } else {
            self.base.endpoints(edge)
        }
    }
}

impl<'a, G, W> EdgeWeights<W> for ResidualGraph<'a, G, W>
where
    G: Graph,
    W: Float + Zero + Debug + Copy,
{
    fn weight(&self, edge: usize) -> W {
        // Clamping absorbs float rounding on tight edges
        if self.is_reversal(edge) {
            let base = self.reversed[edge - self.base.edge_count()];
            (-self.costs[base]).max(W::zero())
        } else {
            self.costs[edge].max(W::zero())
        }
    }
}
