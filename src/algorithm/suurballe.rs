use log::{debug, trace};
use num_traits::{Float, Zero};
use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::graph::{EdgeWeights, Graph, ResidualGraph};
use crate::{Error, Result};

/// A single source-to-target path through the base graph
#[derive(Debug, Clone, PartialEq)]
pub struct Path<W> {
    /// Edge ids in traversal order
    pub edges: Vec<usize>,

    /// Vertex sequence, one longer than `edges`
    pub vertices: Vec<usize>,

    /// Sum of the original (not reduced) weights along the path
    pub total_weight: W,
}

impl<W> Path<W>
where
    W: Zero,
{
    /// A zero-edge path sitting at a single vertex
    pub fn trivial(vertex: usize) -> Self {
        Path {
            edges: Vec::new(),
            vertices: vec![vertex],
            total_weight: W::zero(),
        }
    }

    /// Number of edges on the path
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the path has no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Sums the total weight of a set of paths
pub fn combined_weight<W>(paths: &[Path<W>]) -> W
where
    W: Zero + Copy,
{
    paths
        .iter()
        .fold(W::zero(), |acc, p| acc + p.total_weight)
}

/// Suurballe's algorithm for minimum-weight edge-disjoint paths
///
/// Runs one Dijkstra pass per requested path. After each pass the pass's
/// distances become a vertex potential that rewrites every remaining edge to
/// its non-negative reduced cost, and the pass's path is folded into the
/// running edge set with reversal cancellation. The final edge set decomposes
/// into the requested number of edge-disjoint paths whose combined original
/// weight is minimal.
#[derive(Debug, Clone)]
pub struct Suurballe {
    /// Number of edge-disjoint paths to search for
    paths: usize,

    /// Return however many paths exist instead of failing when fewer than
    /// the requested number can be found
    best_effort: bool,
}

impl Default for Suurballe {
    fn default() -> Self {
        Self::new()
    }
}

impl Suurballe {
    /// Creates a search for the classic two disjoint paths
    pub fn new() -> Self {
        Suurballe {
            paths: 2,
            best_effort: false,
        }
    }

    /// Creates a search for `paths` edge-disjoint paths
    pub fn finding(paths: usize) -> Self {
        Suurballe {
            paths,
            best_effort: false,
        }
    }

    /// Sets whether a shortfall is returned as a partial result instead of
    /// an [`Error::InsufficientDisjointPaths`]
    pub fn best_effort(mut self, enabled: bool) -> Self {
        self.best_effort = enabled;
        self
    }

    /// Finds up to the configured number of edge-disjoint paths from
    /// `source` to `target`
    ///
    /// `source == target` yields the configured number of zero-edge paths.
    /// A target with no route at all is [`Error::Unreachable`] regardless of
    /// the best-effort setting.
    pub fn find<W, G, M>(
        &self,
        graph: &G,
        weights: &M,
        source: usize,
        target: usize,
    ) -> Result<Vec<Path<W>>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph,
        M: EdgeWeights<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
        if source == target {
            return Ok((0..self.paths).map(|_| Path::trivial(source)).collect());
        }
        if self.paths == 0 {
            return Ok(Vec::new());
        }

        check_weights(graph, weights, source)?;

        let dijkstra = Dijkstra::new();

        // First pass runs on the original weights
        let mut tree = dijkstra.shortest_path_tree(graph, weights, source)?;
        if !tree.reached(target) {
            return Err(Error::Unreachable {
                from: source,
                to: target,
            });
        }
        let first = dijkstra
            .edge_path(&tree, graph, target)
            .ok_or_else(|| malformed_tree(1))?;
        debug!(
            "pass 1 reached target {} at distance {:?} over {} edges",
            target,
            tree.distances[target],
            first.len()
        );

        let mut used: HashSet<usize> = first.iter().map(|e| e.id).collect();
        let mut found = 1;

        // Running reduced cost per base edge; edges whose endpoints fall out
        // of reach are excluded from every later pass
        let mut reduced: Vec<W> = (0..graph.edge_count()).map(|e| weights.weight(e)).collect();
        let mut excluded = vec![false; graph.edge_count()];

        while found < self.paths {
            fold_potentials(graph, &tree, &mut reduced, &mut excluded);

            let outcome = {
                let residual = ResidualGraph::new(graph, &used, &excluded, &reduced);
                let pass = dijkstra.shortest_path_tree(&residual, &residual, source)?;
                if !pass.reached(target) {
                    None
                } else {
                    let aug = dijkstra
                        .edge_path(&pass, &residual, target)
                        .ok_or_else(|| malformed_tree(found + 1))?;
                    let step: Vec<(usize, bool)> = aug
                        .iter()
                        .map(|e| (residual.base_edge(e.id), residual.is_reversal(e.id)))
                        .collect();
                    Some((step, pass))
                }
            };

            let (step, pass) = match outcome {
                Some(found_path) => found_path,
                None => {
                    debug!("pass {} could not reach target {}", found + 1, target);
                    if self.best_effort {
                        break;
                    }
                    return Err(Error::InsufficientDisjointPaths {
                        requested: self.paths,
                        found,
                    });
                }
            };

            // Interlace: a reversed copy cancels the base edge it undoes,
            // a forward edge joins the running set
            let mut cancelled = 0;
            for (base, is_reversal) in step {
                if is_reversal {
                    used.remove(&base);
                    cancelled += 1;
                } else {
                    used.insert(base);
                }
            }
            debug!(
                "pass {} reached target at reduced distance {:?}, cancelled {} edges",
                found + 1,
                pass.distances[target],
                cancelled
            );

            tree = pass;
            found += 1;
        }

        assemble_paths(graph, weights, &used, source, target, found)
    }
}

/// Finds `k` edge-disjoint minimum-total-weight paths from `source` to
/// `target`, failing with [`Error::InsufficientDisjointPaths`] when the
/// graph's connectivity cannot support `k`
pub fn edge_disjoint_paths<W, G, M>(
    graph: &G,
    weights: &M,
    source: usize,
    target: usize,
    k: usize,
) -> Result<Vec<Path<W>>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph,
    M: EdgeWeights<W>,
{
    Suurballe::finding(k).find(graph, weights, source, target)
}

/// Rejects a negative weight on any edge whose tail is reachable from the
/// source; edges in unreachable components cannot affect the result
fn check_weights<W, G, M>(graph: &G, weights: &M, source: usize) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
    G: Graph,
    M: EdgeWeights<W>,
{
    let mut seen = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    seen[source] = true;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        for edge in graph.outgoing_edges(u) {
            if weights.weight(edge.id) < W::zero() {
                return Err(Error::NegativeWeight { edge: edge.id });
            }
            if !seen[edge.target] {
                seen[edge.target] = true;
                queue.push_back(edge.target);
            }
        }
    }
    Ok(())
}

/// Folds a pass's distances into the running reduced costs
///
/// Every surviving edge (u, v) becomes `cost + dist(u) - dist(v)`:
/// non-negative for edges the pass could traverse forward, zero on the
/// pass's tree edges, and at most zero for carried edges (whose reversed
/// copies charge the negation in the next residual view). Edges with an
/// unreached endpoint are dropped for good.
fn fold_potentials<W, G>(
    graph: &G,
    tree: &ShortestPathTree<W>,
    reduced: &mut [W],
    excluded: &mut [bool],
) where
    W: Float + Zero + Debug + Copy,
    G: Graph,
{
    for edge in 0..graph.edge_count() {
        if excluded[edge] {
            continue;
        }
        let (tail, head) = match graph.endpoints(edge) {
            Some(ends) => ends,
            None => continue,
        };
        match (tree.distances[tail], tree.distances[head]) {
            (Some(d_tail), Some(d_head)) => {
                let cost = reduced[edge] + d_tail - d_head;
                trace!("edge {} reduced cost {:?}", edge, cost);
                reduced[edge] = cost;
            }
            _ => excluded[edge] = true,
        }
    }
}

/// Decomposes the surviving edge set into `count` source-to-target walks
///
/// Cancellation leaves an edge set where every vertex except source and
/// target has equal in- and out-degree, so walking from the source and
/// consuming at each vertex the unconsumed outgoing edge with the smallest
/// id must reach the target. Anything else is an internal error.
fn assemble_paths<W, G, M>(
    graph: &G,
    weights: &M,
    used: &HashSet<usize>,
    source: usize,
    target: usize,
    count: usize,
) -> Result<Vec<Path<W>>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph,
    M: EdgeWeights<W>,
{
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); graph.vertex_count()];
    for &edge in used {
        let (tail, _) = graph
            .endpoints(edge)
            .ok_or_else(|| Error::PathDecomposition(format!("unknown edge {} survived", edge)))?;
        outgoing[tail].push(edge);
    }
    for edges in &mut outgoing {
        edges.sort_unstable();
    }
    let mut cursor = vec![0usize; graph.vertex_count()];

    let mut remaining = used.len();
    let mut paths = Vec::with_capacity(count);

    for _ in 0..count {
        let mut edges = Vec::new();
        let mut vertices = vec![source];
        let mut total = W::zero();
        let mut at = source;

        while at != target {
            let next = outgoing[at].get(cursor[at]).copied().ok_or_else(|| {
                Error::PathDecomposition(format!("walk stuck at vertex {} before target", at))
            })?;
            cursor[at] += 1;

            let (_, head) = graph
                .endpoints(next)
                .ok_or_else(|| Error::PathDecomposition(format!("unknown edge {} survived", next)))?;
            edges.push(next);
            vertices.push(head);
            total = total + weights.weight(next);
            at = head;
            // Each step consumes a distinct edge, so the walk terminates
            remaining -= 1;
        }

        paths.push(Path {
            edges,
            vertices,
            total_weight: total,
        });
    }

    if remaining != 0 {
        return Err(Error::PathDecomposition(format!(
            "{} surviving edges belong to no walk",
            remaining
        )));
    }

    Ok(paths)
}

fn malformed_tree(pass: usize) -> Error {
    Error::PathDecomposition(format!(
        "pass {} reached the target but its tree yields no path",
        pass
    ))
}
