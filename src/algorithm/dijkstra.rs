use log::warn;
use num_traits::PrimInt;
use std::fmt::Debug;

use crate::data_structures::Frontier;
use crate::graph::{NodeId, UndirectedGraph};
use crate::{Error, Result};

/// Result of a single-source shortest-path computation
///
/// Both tables are indexed by [`NodeId`] and are recomputed in full on every
/// query; `None` in the distance table means the node is unreachable from
/// the source. The predecessor table forms a tree rooted at the source, so
/// the source itself and unreached nodes carry no predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: PrimInt + Debug,
{
    /// Minimum total weight from the source to each node
    pub distances: Vec<Option<W>>,

    /// Preceding node on a minimum-weight path from the source
    pub predecessors: Vec<Option<NodeId>>,

    /// Source node id
    pub source: NodeId,
}

impl<W> ShortestPathResult<W>
where
    W: PrimInt + Debug,
{
    /// Reconstructs the source-to-target node sequence for `target`.
    ///
    /// Returns `None` when the target is out of range or unreachable. The
    /// walk is a pure function of the predecessor table and terminates in at
    /// most node-count steps.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if target >= self.distances.len() || self.distances[target].is_none() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;

        while current != self.source {
            path.push(current);
            current = self.predecessors[current]?;

            if path.len() > self.predecessors.len() {
                warn!(
                    "predecessor walk from {} exceeded node count, aborting",
                    target
                );
                return None;
            }
        }

        path.push(self.source);
        path.reverse();

        Some(path)
    }
}

/// Classic Dijkstra's algorithm over an undirected graph
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra engine instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Computes minimum distances and predecessors from `source` to every
    /// reachable node.
    ///
    /// The frontier uses lazy deletion: a popped entry whose recorded
    /// distance no longer matches the node's best-known distance is stale
    /// and skipped. Distances are true minima when all edge weights are
    /// non-negative; the search runs to frontier exhaustion with no
    /// single-target early exit.
    pub fn compute<W>(
        &self,
        graph: &UndirectedGraph<W>,
        source: &str,
    ) -> Result<ShortestPathResult<W>>
    where
        W: PrimInt + Debug,
    {
        let source_id = graph
            .node_id(source)
            .ok_or_else(|| Error::UnknownNode(source.to_owned()))?;

        let n = graph.node_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; n];

        distances[source_id] = Some(W::zero());

        let mut frontier = Frontier::new();
        frontier.push(source_id, W::zero());

        while let Some((node, dist)) = frontier.pop() {
            // A shorter path to this node was already settled
            if let Some(best) = distances[node] {
                if best < dist {
                    continue;
                }
            }

            for &(neighbor, weight) in graph.adjacency(node) {
                let candidate = dist + weight;

                let improved = match distances[neighbor] {
                    None => true,
                    Some(best) => candidate < best,
                };

                if improved {
                    distances[neighbor] = Some(candidate);
                    predecessors[neighbor] = Some(node);
                    frontier.push(neighbor, candidate);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source_id,
        })
    }
}
