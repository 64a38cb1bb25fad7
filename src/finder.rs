//! Caller-facing boundary around the graph store and the Dijkstra engine.
//!
//! [`PathFinder`] is the narrow contract a presentation layer consumes: it
//! validates edge input before the store sees it, answers endpoint lookups,
//! and turns the engine's id-space tables into labeled [`PathResult`]s.

use num_traits::PrimInt;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::algorithm::Dijkstra;
use crate::graph::UndirectedGraph;
use crate::{Error, Result};

/// A concrete shortest-path answer between two named nodes.
///
/// An unreachable target is a successful result, not an error: the node
/// sequence is empty and the distance is absent ("infinite").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult<W> {
    /// Nodes along the path in source-to-target order
    pub nodes: Vec<String>,

    /// Total weight of the path, absent when no path exists
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub distance: Option<W>,
}

impl<W> PathResult<W> {
    /// The explicit no-path outcome
    pub fn unreachable() -> Self {
        PathResult {
            nodes: Vec::new(),
            distance: None,
        }
    }

    /// Returns true if no path exists between the queried endpoints
    pub fn is_unreachable(&self) -> bool {
        self.distance.is_none()
    }
}

/// Owns a graph store and answers shortest-path queries over it
#[derive(Debug, Clone, Default)]
pub struct PathFinder<W = i64>
where
    W: PrimInt + Debug,
{
    graph: UndirectedGraph<W>,
}

impl<W> PathFinder<W>
where
    W: PrimInt + Debug,
{
    /// Creates a finder over a fresh empty graph
    pub fn new() -> Self {
        PathFinder {
            graph: UndirectedGraph::new(),
        }
    }

    /// Read access to the owned graph store
    pub fn graph(&self) -> &UndirectedGraph<W> {
        &self.graph
    }

    /// Inserts an undirected edge after validating it.
    ///
    /// Self-loops and negative weights are rejected here and never reach the
    /// store; a rejected call leaves the graph unmodified. Duplicate edges
    /// are a silent no-op, as in the store itself.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: W) -> Result<()> {
        if u == v {
            return Err(Error::SelfLoop(u.to_owned()));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(u.to_owned(), v.to_owned()));
        }

        self.graph.add_edge(u, v, weight);
        Ok(())
    }

    /// Returns true if the label is known to the graph
    pub fn has_node(&self, label: &str) -> bool {
        self.graph.has_node(label)
    }

    /// Returns an iterator over all known node labels
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.nodes()
    }

    /// Computes the minimum-weight path from `start` to `end`.
    ///
    /// Fails with [`Error::UnknownNode`] if either endpoint was never added.
    /// A disconnected target yields [`PathResult::unreachable`]; querying a
    /// node against itself yields the single-node path at distance zero.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<PathResult<W>> {
        let target = self
            .graph
            .node_id(end)
            .ok_or_else(|| Error::UnknownNode(end.to_owned()))?;

        let result = Dijkstra::new().compute(&self.graph, start)?;

        let distance = match result.distances[target] {
            None => return Ok(PathResult::unreachable()),
            Some(distance) => distance,
        };

        let nodes = match result.path_to(target) {
            Some(ids) => ids
                .into_iter()
                .map(|id| self.graph.label(id).to_owned())
                .collect(),
            None => return Ok(PathResult::unreachable()),
        };

        Ok(PathResult {
            nodes,
            distance: Some(distance),
        })
    }

    /// Replaces the graph with a fresh empty instance
    pub fn reset(&mut self) {
        self.graph = UndirectedGraph::new();
    }
}
