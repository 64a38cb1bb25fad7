use crate::graph::NodeId;
use crate::{Error, Result};
use log::debug;
use num_traits::PrimInt;
use std::collections::HashMap;
use std::fmt::Debug;

/// An undirected graph implementation using adjacency lists
///
/// Node labels are interned to dense [`NodeId`] indices on first appearance
/// in an added edge; there is no separate node-insertion or node-removal
/// operation. At most one edge exists per unordered pair of nodes, and the
/// adjacency view is kept symmetric: adding `{u, v, w}` appends `(v, w)` to
/// `u`'s list and `(u, w)` to `v`'s list.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W = i64>
where
    W: PrimInt + Debug,
{
    /// Node labels indexed by NodeId
    labels: Vec<String>,

    /// Label to NodeId lookup
    ids: HashMap<String, NodeId>,

    /// Adjacency entries for each node: node_id -> [(neighbor, weight)]
    adjacency: Vec<Vec<(NodeId, W)>>,

    /// Flat edge list in insertion order, each unordered pair once
    edges: Vec<(NodeId, NodeId, W)>,
}

impl<W> UndirectedGraph<W>
where
    W: PrimInt + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UndirectedGraph {
            labels: Vec::new(),
            ids: HashMap::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Returns the id for `label`, interning it if it is new
    fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_owned());
        self.ids.insert(label.to_owned(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Inserts an undirected edge between `u` and `v` with the given weight.
    ///
    /// Unknown labels are created with empty neighbor lists. If an edge
    /// already connects the pair (in either order) the call is a no-op, not
    /// an error. Callers are expected to have rejected self-loops and
    /// negative weights already; the store accepts any distinct-node edge.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: W) {
        let u_id = self.intern(u);
        let v_id = self.intern(v);

        if self.adjacency[u_id].iter().any(|&(target, _)| target == v_id) {
            debug!("edge {} - {} already present, ignoring", u, v);
            return;
        }

        self.adjacency[u_id].push((v_id, weight));
        self.adjacency[v_id].push((u_id, weight));
        self.edges.push((u_id, v_id, weight));
    }

    /// Returns true if the label is known to the graph
    pub fn has_node(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    /// Resolves a label to its node id
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    /// Returns the label for a node id
    ///
    /// # Panics
    /// Panics if `node` was not produced by this graph.
    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node]
    }

    /// Returns the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over all known node labels
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Returns an iterator over all edges as (u, v, weight), each unordered
    /// pair once in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, W)> + '_ {
        self.edges
            .iter()
            .map(move |&(u, v, w)| (self.labels[u].as_str(), self.labels[v].as_str(), w))
    }

    /// Returns the (neighbor label, weight) pairs adjacent to `label`
    pub fn neighbors<'a>(&'a self, label: &str) -> Result<impl Iterator<Item = (&'a str, W)> + 'a> {
        let id = self
            .node_id(label)
            .ok_or_else(|| Error::UnknownNode(label.to_owned()))?;
        Ok(self.adjacency[id]
            .iter()
            .map(move |&(neighbor, weight)| (self.labels[neighbor].as_str(), weight)))
    }

    /// Adjacency entries for a node id; empty for out-of-range ids
    pub fn adjacency(&self, node: NodeId) -> &[(NodeId, W)] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }
}

impl<W> Default for UndirectedGraph<W>
where
    W: PrimInt + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
