//! Undirected weighted graph keyed by string node identifiers.

pub mod dijkstra;
pub mod file;

pub use dijkstra::Distance;

use std::collections::HashMap;

/// A node and its weighted adjacency.
///
/// Neighbors are referenced by identifier rather than owned, which keeps
/// the cyclic adjacency structure free of ownership cycles.
#[derive(Debug, Clone)]
pub struct GraphNode {
    id: String,
    adjacent: HashMap<String, u64>,
}

impl GraphNode {
    fn new(id: &str) -> Self {
        GraphNode {
            id: id.to_string(),
            adjacent: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Neighbor identifier to edge weight
    pub fn adjacent(&self) -> &HashMap<String, u64> {
        &self.adjacent
    }

    fn add_edge(&mut self, to: &str, weight: u64) {
        self.adjacent.insert(to.to_string(), weight);
    }
}

/// Weighted undirected graph over opaque string node identifiers.
///
/// Edges are always symmetric: `add_edge(u, v, w)` records both u→v and
/// v→u with weight w, auto-creating endpoints that are not yet present.
/// There are no deletion operations.
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    nodes: HashMap<String, GraphNode>,
}

impl UndirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node with empty adjacency. No-op if it already exists.
    pub fn add_node(&mut self, id: &str) {
        if !self.nodes.contains_key(id) {
            self.nodes.insert(id.to_string(), GraphNode::new(id));
        }
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// Record a weighted connection in both directions, creating endpoints
    /// that are not yet present. Weights are non-negative by construction
    /// of `u64`.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) {
        self.add_node(from);
        self.add_node(to);

        if let Some(node) = self.nodes.get_mut(from) {
            node.add_edge(to, weight);
        }
        if let Some(node) = self.nodes.get_mut(to) {
            node.add_edge(from, weight);
        }
    }

    /// Minimal total edge weight between two nodes.
    ///
    /// Returns `Distance::Finite(0)` when `from == to` and the node exists,
    /// and `Distance::Unreachable` when either node is absent or no path
    /// connects them. Unreachability is a value, not an error.
    #[tracing::instrument(skip(self), fields(nodes = self.node_count()))]
    pub fn find_shortest_distance(&self, from: &str, to: &str) -> Distance {
        if self.has_node(from) && self.has_node(to) {
            dijkstra::shortest_distance(self, from, to)
        } else {
            Distance::Unreachable
        }
    }
}
