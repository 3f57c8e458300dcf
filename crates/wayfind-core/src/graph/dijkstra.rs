//! Single-destination Dijkstra search with early termination.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::UndirectedGraph;

/// Accumulated path weight, with unreachability as a first-class value.
///
/// `Unreachable` orders above every finite distance, so the minimum over a
/// set of candidate distances is always the best known path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Distance::Unreachable)
    }

    /// Finite value, or `None` when unreachable
    pub fn value(&self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }
}

/// Frontier entry ordered by tentative distance only. The node identifier
/// never participates in comparisons; ties are resolved arbitrarily.
#[derive(Debug, Clone)]
struct HeapEntry {
    priority: u64,
    node_id: String,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// Dijkstra restricted to a single source/destination pair.
///
/// The frontier uses lazy deletion instead of decrease-key: a relaxation
/// pushes a fresh entry and the superseded one is discarded when popped
/// after its node has been finalized. The search terminates as soon as the
/// destination is finalized; an emptied frontier means it is unreachable.
///
/// Assumes non-negative weights (guaranteed by `u64`) and that both
/// endpoints exist in the graph.
pub(super) fn shortest_distance(graph: &UndirectedGraph, from: &str, to: &str) -> Distance {
    let mut distances: HashMap<String, u64> = HashMap::new();
    distances.insert(from.to_string(), 0);

    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    frontier.push(Reverse(HeapEntry {
        priority: 0,
        node_id: from.to_string(),
    }));

    while let Some(Reverse(HeapEntry { priority, node_id })) = frontier.pop() {
        if !visited.insert(node_id.clone()) {
            // Stale entry superseded by a later relaxation
            continue;
        }

        if node_id == to {
            break;
        }

        let Some(node) = graph.node(&node_id) else {
            continue;
        };

        for (adjacent_id, weight) in node.adjacent() {
            if visited.contains(adjacent_id) {
                continue;
            }

            let candidate = priority + weight;
            if distances.get(adjacent_id).is_none_or(|&d| candidate < d) {
                distances.insert(adjacent_id.clone(), candidate);
                frontier.push(Reverse(HeapEntry {
                    priority: candidate,
                    node_id: adjacent_id.clone(),
                }));
            }
        }
    }

    // The destination only has an entry once a path to it was relaxed; if
    // the frontier drained without reaching it, no path exists.
    if visited.contains(to) {
        distances
            .get(to)
            .map_or(Distance::Unreachable, |d| Distance::Finite(*d))
    } else {
        Distance::Unreachable
    }
}
