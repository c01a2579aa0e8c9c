//! Weighted shortest path with optional vertex outages.
//!
//! Label-setting search (Dijkstra) over a binary-heap frontier. A [`BlockedSet`]
//! removes vertices from consideration for one query without touching the
//! network, which is how outages are simulated.
//!
//! Edge weights must be non-negative. The network model rejects non-positive
//! weights on insertion, so this is not re-checked here.
//!
//! When several routes share the minimum distance, which one is reported is not
//! specified; the distance itself is always the minimum.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use civnet_core::{Network, NodeIndex};
use ordered_float::OrderedFloat;
use serde::Serialize;

/// Vertices excluded from traversal for a single query.
pub type BlockedSet = BTreeSet<String>;

/// Total distance and the vertex sequence from origin to destination inclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// `f64::INFINITY` when no route exists (serialized as `null`).
    pub distance: f64,
    pub path: Vec<String>,
}

impl ShortestPath {
    pub fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Finds the minimum-weight route from `origin` to `destination` avoiding `blocked`.
///
/// Absent or blocked endpoints and disconnected pairs all yield
/// [`ShortestPath::unreachable`]; none of them is an error.
pub fn shortest_path(
    network: &Network,
    origin: &str,
    destination: &str,
    blocked: &BlockedSet,
) -> ShortestPath {
    let (Some(source), Some(target)) = (network.node_index(origin), network.node_index(destination))
    else {
        return ShortestPath::unreachable();
    };
    if blocked.contains(origin) || blocked.contains(destination) {
        return ShortestPath::unreachable();
    }

    let n = network.vertex_count();
    let excluded: Vec<bool> = network
        .graph
        .node_indices()
        .map(|idx| blocked.contains(network.label(idx)))
        .collect();
    let mut distance = vec![f64::INFINITY; n];
    let mut previous: Vec<Option<NodeIndex>> = vec![None; n];
    let mut settled = vec![false; n];

    distance[source.index()] = 0.0;
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((OrderedFloat(current), node))) = frontier.pop() {
        if settled[node.index()] {
            continue;
        }
        if node == target {
            break;
        }
        settled[node.index()] = true;

        for (neighbor, weight) in network.neighbors(node) {
            let j = neighbor.index();
            if settled[j] || excluded[j] {
                continue;
            }
            let candidate = current + weight;
            if candidate < distance[j] {
                distance[j] = candidate;
                previous[j] = Some(node);
                frontier.push(Reverse((OrderedFloat(candidate), neighbor)));
            }
        }
    }

    if !distance[target.index()].is_finite() {
        return ShortestPath::unreachable();
    }

    let mut path = vec![network.label(target).to_string()];
    let mut cursor = target;
    while let Some(prev) = previous[cursor.index()] {
        path.push(network.label(prev).to_string());
        cursor = prev;
    }
    path.reverse();

    ShortestPath {
        distance: distance[target.index()],
        path,
    }
}
