//! Bridges and articulation points (structural weak points).
//!
//! Low-link depth-first search run over every component. The search keeps an
//! explicit stack of frames instead of recursing, so path-shaped networks with
//! many thousands of vertices do not exhaust the call stack.
//!
//! For a tree edge `p -> c`, once `c` is finished:
//! - `low[p] = min(low[p], low[c])`
//! - `low[c] > disc[p]` makes `p-c` a bridge
//! - `low[c] >= disc[p]` makes `p` an articulation point unless `p` is a root
//!
//! A root is an articulation point when it has more than one tree child.
//! Exactly one edge back to the tree parent is ignored per vertex, which is
//! sound only because the network model cannot hold parallel edges.

use std::collections::BTreeSet;

use civnet_core::{Network, NodeIndex};
use serde::Serialize;

/// An edge whose removal disconnects its endpoints; `a < b` always.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BridgeEdge {
    pub a: String,
    pub b: String,
}

impl BridgeEdge {
    /// Canonical form with the lexicographically smaller endpoint first.
    pub fn new(u: &str, v: &str) -> Self {
        let (a, b) = if u <= v { (u, v) } else { (v, u) };
        Self {
            a: a.to_string(),
            b: b.to_string(),
        }
    }
}

/// Sorted bridges and articulation points of a network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CriticalLinks {
    pub bridges: Vec<BridgeEdge>,
    pub articulation_points: Vec<String>,
}

impl CriticalLinks {
    pub fn is_empty(&self) -> bool {
        self.bridges.is_empty() && self.articulation_points.is_empty()
    }
}

const UNVISITED: usize = usize::MAX;

struct Frame {
    node: usize,
    parent: Option<usize>,
    next: usize,
    skipped_parent: bool,
}

/// Finds every bridge and articulation point of `network`. O(V + E).
pub fn critical_links(network: &Network) -> CriticalLinks {
    let n = network.vertex_count();
    let adjacency: Vec<Vec<usize>> = network
        .graph
        .node_indices()
        .map(|idx| network.neighbors(idx).map(|(m, _)| m.index()).collect())
        .collect();

    let mut disc = vec![UNVISITED; n];
    let mut low = vec![UNVISITED; n];
    let mut timer = 0;
    let mut bridges = BTreeSet::new();
    let mut cut_vertices = BTreeSet::new();

    for root in network.sorted_vertices().into_iter().map(|idx| idx.index()) {
        if disc[root] != UNVISITED {
            continue;
        }
        disc[root] = timer;
        low[root] = timer;
        timer += 1;

        let mut root_children = 0;
        let mut stack = vec![Frame {
            node: root,
            parent: None,
            next: 0,
            skipped_parent: false,
        }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.node;
            let Some(&v) = adjacency[u].get(frame.next) else {
                // u is finished; fold its low-link into the parent frame
                stack.pop();
                if let Some(parent) = stack.last() {
                    let p = parent.node;
                    low[p] = low[p].min(low[u]);
                    if low[u] > disc[p] {
                        bridges.insert((p, u));
                    }
                    if parent.parent.is_some() && low[u] >= disc[p] {
                        cut_vertices.insert(p);
                    }
                }
                continue;
            };
            frame.next += 1;

            if disc[v] == UNVISITED {
                if frame.parent.is_none() {
                    root_children += 1;
                }
                disc[v] = timer;
                low[v] = timer;
                timer += 1;
                stack.push(Frame {
                    node: v,
                    parent: Some(u),
                    next: 0,
                    skipped_parent: false,
                });
            } else if frame.parent == Some(v) && !frame.skipped_parent {
                frame.skipped_parent = true;
            } else {
                low[u] = low[u].min(disc[v]);
            }
        }

        if root_children > 1 {
            cut_vertices.insert(root);
        }
    }

    let label = move |i: usize| network.label(NodeIndex::new(i));
    let mut bridges: Vec<BridgeEdge> = bridges
        .into_iter()
        .map(|(p, c)| BridgeEdge::new(label(p), label(c)))
        .collect();
    bridges.sort();
    bridges.dedup();

    let mut articulation_points: Vec<String> = cut_vertices
        .into_iter()
        .map(|i| label(i).to_string())
        .collect();
    articulation_points.sort();

    CriticalLinks {
        bridges,
        articulation_points,
    }
}
