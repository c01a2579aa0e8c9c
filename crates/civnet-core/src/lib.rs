//! # civnet-core: Infrastructure Network Model
//!
//! Provides the in-memory graph model shared by every civnet crate. The three city
//! networks (electrical, road, water) are all represented by the same [`Network`]
//! type: an undirected simple graph keyed by opaque string identifiers.
//!
//! ## Design Philosophy
//!
//! Networks are modeled as **undirected simple graphs** where:
//! - **Nodes**: zones, intersections, substations, plants (identified by a `String`)
//! - **Edges**: cables, streets, pipes (carrying a positive `f64` weight)
//!
//! Unweighted networks store a weight of `1.0` on every edge so that the same
//! representation serves hop-count and weighted queries alike. Adjacency symmetry
//! is guaranteed by construction: every edge is inserted once into a petgraph
//! `UnGraph` and is visible from both endpoints.
//!
//! ## Quick Start
//!
//! ```rust
//! use civnet_core::Network;
//!
//! let mut network = Network::weighted();
//! network.add_edge("Palermo", "Recoleta", 2.5).unwrap();
//! network.add_edge("Recoleta", "Retiro", 1.0).unwrap();
//!
//! assert_eq!(network.vertex_count(), 3);
//! assert_eq!(network.edge_count(), 2);
//! assert_eq!(network.edge_weight("Retiro", "Recoleta"), Some(1.0));
//! ```
//!
//! ## Modules
//!
//! - [`diagnostics`] - Issue collection for loaders
//! - [`error`] - Unified [`CivnetError`] type
//! - [`graph_utils`] - Topological statistics (degrees, density, components)

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

pub mod diagnostics;
pub mod error;
pub mod graph_utils;

pub use diagnostics::{DiagnosticIssue, Diagnostics, Severity};
pub use error::{CivnetError, CivnetResult};
pub use graph_utils::*;
pub use petgraph::graph::NodeIndex;

/// Vertex identifier. Compared with natural lexicographic (`Ord for String`) order.
pub type Vertex = String;

/// The three infrastructure networks served by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Electrical,
    Road,
    Water,
}

impl NetworkKind {
    pub const ALL: [NetworkKind; 3] = [NetworkKind::Electrical, NetworkKind::Road, NetworkKind::Water];

    /// Name used by the query language.
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkKind::Electrical => "ELECTRICA",
            NetworkKind::Road => "VIAL",
            NetworkKind::Water => "HIDRICA",
        }
    }

    /// Road edges carry lengths; the other networks are hop-count only.
    pub fn is_weighted(&self) -> bool {
        matches!(self, NetworkKind::Road)
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKind {
    type Err = CivnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ELECTRICA" | "ELECTRICAL" => Ok(NetworkKind::Electrical),
            "VIAL" | "ROAD" => Ok(NetworkKind::Road),
            "HIDRICA" | "WATER" => Ok(NetworkKind::Water),
            other => Err(CivnetError::Network(format!("unknown network '{other}'"))),
        }
    }
}

/// Outcome of [`Network::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    /// A new edge was created
    Added,
    /// The pair was already connected; its weight was overwritten
    Replaced,
}

/// Undirected simple graph over string-identified vertices.
///
/// Node indices are dense (`0..vertex_count()`) because vertices are never removed,
/// which lets algorithms keep per-vertex state in plain vectors indexed by
/// [`NodeIndex::index`].
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub graph: UnGraph<String, f64>,
    index: HashMap<String, NodeIndex>,
    weighted: bool,
}

impl Network {
    /// Empty hop-count network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty network whose edges carry explicit weights.
    pub fn weighted() -> Self {
        Self {
            weighted: true,
            ..Self::default()
        }
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Returns the index of `id`, inserting the vertex if it is new.
    pub fn add_vertex(&mut self, id: &str) -> NodeIndex {
        if let Some(idx) = self.index.get(id) {
            return *idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Connects `u` and `v` with a positive weight.
    ///
    /// Self-loops and non-positive or non-finite weights are rejected. Connecting an
    /// already connected pair overwrites the weight instead of creating a parallel edge.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> CivnetResult<EdgeInsert> {
        if u == v {
            return Err(CivnetError::Validation(format!("self-loop on '{u}'")));
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(CivnetError::Validation(format!(
                "edge {u}-{v} has invalid weight {weight}"
            )));
        }
        let a = self.add_vertex(u);
        let b = self.add_vertex(v);
        let existed = self.graph.find_edge(a, b).is_some();
        self.graph.update_edge(a, b, weight);
        Ok(if existed {
            EdgeInsert::Replaced
        } else {
            EdgeInsert::Added
        })
    }

    /// Unweighted convenience wrapper around [`Network::add_edge`].
    pub fn add_link(&mut self, u: &str, v: &str) -> CivnetResult<EdgeInsert> {
        self.add_edge(u, v, 1.0)
    }

    /// Builds a hop-count network from a `vertex -> neighbors` mapping.
    pub fn from_adjacency(adjacency: &BTreeMap<String, Vec<String>>) -> CivnetResult<Self> {
        let mut network = Self::new();
        for (u, neighbors) in adjacency {
            network.add_vertex(u);
            for v in neighbors {
                network.add_link(u, v)?;
            }
        }
        Ok(network)
    }

    /// Builds a weighted network from a `vertex -> [(neighbor, weight)]` mapping.
    pub fn from_weighted_adjacency(
        adjacency: &BTreeMap<String, Vec<(String, f64)>>,
    ) -> CivnetResult<Self> {
        let mut network = Self::weighted();
        for (u, neighbors) in adjacency {
            network.add_vertex(u);
            for (v, weight) in neighbors {
                network.add_edge(u, v, *weight)?;
            }
        }
        Ok(network)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn label(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Neighbors of `idx` paired with the connecting edge weight.
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph.edges(idx).map(move |edge| {
            let other = if edge.source() == idx {
                edge.target()
            } else {
                edge.source()
            };
            (other, *edge.weight())
        })
    }

    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.neighbors(idx).count()
    }

    /// All vertex indices in ascending identifier order.
    pub fn sorted_vertices(&self) -> Vec<NodeIndex> {
        let mut nodes: Vec<NodeIndex> = self.graph.node_indices().collect();
        nodes.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));
        nodes
    }

    /// Neighbors of `idx` in ascending identifier order.
    pub fn sorted_neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut nodes: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        nodes.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));
        nodes
    }

    pub fn edge_weight(&self, u: &str, v: &str) -> Option<f64> {
        let a = self.node_index(u)?;
        let b = self.node_index(v)?;
        let edge = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Mapping form of the network (`vertex -> sorted neighbor ids`).
    pub fn adjacency(&self) -> BTreeMap<String, Vec<String>> {
        self.graph
            .node_indices()
            .map(|idx| {
                let neighbors = self
                    .sorted_neighbors(idx)
                    .into_iter()
                    .map(|n| self.graph[n].clone())
                    .collect();
                (self.graph[idx].clone(), neighbors)
            })
            .collect()
    }
}
