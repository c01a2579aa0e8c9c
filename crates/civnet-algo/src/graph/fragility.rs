//! Failure-priority ranking by vertex degree.
//!
//! Vertices with the fewest connections come first: they are the first to be
//! cut off when a neighbor fails. Ties are broken by ascending identifier.

use civnet_core::Network;
use serde::Serialize;

/// A vertex together with its number of neighbors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeEntry {
    pub vertex: String,
    pub degree: usize,
}

/// Orders every vertex by ascending degree, then ascending identifier.
pub fn failure_order(network: &Network) -> Vec<DegreeEntry> {
    let mut entries: Vec<DegreeEntry> = network
        .graph
        .node_indices()
        .map(|idx| DegreeEntry {
            vertex: network.label(idx).to_string(),
            degree: network.degree(idx),
        })
        .collect();

    entries.sort_by(|a, b| {
        a.degree
            .cmp(&b.degree)
            .then_with(|| a.vertex.cmp(&b.vertex))
    });
    entries
}
