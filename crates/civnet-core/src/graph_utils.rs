use crate::Network;
use anyhow::Result;
use petgraph::algo::connected_components;
use serde::Serialize;

/// Summary statistics produced by `graph stats` (density/degree/connected components).
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub connected_components: usize,
    pub min_degree: usize,
    pub avg_degree: f64,
    pub max_degree: usize,
    pub density: f64,
    /// Sum of edge weights (equals `edge_count` on hop-count networks).
    pub total_weight: f64,
}

/// Calculates graph-level statistics such as density, degree distribution, and component counts.
pub fn graph_stats(network: &Network) -> Result<GraphStats> {
    let node_count = network.graph.node_count();
    let edge_count = network.graph.edge_count();
    let degrees: Vec<usize> = network
        .graph
        .node_indices()
        .map(|node| network.degree(node))
        .collect();
    let min_degree = degrees.iter().copied().min().unwrap_or(0);
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let avg_degree = if node_count == 0 {
        0.0
    } else {
        degrees.iter().copied().sum::<usize>() as f64 / node_count as f64
    };
    let density = if node_count < 2 {
        0.0
    } else {
        2.0 * edge_count as f64 / (node_count as f64 * (node_count as f64 - 1.0))
    };
    let total_weight = network.graph.edge_weights().sum();
    Ok(GraphStats {
        node_count,
        edge_count,
        connected_components: connected_components(&network.graph),
        min_degree,
        avg_degree,
        max_degree,
        density,
        total_weight,
    })
}
