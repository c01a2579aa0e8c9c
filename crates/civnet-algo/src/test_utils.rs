//! Small fixture networks shared by unit and integration tests.

use civnet_core::Network;

/// Hop-count network from an edge list.
pub fn network_from_edges(edges: &[(&str, &str)]) -> Network {
    let mut network = Network::new();
    for (u, v) in edges {
        network
            .add_link(u, v)
            .unwrap_or_else(|err| panic!("fixture edge {u}-{v}: {err}"));
    }
    network
}

/// Weighted network from an edge list.
pub fn weighted_network(edges: &[(&str, &str, f64)]) -> Network {
    let mut network = Network::weighted();
    for (u, v, weight) in edges {
        network
            .add_edge(u, v, *weight)
            .unwrap_or_else(|err| panic!("fixture edge {u}-{v}: {err}"));
    }
    network
}

/// Copy of `network` without the vertices in `removed` (and their edges).
pub fn without_vertices(network: &Network, removed: &[&str]) -> Network {
    let mut reduced = if network.is_weighted() {
        Network::weighted()
    } else {
        Network::new()
    };
    for idx in network.graph.node_indices() {
        let label = network.label(idx);
        if removed.contains(&label) {
            continue;
        }
        reduced.add_vertex(label);
        for (neighbor, weight) in network.neighbors(idx) {
            let other = network.label(neighbor);
            if !removed.contains(&other) && label < other {
                reduced
                    .add_edge(label, other, weight)
                    .unwrap_or_else(|err| panic!("fixture edge {label}-{other}: {err}"));
            }
        }
    }
    reduced
}

/// Copy of `network` without the single edge `u`-`v`.
pub fn without_edge(network: &Network, u: &str, v: &str) -> Network {
    let mut reduced = network.clone();
    if let (Some(a), Some(b)) = (network.node_index(u), network.node_index(v)) {
        if let Some(edge) = reduced.graph.find_edge(a, b) {
            reduced.graph.remove_edge(edge);
        }
    }
    reduced
}
