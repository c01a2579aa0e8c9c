//! Connected-component discovery ("which zones remain connected").
//!
//! Breadth-first labelling started from every unvisited vertex in ascending
//! identifier order. Each component is returned sorted, and because starts are
//! taken in ascending order the list is ordered by each component's smallest
//! member. O(V + E).

use std::collections::VecDeque;

use civnet_core::Network;

/// Vertices of one connected component, ascending.
pub type Component = Vec<String>;

/// Partitions the vertex set of `network` into connected components.
pub fn connected_components(network: &Network) -> Vec<Component> {
    let mut visited = vec![false; network.vertex_count()];
    let mut components = Vec::new();

    for start in network.sorted_vertices() {
        if visited[start.index()] {
            continue;
        }
        visited[start.index()] = true;

        let mut queue = VecDeque::from([start]);
        let mut members = Vec::new();
        while let Some(node) = queue.pop_front() {
            members.push(network.label(node).to_string());
            for (neighbor, _) in network.neighbors(node) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        members.sort();
        components.push(members);
    }

    components
}
