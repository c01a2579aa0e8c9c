//! Deterministic depth-first collection route.
//!
//! The route starts at the smallest vertex and always descends into the
//! smallest unvisited neighbor first, so the same network yields the same route
//! no matter how it was loaded.

use civnet_core::{Network, NodeIndex};

/// Depth-first visiting order of the component containing the smallest vertex.
///
/// Vertices in other components do not appear. An empty network gives an
/// empty route.
pub fn collection_route(network: &Network) -> Vec<String> {
    let mut visited = vec![false; network.vertex_count()];
    match network.sorted_vertices().first() {
        Some(&start) => route_from(network, start, &mut visited),
        None => Vec::new(),
    }
}

/// One depth-first route per connected component, each starting at the
/// component's smallest vertex and ordered by that vertex.
pub fn collection_routes(network: &Network) -> Vec<Vec<String>> {
    let mut visited = vec![false; network.vertex_count()];
    let mut routes = Vec::new();
    for start in network.sorted_vertices() {
        if !visited[start.index()] {
            routes.push(route_from(network, start, &mut visited));
        }
    }
    routes
}

fn route_from(network: &Network, start: NodeIndex, visited: &mut [bool]) -> Vec<String> {
    let mut route = Vec::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;
        route.push(network.label(node).to_string());

        // reversed so the smallest neighbor is popped first
        for neighbor in network.sorted_neighbors(node).into_iter().rev() {
            if !visited[neighbor.index()] {
                stack.push(neighbor);
            }
        }
    }

    route
}
