use std::collections::BTreeSet;

use civnet_algo::test_utils::{network_from_edges, weighted_network, without_edge, without_vertices};
use civnet_algo::{
    assign_sources, collection_route, collection_routes, connected_components, critical_links,
    failure_order, shortest_path, Assignment, BlockedSet,
};
use civnet_core::Network;
use rand::prelude::*;

fn random_network(seed: u64, vertices: usize, edges: usize) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = Network::weighted();
    for i in 0..vertices {
        network.add_vertex(&format!("n{i:02}"));
    }
    for _ in 0..edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        if u == v {
            continue;
        }
        let weight = f64::from(rng.gen_range(1..=9u32));
        network
            .add_edge(&format!("n{u:02}"), &format!("n{v:02}"), weight)
            .unwrap();
    }
    network
}

fn fixtures() -> Vec<Network> {
    let mut networks: Vec<Network> = (1..=8)
        .map(|seed| random_network(seed, 24, 30))
        .collect();
    networks.push(weighted_network(&[
        ("A", "B", 1.0),
        ("B", "C", 2.0),
        ("C", "D", 1.0),
        ("D", "A", 5.0),
        ("B", "D", 2.0),
        ("E", "A", 1.0),
    ]));
    networks.push(Network::new());
    networks
}

#[test]
fn components_partition_the_vertex_set() {
    for network in fixtures() {
        let components = connected_components(&network);
        let mut seen = BTreeSet::new();
        for component in &components {
            assert!(!component.is_empty());
            assert!(component.windows(2).all(|w| w[0] < w[1]));
            for vertex in component {
                assert!(seen.insert(vertex.clone()), "{vertex} in two components");
            }
        }
        assert_eq!(seen.len(), network.vertex_count());

        let firsts: Vec<&String> = components.iter().map(|c| &c[0]).collect();
        assert!(firsts.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn degree_sum_is_twice_edge_count() {
    for network in fixtures() {
        let order = failure_order(&network);
        let total: usize = order.iter().map(|entry| entry.degree).sum();
        assert_eq!(total, 2 * network.edge_count());
        assert!(order
            .windows(2)
            .all(|w| (w[0].degree, &w[0].vertex) < (w[1].degree, &w[1].vertex)));
    }
}

#[test]
fn path_distance_equals_sum_of_edge_weights() {
    for network in fixtures() {
        let vertices: Vec<String> = network
            .sorted_vertices()
            .into_iter()
            .map(|idx| network.label(idx).to_string())
            .collect();
        for origin in vertices.iter().take(4) {
            for destination in &vertices {
                let result = shortest_path(&network, origin, destination, &BlockedSet::new());
                if !result.is_reachable() {
                    assert!(result.path.is_empty());
                    continue;
                }
                assert_eq!(result.path.first(), Some(origin));
                assert_eq!(result.path.last(), Some(destination));
                let sum: f64 = result
                    .path
                    .windows(2)
                    .map(|w| network.edge_weight(&w[0], &w[1]).expect("path uses real edges"))
                    .sum();
                assert!((sum - result.distance).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn blocking_never_shortens_and_blocked_vertices_are_avoided() {
    for network in fixtures().into_iter().take(8) {
        let blocked: BlockedSet = ["n03", "n07", "n11"].iter().map(|s| s.to_string()).collect();
        for destination in ["n05", "n13", "n20", "n07"] {
            let free = shortest_path(&network, "n00", destination, &BlockedSet::new());
            let constrained = shortest_path(&network, "n00", destination, &blocked);
            assert!(constrained.distance >= free.distance);
            assert!(constrained.path.iter().all(|v| !blocked.contains(v)));
        }
        assert!(!shortest_path(&network, "n00", "n07", &blocked).is_reachable());
    }
}

#[test]
fn removing_a_bridge_or_cut_vertex_splits_the_network() {
    for network in fixtures() {
        let before = connected_components(&network).len();
        let links = critical_links(&network);

        for bridge in &links.bridges {
            let reduced = without_edge(&network, &bridge.a, &bridge.b);
            assert_eq!(connected_components(&reduced).len(), before + 1);
        }
        for point in &links.articulation_points {
            // removing the vertex itself takes one away, so a split shows as >= before + 1
            let reduced = without_vertices(&network, &[point.as_str()]);
            assert!(connected_components(&reduced).len() >= before + 1);
        }
    }
}

#[test]
fn unreported_vertices_are_not_cut_vertices() {
    for network in fixtures() {
        let before = connected_components(&network).len();
        let points: BTreeSet<String> = critical_links(&network)
            .articulation_points
            .into_iter()
            .collect();
        for idx in network.sorted_vertices() {
            let vertex = network.label(idx);
            if points.contains(vertex) {
                continue;
            }
            // an isolated vertex takes its own component with it
            let reduced = without_vertices(&network, &[vertex]);
            assert!(
                connected_components(&reduced).len() <= before,
                "removing {vertex} split the network"
            );
        }
    }
}

#[test]
fn non_critical_edges_keep_the_network_together() {
    for network in fixtures() {
        let before = connected_components(&network).len();
        let bridges: BTreeSet<(String, String)> = critical_links(&network)
            .bridges
            .into_iter()
            .map(|b| (b.a, b.b))
            .collect();
        for (u, v) in edges_of(&network) {
            if !bridges.contains(&(u.clone(), v.clone())) {
                let reduced = without_edge(&network, &u, &v);
                assert_eq!(connected_components(&reduced).len(), before);
            }
        }
    }
}

#[test]
fn assigned_source_is_at_minimum_hop_distance() {
    for network in fixtures().into_iter().take(8) {
        let sources = ["n02", "n09", "n17"];
        let result = assign_sources(&network, &sources).unwrap();
        assert_eq!(result.assignments.len(), network.vertex_count());

        for (vertex, assignment) in &result.assignments {
            let hops_to = |source: &str| hop_distance(&network, source, vertex);
            match assignment {
                Assignment::Served { source, hops } => {
                    let best = sources.iter().filter_map(|s| hops_to(*s)).min();
                    assert_eq!(Some(*hops), best);
                    let tied: Vec<&str> = sources
                        .iter()
                        .copied()
                        .filter(|s| hops_to(*s) == best)
                        .collect();
                    assert_eq!(Some(source.as_str()), tied.into_iter().min());
                }
                Assignment::Unassigned => {
                    assert!(sources.iter().all(|s| hops_to(*s).is_none()));
                }
            }
        }
    }
}

#[test]
fn collection_routes_visit_each_vertex_once() {
    for network in fixtures() {
        let routes = collection_routes(&network);
        let visited: Vec<&String> = routes.iter().flatten().collect();
        let distinct: BTreeSet<&String> = visited.iter().copied().collect();
        assert_eq!(visited.len(), network.vertex_count());
        assert_eq!(distinct.len(), network.vertex_count());

        let first = routes.first().cloned().unwrap_or_default();
        assert_eq!(collection_route(&network), first);
        if let Some(component) = connected_components(&network).first() {
            let mut sorted = first.clone();
            sorted.sort();
            assert_eq!(&sorted, component);
        }
    }
}

#[test]
fn collection_route_steps_along_edges_or_backtracks() {
    let network = network_from_edges(&[("a", "b"), ("b", "c"), ("a", "d"), ("d", "e"), ("c", "e")]);
    let route = collection_route(&network);
    assert_eq!(route, vec!["a", "b", "c", "e", "d"]);
    // each vertex after the first is adjacent to some earlier vertex
    for (i, vertex) in route.iter().enumerate().skip(1) {
        assert!(route[..i]
            .iter()
            .any(|earlier| network.edge_weight(earlier, vertex).is_some()));
    }
}

fn edges_of(network: &Network) -> Vec<(String, String)> {
    let mut edges = Vec::new();
    for (u, neighbors) in network.adjacency() {
        for v in neighbors {
            if u < v {
                edges.push((u.clone(), v));
            }
        }
    }
    edges
}

fn hop_distance(network: &Network, from: &str, to: &str) -> Option<usize> {
    let mut unit = Network::new();
    for idx in network.graph.node_indices() {
        unit.add_vertex(network.label(idx));
    }
    for (u, v) in edges_of(network) {
        unit.add_link(&u, &v).unwrap();
    }
    let result = shortest_path(&unit, from, to, &BlockedSet::new());
    result.is_reachable().then(|| result.hops())
}
