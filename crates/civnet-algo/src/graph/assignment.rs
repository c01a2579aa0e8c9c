//! Nearest-source assignment (which plant serves each consumer).
//!
//! Breadth-first search started from every source at once. Each vertex is
//! assigned to the source with the smallest hop distance; ties go to the
//! lexicographically smallest source. Vertices no source can reach are kept
//! in the result as [`Assignment::Unassigned`].

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use civnet_core::{Network, NodeIndex};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentError {
    #[error("at least one source vertex is required")]
    NoSources,
    #[error("source vertex '{0}' is not in the network")]
    UnknownSource(String),
}

/// Outcome for a single vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Assignment {
    Served { source: String, hops: usize },
    Unassigned,
}

impl Assignment {
    pub fn source(&self) -> Option<&str> {
        match self {
            Assignment::Served { source, .. } => Some(source),
            Assignment::Unassigned => None,
        }
    }
}

/// Assignment of every vertex in the network, keyed by vertex id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceAssignment {
    /// Distinct sources, ascending.
    pub sources: Vec<String>,
    pub assignments: BTreeMap<String, Assignment>,
}

impl SourceAssignment {
    /// Source serving `vertex`, if any.
    pub fn source_of(&self, vertex: &str) -> Option<&str> {
        self.assignments.get(vertex).and_then(Assignment::source)
    }

    /// Vertices served by `source` (the source itself included), ascending.
    pub fn served_by(&self, source: &str) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|(_, assignment)| assignment.source() == Some(source))
            .map(|(vertex, _)| vertex.as_str())
            .collect()
    }

    /// Vertices that no source reaches, ascending.
    pub fn unassigned(&self) -> Vec<&str> {
        self.assignments
            .iter()
            .filter(|(_, assignment)| matches!(assignment, Assignment::Unassigned))
            .map(|(vertex, _)| vertex.as_str())
            .collect()
    }
}

/// Assigns each vertex of `network` to its nearest source by hop count.
///
/// Duplicate sources are ignored. Edge weights play no part.
pub fn assign_sources<S: AsRef<str>>(
    network: &Network,
    sources: &[S],
) -> Result<SourceAssignment, AssignmentError> {
    if sources.is_empty() {
        return Err(AssignmentError::NoSources);
    }
    let distinct: BTreeSet<&str> = sources.iter().map(AsRef::as_ref).collect();

    let n = network.vertex_count();
    let mut hops: Vec<Option<usize>> = vec![None; n];
    let mut owner: Vec<Option<NodeIndex>> = vec![None; n];
    let mut queue = VecDeque::with_capacity(n);

    for &source in &distinct {
        let idx = network
            .node_index(source)
            .ok_or_else(|| AssignmentError::UnknownSource(source.to_string()))?;
        hops[idx.index()] = Some(0);
        owner[idx.index()] = Some(idx);
        queue.push_back(idx);
    }

    // FIFO order settles every vertex at distance d before any at d + 1, so a
    // vertex's owner is final by the time it is dequeued.
    while let Some(u) = queue.pop_front() {
        let (Some(du), Some(su)) = (hops[u.index()], owner[u.index()]) else {
            continue;
        };
        let candidate = du + 1;
        for (v, _) in network.neighbors(u) {
            let j = v.index();
            match hops[j] {
                None => {
                    hops[j] = Some(candidate);
                    owner[j] = Some(su);
                    queue.push_back(v);
                }
                Some(dv) if dv == candidate => {
                    let smaller = owner[j]
                        .map_or(true, |current| network.label(su) < network.label(current));
                    if smaller {
                        owner[j] = Some(su);
                    }
                }
                Some(_) => {}
            }
        }
    }

    let assignments = network
        .graph
        .node_indices()
        .map(|idx| {
            let assignment = match (hops[idx.index()], owner[idx.index()]) {
                (Some(hops), Some(source)) => Assignment::Served {
                    source: network.label(source).to_string(),
                    hops,
                },
                _ => Assignment::Unassigned,
            };
            (network.label(idx).to_string(), assignment)
        })
        .collect();

    Ok(SourceAssignment {
        sources: distinct.into_iter().map(str::to_string).collect(),
        assignments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::network_from_edges;

    #[test]
    fn test_nearest_source_wins() {
        // P1 - a - b - c - P2
        let network = network_from_edges(&[("P1", "a"), ("a", "b"), ("b", "c"), ("c", "P2")]);
        let result = assign_sources(&network, &["P1", "P2"]).unwrap();

        assert_eq!(result.source_of("a"), Some("P1"));
        assert_eq!(result.source_of("c"), Some("P2"));
        assert_eq!(result.source_of("P2"), Some("P2"));
        assert_eq!(
            result.assignments["a"],
            Assignment::Served {
                source: "P1".to_string(),
                hops: 1
            }
        );
    }

    #[test]
    fn test_equidistant_vertex_goes_to_smaller_source() {
        // b is two hops from both plants; the larger one is listed first
        let network = network_from_edges(&[("P1", "a"), ("a", "b"), ("b", "c"), ("c", "P2")]);
        let result = assign_sources(&network, &["P2", "P1"]).unwrap();
        assert_eq!(result.source_of("b"), Some("P1"));
    }

    #[test]
    fn test_tie_ignores_intermediate_vertex_names() {
        // x is two hops from Z via y1 and from A via y2
        let network = network_from_edges(&[("Z", "y1"), ("A", "y2"), ("y1", "x"), ("y2", "x")]);
        let result = assign_sources(&network, &["Z", "A"]).unwrap();
        assert_eq!(result.source_of("x"), Some("A"));
        assert_eq!(
            result.assignments["x"],
            Assignment::Served {
                source: "A".to_string(),
                hops: 2
            }
        );
    }

    #[test]
    fn test_unreachable_vertices_are_reported() {
        let mut network = network_from_edges(&[("P", "a"), ("x", "y")]);
        network.add_vertex("lonely");
        let result = assign_sources(&network, &["P"]).unwrap();

        assert_eq!(result.unassigned(), vec!["lonely", "x", "y"]);
        assert_eq!(result.served_by("P"), vec!["P", "a"]);
        assert_eq!(result.source_of("x"), None);
        assert_eq!(result.assignments.len(), network.vertex_count());
    }

    #[test]
    fn test_duplicate_sources_are_merged() {
        let network = network_from_edges(&[("P", "a")]);
        let result = assign_sources(&network, &["P", "P"]).unwrap();
        assert_eq!(result.sources, vec!["P"]);
        assert_eq!(result.served_by("P"), vec!["P", "a"]);
    }

    #[test]
    fn test_invalid_source_lists() {
        let network = network_from_edges(&[("P", "a")]);
        let none: [&str; 0] = [];
        assert_eq!(
            assign_sources(&network, &none),
            Err(AssignmentError::NoSources)
        );
        assert_eq!(
            assign_sources(&network, &["P", "Q"]),
            Err(AssignmentError::UnknownSource("Q".to_string()))
        );
    }

    #[test]
    fn test_serialized_form_is_tagged() {
        let network = network_from_edges(&[("P", "a"), ("x", "y")]);
        let result = assign_sources(&network, &["P"]).unwrap();
        let json = serde_json::to_value(&result.assignments).unwrap();
        assert_eq!(json["a"]["status"], "served");
        assert_eq!(json["a"]["source"], "P");
        assert_eq!(json["a"]["hops"], 1);
        assert_eq!(json["x"]["status"], "unassigned");
    }
}
