//! Graph algorithms for infrastructure network analysis.
//!
//! Every function here is a pure query over a borrowed [`civnet_core::Network`]:
//! - **Connectivity**: [`connected_components`]
//! - **Fragility**: [`failure_order`] ranks vertices by degree
//! - **Routing**: [`shortest_path`] with a per-query [`BlockedSet`]
//! - **Weak points**: [`critical_links`] finds bridges and articulation points
//! - **Service areas**: [`assign_sources`] maps consumers to their nearest source
//! - **Collection routes**: [`collection_route`] and [`collection_routes`]
//!
//! ```
//! use civnet_algo::graph::{critical_links, shortest_path, BlockedSet};
//! use civnet_core::Network;
//!
//! let mut network = Network::weighted();
//! network.add_edge("A", "B", 1.0).unwrap();
//! network.add_edge("B", "C", 2.0).unwrap();
//!
//! let route = shortest_path(&network, "A", "C", &BlockedSet::new());
//! assert_eq!(route.distance, 3.0);
//! assert_eq!(critical_links(&network).articulation_points, vec!["B"]);
//! ```

pub mod assignment;
pub mod components;
pub mod critical;
pub mod fragility;
pub mod shortest_path;
pub mod traversal;

pub use assignment::{assign_sources, Assignment, AssignmentError, SourceAssignment};
pub use components::{connected_components, Component};
pub use critical::{critical_links, BridgeEdge, CriticalLinks};
pub use fragility::{failure_order, DegreeEntry};
pub use shortest_path::{shortest_path, BlockedSet, ShortestPath};
pub use traversal::{collection_route, collection_routes};
