//! # civnet-algo: Analytics for Civic Infrastructure Networks
//!
//! Answers the questions asked of the electrical, road and water networks:
//!
//! | Question | Function |
//! |----------|----------|
//! | Which zones stay connected? | [`connected_components`] |
//! | Which vertices fail first? | [`failure_order`] |
//! | Shortest route, optionally around outages | [`shortest_path`] |
//! | Which links and vertices are single points of failure? | [`critical_links`] |
//! | Which plant serves each consumer? | [`assign_sources`] |
//! | What is the garbage-collection route? | [`collection_route`] |
//!
//! All results are deterministic: ties are broken by ascending vertex id, with
//! the one exception of equal-length shortest paths (the distance is still
//! exact). The algorithms borrow the network immutably and never fail on
//! absent vertices; only [`assign_sources`] rejects invalid input.

pub mod graph;
pub mod test_utils;

pub use graph::*;
