//! # civnet-io: Network Data Import
//!
//! Reads the plain-text edge lists that describe the electrical, road and water
//! networks and builds [`civnet_core::Network`] graphs from them.
//!
//! ## Design Philosophy
//!
//! **Error Recovery**: a malformed line is recorded as a diagnostic and skipped;
//! the rest of the file still loads. Only I/O failures abort an import.
//!
//! **Symmetry by Construction**: every edge line becomes one undirected edge,
//! so the adjacency the algorithms see is always symmetric.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use civnet_io::importers::{load_network, Weighting};
//!
//! fn main() -> anyhow::Result<()> {
//!     let result = load_network("data/hidrica.txt", Weighting::Unweighted)?;
//!     println!("Vertices: {}", result.network.vertex_count());
//!     println!("Issues: {}", result.diagnostics.issues.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`importers`] - edge-list parsing and file loading
//! - [`helpers`] - `NetworkBuilder`, `ImportDiagnostics`, `ImportResult`

pub mod helpers;
pub mod importers;

pub use helpers::{ImportDiagnostics, ImportResult, ImportStats};
pub use importers::{load_kind, load_network, parse_edge_list, Weighting};
