//! Network file importers.
//!
//! All importers return an [`ImportResult`]: the [`civnet_core::Network`] plus the
//! diagnostics collected while building it. Bad lines are recorded and skipped;
//! only an unreadable file is a hard error.
//!
//! ```no_run
//! use civnet_core::NetworkKind;
//! use civnet_io::importers::load_kind;
//!
//! let result = load_kind("data/vial.txt", NetworkKind::Road)?;
//! println!("{} intersections", result.network.vertex_count());
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use civnet_core::NetworkKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::helpers::ImportResult;

pub mod edge_list;

pub use edge_list::{parse_edge_list, parse_line, LineError};

/// Whether edge lines carry a third weight column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    Unweighted,
    Weighted,
}

impl From<NetworkKind> for Weighting {
    fn from(kind: NetworkKind) -> Self {
        if kind.is_weighted() {
            Weighting::Weighted
        } else {
            Weighting::Unweighted
        }
    }
}

/// Load an edge-list file.
pub fn load_network(path: impl AsRef<Path>, weighting: Weighting) -> Result<ImportResult> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading network file '{}'", path.display()))?;
    let result = parse_edge_list(&text, weighting);

    debug!(
        path = %path.display(),
        vertices = result.network.vertex_count(),
        edges = result.network.edge_count(),
        "loaded network"
    );
    for issue in &result.diagnostics.issues {
        warn!(path = %path.display(), "{issue}");
    }

    Ok(result)
}

/// Load the file for one of the city networks, picking the weighting from its kind.
pub fn load_kind(path: impl AsRef<Path>, kind: NetworkKind) -> Result<ImportResult> {
    load_network(path, Weighting::from(kind))
        .with_context(|| format!("loading {kind} network"))
}
