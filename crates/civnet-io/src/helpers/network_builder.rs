//! Builder for constructing [`Network`] instances from parsed edge records.
//!
//! Parsers turn their input into [`EdgeInput`] records and hand them to the
//! builder, which owns vertex creation, weight handling and diagnostics.
//!
//! # Example
//! ```ignore
//! let mut builder = NetworkBuilder::new(Weighting::Weighted);
//! builder.add_edge(EdgeInput { from: "A".into(), to: "B".into(), weight: Some(2.0), line: Some(1) });
//! let result = builder.build();
//! ```

use civnet_core::{CivnetError, EdgeInsert, Network};

use super::{ImportDiagnostics, ImportResult};
use crate::importers::Weighting;

/// One parsed edge record.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeInput {
    pub from: String,
    pub to: String,
    /// `None` for hop-count inputs
    pub weight: Option<f64>,
    /// Source line, when the record came from a file
    pub line: Option<usize>,
}

/// Result of adding an element to the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    Added,
    /// The pair already existed; its weight was overwritten
    Replaced,
    /// Rejected (self-loop, invalid weight)
    Skipped,
}

pub struct NetworkBuilder {
    network: Network,
    diagnostics: ImportDiagnostics,
}

impl NetworkBuilder {
    pub fn new(weighting: Weighting) -> Self {
        let network = match weighting {
            Weighting::Unweighted => Network::new(),
            Weighting::Weighted => Network::weighted(),
        };
        Self {
            network,
            diagnostics: ImportDiagnostics::new(),
        }
    }

    /// Mutable access for parsers that record their own issues.
    pub fn diagnostics_mut(&mut self) -> &mut ImportDiagnostics {
        &mut self.diagnostics
    }

    pub fn add_vertex(&mut self, id: &str) {
        self.network.add_vertex(id);
    }

    pub fn add_edge(&mut self, input: EdgeInput) -> AddResult {
        let entity = format!("edge {}-{}", input.from, input.to);
        let weight = input.weight.unwrap_or(1.0);
        match self.network.add_edge(&input.from, &input.to, weight) {
            Ok(EdgeInsert::Added) => {
                self.diagnostics.stats.edges += 1;
                AddResult::Added
            }
            Ok(EdgeInsert::Replaced) => {
                self.diagnostics.add_warning(
                    "duplicate",
                    &format!("{entity} listed more than once; keeping weight {weight}"),
                    input.line,
                    Some(&entity),
                );
                AddResult::Replaced
            }
            Err(CivnetError::Validation(message)) => {
                let category = if input.from == input.to {
                    "self_loop"
                } else {
                    "validation"
                };
                self.diagnostics
                    .add_warning(category, &message, input.line, Some(&entity));
                self.diagnostics.stats.skipped_lines += 1;
                AddResult::Skipped
            }
            Err(other) => {
                self.diagnostics
                    .add_error("build", &other.to_string(), input.line, Some(&entity));
                self.diagnostics.stats.skipped_lines += 1;
                AddResult::Skipped
            }
        }
    }

    pub fn build(mut self) -> ImportResult {
        self.diagnostics.stats.vertices = self.network.vertex_count();
        ImportResult {
            network: self.network,
            diagnostics: self.diagnostics,
        }
    }
}
