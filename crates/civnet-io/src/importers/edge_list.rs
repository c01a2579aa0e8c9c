//! Whitespace-separated edge-list parser.
//!
//! ```text
//! # comment
//! Palermo Recoleta 4
//! Recoleta Retiro 2
//! ```
//!
//! Hop-count files carry two fields per line, weighted files three.

use thiserror::Error;

use super::Weighting;
use crate::helpers::{EdgeInput, ImportResult, NetworkBuilder};

/// Why a single line could not be turned into an edge.
#[derive(Debug, Error, PartialEq)]
pub enum LineError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("weight '{0}' is not a number")]
    InvalidWeight(String),

    #[error("weight {0} must be positive")]
    NonPositiveWeight(f64),
}

/// Parses one non-comment line into an edge record.
pub fn parse_line(line: &str, weighting: Weighting) -> Result<EdgeInput, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let expected = match weighting {
        Weighting::Unweighted => 2,
        Weighting::Weighted => 3,
    };
    if fields.len() != expected {
        return Err(LineError::FieldCount {
            expected,
            found: fields.len(),
        });
    }

    let weight = match weighting {
        Weighting::Unweighted => None,
        Weighting::Weighted => {
            let raw = fields[2];
            let value: f64 = raw
                .parse()
                .map_err(|_| LineError::InvalidWeight(raw.to_string()))?;
            if !value.is_finite() {
                return Err(LineError::InvalidWeight(raw.to_string()));
            }
            if value <= 0.0 {
                return Err(LineError::NonPositiveWeight(value));
            }
            Some(value)
        }
    };

    Ok(EdgeInput {
        from: fields[0].to_string(),
        to: fields[1].to_string(),
        weight,
        line: None,
    })
}

/// Parses a whole edge-list document, recording bad lines instead of failing.
pub fn parse_edge_list(text: &str, weighting: Weighting) -> ImportResult {
    let mut builder = NetworkBuilder::new(weighting);

    for (offset, raw) in text.lines().enumerate() {
        let line_no = offset + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') {
            builder.diagnostics_mut().stats.comment_lines += 1;
            continue;
        }

        match parse_line(line, weighting) {
            Ok(mut edge) => {
                edge.line = Some(line_no);
                builder.add_edge(edge);
            }
            Err(err) => {
                let diagnostics = builder.diagnostics_mut();
                diagnostics.add_error("parse", &err.to_string(), Some(line_no), None);
                diagnostics.stats.skipped_lines += 1;
            }
        }
    }

    builder.build()
}
