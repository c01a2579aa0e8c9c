//! Evaluates queries against the loaded city networks.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use civnet_algo::{
    assign_sources, collection_route, connected_components, critical_links, failure_order,
    shortest_path, AssignmentError, BlockedSet, Component, CriticalLinks, DegreeEntry,
    ShortestPath, SourceAssignment,
};
use civnet_core::{Network, NetworkKind};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::query::{Query, QueryError};
use crate::report::ReportRenderer;

/// Why a single query produced no result.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    #[error("the {0} network was not loaded")]
    NetworkNotLoaded(NetworkKind),
}

/// The three networks a query file can refer to. Any of them may be absent;
/// queries against a missing network fail individually.
#[derive(Debug, Default)]
pub struct Networks {
    pub electrical: Option<Network>,
    pub road: Option<Network>,
    pub water: Option<Network>,
}

impl Networks {
    pub fn get(&self, kind: NetworkKind) -> Option<&Network> {
        match kind {
            NetworkKind::Electrical => self.electrical.as_ref(),
            NetworkKind::Road => self.road.as_ref(),
            NetworkKind::Water => self.water.as_ref(),
        }
    }

    pub fn insert(&mut self, kind: NetworkKind, network: Network) {
        let slot = match kind {
            NetworkKind::Electrical => &mut self.electrical,
            NetworkKind::Road => &mut self.road,
            NetworkKind::Water => &mut self.water,
        };
        *slot = Some(network);
    }
}

/// Typed result of one query, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum QueryOutcome {
    Components {
        network: String,
        components: Vec<Component>,
    },
    FailureOrder {
        network: String,
        ranking: Vec<DegreeEntry>,
    },
    ShortestPath {
        origin: String,
        destination: String,
        #[serde(flatten)]
        result: ShortestPath,
    },
    SimulatedOutage {
        origin: String,
        destination: String,
        blocked: BlockedSet,
        #[serde(flatten)]
        result: ShortestPath,
    },
    CollectionRoute {
        route: Vec<String>,
    },
    CollectionRoutes {
        routes: Vec<Vec<String>>,
    },
    PlantAssignment(SourceAssignment),
    CriticalLinks(CriticalLinks),
}

/// Counts reported after a query file has been processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub processed: usize,
    pub errors: usize,
}

pub struct QueryProcessor {
    networks: Networks,
}

impl QueryProcessor {
    pub fn new(networks: Networks) -> Self {
        Self { networks }
    }

    fn network(&self, kind: NetworkKind) -> Result<&Network, ProcessError> {
        self.networks
            .get(kind)
            .ok_or(ProcessError::NetworkNotLoaded(kind))
    }

    pub fn evaluate(&self, query: &Query) -> Result<QueryOutcome, ProcessError> {
        let network = self.network(query.network())?;
        let outcome = match query {
            Query::Components(kind) => QueryOutcome::Components {
                network: kind.to_string(),
                components: connected_components(network),
            },
            Query::FailureOrder(kind) => QueryOutcome::FailureOrder {
                network: kind.to_string(),
                ranking: failure_order(network),
            },
            Query::ShortestPath {
                origin,
                destination,
            } => QueryOutcome::ShortestPath {
                origin: origin.clone(),
                destination: destination.clone(),
                result: shortest_path(network, origin, destination, &BlockedSet::new()),
            },
            Query::SimulateOutage {
                blocked,
                origin,
                destination,
            } => QueryOutcome::SimulatedOutage {
                origin: origin.clone(),
                destination: destination.clone(),
                blocked: blocked.clone(),
                result: shortest_path(network, origin, destination, blocked),
            },
            Query::CollectionRoute => QueryOutcome::CollectionRoute {
                route: collection_route(network),
            },
            Query::AssignPlants { sources } => {
                QueryOutcome::PlantAssignment(assign_sources(network, sources)?)
            }
            Query::CriticalLinks => QueryOutcome::CriticalLinks(critical_links(network)),
        };
        Ok(outcome)
    }

    /// Parses and evaluates one line; `None` for comments and blank lines.
    pub fn process_line(&self, line: &str) -> Option<Result<QueryOutcome, ProcessError>> {
        Query::parse_line(line).map(|parsed| {
            let query = parsed?;
            debug!(%query, network = %query.network(), "evaluating query");
            self.evaluate(&query)
        })
    }

    /// Runs every query in `input`, writing one report block per query.
    ///
    /// A query that fails produces an error block and processing moves on to
    /// the next line; only I/O failures abort the run.
    pub fn process<R: BufRead, W: Write>(
        &self,
        input: R,
        output: &mut W,
        renderer: &ReportRenderer,
    ) -> Result<Summary> {
        let mut summary = Summary::default();
        for (number, line) in input.lines().enumerate() {
            let line = line.with_context(|| format!("reading query line {}", number + 1))?;
            let Some(result) = self.process_line(&line) else {
                continue;
            };
            summary.processed += 1;
            let block = match result {
                Ok(outcome) => renderer.render(&outcome)?,
                Err(err) => {
                    warn!(line = number + 1, query = line.trim(), "{err}");
                    summary.errors += 1;
                    renderer.render_error(line.trim(), &err)?
                }
            };
            output
                .write_all(block.as_bytes())
                .context("writing report")?;
        }
        output.flush().context("writing report")?;
        Ok(summary)
    }
}
