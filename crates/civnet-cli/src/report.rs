//! Report rendering for query outcomes.
//!
//! Plain output is one titled block per query followed by a blank line. JSON
//! output is one object per line, tagged with a `query` field.

use std::fmt::Write as _;

use anyhow::Result;
use civnet_algo::{Assignment, ShortestPath};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::processor::{ProcessError, QueryOutcome};
use crate::query::format_blocked_set;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone)]
pub struct ReportRenderer {
    format: OutputFormat,
    decimals: usize,
}

impl ReportRenderer {
    pub fn new(format: OutputFormat, decimals: usize) -> Self {
        Self { format, decimals }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn render(&self, outcome: &QueryOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(self.render_plain(outcome)?),
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(outcome)?)),
        }
    }

    pub fn render_error(&self, line: &str, error: &ProcessError) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(format!("ERROR: {error}\n  query: {line}\n\n")),
            OutputFormat::Json => {
                let value = json!({
                    "query": "error",
                    "line": line,
                    "message": error.to_string(),
                });
                Ok(format!("{value}\n"))
            }
        }
    }

    fn distance(&self, path: &ShortestPath) -> String {
        if path.is_reachable() {
            format!("{:.*}", self.decimals, path.distance)
        } else {
            "no route".to_string()
        }
    }

    fn render_plain(&self, outcome: &QueryOutcome) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        self.write_plain(&mut out, outcome)?;
        out.push('\n');
        Ok(out)
    }

    fn write_plain(&self, out: &mut String, outcome: &QueryOutcome) -> std::fmt::Result {
        match outcome {
            QueryOutcome::Components {
                network,
                components,
            } => {
                writeln!(out, "COMPONENTES_CONEXOS {network}")?;
                writeln!(out, "  components: {}", components.len())?;
                for (i, component) in components.iter().enumerate() {
                    writeln!(out, "  {}: {}", i + 1, component.join(", "))?;
                }
            }
            QueryOutcome::FailureOrder { network, ranking } => {
                writeln!(out, "ORDEN_FALLOS {network}")?;
                for (i, entry) in ranking.iter().enumerate() {
                    writeln!(out, "  {}. {} (degree {})", i + 1, entry.vertex, entry.degree)?;
                }
            }
            QueryOutcome::ShortestPath {
                origin,
                destination,
                result,
            } => {
                writeln!(out, "CAMINO_MINIMO {origin} -> {destination}")?;
                self.write_path(out, result)?;
            }
            QueryOutcome::SimulatedOutage {
                origin,
                destination,
                blocked,
                result,
            } => {
                writeln!(out, "CAMINO_MINIMO_SIMULAR_CORTE {origin} -> {destination}")?;
                writeln!(out, "  blocked: {}", format_blocked_set(blocked))?;
                self.write_path(out, result)?;
            }
            QueryOutcome::CollectionRoute { route } => {
                writeln!(out, "CAMINO_RECOLECCION_BASURA")?;
                writeln!(out, "  stops: {}", route.len())?;
                writeln!(out, "  route: {}", route.join(" -> "))?;
            }
            QueryOutcome::CollectionRoutes { routes } => {
                writeln!(out, "CAMINO_RECOLECCION_BASURA (all components)")?;
                for (i, route) in routes.iter().enumerate() {
                    writeln!(out, "  {}: {}", i + 1, route.join(" -> "))?;
                }
            }
            QueryOutcome::PlantAssignment(assignment) => {
                writeln!(out, "PLANTAS_ASIGNADAS {}", assignment.sources.join(" "))?;
                for source in &assignment.sources {
                    writeln!(
                        out,
                        "  {source}: {}",
                        assignment.served_by(source).join(", ")
                    )?;
                }
                for (vertex, entry) in &assignment.assignments {
                    if let Assignment::Served { source, hops } = entry {
                        writeln!(out, "    {vertex} <- {source} ({hops} hops)")?;
                    }
                }
                let unassigned = assignment.unassigned();
                if unassigned.is_empty() {
                    writeln!(out, "  unassigned: none")?;
                } else {
                    writeln!(out, "  unassigned: {}", unassigned.join(", "))?;
                }
            }
            QueryOutcome::CriticalLinks(links) => {
                writeln!(out, "PUENTES_Y_ARTICULACIONES")?;
                let points = if links.articulation_points.is_empty() {
                    "none".to_string()
                } else {
                    links.articulation_points.join(", ")
                };
                writeln!(out, "  articulation points: {points}")?;
                if links.bridges.is_empty() {
                    writeln!(out, "  bridges: none")?;
                } else {
                    writeln!(out, "  bridges:")?;
                    for bridge in &links.bridges {
                        writeln!(out, "    {} - {}", bridge.a, bridge.b)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn write_path(&self, out: &mut String, result: &ShortestPath) -> std::fmt::Result {
        writeln!(out, "  distance: {}", self.distance(result))?;
        if result.is_reachable() {
            writeln!(out, "  path: {}", result.path.join(" -> "))?;
        }
        Ok(())
    }
}
