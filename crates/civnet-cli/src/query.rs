//! Query-file language.
//!
//! One query per line: a case-insensitive keyword followed by whitespace
//! separated arguments. Lines starting with `#` and blank lines are skipped.
//!
//! | Keyword | Arguments | Network |
//! |---------|-----------|---------|
//! | `COMPONENTES_CONEXOS` / `CONEXOS` | network | given |
//! | `ORDEN_FALLOS` | network | given |
//! | `CAMINO_MINIMO` | origin destination | road |
//! | `CAMINO_MINIMO_SIMULAR_CORTE` | `{v1,v2,...}` origin destination | road |
//! | `CAMINO_RECOLECCION_BASURA` | none | road |
//! | `PLANTAS_ASIGNADAS` | source... | water |
//! | `PUENTES_Y_ARTICULACIONES` | none | water |

use std::fmt;
use std::str::FromStr;

use civnet_algo::BlockedSet;
use civnet_core::NetworkKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("{command} is missing its {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("unknown network '{0}' (expected ELECTRICA, VIAL or HIDRICA)")]
    UnknownNetwork(String),
    #[error("malformed blocked set '{0}' (expected {{v1,v2,...}})")]
    MalformedBlockedSet(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Components(NetworkKind),
    FailureOrder(NetworkKind),
    ShortestPath {
        origin: String,
        destination: String,
    },
    SimulateOutage {
        blocked: BlockedSet,
        origin: String,
        destination: String,
    },
    CollectionRoute,
    AssignPlants {
        sources: Vec<String>,
    },
    CriticalLinks,
}

impl Query {
    pub fn keyword(&self) -> &'static str {
        match self {
            Query::Components(_) => "COMPONENTES_CONEXOS",
            Query::FailureOrder(_) => "ORDEN_FALLOS",
            Query::ShortestPath { .. } => "CAMINO_MINIMO",
            Query::SimulateOutage { .. } => "CAMINO_MINIMO_SIMULAR_CORTE",
            Query::CollectionRoute => "CAMINO_RECOLECCION_BASURA",
            Query::AssignPlants { .. } => "PLANTAS_ASIGNADAS",
            Query::CriticalLinks => "PUENTES_Y_ARTICULACIONES",
        }
    }

    /// The network this query runs against.
    pub fn network(&self) -> NetworkKind {
        match self {
            Query::Components(kind) | Query::FailureOrder(kind) => *kind,
            Query::ShortestPath { .. } | Query::SimulateOutage { .. } | Query::CollectionRoute => {
                NetworkKind::Road
            }
            Query::AssignPlants { .. } | Query::CriticalLinks => NetworkKind::Water,
        }
    }

    /// Parses one line of a query file; `None` for comments and blank lines.
    pub fn parse_line(line: &str) -> Option<Result<Query, QueryError>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        Some(line.parse())
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let keyword = tokens.next().unwrap_or_default().to_ascii_uppercase();

        match keyword.as_str() {
            "COMPONENTES_CONEXOS" | "CONEXOS" => {
                Ok(Query::Components(network_arg(&mut tokens, "COMPONENTES_CONEXOS")?))
            }
            "ORDEN_FALLOS" => Ok(Query::FailureOrder(network_arg(&mut tokens, "ORDEN_FALLOS")?)),
            "CAMINO_MINIMO" => {
                let origin = required(&mut tokens, "CAMINO_MINIMO", "origin")?;
                let destination = required(&mut tokens, "CAMINO_MINIMO", "destination")?;
                Ok(Query::ShortestPath {
                    origin,
                    destination,
                })
            }
            "CAMINO_MINIMO_SIMULAR_CORTE" => {
                const COMMAND: &str = "CAMINO_MINIMO_SIMULAR_CORTE";
                let blocked = blocked_set_arg(&mut tokens, COMMAND)?;
                let origin = required(&mut tokens, COMMAND, "origin")?;
                let destination = required(&mut tokens, COMMAND, "destination")?;
                Ok(Query::SimulateOutage {
                    blocked,
                    origin,
                    destination,
                })
            }
            "CAMINO_RECOLECCION_BASURA" => Ok(Query::CollectionRoute),
            "PLANTAS_ASIGNADAS" => {
                let sources: Vec<String> = tokens.map(str::to_string).collect();
                if sources.is_empty() {
                    return Err(QueryError::MissingArgument {
                        command: "PLANTAS_ASIGNADAS",
                        argument: "source",
                    });
                }
                Ok(Query::AssignPlants { sources })
            }
            "PUENTES_Y_ARTICULACIONES" => Ok(Query::CriticalLinks),
            _ => Err(QueryError::UnknownCommand(keyword)),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())?;
        match self {
            Query::Components(kind) | Query::FailureOrder(kind) => write!(f, " {kind}"),
            Query::ShortestPath {
                origin,
                destination,
            } => write!(f, " {origin} {destination}"),
            Query::SimulateOutage {
                blocked,
                origin,
                destination,
            } => write!(f, " {} {origin} {destination}", format_blocked_set(blocked)),
            Query::AssignPlants { sources } => write!(f, " {}", sources.join(" ")),
            Query::CollectionRoute | Query::CriticalLinks => Ok(()),
        }
    }
}

/// Renders a blocked set in query syntax, e.g. `{B,C}`.
pub fn format_blocked_set(blocked: &BlockedSet) -> String {
    let members: Vec<&str> = blocked.iter().map(String::as_str).collect();
    format!("{{{}}}", members.join(","))
}

/// Parses `{v1,v2,...}`; `{}` is the empty set.
pub fn parse_blocked_set(text: &str) -> Result<BlockedSet, QueryError> {
    let inner = text
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| QueryError::MalformedBlockedSet(text.to_string()))?;
    if inner.trim().is_empty() {
        return Ok(BlockedSet::new());
    }
    inner
        .split(',')
        .map(|member| {
            let member = member.trim();
            if member.is_empty() || member.contains(['{', '}']) {
                Err(QueryError::MalformedBlockedSet(text.to_string()))
            } else {
                Ok(member.to_string())
            }
        })
        .collect()
}

fn required<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<String, QueryError> {
    tokens
        .next()
        .map(str::to_string)
        .ok_or(QueryError::MissingArgument { command, argument })
}

fn network_arg<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<NetworkKind, QueryError> {
    let name = required(tokens, command, "network")?;
    name.parse().map_err(|_| QueryError::UnknownNetwork(name.clone()))
}

/// The set may be written with spaces (`{A, B}`), so tokens are joined until
/// the closing brace.
fn blocked_set_arg<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<BlockedSet, QueryError> {
    let mut text = required(tokens, command, "blocked set")?;
    if text.starts_with('{') {
        while !text.ends_with('}') {
            match tokens.next() {
                Some(token) => text.push_str(token),
                None => return Err(QueryError::MalformedBlockedSet(text)),
            }
        }
    }
    parse_blocked_set(&text)
}
