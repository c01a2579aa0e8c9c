use clap::{Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "civnet", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info", global = true)]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer every query in a query file against the city networks
    Run(RunArgs),
    /// Ad-hoc analysis of a single edge-list file
    Graph {
        #[command(subcommand)]
        command: GraphCommands,
    },
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Query file, one query per line
    #[arg(value_hint = ValueHint::FilePath)]
    pub queries: PathBuf,
    /// Write the report here instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub out: Option<PathBuf>,
    /// Configuration file (defaults to ./civnet.toml when present)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    /// Electrical network edge list
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub electrical: Option<PathBuf>,
    /// Road network edge list (weighted)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub road: Option<PathBuf>,
    /// Water network edge list
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub water: Option<PathBuf>,
    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Decimal places for distances
    #[arg(long)]
    pub decimals: Option<usize>,
}

/// Network file shared by every `graph` subcommand.
#[derive(Args, Debug)]
pub struct NetworkArgs {
    /// Edge-list file (`u v` or `u v w` per line)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,
    /// Read a third column as the edge weight
    #[arg(long)]
    pub weighted: bool,
    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum GraphCommands {
    /// Graph stats summary
    Stats {
        #[command(flatten)]
        input: NetworkArgs,
    },
    /// Connected components
    Components {
        #[command(flatten)]
        input: NetworkArgs,
    },
    /// Vertices ranked by failure priority (lowest degree first)
    Fragility {
        #[command(flatten)]
        input: NetworkArgs,
    },
    /// Shortest path between two vertices
    Path {
        #[command(flatten)]
        input: NetworkArgs,
        origin: String,
        destination: String,
        /// Vertices to treat as out of service
        #[arg(long, value_delimiter = ',')]
        block: Vec<String>,
    },
    /// Bridges and articulation points
    Critical {
        #[command(flatten)]
        input: NetworkArgs,
    },
    /// Assign every vertex to its nearest source
    Assign {
        #[command(flatten)]
        input: NetworkArgs,
        /// Source vertices
        #[arg(required = true, num_args = 1..)]
        sources: Vec<String>,
    },
    /// Depth-first collection route from the smallest vertex
    Route {
        #[command(flatten)]
        input: NetworkArgs,
        /// One route per connected component instead of only the first
        #[arg(long)]
        all: bool,
    },
}
