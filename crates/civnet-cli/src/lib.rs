pub mod cli;
pub mod config;
pub mod processor;
pub mod query;
pub mod report;

pub use cli::{Cli, Commands, GraphCommands, NetworkArgs, RunArgs};
pub use config::CivnetConfig;
pub use processor::{Networks, ProcessError, QueryOutcome, QueryProcessor, Summary};
pub use query::{Query, QueryError};
pub use report::{OutputFormat, ReportRenderer};
