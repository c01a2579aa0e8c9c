use std::process::ExitCode;

use clap::Parser;
use civnet_cli::cli::{Cli, Commands};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {err}");
    }

    let result = match &cli.command {
        Commands::Run(args) => {
            info!("Running queries from {}", args.queries.display());
            commands::run::handle(args).map(|summary| {
                if summary.errors > 0 {
                    info!("{} of {} queries failed", summary.errors, summary.processed);
                }
            })
        }
        Commands::Graph { command } => commands::graph::handle(command),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
