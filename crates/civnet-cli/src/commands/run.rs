use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use anyhow::{Context, Result};
use civnet_cli::cli::RunArgs;
use civnet_cli::config::{CivnetConfig, NetworkPaths};
use civnet_cli::{Networks, QueryProcessor, ReportRenderer, Summary};
use civnet_core::{Diagnostics, NetworkKind};
use civnet_io::load_kind;
use tracing::{info, warn};

pub fn handle(args: &RunArgs) -> Result<Summary> {
    let mut config = CivnetConfig::load(args.config.as_deref())?;
    config.networks.apply(&NetworkPaths {
        electrical: args.electrical.clone(),
        road: args.road.clone(),
        water: args.water.clone(),
    });
    let format = args.format.unwrap_or(config.output.format);
    let decimals = args.decimals.unwrap_or(config.output.decimals);

    let networks = load_networks(&config.networks)?;
    let processor = QueryProcessor::new(networks);
    let renderer = ReportRenderer::new(format, decimals);

    let queries = File::open(&args.queries)
        .with_context(|| format!("opening query file '{}'", args.queries.display()))?;
    let input = BufReader::new(queries);

    let summary = match &args.out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating report file '{}'", path.display()))?;
            let summary = processor.process(input, &mut BufWriter::new(file), &renderer)?;
            info!("Report written to {}", path.display());
            summary
        }
        None => processor.process(input, &mut io::stdout().lock(), &renderer)?,
    };

    info!(
        processed = summary.processed,
        errors = summary.errors,
        "Processed {} queries",
        summary.processed
    );
    Ok(summary)
}

fn load_networks(paths: &NetworkPaths) -> Result<Networks> {
    let mut networks = Networks::default();
    let mut issues = Diagnostics::new();
    for kind in NetworkKind::ALL {
        let Some(path) = paths.get(kind) else {
            warn!("No file configured for the {kind} network; its queries will fail");
            issues.add_warning("config", &format!("no file for the {kind} network"));
            continue;
        };
        info!("Loading {kind} network from {}", path.display());
        let result = load_kind(path, kind)?;
        issues.merge(result.diagnostics.into_diagnostics());
        networks.insert(kind, result.network);
    }
    if issues.has_issues() {
        warn!(
            warnings = issues.warning_count(),
            errors = issues.error_count(),
            "Networks loaded with issues"
        );
    }
    Ok(networks)
}
