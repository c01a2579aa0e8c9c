use anyhow::Result;
use civnet_algo::{
    assign_sources, collection_route, collection_routes, connected_components, critical_links,
    failure_order, shortest_path, BlockedSet,
};
use civnet_cli::cli::{GraphCommands, NetworkArgs};
use civnet_cli::{OutputFormat, QueryOutcome, ReportRenderer};
use civnet_core::{graph_utils, Network};
use civnet_io::{load_network, Weighting};
use tracing::warn;

pub fn handle(command: &GraphCommands) -> Result<()> {
    match command {
        GraphCommands::Stats { input } => {
            let network = load(input)?;
            let stats = graph_utils::graph_stats(&network)?;
            match input.format {
                OutputFormat::Plain => {
                    println!("Graph statistics for {}:", input.file.display());
                    println!("  Vertices      : {}", stats.node_count);
                    println!("  Edges         : {}", stats.edge_count);
                    println!("  Components    : {}", stats.connected_components);
                    println!(
                        "  Degree [min/avg/max]: {}/{:.2}/{}",
                        stats.min_degree, stats.avg_degree, stats.max_degree
                    );
                    println!("  Density       : {:.4}", stats.density);
                    println!("  Total weight  : {:.2}", stats.total_weight);
                }
                OutputFormat::Json => println!("{}", serde_json::to_string(&stats)?),
            }
            Ok(())
        }
        GraphCommands::Components { input } => {
            let network = load(input)?;
            emit(
                input,
                &QueryOutcome::Components {
                    network: input.file.display().to_string(),
                    components: connected_components(&network),
                },
            )
        }
        GraphCommands::Fragility { input } => {
            let network = load(input)?;
            emit(
                input,
                &QueryOutcome::FailureOrder {
                    network: input.file.display().to_string(),
                    ranking: failure_order(&network),
                },
            )
        }
        GraphCommands::Path {
            input,
            origin,
            destination,
            block,
        } => {
            let network = load(input)?;
            let blocked: BlockedSet = block.iter().cloned().collect();
            let result = shortest_path(&network, origin, destination, &blocked);
            let outcome = if blocked.is_empty() {
                QueryOutcome::ShortestPath {
                    origin: origin.clone(),
                    destination: destination.clone(),
                    result,
                }
            } else {
                QueryOutcome::SimulatedOutage {
                    origin: origin.clone(),
                    destination: destination.clone(),
                    blocked,
                    result,
                }
            };
            emit(input, &outcome)
        }
        GraphCommands::Critical { input } => {
            let network = load(input)?;
            emit(input, &QueryOutcome::CriticalLinks(critical_links(&network)))
        }
        GraphCommands::Assign { input, sources } => {
            let network = load(input)?;
            let assignment = assign_sources(&network, sources)?;
            emit(input, &QueryOutcome::PlantAssignment(assignment))
        }
        GraphCommands::Route { input, all } => {
            let network = load(input)?;
            let outcome = if *all {
                QueryOutcome::CollectionRoutes {
                    routes: collection_routes(&network),
                }
            } else {
                QueryOutcome::CollectionRoute {
                    route: collection_route(&network),
                }
            };
            emit(input, &outcome)
        }
    }
}

fn load(input: &NetworkArgs) -> Result<Network> {
    let weighting = if input.weighted {
        Weighting::Weighted
    } else {
        Weighting::Unweighted
    };
    let result = load_network(&input.file, weighting)?;
    if result.diagnostics.error_count() > 0 {
        warn!(
            "{} line(s) of {} could not be read",
            result.diagnostics.error_count(),
            input.file.display()
        );
    }
    Ok(result.network)
}

fn emit(input: &NetworkArgs, outcome: &QueryOutcome) -> Result<()> {
    // graph output always uses two decimals; `run` reads the configured value
    let renderer = ReportRenderer::new(input.format, 2);
    print!("{}", renderer.render(outcome)?);
    Ok(())
}
