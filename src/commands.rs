//! Query execution: load the graph file, run the distance query, print
//! the result in the requested format.

use std::time::Instant;

use wayfind_core::error::Result;
use wayfind_core::format::OutputFormat;
use wayfind_core::graph::UndirectedGraph;

use crate::cli::Cli;

/// Fixed message for unreachable or unknown nodes (exit code 0; not an
/// error).
const NO_PATH_MESSAGE: &str = "No path between nodes";

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let graph = UndirectedGraph::from_file(&cli.path)?;
    tracing::debug!(elapsed = ?start.elapsed(), nodes = graph.node_count(), "graph_loaded");

    let distance = graph.find_shortest_distance(&cli.from_node_id, &cli.to_node_id);
    tracing::debug!(elapsed = ?start.elapsed(), ?distance, "query_complete");

    match cli.format {
        OutputFormat::Human => match distance.value() {
            Some(d) => println!("{}", d),
            None => println!("{}", NO_PATH_MESSAGE),
        },
        OutputFormat::Json => {
            let envelope = serde_json::json!({
                "from": cli.from_node_id,
                "to": cli.to_node_id,
                "reachable": !distance.is_unreachable(),
                "distance": distance.value(),
            });
            println!("{}", envelope);
        }
    }

    Ok(())
}
