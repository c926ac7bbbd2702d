//! CLI entry point for the `algokit` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use algokit::cli::commands;
use algokit::graph::TraversalOrder;
use algokit::AlgoError;

#[derive(Parser)]
#[command(
    name = "algokit",
    about = "Shortest paths, spanning trees and heap sort over JSON graph files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest paths from one vertex (Dijkstra)
    ShortestPath {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Source vertex label
        #[arg(long)]
        from: String,
        /// Destination vertex label (all vertices when omitted)
        #[arg(long)]
        to: Option<String>,
    },
    /// Minimum spanning tree from the first vertex (Prim)
    Mst {
        /// Path to the JSON graph file
        file: PathBuf,
    },
    /// List vertices reachable from a vertex
    Traverse {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Start vertex label
        #[arg(long)]
        from: String,
        /// Order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        order: String,
    },
    /// Heap sort a list of numbers
    Sort {
        /// Numbers to sort
        #[arg(allow_negative_numbers = true)]
        values: Vec<f64>,
        /// Largest first
        #[arg(long)]
        descending: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::ShortestPath { file, from, to } => {
            commands::cmd_shortest_path(&file, &from, to.as_deref(), json)
        }
        Commands::Mst { file } => commands::cmd_mst(&file, json),
        Commands::Traverse { file, from, order } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&file, &from, order, json)
        }
        Commands::Sort { values, descending } => commands::cmd_sort(values, descending, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            AlgoError::Io(_) => 1,
            AlgoError::Json(_) => 2,
            AlgoError::VertexNotFound(_) | AlgoError::UnknownLabel(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
