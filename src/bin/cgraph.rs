//! CLI entry point for the `cgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use convgraph::cli::commands;
use convgraph::CgError;

#[derive(Parser)]
#[command(
    name = "cgraph",
    about = "cgraph CLI: shortest conversion chains over a JSON conversion table"
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
    /// Display information about a conversion table
    Info {
        /// Path to the table
        file: PathBuf,
    },
    /// Print the fewest-hop path between two nodes
    Path {
        /// Path to the table
        file: PathBuf,
        /// Starting node id
        from: String,
        /// Target node id
        to: String,
    },
    /// Print the edge values along the path between two nodes
    Weights {
        /// Path to the table
        file: PathBuf,
        /// Starting node id
        from: String,
        /// Target node id
        to: String,
    },
    /// Convert an amount from one unit to another
    Convert {
        /// Path to the table
        file: PathBuf,
        /// Amount to convert
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Source unit
        from: String,
        /// Target unit
        to: String,
    },
    /// List the outgoing edges of a node
    Neighbors {
        /// Path to the table
        file: PathBuf,
        /// Node id
        node: String,
    },
    /// Export the built graph as JSON
    Export {
        /// Path to the table
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Path { file, from, to } => commands::cmd_path(&file, &from, &to, json),
        Commands::Weights { file, from, to } => commands::cmd_weights(&file, &from, &to, json),
        Commands::Convert {
            file,
            amount,
            from,
            to,
        } => commands::cmd_convert(&file, amount, &from, &to, json),
        Commands::Neighbors { file, node } => commands::cmd_neighbors(&file, &node, json),
        Commands::Export { file, pretty } => commands::cmd_export(&file, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            CgError::Io(_) => 1,
            CgError::Json(_) | CgError::EmptyId(_) | CgError::InvalidFactor { .. } => 2,
            CgError::UnknownNode(_) | CgError::NoPath { .. } => 4,
        };
        process::exit(code);
    }
}
