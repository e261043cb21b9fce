//! Cake Decoration Clustering CLI
//!
//! Two subcommands mirror the demo's two views:
//!
//! - `dataset`: bootstrap the annotation CSV if absent, then print the
//!   table and the discovered images
//! - `cluster`: run k-means over the three binary decoration attributes
//!   and print the clustered table plus the topping distribution
//!
//! Everything runs single-threaded and synchronously: bootstrap first,
//! then the selected view, once per invocation.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

pub use error::CliExitCode;

/// Cake decoration clustering demo
#[derive(Parser)]
#[command(name = "cake-deco")]
#[command(version = "0.1.0")]
#[command(about = "Label cake images and cluster their decorations with k-means")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the annotation dataset, bootstrapping it on first run
    Dataset(commands::dataset::DatasetArgs),
    /// Cluster the decoration attributes with k-means
    Cluster(commands::cluster::ClusterArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Dataset(args) => commands::dataset::dataset_command(args),
        Commands::Cluster(args) => commands::cluster::cluster_command(args),
    };

    std::process::exit(exit_code);
}
