//! `cluster` command: k-means over the decoration attributes.

use clap::Args;
use tracing::error;

use cake_deco_core::config::DEFAULT_SEED;
use cake_deco_core::{cluster_annotations, load_or_bootstrap, Result, ToppingSummary};

use super::DatasetOpts;
use crate::error::CliExitCode;

/// Arguments for `cake-deco cluster`
#[derive(Args, Debug)]
pub struct ClusterArgs {
    #[command(flatten)]
    pub dataset: DatasetOpts,

    /// RNG seed; the same seed reproduces the same assignment
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

pub fn cluster_command(args: ClusterArgs) -> i32 {
    match run(&args) {
        Ok(()) => CliExitCode::Success.into(),
        Err(e) => {
            error!("cluster command failed: {e}");
            eprintln!("error: {e}");
            CliExitCode::from(&e).into()
        }
    }
}

fn run(args: &ClusterArgs) -> Result<()> {
    let config = args.dataset.to_config();
    let rows = load_or_bootstrap(&config)?;

    let table = cluster_annotations(&rows, args.seed)?;

    println!(
        "Automatic cluster count: {} (rows = {})",
        table.n_clusters,
        rows.len()
    );
    println!();
    println!(
        "{:<28} {:>6} {:>7} {:>18} {:>8}",
        "file_name", "cream", "fruits", "sprinkle_toppings", "cluster"
    );
    for clustered in &table.rows {
        println!(
            "{:<28} {:>6} {:>7} {:>18} {:>8}",
            clustered.row.file_name,
            clustered.features[0] as u8,
            clustered.features[1] as u8,
            clustered.features[2] as u8,
            clustered.cluster
        );
    }

    println!();
    println!("Cluster sizes:");
    for (id, cluster) in table.result.clusters.iter().enumerate() {
        println!("  cluster {id}: {} member(s)", cluster.len());
    }

    let summary = ToppingSummary::from_rows(&rows);
    println!();
    println!("Topping distribution:");
    println!(
        "  cream:     {:>3} ({:.1}%)",
        summary.cream,
        summary.percent(summary.cream)
    );
    println!(
        "  fruits:    {:>3} ({:.1}%)",
        summary.fruits,
        summary.percent(summary.fruits)
    );
    println!(
        "  sprinkles: {:>3} ({:.1}%)",
        summary.sprinkles,
        summary.percent(summary.sprinkles)
    );

    println!();
    println!(
        "K-means finished: {} cluster(s) in {} iteration(s).",
        table.n_clusters, table.result.iterations
    );

    Ok(())
}
