//! `dataset` command: the annotation table and the discovered images.

use clap::Args;
use tracing::{debug, error};

use cake_deco_core::annotation::discover_images;
use cake_deco_core::{load_or_bootstrap, Result};

use super::DatasetOpts;
use crate::error::CliExitCode;

/// Arguments for `cake-deco dataset`
#[derive(Args, Debug)]
pub struct DatasetArgs {
    #[command(flatten)]
    pub dataset: DatasetOpts,
}

pub fn dataset_command(args: DatasetArgs) -> i32 {
    match run(&args) {
        Ok(()) => CliExitCode::Success.into(),
        Err(e) => {
            error!("dataset command failed: {e}");
            eprintln!("error: {e}");
            CliExitCode::from(&e).into()
        }
    }
}

fn run(args: &DatasetArgs) -> Result<()> {
    let config = args.dataset.to_config();
    let rows = load_or_bootstrap(&config)?;

    println!("Cake decoration dataset ({} row(s))", rows.len());
    println!();
    println!(
        "{:<28} {:>6} {:>7} {:>18}",
        "file_name", "cream", "fruits", "sprinkle_toppings"
    );
    for row in &rows {
        println!(
            "{:<28} {:>6} {:>7} {:>18}",
            row.file_name,
            row.cream.as_str(),
            row.fruits.as_str(),
            row.sprinkle_toppings.as_str()
        );
    }

    // The image listing is decorative on this view; a directory that went
    // missing after bootstrap is skipped, not fatal.
    match discover_images(&config.images_dir) {
        Ok(images) => {
            println!();
            println!(
                "Images in {} ({} file(s)):",
                config.images_dir.display(),
                images.len()
            );
            for image in images {
                println!("  {image}");
            }
        }
        Err(e) => debug!("image listing skipped: {e}"),
    }

    Ok(())
}
