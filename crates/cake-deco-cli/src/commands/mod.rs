//! Command implementations.

pub mod cluster;
pub mod dataset;

use std::path::PathBuf;

use clap::Args;

use cake_deco_core::config::{DEFAULT_ANNOTATION_FILE, DEFAULT_IMAGES_DIR};
use cake_deco_core::DatasetConfig;

/// Dataset location flags shared by both commands.
#[derive(Args, Debug)]
pub struct DatasetOpts {
    /// Directory scanned for cake images
    #[arg(long, env = "CAKE_DECO_IMAGES_DIR", default_value = DEFAULT_IMAGES_DIR)]
    pub images_dir: PathBuf,

    /// Annotation CSV path
    #[arg(long, env = "CAKE_DECO_ANNOTATION_FILE", default_value = DEFAULT_ANNOTATION_FILE)]
    pub annotation_file: PathBuf,
}

impl DatasetOpts {
    pub fn to_config(&self) -> DatasetConfig {
        DatasetConfig::new(&self.images_dir, &self.annotation_file)
    }
}
