//! Constants and dataset configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Dimensionality of the decoration feature space (cream, fruits,
/// sprinkle toppings).
pub const FEATURE_DIM: usize = 3;

/// Upper bound on the automatic cluster count.
///
/// The feature space has only 2^3 distinct points; more than three groups
/// gets unstable on the small datasets this demo targets.
pub const MAX_CLUSTERS: usize = 3;

/// Default RNG seed for reproducible clustering runs.
pub const DEFAULT_SEED: u64 = 42;

/// File extensions accepted by the image scan (lowercase, without dot).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Default image directory, relative to the working directory.
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Default annotation CSV path.
pub const DEFAULT_ANNOTATION_FILE: &str = "cake_annotated.csv";

/// Filesystem locations of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Directory scanned for cake images.
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,

    /// Path of the annotation CSV.
    #[serde(default = "default_annotation_file")]
    pub annotation_file: PathBuf,
}

impl DatasetConfig {
    /// Configuration with explicit paths.
    pub fn new(images_dir: impl Into<PathBuf>, annotation_file: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: images_dir.into(),
            annotation_file: annotation_file.into(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            annotation_file: default_annotation_file(),
        }
    }
}

fn default_images_dir() -> PathBuf {
    PathBuf::from(DEFAULT_IMAGES_DIR)
}

fn default_annotation_file() -> PathBuf {
    PathBuf::from(DEFAULT_ANNOTATION_FILE)
}
