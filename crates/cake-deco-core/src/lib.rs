//! Cake Decoration Clustering — Core Library
//!
//! Labels cake images with three binary decoration attributes (cream,
//! fruits, sprinkle toppings) and groups them with k-means.
//!
//! # Architecture
//!
//! Two halves, executed in sequence:
//!
//! - **Annotation bootstrap** (`annotation`): scan the image directory and,
//!   on first run only, write one default-labelled CSV row per image.
//! - **Clustering** (`features`, `clustering`, `analysis`): map yes/no
//!   labels to a binary feature matrix, pick `k = min(3, rows)`, and run
//!   seeded k-means, attaching one cluster id per row.
//!
//! The annotation CSV is the only persisted state. It is also the surface
//! a human edits by hand between runs, so an existing file is never
//! rewritten.
//!
//! # Example
//!
//! ```
//! use cake_deco_core::clustering::cluster_count;
//!
//! // Ten rows still cluster into at most three groups.
//! assert_eq!(cluster_count(10).unwrap(), 3);
//! assert_eq!(cluster_count(2).unwrap(), 2);
//! assert!(cluster_count(1).is_err());
//! ```

pub mod analysis;
pub mod annotation;
pub mod clustering;
pub mod config;
pub mod error;
pub mod features;

// Re-exports for convenience
pub use analysis::{cluster_annotations, ClusteredRow, ClusteredTable, ToppingSummary};
pub use annotation::{
    bootstrap, load_or_bootstrap, AnnotationRepository, AnnotationRow, CsvAnnotationRepository,
    Label,
};
pub use clustering::{
    cluster_count, ClusteringResult, DecorationClustering, KMeansConfig, StandardKMeans,
};
pub use config::DatasetConfig;
pub use error::{AnnotationError, CakeDecoError, ClusteringError, Result};
