//! Error types for cake-deco-core.
//!
//! - [`AnnotationError`]: bootstrap and CSV repository failures
//! - [`ClusteringError`]: cluster-count policy and k-means failures
//! - [`CakeDecoError`]: unified top-level error with a crate [`Result`] alias
//!
//! Library code never panics; errors propagate with `?`. The only
//! deliberately recovered condition is [`ClusteringError::TooFewRows`],
//! which callers surface as a user-visible message instead of running the
//! clusterer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the annotation bootstrapper and CSV repository.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// The image directory could not be listed. Fatal at bootstrap time.
    #[error("cannot list image directory {path}: {source}")]
    ImageDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV read/write or row (de)serialization failed.
    ///
    /// Unknown label values ("maybe" instead of "yes"/"no") surface here
    /// at load time rather than flowing into the clusterer as undefined
    /// numeric data.
    #[error("annotation file error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error outside of the directory listing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the cluster-count policy and the k-means routine.
#[derive(Debug, Error)]
pub enum ClusteringError {
    /// Zero or one rows cannot form more than one cluster.
    #[error("too little data to cluster: {rows} row(s), need at least 2")]
    TooFewRows { rows: usize },

    /// The clusterer was handed an empty feature matrix.
    #[error("clustering requires at least one point")]
    EmptyInput,

    /// Requested more clusters than there are points.
    #[error("k ({k}) must be <= number of points ({points})")]
    TooManyClusters { k: usize, points: usize },

    /// A configuration parameter failed validation.
    #[error("invalid clustering config: {0}")]
    InvalidConfig(String),
}

/// Top-level unified error.
#[derive(Debug, Error)]
pub enum CakeDecoError {
    #[error(transparent)]
    Annotation(#[from] AnnotationError),

    #[error(transparent)]
    Clustering(#[from] ClusteringError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CakeDecoError>;
