//! Annotation table: rows, CSV repository, first-run bootstrap.
//!
//! The table is created exactly once, when no annotation file exists on
//! disk. Afterwards it is read-only input to the clustering step; rows are
//! only ever changed by a human editing the CSV by hand.

mod bootstrap;
mod repository;
mod row;

pub use bootstrap::{bootstrap, default_rows, discover_images, load_or_bootstrap};
pub use repository::{AnnotationRepository, CsvAnnotationRepository};
pub use row::{AnnotationRow, Label};
