//! First-run annotation bootstrap.
//!
//! Scans the image directory and, when no annotation file exists yet,
//! writes one default-labelled row per discovered image. The guard is a
//! one-shot "create on absence": an existing file is never rewritten or
//! merged, whatever the directory currently contains, so hand-edited
//! labels survive restarts. Images added after the first run stay out of
//! the table until the file is deleted.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::repository::{AnnotationRepository, CsvAnnotationRepository};
use super::row::AnnotationRow;
use crate::config::{DatasetConfig, IMAGE_EXTENSIONS};
use crate::error::AnnotationError;

/// List image file names in `dir`, sorted ascending.
///
/// Filters case-insensitively on `.jpg`, `.jpeg`, `.png`; everything else
/// is ignored. A missing or unreadable directory is an error that
/// propagates to the caller - bootstrap aborts rather than inventing an
/// empty dataset.
pub fn discover_images(dir: &Path) -> Result<Vec<String>, AnnotationError> {
    let entries = fs::read_dir(dir).map_err(|source| AnnotationError::ImageDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| AnnotationError::ImageDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if has_image_extension(&name) {
            files.push(name);
        }
    }
    files.sort();

    debug!("discovered {} image(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Case-insensitive check against the accepted image extensions.
fn has_image_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => IMAGE_EXTENSIONS
            .iter()
            .any(|accepted| ext.eq_ignore_ascii_case(accepted)),
        _ => false,
    }
}

/// One default row per discovered file: cream=yes, fruits=no,
/// sprinkle_toppings=no.
pub fn default_rows(files: &[String]) -> Vec<AnnotationRow> {
    files
        .iter()
        .cloned()
        .map(AnnotationRow::with_defaults)
        .collect()
}

/// Create the annotation table if it does not exist yet.
///
/// Returns whether a new table was written. When the repository already
/// exists nothing is touched, regardless of what the image directory now
/// contains.
pub fn bootstrap<R: AnnotationRepository>(
    repo: &R,
    images_dir: &Path,
) -> Result<bool, AnnotationError> {
    if repo.exists() {
        debug!("annotation table already present, skipping bootstrap");
        return Ok(false);
    }

    let files = discover_images(images_dir)?;
    let rows = default_rows(&files);
    repo.create(&rows)?;

    info!(
        "created annotation table with {} row(s) from {}",
        rows.len(),
        images_dir.display()
    );
    println!("[BOOTSTRAP] Annotation CSV generated: {} row(s)", rows.len());
    Ok(true)
}

/// Bootstrap if needed, then load the table.
pub fn load_or_bootstrap(config: &DatasetConfig) -> Result<Vec<AnnotationRow>, AnnotationError> {
    let repo = CsvAnnotationRepository::new(&config.annotation_file);
    bootstrap(&repo, &config.images_dir)?;
    repo.load()
}
