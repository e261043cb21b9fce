//! CLI exit-code policy.
//!
//! - 0: success
//! - 1: recoverable error (missing directory, too little data to cluster)
//! - 2: corrupt annotation file (unparseable rows, unknown label values)
//!
//! A corrupt CSV gets its own code because the file is hand-edited between
//! runs; scripts wrapping the demo can tell "fix your labels" apart from
//! ordinary failures.

use cake_deco_core::{AnnotationError, CakeDecoError, ClusteringError};

/// Exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    /// Recoverable error, surfaced on stderr.
    Warning = 1,
    /// The annotation file itself is unusable.
    Corrupt = 2,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

impl From<&CakeDecoError> for CliExitCode {
    fn from(err: &CakeDecoError) -> Self {
        match err {
            CakeDecoError::Annotation(AnnotationError::Csv(e)) if is_parse_error(e) => {
                CliExitCode::Corrupt
            }
            CakeDecoError::Annotation(_) => CliExitCode::Warning,
            CakeDecoError::Clustering(ClusteringError::TooFewRows { .. }) => CliExitCode::Warning,
            CakeDecoError::Clustering(_) => CliExitCode::Warning,
        }
    }
}

/// Whether a CSV error means the file content is bad, as opposed to an
/// I/O failure reaching it.
fn is_parse_error(err: &csv::Error) -> bool {
    matches!(
        err.kind(),
        csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::UnequalLengths { .. }
    )
}
