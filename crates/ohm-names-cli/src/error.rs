//! Error types for the command-line front end.
//!
//! Library failures travel as [`eyre::Report`]s with context attached; the
//! variants here mark the failures that decide the process exit code.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Exit code for a source that is neither a grammar nor a description.
pub const EXIT_UNKNOWN_SOURCE: i32 = 101;
/// Exit code for invalid configuration.
pub const EXIT_INVALID_CONFIG: i32 = 2;
/// Exit code for every other failure.
pub const EXIT_FAILURE: i32 = 1;

/// Errors raised by the command-line front end itself.
#[derive(Debug, Error)]
pub enum CliError {
    /// A source path has an extension other than `txt` or `csv`.
    #[error("did not expect source '{0}': sources must be *.txt grammars or *.csv descriptions")]
    UnknownSourceKind(Utf8PathBuf),

    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A source or output file could not be read or written.
    #[error("I/O error on '{path}': {source}")]
    Io {
        /// The file involved.
        path: Utf8PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownSourceKind(_) => EXIT_UNKNOWN_SOURCE,
            Self::InvalidConfig(_) => EXIT_INVALID_CONFIG,
            Self::Io { .. } => EXIT_FAILURE,
        }
    }
}

/// Exit code for a failed run: the code of the first [`CliError`] in the
/// report's chain, or [`EXIT_FAILURE`].
#[must_use]
pub fn exit_code(report: &eyre::Report) -> i32 {
    report
        .chain()
        .find_map(|cause| cause.downcast_ref::<CliError>())
        .map_or(EXIT_FAILURE, CliError::exit_code)
}
