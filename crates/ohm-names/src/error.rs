//! Error types for name decomposition, grammar expansion and description
//! loading.

use thiserror::Error;

/// Failures deriving information from a single structured name.
///
/// These are local to one name: bulk resolution collects them instead of
/// aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The text is empty or contains characters outside `[A-Za-z0-9_]`.
    #[error("malformed name '{name}': {reason}")]
    MalformedName {
        /// The rejected text.
        name: String,
        /// Why the text is not a structured name.
        reason: &'static str,
    },

    /// The device part carries no instance number.
    #[error("device '{device}' of '{name}' has no device number")]
    MissingDeviceNumber {
        /// The full name.
        name: String,
        /// The device part that was inspected.
        device: String,
    },

    /// The device part has a digit followed by something other than digits,
    /// or a number too large to represent.
    #[error("device '{device}' of '{name}' has an invalid device number")]
    InvalidDeviceNumber {
        /// The full name.
        name: String,
        /// The device part that was inspected.
        device: String,
    },

    /// No units were described for the quantity the name measures.
    #[error("no units defined for kind '{kind}' of '{name}'")]
    MissingUnits {
        /// The full name.
        name: String,
        /// The kind part whose units were looked up.
        kind: String,
    },
}

/// Failures while expanding a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// Expansion nested deeper than the configured limit, which happens with
    /// self-recursive rules such as `<a> ::= x<a>`.
    #[error("expansion exceeded depth {depth} while rewriting '{residual}'")]
    DepthExceeded {
        /// The partially expanded string at the point the limit was hit.
        residual: String,
        /// The depth limit in force.
        depth: usize,
    },
}

/// Failures while reading a tabular description source.
#[derive(Debug, Error)]
pub enum DescriptionError {
    /// A row had neither four nor five fields.
    #[error("line {line}: expected 5 columns, got {fields}")]
    MalformedRow {
        /// One-based line number of the row.
        line: u64,
        /// Number of fields found.
        fields: usize,
    },

    /// The underlying CSV reader failed.
    #[error("failed to read description: {0}")]
    Csv(#[from] csv::Error),
}
