//! Error types shared by the glob compilation modules.

use thiserror::Error;

/// Errors surfaced while converting glob patterns into regular expressions.
///
/// Glob syntax itself never fails to parse: malformed brackets fall back to
/// literal text. The only failure is the generated regex exceeding the
/// engine's size limits.
///
/// # Examples
/// ```
/// use ohm_names_patterns::PatternError;
/// let err = PatternError::Regex(regex::Error::Syntax("bad".into()));
/// assert!(err.to_string().contains("bad"));
/// ```
#[derive(Debug, Error)]
pub enum PatternError {
    /// The generated regular expression could not be compiled.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}
