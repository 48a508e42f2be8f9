//! Glob lexing and compilation helpers.

mod class;
mod compiler;
mod lexer;

use crate::errors::PatternError;
use regex::Regex;

pub use compiler::build_regex_from_glob;

/// A compiled `|`-separated glob pattern.
///
/// # Examples
/// ```
/// use ohm_names_patterns::GlobPattern;
/// let pattern = GlobPattern::compile("Gen*|Pv?P")?;
/// assert!(pattern.is_match("Gen12P"));
/// assert!(pattern.is_match("Pv1P"));
/// assert!(!pattern.is_match("Ess1P"));
/// # Ok::<(), ohm_names_patterns::PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    regex: Regex,
}

impl GlobPattern {
    /// Compile `pattern` into a reusable matcher.
    ///
    /// # Errors
    /// Returns [`PatternError`] when the generated regex source is too large
    /// to compile.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&build_regex_from_glob(pattern))?;
        Ok(Self {
            source: pattern.to_owned(),
            regex,
        })
    }

    /// Whether `value` matches any alternative of the pattern.
    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The glob text this matcher was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Match `value` against a `|`-separated glob pattern.
///
/// A pattern too large to compile matches nothing.
///
/// # Examples
/// ```
/// use ohm_names_patterns::matches;
/// assert!(matches("A.c", "*.c"));
/// assert!(matches("Gen1P", "Pv*|Gen*"));
/// assert!(!matches("Gen1P", ""));
/// ```
#[must_use]
pub fn matches(value: &str, pattern: &str) -> bool {
    GlobPattern::compile(pattern).is_ok_and(|glob| glob.is_match(value))
}
