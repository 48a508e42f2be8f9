//! Filtered enumeration of registered names.

use ohm_names_patterns::{GlobPattern, PatternError};

use crate::name::TagName;

/// Filters applied by [`Registry::query`](super::Registry::query).
///
/// All patterns are `|`-separated globs. The defaults select every name.
///
/// # Examples
/// ```
/// use ohm_names::NameQuery;
/// let query = NameQuery::default().with_device("Gen*").with_exclude("*Pa");
/// assert_eq!(query.only, "*");
/// assert!(!query.only_big);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery {
    /// Names must match this pattern.
    pub only: String,
    /// Names must not match this pattern; empty excludes nothing.
    pub exclude: String,
    /// The name's device must match this pattern.
    pub device: String,
    /// Keep only big names (starting with an uppercase letter).
    pub only_big: bool,
}

impl Default for NameQuery {
    fn default() -> Self {
        Self {
            only: "*".into(),
            exclude: String::new(),
            device: "*".into(),
            only_big: false,
        }
    }
}

impl NameQuery {
    /// Replace the inclusion pattern.
    #[must_use]
    pub fn with_only(mut self, pattern: impl Into<String>) -> Self {
        self.only = pattern.into();
        self
    }

    /// Replace the exclusion pattern.
    #[must_use]
    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = pattern.into();
        self
    }

    /// Replace the device pattern.
    #[must_use]
    pub fn with_device(mut self, pattern: impl Into<String>) -> Self {
        self.device = pattern.into();
        self
    }

    /// Restrict the query to big names.
    #[must_use]
    pub fn with_only_big(mut self, only_big: bool) -> Self {
        self.only_big = only_big;
        self
    }

    pub(super) fn compile(&self) -> Result<CompiledQuery, PatternError> {
        Ok(CompiledQuery {
            only: GlobPattern::compile(&self.only)?,
            exclude: GlobPattern::compile(&self.exclude)?,
            device: GlobPattern::compile(&self.device)?,
            only_big: self.only_big,
        })
    }
}

pub(super) struct CompiledQuery {
    only: GlobPattern,
    exclude: GlobPattern,
    device: GlobPattern,
    only_big: bool,
}

impl CompiledQuery {
    pub(super) fn accepts(&self, name: &str) -> bool {
        let Ok(parsed) = TagName::parse(name) else {
            return false;
        };
        self.only.is_match(name)
            && !self.exclude.is_match(name)
            && self.device.is_match(parsed.device())
            && (!self.only_big || parsed.is_big())
    }
}
