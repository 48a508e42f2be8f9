//! In-memory registry of resolved names and the tables they resolve against.
//!
//! A [`Registry`] owns everything one run accumulates: the merged rule table,
//! the units/short/long metadata keyed by name or part, and the finalised
//! entries. It is passed by reference to the loaders and cleared explicitly
//! when a fresh run is needed.

mod metadata;
mod query;

use std::collections::BTreeMap;

use ohm_names_patterns::PatternError;
use serde::Serialize;
use thiserror::Error;

use crate::error::NameError;
use crate::grammar::RuleTable;
use crate::name::TagName;

pub use metadata::Metadata;
pub use query::NameQuery;

/// Units and descriptions recorded for one name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameEntry {
    /// Units of the measured quantity, e.g. `kW`.
    pub units: String,
    /// Short description assembled from the name's parts.
    pub short: String,
    /// Long description, empty when none was given.
    pub long: String,
}

/// A generated name that could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot resolve '{name}': {source}")]
pub struct NameFailure {
    /// The name as generated.
    pub name: String,
    /// Why resolution failed.
    #[source]
    pub source: NameError,
}

/// Names, metadata and rules for one run.
#[derive(Debug, Default)]
pub struct Registry {
    entries: BTreeMap<String, NameEntry>,
    metadata: Metadata,
    rules: RuleTable,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every entry, metadata table and rule.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.metadata.clear();
        self.rules.clear();
    }

    /// Create or overwrite the entry for `name`.
    ///
    /// # Errors
    /// Returns [`NameError::MalformedName`] when `name` is not a structured
    /// name.
    pub fn register(
        &mut self,
        name: &str,
        units: impl Into<String>,
        short: impl Into<String>,
        long: impl Into<String>,
    ) -> Result<(), NameError> {
        TagName::parse(name)?;
        self.entries.insert(
            name.to_owned(),
            NameEntry {
                units: units.into(),
                short: short.into(),
                long: long.into(),
            },
        );
        Ok(())
    }

    /// Registered names matching `query`, sorted.
    ///
    /// # Errors
    /// Returns [`PatternError`] when one of the query's globs cannot be
    /// compiled.
    pub fn query(&self, query: &NameQuery) -> Result<Vec<&str>, PatternError> {
        let filter = query.compile()?;
        Ok(self
            .entries
            .keys()
            .map(String::as_str)
            .filter(|name| filter.accepts(name))
            .collect())
    }

    /// Units of `name`, looked up by its kind.
    ///
    /// # Errors
    /// Returns [`NameError::MalformedName`] for invalid names and
    /// [`NameError::MissingUnits`] when the kind has no units.
    pub fn units_of(&self, name: &str) -> Result<&str, NameError> {
        let parsed = TagName::parse(name)?;
        let kind = parsed.kind();
        self.metadata
            .units(kind)
            .ok_or_else(|| NameError::MissingUnits {
                name: name.to_owned(),
                kind: kind.to_owned(),
            })
    }

    /// Short description of `name`: each part's short description, falling
    /// back to its literal description and then to the part itself.
    ///
    /// # Errors
    /// Returns [`NameError::MalformedName`] for invalid names.
    pub fn short_of(&self, name: &str) -> Result<String, NameError> {
        let parsed = TagName::parse(name)?;
        let words: Vec<&str> = parsed
            .parts()
            .iter()
            .map(|&part| {
                self.metadata
                    .short(part)
                    .or_else(|| self.metadata.literal(part).filter(|text| !text.is_empty()))
                    .unwrap_or(part)
            })
            .collect();
        Ok(words.join(" "))
    }

    /// Long description of `name`, or the empty string.
    #[must_use]
    pub fn long_of(&self, name: &str) -> &str {
        self.metadata.long(name).unwrap_or_default()
    }

    /// Resolve units, short and long description for `name`.
    ///
    /// # Errors
    /// Propagates the failures of [`Registry::units_of`] and
    /// [`Registry::short_of`].
    pub fn resolve(&self, name: &str) -> Result<NameEntry, NameError> {
        Ok(NameEntry {
            units: self.units_of(name)?.to_owned(),
            short: self.short_of(name)?,
            long: self.long_of(name).to_owned(),
        })
    }

    /// Resolve and register every name, collecting the ones that fail.
    pub fn populate<I, S>(&mut self, names: I) -> Vec<NameFailure>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut failures = Vec::new();
        for name in names {
            let name = name.as_ref();
            match self.resolve(name) {
                Ok(entry) => {
                    self.entries.insert(name.to_owned(), entry);
                }
                Err(source) => failures.push(NameFailure {
                    name: name.to_owned(),
                    source,
                }),
            }
        }
        failures
    }

    /// The entry registered for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NameEntry> {
        self.entries.get(name)
    }

    /// Every registered name and entry, sorted by name.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &NameEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no name is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Units, short, long and literal description tables.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Mutable access to the metadata tables.
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// The merged rule table.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Mutable access to the merged rule table.
    pub fn rules_mut(&mut self) -> &mut RuleTable {
        &mut self.rules
    }
}

#[cfg(test)]
mod tests;
