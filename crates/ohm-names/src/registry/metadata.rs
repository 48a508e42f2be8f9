//! Units, short, long and literal description tables keyed by name or part.

use std::collections::BTreeMap;

/// Description tables filled from tabular sources.
///
/// Units and short descriptions are usually keyed by parts (`P` → `kW`,
/// `Gen` → `Generator`), long descriptions by complete names. Literal
/// descriptions are the rule field of plain description rows and serve as a
/// fallback short description for their part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    units: BTreeMap<String, String>,
    short: BTreeMap<String, String>,
    long: BTreeMap<String, String>,
    literals: BTreeMap<String, String>,
}

impl Metadata {
    /// Record the units of `key`.
    pub fn set_units(&mut self, key: impl Into<String>, units: impl Into<String>) {
        self.units.insert(key.into(), units.into());
    }

    /// Record the short description of `key`.
    pub fn set_short(&mut self, key: impl Into<String>, short: impl Into<String>) {
        self.short.insert(key.into(), short.into());
    }

    /// Record the long description of `key`.
    pub fn set_long(&mut self, key: impl Into<String>, long: impl Into<String>) {
        self.long.insert(key.into(), long.into());
    }

    /// Record `key` as a described part with its literal description.
    pub fn describe_part(&mut self, key: impl Into<String>, literal: impl Into<String>) {
        self.literals.insert(key.into(), literal.into());
    }

    /// Units recorded for `key`.
    #[must_use]
    pub fn units(&self, key: &str) -> Option<&str> {
        self.units.get(key).map(String::as_str)
    }

    /// Short description recorded for `key`.
    #[must_use]
    pub fn short(&self, key: &str) -> Option<&str> {
        self.short.get(key).map(String::as_str)
    }

    /// Long description recorded for `key`.
    #[must_use]
    pub fn long(&self, key: &str) -> Option<&str> {
        self.long.get(key).map(String::as_str)
    }

    /// Literal description recorded for the described part `key`.
    #[must_use]
    pub fn literal(&self, key: &str) -> Option<&str> {
        self.literals.get(key).map(String::as_str)
    }

    /// Whether `key` was introduced by a plain description row.
    #[must_use]
    pub fn is_described_part(&self, key: &str) -> bool {
        self.literals.contains_key(key)
    }

    /// Every `(key, units)` pair, sorted by key.
    pub fn all_units(&self) -> impl Iterator<Item = (&str, &str)> {
        self.units.iter().map(|(key, units)| (key.as_str(), units.as_str()))
    }

    /// Empty every table.
    pub fn clear(&mut self) {
        self.units.clear();
        self.short.clear();
        self.long.clear();
        self.literals.clear();
    }
}
