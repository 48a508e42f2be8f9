//! The nonterminal → right-hand side table shared by grammar and description
//! sources.

use std::collections::BTreeMap;

/// Mapping from nonterminal to its right-hand side.
///
/// Right-hand sides are stored as written, with alternatives separated by
/// `|`; expansion splits them on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<String, String>,
}

impl RuleTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `lhs`, replacing any previous right-hand side.
    ///
    /// Returns the replaced right-hand side, if any.
    pub fn define(&mut self, lhs: impl Into<String>, rhs: impl Into<String>) -> Option<String> {
        self.rules.insert(lhs.into(), rhs.into())
    }

    /// Add `alternative` to `lhs`.
    ///
    /// An absent or empty right-hand side is replaced by `alternative`;
    /// otherwise `|alternative` is appended.
    ///
    /// # Examples
    /// ```
    /// use ohm_names::RuleTable;
    /// let mut rules = RuleTable::new();
    /// rules.append_alternative("<X>", "a");
    /// rules.append_alternative("<X>", "b");
    /// assert_eq!(rules.get("<X>"), Some("a|b"));
    /// ```
    pub fn append_alternative(&mut self, lhs: &str, alternative: &str) {
        match self.rules.get_mut(lhs) {
            Some(rhs) if !rhs.is_empty() => {
                rhs.push('|');
                rhs.push_str(alternative);
            }
            Some(rhs) => alternative.clone_into(rhs),
            None => {
                self.rules.insert(lhs.to_owned(), alternative.to_owned());
            }
        }
    }

    /// Copy every rule of `other` into this table, replacing rules with the
    /// same left-hand side.
    pub fn overlay(&mut self, other: Self) {
        self.rules.extend(other.rules);
    }

    /// The right-hand side defined for `lhs`.
    #[must_use]
    pub fn get(&self, lhs: &str) -> Option<&str> {
        self.rules.get(lhs).map(String::as_str)
    }

    /// Whether `lhs` has a definition.
    #[must_use]
    pub fn contains(&self, lhs: &str) -> bool {
        self.rules.contains_key(lhs)
    }

    /// Iterate over `(lhs, rhs)` pairs in left-hand-side order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|(lhs, rhs)| (lhs.as_str(), rhs.as_str()))
    }

    /// Number of defined nonterminals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Remove every rule.
    pub fn clear(&mut self) {
        self.rules.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_replaces_previous_rule() {
        let mut rules = RuleTable::new();
        assert_eq!(rules.define("<s>", "hello"), None);
        assert_eq!(rules.define("<s>", "world"), Some("hello".into()));
        assert_eq!(rules.get("<s>"), Some("world"));
    }

    #[test]
    fn append_fills_empty_rule() {
        let mut rules = RuleTable::new();
        rules.define("<X>", "");
        rules.append_alternative("<X>", "c");
        assert_eq!(rules.get("<X>"), Some("c"));
    }

    #[test]
    fn append_extends_existing_rule() {
        let mut rules = RuleTable::new();
        rules.define("<X>", "a|b");
        rules.append_alternative("<X>", "c");
        assert_eq!(rules.get("<X>"), Some("a|b|c"));
    }

    #[test]
    fn overlay_prefers_later_rules() {
        let mut base = RuleTable::new();
        base.define("<a>", "1");
        base.define("<b>", "2");
        let mut later = RuleTable::new();
        later.define("<b>", "3");
        base.overlay(later);
        assert_eq!(base.get("<a>"), Some("1"));
        assert_eq!(base.get("<b>"), Some("3"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn clear_empties_table() {
        let mut rules = RuleTable::new();
        rules.define("<a>", "1");
        rules.clear();
        assert!(rules.is_empty());
        assert!(!rules.contains("<a>"));
    }
}
