//! Line-oriented reader for grammar text.

use tracing::warn;

use super::rules::RuleTable;

const DEFINES: &str = "::=";

/// Parse grammar text into a rule table.
///
/// Each line is trimmed; blank lines and lines starting with `#` are
/// skipped. A line `lhs ::= rhs` defines `lhs` with both sides trimmed, and a
/// later definition of the same nonterminal replaces the earlier one. Lines
/// without exactly one `::=` are skipped with a warning.
///
/// # Examples
/// ```
/// use ohm_names::parse_grammar;
/// let rules = parse_grammar("<a> ::= b|c");
/// assert_eq!(rules.get("<a>"), Some("b|c"));
/// ```
#[must_use]
pub fn parse_grammar(grammar: &str) -> RuleTable {
    let mut rules = RuleTable::new();
    for (index, line) in grammar.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut sides = line.split(DEFINES);
        match (sides.next(), sides.next(), sides.next()) {
            (Some(lhs), Some(rhs), None) => {
                rules.define(lhs.trim(), rhs.trim());
            }
            _ => warn!(line = index + 1, text = line, "expecting a single '::=' in grammar line"),
        }
    }
    rules
}
