//! Exhaustive expansion of a start symbol into terminal strings.
//!
//! Expansion rewrites the first occurrence of each applicable left-hand side
//! with each of its alternatives and recurses, unioning every branch. The
//! same residual string is often reached through different rule orders, so
//! results are memoised by residual string.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use super::rules::RuleTable;
use crate::error::GrammarError;

/// Nesting limit applied by [`expand`]. Name grammars nest two or three
/// levels deep; anything near this limit is a recursive rule.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Expand `start` against `rules` with the default depth limit, warning
/// about nonterminals that were referenced but never defined.
///
/// # Errors
/// Returns [`GrammarError::DepthExceeded`] when expansion nests deeper than
/// [`DEFAULT_MAX_DEPTH`].
pub fn expand(rules: &RuleTable, start: &str) -> Result<BTreeSet<String>, GrammarError> {
    let mut expander = Expander::new(rules);
    let sentences = expander.expand(start)?;
    for nonterminal in expander.unresolved() {
        warn!(nonterminal, "undefined nonterminal left unexpanded");
    }
    Ok(sentences)
}

/// Memoising expander over one rule table.
///
/// # Examples
/// ```
/// use ohm_names::{Expander, parse_grammar};
/// let rules = parse_grammar("<s> ::= <d>P\n<d> ::= Gen1|Gen2");
/// let mut expander = Expander::new(&rules);
/// let names: Vec<_> = expander.expand("<s>")?.into_iter().collect();
/// assert_eq!(names, ["Gen1P", "Gen2P"]);
/// # Ok::<(), ohm_names::GrammarError>(())
/// ```
#[derive(Debug)]
pub struct Expander<'r> {
    rules: &'r RuleTable,
    max_depth: usize,
    memo: HashMap<String, BTreeSet<String>>,
    unresolved: BTreeSet<String>,
}

impl<'r> Expander<'r> {
    /// Create an expander using [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub fn new(rules: &'r RuleTable) -> Self {
        Self {
            rules,
            max_depth: DEFAULT_MAX_DEPTH,
            memo: HashMap::new(),
            unresolved: BTreeSet::new(),
        }
    }

    /// Replace the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Every finished string derivable from `start`.
    ///
    /// # Errors
    /// Returns [`GrammarError::DepthExceeded`] when a derivation needs more
    /// than the configured number of nested rewrites.
    pub fn expand(&mut self, start: &str) -> Result<BTreeSet<String>, GrammarError> {
        self.expand_from(start, 0)
    }

    /// Bracketed nonterminals seen in residual strings that no rule could
    /// rewrite.
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.unresolved.iter().map(String::as_str)
    }

    fn expand_from(&mut self, residual: &str, depth: usize) -> Result<BTreeSet<String>, GrammarError> {
        if is_finished(residual) {
            return Ok(BTreeSet::from([residual.to_owned()]));
        }
        if let Some(done) = self.memo.get(residual) {
            return Ok(done.clone());
        }
        if depth >= self.max_depth {
            return Err(GrammarError::DepthExceeded {
                residual: residual.to_owned(),
                depth: self.max_depth,
            });
        }

        let rules = self.rules;
        let mut sentences = BTreeSet::new();
        let mut rewritten = false;
        for (lhs, rhs) in rules.iter() {
            if lhs.is_empty() {
                continue;
            }
            let Some(at) = residual.find(lhs) else {
                continue;
            };
            for alternative in rhs.split('|') {
                let next = replace_at(residual, at, lhs.len(), alternative);
                if next == residual {
                    continue;
                }
                rewritten = true;
                sentences.extend(self.expand_from(&next, depth + 1)?);
            }
        }

        if !rewritten {
            debug!(residual, "no rule rewrites residual string");
            self.unresolved.extend(bracketed(residual).map(str::to_owned));
        }
        self.memo.insert(residual.to_owned(), sentences.clone());
        Ok(sentences)
    }
}

/// A string is finished once no nonterminal marker or alternative separator
/// remains.
fn is_finished(text: &str) -> bool {
    !text.contains(['<', '|'])
}

fn replace_at(text: &str, at: usize, len: usize, replacement: &str) -> String {
    let (Some(head), Some(tail)) = (text.get(..at), text.get(at + len..)) else {
        return text.to_owned();
    };
    let mut out = String::with_capacity(head.len() + replacement.len() + tail.len());
    out.push_str(head);
    out.push_str(replacement);
    out.push_str(tail);
    out
}

/// `<...>` tokens in `text`, left to right.
fn bracketed(text: &str) -> impl Iterator<Item = &str> {
    text.match_indices('<').filter_map(move |(open, _)| {
        let rest = text.get(open..)?;
        let close = rest.find('>')?;
        rest.get(..=close)
    })
}
