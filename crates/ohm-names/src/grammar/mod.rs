//! BNF-style grammars of name fragments and their expansion.
//!
//! A grammar is a set of rules `<Nonterminal> ::= rhs`, where `rhs` mixes
//! literal text, nonterminal references and `|`-separated alternatives.
//! Expanding a start symbol enumerates every concrete string it derives.

mod expand;
mod parse;
mod rules;

pub use expand::{DEFAULT_MAX_DEPTH, Expander, expand};
pub use parse::parse_grammar;
pub use rules::RuleTable;

use crate::error::GrammarError;

/// Parse `grammar` and expand `start`, returning the sorted, deduplicated
/// sentences.
///
/// Later rules for the same nonterminal override earlier ones.
///
/// # Errors
/// Returns [`GrammarError::DepthExceeded`] for grammars that recurse past
/// [`DEFAULT_MAX_DEPTH`].
///
/// # Examples
/// ```
/// use ohm_names::expand_bnf;
/// assert_eq!(expand_bnf("<s> ::= hello\n", "<s>")?, ["hello"]);
/// assert_eq!(expand_bnf("<s> ::= hello|world\n", "<s>")?, ["hello", "world"]);
/// # Ok::<(), ohm_names::GrammarError>(())
/// ```
pub fn expand_bnf(grammar: &str, start: &str) -> Result<Vec<String>, GrammarError> {
    let rules = parse_grammar(grammar);
    Ok(expand(&rules, start)?.into_iter().collect())
}
