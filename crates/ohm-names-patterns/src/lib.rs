//! Glob matching helpers for ohm structured names.
//!
//! Patterns use shell-style globs (`*`, `?`, `[seq]`, `[!seq]`) extended with
//! `|` to separate alternatives, so `Gen*|Pv*` selects every generator and
//! every photovoltaic name. Each pattern is compiled once into an anchored
//! regular expression and reused by the registry queries and source
//! classification.

mod errors;
mod pattern;

pub use errors::PatternError;
pub use pattern::{GlobPattern, build_regex_from_glob, matches};
