//! Structured tag names for power-system telemetry.
//!
//! A name such as `Gen1P` spells out its device (`Gen1`, generator number 1),
//! the measured quantity (`P`, active power) and therefore its units (kW).
//! This crate decomposes such names, converts them to and from a
//! `lower_snake` spelling, expands BNF-style grammars of name fragments into
//! the full set of concrete names, merges tabular descriptions into the
//! grammar and metadata tables, and keeps the resolved names in a
//! [`Registry`].
//!
//! # Example
//!
//! ```
//! use ohm_names::{Registry, TagName, expand_bnf};
//!
//! let names = expand_bnf("<Names> ::= Gen1<Q>\n<Q> ::= P|Q", "<Names>")?;
//! assert_eq!(names, ["Gen1P", "Gen1Q"]);
//!
//! let name = TagName::parse("Pv1MaxPPa")?;
//! assert!(name.is_parameter());
//! assert_eq!(name.kind(), "P");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod case;
pub mod description;
mod error;
pub mod grammar;
pub mod name;
pub mod registry;

pub use case::{lower_to_name, name_to_lower};
pub use description::{DescriptionRow, MergeSummary, RowShape, merge_description, merge_rows};
pub use error::{DescriptionError, GrammarError, NameError};
pub use grammar::{Expander, RuleTable, expand, expand_bnf, parse_grammar};
pub use name::{PARAMETER_TAG, TagName, join_parts};
pub use registry::{Metadata, NameEntry, NameFailure, NameQuery, Registry};
