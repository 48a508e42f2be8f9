//! Command-line front end for generating tag-name tables.
//!
//! The `ohm-names` binary loads grammar (`*.txt`) and description (`*.csv`)
//! sources into one [`ohm_names::Registry`], expands the start symbol into
//! every concrete name, resolves units and descriptions, and writes the
//! result as CSV. This library holds the pieces so they can be tested
//! without spawning the binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod sources;
