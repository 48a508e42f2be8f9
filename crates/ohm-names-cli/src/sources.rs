//! Classification and loading of grammar and description sources.

use std::fs::{self, File};
use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{Result, WrapErr};
use ohm_names::{Registry, merge_description, parse_grammar};
use ohm_names_patterns::matches;
use tracing::info;

use crate::error::CliError;

/// What a source file contributes to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A `*.txt` file of `<X> ::= rhs` rules.
    Grammar,
    /// A `*.csv` description table.
    Description,
}

impl SourceKind {
    /// Classify `path` by its extension.
    ///
    /// # Errors
    /// Returns [`CliError::UnknownSourceKind`] for anything but `*.txt` and
    /// `*.csv`.
    pub fn classify(path: &Utf8Path) -> Result<Self, CliError> {
        if matches(path.as_str(), "*.txt") {
            Ok(Self::Grammar)
        } else if matches(path.as_str(), "*.csv") {
            Ok(Self::Description)
        } else {
            Err(CliError::UnknownSourceKind(path.to_owned()))
        }
    }
}

/// A classified source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Where the source is read from.
    pub path: Utf8PathBuf,
    /// How the source is loaded.
    pub kind: SourceKind,
}

/// Classify every path, failing on the first unknown kind so nothing is
/// loaded from a command line with a bad source.
///
/// # Errors
/// Returns [`CliError::UnknownSourceKind`] for the first unrecognised path.
pub fn classify_all(paths: &[Utf8PathBuf]) -> Result<Vec<Source>, CliError> {
    paths
        .iter()
        .map(|path| {
            SourceKind::classify(path).map(|kind| Source {
                path: path.clone(),
                kind,
            })
        })
        .collect()
}

/// Load `source` into `registry`.
///
/// Grammar rules replace rules of the same nonterminal loaded earlier;
/// description rows extend and describe them.
///
/// # Errors
/// Returns an error when the file cannot be read or a description row is
/// malformed.
pub fn load_source(source: &Source, registry: &mut Registry) -> Result<()> {
    let path = &source.path;
    match source.kind {
        SourceKind::Grammar => {
            let text = fs::read_to_string(path).map_err(|err| io_error(path, err))?;
            let rules = parse_grammar(&text);
            info!(source = %path, rules = rules.len(), "processed grammar");
            registry.rules_mut().overlay(rules);
        }
        SourceKind::Description => {
            let file = File::open(path).map_err(|err| io_error(path, err))?;
            let summary = merge_description(BufReader::new(file), registry)
                .wrap_err_with(|| format!("failed to load description '{path}'"))?;
            info!(
                source = %path,
                productions = summary.productions,
                references = summary.references,
                descriptions = summary.descriptions,
                "processed description"
            );
        }
    }
    Ok(())
}

fn io_error(path: &Utf8Path, source: std::io::Error) -> CliError {
    CliError::Io {
        path: path.to_owned(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    #[case("names.txt", SourceKind::Grammar)]
    #[case("rules/plant.txt", SourceKind::Grammar)]
    #[case("descriptions.csv", SourceKind::Description)]
    fn classifies_by_extension(#[case] path: &str, #[case] kind: SourceKind) {
        assert_eq!(SourceKind::classify(Utf8Path::new(path)).ok(), Some(kind));
    }

    #[rstest]
    #[case("names.json")]
    #[case("names.txt.bak")]
    #[case("csv")]
    fn rejects_unknown_extensions(#[case] path: &str) {
        assert!(matches!(
            SourceKind::classify(Utf8Path::new(path)),
            Err(CliError::UnknownSourceKind(rejected)) if rejected == path
        ));
    }

    #[test]
    fn classify_all_stops_at_unknown_source() {
        let paths: Vec<Utf8PathBuf> = ["a.txt", "b.md", "c.csv"].map(Utf8PathBuf::from).into();
        assert!(matches!(
            classify_all(&paths),
            Err(CliError::UnknownSourceKind(rejected)) if rejected == "b.md"
        ));
    }

    fn temp_source(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap_or_else(|err| panic!("temp file: {err}"));
        file.write_all(contents.as_bytes())
            .unwrap_or_else(|err| panic!("write temp file: {err}"));
        file
    }

    fn source_for(file: &tempfile::NamedTempFile) -> Source {
        let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf())
            .unwrap_or_else(|path| panic!("non UTF-8 temp path {}", path.display()));
        let kind = SourceKind::classify(&path).unwrap_or_else(|err| panic!("{err}"));
        Source { path, kind }
    }

    #[test]
    fn later_grammar_replaces_rules_and_descriptions_extend_them() {
        let first = temp_source(".txt", "<Names> ::= <Dev>P\n<Dev> ::= Gen1\n");
        let second = temp_source(".txt", "<Dev> ::= Gen2\n");
        let description = temp_source(".csv", "Name,Rule,Units,Short,Long\nPv1,<Dev>,,,\n");

        let mut registry = Registry::new();
        for file in [&first, &second, &description] {
            load_source(&source_for(file), &mut registry)
                .unwrap_or_else(|err| panic!("source should load: {err:#}"));
        }
        assert_eq!(registry.rules().get("<Names>"), Some("<Dev>P"));
        assert_eq!(registry.rules().get("<Dev>"), Some("Gen2|Pv1"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = Source {
            path: Utf8PathBuf::from("does/not/exist.txt"),
            kind: SourceKind::Grammar,
        };
        let report = load_source(&source, &mut Registry::new())
            .err()
            .unwrap_or_else(|| panic!("missing file should fail"));
        assert!(matches!(
            report.downcast_ref::<CliError>(),
            Some(CliError::Io { .. })
        ));
    }
}
