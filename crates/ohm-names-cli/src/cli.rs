//! Argument parsing and the generation run behind the `ohm-names` binary.

use std::fs::File;
use std::io::{BufWriter, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use eyre::{Result, WrapErr, bail};
use ohm_names::{Expander, NameFailure, NameQuery, Registry};
use tracing::{info, warn};

use crate::config::{CliConfig, ConfigOverrides, LogLevel, parse_max_depth};
use crate::error::CliError;
use crate::output::{NameRow, write_csv, write_json, write_table};
use crate::sources::{classify_all, load_source};

/// Expand name grammars and description tables into a table of tag names
/// with their units and descriptions.
#[derive(Parser, Debug)]
#[command(name = "ohm-names", author, version, about)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent command-line switch"
)]
pub struct Cli {
    /// Grammar (`*.txt`) and description (`*.csv`) files, loaded in order.
    #[arg(required = true, value_name = "SOURCES")]
    pub sources: Vec<Utf8PathBuf>,

    /// Log loaded rules, units and every generated name.
    #[arg(short, long)]
    pub verbose: bool,

    /// Where to write the generated table [default: all_names.csv].
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// Nonterminal to expand [default: <Names>].
    #[arg(long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Nesting limit for grammar expansion [default: 64].
    #[arg(long, value_name = "DEPTH", value_parser = parse_max_depth)]
    pub max_depth: Option<usize>,

    /// Print the selected names as an aligned table.
    #[arg(long)]
    pub show: bool,

    /// Print the selected names as JSON.
    #[arg(long, conflicts_with = "show")]
    pub json: bool,

    /// Keep names matching this glob (`|` separates alternatives).
    #[arg(long, value_name = "GLOB")]
    pub only: Option<String>,

    /// Drop names matching this glob.
    #[arg(long, value_name = "GLOB")]
    pub exclude: Option<String>,

    /// Keep names whose device matches this glob.
    #[arg(long, value_name = "GLOB")]
    pub device: Option<String>,

    /// Keep only names starting with an uppercase letter.
    #[arg(long)]
    pub big: bool,

    /// Fail when any generated name cannot be resolved.
    #[arg(long)]
    pub strict: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Values given on the command line that override the environment.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            log_level: self.log_level,
            start: self.start.clone(),
            output: self.output.clone(),
            max_depth: self.max_depth,
        }
    }

    /// The registry query selected by the filter flags.
    #[must_use]
    pub fn query(&self) -> NameQuery {
        let mut query = NameQuery::default().with_only_big(self.big);
        if let Some(only) = &self.only {
            query = query.with_only(only.as_str());
        }
        if let Some(exclude) = &self.exclude {
            query = query.with_exclude(exclude.as_str());
        }
        if let Some(device) = &self.device {
            query = query.with_device(device.as_str());
        }
        query
    }
}

/// Layer the environment and command-line flags into one configuration.
///
/// # Errors
///
/// Returns `CliError::InvalidConfig` when an environment variable holds an
/// invalid value.
pub fn build_config(cli: &Cli) -> Result<CliConfig, CliError> {
    let mut config = CliConfig::from_env()?.apply_overrides(cli.overrides());
    config.log_level = config.log_level.with_verbose(cli.verbose);
    Ok(config)
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of distinct names the grammar produced.
    pub generated: usize,
    /// Number of names written to the output file.
    pub written: usize,
    /// Names that could not be resolved.
    pub failures: Vec<NameFailure>,
}

/// Load every source, expand the start symbol, resolve the names and write
/// the output file, printing the selection to `stdout` when asked.
///
/// # Errors
///
/// Returns an error for unknown source kinds, unreadable or malformed
/// sources, runaway grammars, invalid filters, output failures, and, with
/// `--strict`, names that could not be resolved.
pub fn run(cli: &Cli, config: &CliConfig, stdout: &mut dyn Write) -> Result<RunReport> {
    let sources = classify_all(&cli.sources)?;
    let mut registry = Registry::new();
    for source in &sources {
        info!(source = %source.path, kind = ?source.kind, "processing source");
        load_source(source, &mut registry)?;
    }
    for (nonterminal, rhs) in registry.rules().iter() {
        info!(nonterminal, rhs, "rule");
    }

    let names = {
        let mut expander = Expander::new(registry.rules()).with_max_depth(config.max_depth);
        let names = expander
            .expand(&config.start)
            .wrap_err_with(|| format!("failed to expand '{}'", config.start))?;
        for nonterminal in expander.unresolved() {
            warn!(nonterminal, "undefined nonterminal left unexpanded");
        }
        names
    };
    if names.is_empty() {
        warn!(start = %config.start, "grammar produced no names");
    }
    for (key, units) in registry.metadata().all_units() {
        info!(key, units, "units");
    }

    let failures = registry.populate(&names);
    for failure in &failures {
        warn!(name = %failure.name, error = %failure.source, "name not generated");
    }

    let query = cli.query();
    let selected = registry
        .query(&query)
        .wrap_err("invalid name filter")?;
    let rows: Vec<NameRow<'_>> = selected
        .into_iter()
        .filter_map(|name| registry.get(name).map(|entry| NameRow::new(name, entry)))
        .collect();
    for row in &rows {
        info!(name = row.name, units = row.units, short = row.short, long = row.long, "name");
    }

    write_output(&config.output, &rows)?;
    info!(output = %config.output, names = rows.len(), "see output for all generated names");

    if cli.show {
        write_table(stdout, &rows)?;
    } else if cli.json {
        write_json(stdout, &rows)?;
    }
    stdout.flush().wrap_err("failed to flush stdout")?;

    let report = RunReport {
        generated: names.len(),
        written: rows.len(),
        failures,
    };
    if cli.strict && !report.failures.is_empty() {
        bail!(
            "{} of {} generated names could not be resolved",
            report.failures.len(),
            report.generated
        );
    }
    Ok(report)
}

fn write_output(path: &Utf8Path, rows: &[NameRow<'_>]) -> Result<()> {
    let file = File::create(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    write_csv(BufWriter::new(file), rows)
        .wrap_err_with(|| format!("failed to write '{path}'"))
}
