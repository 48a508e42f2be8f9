//! Run configuration from environment variables and command-line overrides.
//!
//! Settings come from defaults, then `OHM_NAMES_*` environment variables,
//! then explicit command-line flags, each layer overriding the previous one.

use std::env;
use std::str::FromStr;

use camino::Utf8PathBuf;
use ohm_names::grammar::DEFAULT_MAX_DEPTH;

use crate::error::CliError;

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "OHM_NAMES_LOG_LEVEL";
/// Environment variable holding the start symbol.
pub const ENV_START: &str = "OHM_NAMES_START";
/// Environment variable holding the output path.
pub const ENV_OUTPUT: &str = "OHM_NAMES_OUTPUT";
/// Environment variable holding the expansion depth limit.
pub const ENV_MAX_DEPTH: &str = "OHM_NAMES_MAX_DEPTH";

const DEFAULT_START: &str = "<Names>";
const DEFAULT_OUTPUT: &str = "all_names.csv";

/// Log level enumeration matching tracing crate levels, most verbose first.
///
/// Defaults to `Warn` so a normal run only reports problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Most verbose logging.
    Trace,
    /// Debug-level detail such as each description row.
    Debug,
    /// Loaded rules, units and generated names.
    Info,
    /// Names that failed to resolve and other problems.
    #[default]
    Warn,
    /// Errors only.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// This level, lowered to at least `Info` when `verbose` is set.
    #[must_use]
    pub fn with_verbose(self, verbose: bool) -> Self {
        if verbose { self.min(Self::Info) } else { self }
    }
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level.
    pub log_level: LogLevel,
    /// Nonterminal expanded into the generated names.
    pub start: String,
    /// Path of the generated CSV table.
    pub output: Utf8PathBuf,
    /// Nesting limit for grammar expansion.
    pub max_depth: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            start: DEFAULT_START.to_owned(),
            output: Utf8PathBuf::from(DEFAULT_OUTPUT),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// `--log-level`.
    pub log_level: Option<LogLevel>,
    /// `--start`.
    pub start: Option<String>,
    /// `--output`.
    pub output: Option<Utf8PathBuf>,
    /// `--max-depth`.
    pub max_depth: Option<usize>,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` for an unknown log level or a depth
    /// limit that is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level.parse()?;
        }
        if let Some(start) = lookup(ENV_START).filter(|s| !s.trim().is_empty()) {
            config.start = start.trim().to_owned();
        }
        if let Some(output) = lookup(ENV_OUTPUT).filter(|s| !s.trim().is_empty()) {
            config.output = Utf8PathBuf::from(output);
        }
        if let Some(depth) = lookup(ENV_MAX_DEPTH) {
            config.max_depth = parse_max_depth(&depth)?;
        }
        Ok(config)
    }

    /// Apply command-line overrides on top of this configuration.
    #[must_use]
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if let Some(start) = overrides.start {
            self.start = start;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if let Some(depth) = overrides.max_depth {
            self.max_depth = depth;
        }
        self
    }
}

/// Parse a positive depth limit.
///
/// # Errors
///
/// Returns `CliError::InvalidConfig` for anything but a positive integer.
pub fn parse_max_depth(value: &str) -> Result<usize, CliError> {
    value
        .trim()
        .parse()
        .ok()
        .filter(|depth| *depth > 0)
        .ok_or_else(|| {
            CliError::InvalidConfig(format!(
                "invalid depth limit '{value}', expected a positive integer"
            ))
        })
}
