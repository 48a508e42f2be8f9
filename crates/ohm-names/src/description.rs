//! Tabular descriptions merged into the rule table and metadata tables.
//!
//! Each row has the columns `Name, Rule, Units, Short, Long` (`Long` may be
//! omitted). Its shape is decided once from where `<...>` markers appear:
//!
//! * `<X>, rhs` defines or extends nonterminal `<X>`;
//! * `Name, <X>` adds `Name` as an alternative of `<X>`;
//! * `Name, literal` describes the part `Name`.
//!
//! Any row may also carry units, short and long descriptions keyed by its
//! name field. Rows whose name starts with `#` are comments.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::DescriptionError;
use crate::registry::Registry;

const NAME: usize = 0;
const RULE: usize = 1;
const UNITS: usize = 2;
const SHORT: usize = 3;
const LONG: usize = 4;

/// How a row feeds the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowShape {
    /// The name field is a nonterminal; the rule field defines it, or with a
    /// leading `|` adds alternatives to it.
    GrammarProduction {
        /// Rule field as written, including any leading `|`.
        rule: String,
    },
    /// The rule field is a nonterminal the name becomes an alternative of.
    RuleReference {
        /// The referenced nonterminal.
        nonterminal: String,
    },
    /// A concrete part with a literal description.
    PlainDescription {
        /// The rule field, used as the part's literal description.
        literal: String,
    },
    /// A row whose name starts with `#`.
    Comment,
}

/// One classified description row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionRow {
    /// The name field.
    pub name: String,
    /// How the row feeds the rule table.
    pub shape: RowShape,
    /// Units, when given.
    pub units: Option<String>,
    /// Short description, when given.
    pub short: Option<String>,
    /// Long description, when given.
    pub long: Option<String>,
}

impl DescriptionRow {
    /// Classify a row from its fields, trimming each one.
    ///
    /// A row of four fields has an empty long description.
    ///
    /// # Errors
    /// Returns [`DescriptionError::MalformedRow`] when the row has neither
    /// four nor five fields; `line` is reported in the error.
    ///
    /// # Examples
    /// ```
    /// use ohm_names::{DescriptionRow, RowShape};
    /// let row = DescriptionRow::from_fields(&["Gen", "<Device>", "", "Generator"], 2)?;
    /// assert_eq!(row.shape, RowShape::RuleReference { nonterminal: "<Device>".into() });
    /// assert_eq!(row.short.as_deref(), Some("Generator"));
    /// assert_eq!(row.long, None);
    /// # Ok::<(), ohm_names::DescriptionError>(())
    /// ```
    pub fn from_fields<S: AsRef<str>>(fields: &[S], line: u64) -> Result<Self, DescriptionError> {
        if !matches!(fields.len(), 4 | 5) {
            return Err(DescriptionError::MalformedRow {
                line,
                fields: fields.len(),
            });
        }
        let field = |index: usize| fields.get(index).map_or("", |f| f.as_ref().trim());
        let optional = |index: usize| Some(field(index)).filter(|f| !f.is_empty()).map(str::to_owned);

        let name = field(NAME);
        let rule = field(RULE);
        let shape = if name.starts_with('#') {
            RowShape::Comment
        } else if name.contains('<') {
            RowShape::GrammarProduction {
                rule: rule.to_owned(),
            }
        } else if rule.contains('<') {
            RowShape::RuleReference {
                nonterminal: rule.to_owned(),
            }
        } else {
            RowShape::PlainDescription {
                literal: rule.to_owned(),
            }
        };

        Ok(Self {
            name: name.to_owned(),
            shape,
            units: optional(UNITS),
            short: optional(SHORT),
            long: optional(LONG),
        })
    }
}

/// Counts of rows applied by a merge, by shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Grammar production rows.
    pub productions: usize,
    /// Rule reference rows.
    pub references: usize,
    /// Plain description rows.
    pub descriptions: usize,
    /// Comment rows.
    pub comments: usize,
}

/// Apply classified rows to the registry's rule and metadata tables.
pub fn merge_rows<I>(registry: &mut Registry, rows: I) -> MergeSummary
where
    I: IntoIterator<Item = DescriptionRow>,
{
    let mut summary = MergeSummary::default();
    for row in rows {
        match &row.shape {
            RowShape::Comment => {
                summary.comments += 1;
                continue;
            }
            RowShape::GrammarProduction { rule } => {
                summary.productions += 1;
                let rules = registry.rules_mut();
                if let Some(alternative) = rule.strip_prefix('|') {
                    rules.append_alternative(&row.name, alternative);
                } else {
                    rules.define(row.name.as_str(), rule.as_str());
                }
            }
            RowShape::RuleReference { nonterminal } => {
                summary.references += 1;
                registry.rules_mut().append_alternative(nonterminal, &row.name);
            }
            RowShape::PlainDescription { literal } => {
                summary.descriptions += 1;
                registry
                    .metadata_mut()
                    .describe_part(row.name.as_str(), literal.as_str());
            }
        }

        let metadata = registry.metadata_mut();
        if let Some(units) = &row.units {
            metadata.set_units(row.name.as_str(), units.as_str());
        }
        if let Some(short) = &row.short {
            metadata.set_short(row.name.as_str(), short.as_str());
        }
        if let Some(long) = &row.long {
            metadata.set_long(row.name.as_str(), long.as_str());
        }
    }
    summary
}

/// Read a CSV description and merge it into `registry`.
///
/// The first row is a header: its field count is checked but its contents
/// are ignored. Blank rows are skipped.
///
/// # Errors
/// Returns [`DescriptionError::MalformedRow`] for rows with the wrong number
/// of fields and [`DescriptionError::Csv`] when the input is not valid CSV.
/// Nothing is merged when any row fails.
///
/// # Examples
/// ```
/// use ohm_names::{Registry, merge_description};
/// let csv = "Name,Rule,Units,Short,Long\n<Names>,<Dev>P,,,\nGen1,<Dev>,,Generator 1\nP,,kW,power,\n";
/// let mut registry = Registry::new();
/// merge_description(csv.as_bytes(), &mut registry)?;
/// assert_eq!(registry.rules().get("<Dev>"), Some("Gen1"));
/// assert_eq!(registry.metadata().units("P"), Some("kW"));
/// # Ok::<(), ohm_names::DescriptionError>(())
/// ```
pub fn merge_description<R: Read>(
    reader: R,
    registry: &mut Registry,
) -> Result<MergeSummary, DescriptionError> {
    let mut csv = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    let mut header_seen = false;
    while csv.read_record(&mut record)? {
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);
        let fields: Vec<&str> = record.iter().collect();
        let row = DescriptionRow::from_fields(&fields, line)?;
        if header_seen {
            debug!(line, name = %row.name, shape = ?row.shape, "description row");
            rows.push(row);
        } else {
            header_seen = true;
        }
    }
    Ok(merge_rows(registry, rows))
}

#[cfg(test)]
mod tests;
