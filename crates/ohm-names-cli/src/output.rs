//! Rendering resolved names as CSV, an aligned table, or JSON.

use std::io::Write;

use eyre::{Result, WrapErr};
use ohm_names::NameEntry;
use serde::Serialize;

/// Column titles of the generated CSV table.
pub const HEADER: [&str; 4] = ["Name", "Units", "Short", "Long"];

/// One resolved name ready for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NameRow<'a> {
    /// The generated name.
    pub name: &'a str,
    /// Units of its quantity.
    pub units: &'a str,
    /// Short description.
    pub short: &'a str,
    /// Long description, possibly empty.
    pub long: &'a str,
}

impl<'a> NameRow<'a> {
    /// Borrow a row from a registry entry.
    #[must_use]
    pub fn new(name: &'a str, entry: &'a NameEntry) -> Self {
        Self {
            name,
            units: &entry.units,
            short: &entry.short,
            long: &entry.long,
        }
    }
}

/// Write `rows` as CSV with a [`HEADER`] line, even when there are no rows.
///
/// # Errors
/// Returns an error when the writer fails.
pub fn write_csv<W: Write>(writer: W, rows: &[NameRow<'_>]) -> Result<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv.write_record(HEADER)
        .wrap_err("failed to write CSV header")?;
    for row in rows {
        csv.serialize(row)
            .wrap_err_with(|| format!("failed to write CSV row for '{}'", row.name))?;
    }
    csv.flush().wrap_err("failed to flush CSV output")
}

/// Write `rows` as `name | units | short | long` with the first three
/// columns padded to their widest value plus two.
///
/// # Errors
/// Returns an error when the writer fails.
pub fn write_table(writer: &mut dyn Write, rows: &[NameRow<'_>]) -> Result<()> {
    let width = |column: for<'a> fn(&'a NameRow<'a>) -> &'a str| {
        rows.iter()
            .map(|row| column(row).chars().count())
            .max()
            .unwrap_or(0)
            + 2
    };
    let name_width = width(|row| row.name);
    let units_width = width(|row| row.units);
    let short_width = width(|row| row.short);

    for row in rows {
        writeln!(
            writer,
            "{:<name_width$} | {:<units_width$} | {:<short_width$} | {}",
            row.name, row.units, row.short, row.long
        )
        .wrap_err_with(|| format!("failed to write table row for '{}'", row.name))?;
    }
    Ok(())
}

/// Write `rows` as a JSON array followed by a newline.
///
/// # Errors
/// Returns an error when serialisation or the writer fails.
pub fn write_json(writer: &mut dyn Write, rows: &[NameRow<'_>]) -> Result<()> {
    serde_json::to_writer(&mut *writer, rows).wrap_err("failed to serialize names to JSON")?;
    writer
        .write_all(b"\n")
        .wrap_err("failed to terminate JSON output with newline")
}
