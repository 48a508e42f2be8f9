//! Unit tests for row classification and merging.

use super::*;
use crate::grammar::expand;
use rstest::rstest;

const HEADER: &str = "Name,Rule,Units,Short,Long\n";

fn merged(csv: &str) -> (Registry, MergeSummary) {
    let mut registry = Registry::new();
    let text = format!("{HEADER}{csv}");
    let summary = merge_description(text.as_bytes(), &mut registry)
        .unwrap_or_else(|err| panic!("description should merge: {err}"));
    (registry, summary)
}

fn row(fields: &[&str]) -> DescriptionRow {
    DescriptionRow::from_fields(fields, 1).unwrap_or_else(|err| panic!("row should classify: {err}"))
}

#[rstest]
#[case(&["<Dev>", "Gen1|Gen2", "", ""], RowShape::GrammarProduction { rule: "Gen1|Gen2".into() })]
#[case(&["<Dev>", "|Pv1", "", "", ""], RowShape::GrammarProduction { rule: "|Pv1".into() })]
#[case(&["Gen1", "<Dev>", "", "Generator 1"], RowShape::RuleReference { nonterminal: "<Dev>".into() })]
#[case(&["Ess1", "energy storage 1", "", ""], RowShape::PlainDescription { literal: "energy storage 1".into() })]
#[case(&["P", "", "kW", "active power", ""], RowShape::PlainDescription { literal: String::new() })]
#[case(&["# <Dev>", "<Names>", "", "", ""], RowShape::Comment)]
fn classifies_rows_by_marker_position(#[case] fields: &[&str], #[case] shape: RowShape) {
    assert_eq!(row(fields).shape, shape);
}

#[test]
fn trims_fields_and_drops_blank_metadata() {
    let parsed = row(&["  P ", " ", " kW ", "  ", " Active power "]);
    assert_eq!(parsed.name, "P");
    assert_eq!(parsed.units.as_deref(), Some("kW"));
    assert_eq!(parsed.short, None);
    assert_eq!(parsed.long.as_deref(), Some("Active power"));
}

#[rstest]
#[case(&["P", "", "kW"])]
#[case(&["P", "", "kW", "", "", "extra"])]
#[case(&[])]
fn rejects_rows_with_wrong_field_count(#[case] fields: &[&str]) {
    let result = DescriptionRow::from_fields(fields, 7);
    assert!(matches!(
        result,
        Err(DescriptionError::MalformedRow { line: 7, fields: n }) if n == fields.len()
    ));
}

#[test]
fn pipe_prefixed_rule_appends_alternatives() {
    let (registry, _) = merged("<X>,a|b,,,\n<X>,|c,,,\n");
    assert_eq!(registry.rules().get("<X>"), Some("a|b|c"));

    let names: Vec<_> = expand(registry.rules(), "<X>")
        .unwrap_or_else(|err| panic!("expands: {err}"))
        .into_iter()
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn pipe_prefixed_rule_creates_missing_nonterminal() {
    let (registry, _) = merged("<X>,|c,,,\n");
    assert_eq!(registry.rules().get("<X>"), Some("c"));
}

#[test]
fn plain_production_overwrites() {
    let (registry, _) = merged("<X>,a|b,,,\n<X>,c,,,\n");
    assert_eq!(registry.rules().get("<X>"), Some("c"));
}

#[test]
fn references_create_then_extend_nonterminal() {
    let (registry, summary) = merged("Gen1,<Dev>,,Generator 1,\nPv1,<Dev>,,,\n");
    assert_eq!(registry.rules().get("<Dev>"), Some("Gen1|Pv1"));
    assert_eq!(registry.metadata().short("Gen1"), Some("Generator 1"));
    assert_eq!(summary.references, 2);
}

#[test]
fn merges_into_existing_grammar_rules() {
    let mut registry = Registry::new();
    registry.rules_mut().define("<Dev>", "Gen1");
    merge_rows(&mut registry, [row(&["Ess1", "<Dev>", "", ""])]);
    assert_eq!(registry.rules().get("<Dev>"), Some("Gen1|Ess1"));
}

#[test]
fn plain_rows_describe_parts() {
    let (registry, summary) = merged("Ess1,energy storage 1,,,\nP,,kW,active power,\n");
    let metadata = registry.metadata();
    assert_eq!(metadata.literal("Ess1"), Some("energy storage 1"));
    assert!(metadata.is_described_part("P"));
    assert_eq!(metadata.units("P"), Some("kW"));
    assert_eq!(metadata.short("P"), Some("active power"));
    assert!(registry.rules().is_empty());
    assert_eq!(summary.descriptions, 2);
}

#[test]
fn production_rows_carry_metadata() {
    let (registry, _) = merged("<Names>,<Dev>P,,,All generated names\n");
    assert_eq!(registry.metadata().long("<Names>"), Some("All generated names"));
}

#[test]
fn comment_rows_are_ignored() {
    let (registry, summary) = merged("#P,<Dev>,kW,power,\n");
    assert!(registry.rules().is_empty());
    assert_eq!(registry.metadata().units("#P"), None);
    assert_eq!(
        summary,
        MergeSummary {
            comments: 1,
            ..MergeSummary::default()
        }
    );
}

#[test]
fn header_row_is_skipped() {
    let mut registry = Registry::new();
    let summary = merge_description("<Names>,<Dev>,,,\n".as_bytes(), &mut registry)
        .unwrap_or_else(|err| panic!("header only should merge: {err}"));
    assert_eq!(summary, MergeSummary::default());
    assert!(registry.rules().is_empty());
}

#[test]
fn header_field_count_is_validated() {
    let mut registry = Registry::new();
    let result = merge_description("Name,Rule\nP,,kW,,\n".as_bytes(), &mut registry);
    assert!(matches!(
        result,
        Err(DescriptionError::MalformedRow { line: 1, fields: 2 })
    ));
}

#[test]
fn blank_rows_are_skipped() {
    let (registry, _) = merged("\n , , , , \nP,,kW,,\n");
    assert_eq!(registry.metadata().units("P"), Some("kW"));
}

#[test]
fn malformed_row_reports_line_and_merges_nothing() {
    let mut registry = Registry::new();
    let text = format!("{HEADER}P,,kW,,\nQ,,kvar\n");
    let result = merge_description(text.as_bytes(), &mut registry);
    assert!(matches!(
        result,
        Err(DescriptionError::MalformedRow { line: 3, fields: 3 })
    ));
    assert_eq!(registry.metadata().units("P"), None);
}
