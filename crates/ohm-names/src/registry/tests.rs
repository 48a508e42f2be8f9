//! Unit tests for registration, resolution and queries.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> Registry {
    let mut registry = Registry::new();
    let metadata = registry.metadata_mut();
    metadata.set_units("P", "kW");
    metadata.set_units("Q", "kvar");
    metadata.set_units("U12", "V");
    metadata.set_short("Gen1", "Generator 1");
    metadata.set_short("P", "active power");
    metadata.set_short("Max", "maximum");
    metadata.describe_part("Pv1", "photovoltaic inverter 1");
    metadata.describe_part("Ess1", "");
    metadata.set_long("Gen1P", "Active power output of generator 1");
    registry
}

fn register_all(registry: &mut Registry, names: &[&str]) {
    for name in names {
        registry
            .register(name, "", "", "")
            .unwrap_or_else(|err| panic!("{name} should register: {err}"));
    }
}

fn query(registry: &Registry, query: &NameQuery) -> Vec<String> {
    registry
        .query(query)
        .unwrap_or_else(|err| panic!("query should compile: {err}"))
        .into_iter()
        .map(str::to_owned)
        .collect()
}

#[rstest]
fn resolves_units_by_kind(registry: Registry) {
    assert_eq!(registry.units_of("Gen1P"), Ok("kW"));
    assert_eq!(registry.units_of("Pv1MaxPPa"), Ok("kW"));
    assert_eq!(registry.units_of("Pv1U12"), Ok("V"));
}

#[rstest]
fn reports_missing_units(registry: Registry) {
    assert_eq!(
        registry.units_of("Gen1F"),
        Err(NameError::MissingUnits {
            name: "Gen1F".into(),
            kind: "F".into(),
        })
    );
}

#[rstest]
#[case("Gen1P", "Generator 1 active power")]
#[case("Pv1MaxPPa", "photovoltaic inverter 1 maximum active power Pa")]
#[case("Ess1Q", "Ess1 Q")]
fn builds_short_descriptions_from_parts(
    registry: Registry,
    #[case] name: &str,
    #[case] short: &str,
) {
    assert_eq!(registry.short_of(name), Ok(short.to_owned()));
}

#[rstest]
fn long_description_defaults_to_empty(registry: Registry) {
    assert_eq!(registry.long_of("Gen1P"), "Active power output of generator 1");
    assert_eq!(registry.long_of("Gen1Q"), "");
}

#[rstest]
fn populate_registers_resolved_names_and_collects_failures(mut registry: Registry) {
    let failures = registry.populate(["Gen1P", "Gen1F", "", "Gen1Q"]);

    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.get("Gen1P"),
        Some(&NameEntry {
            units: "kW".into(),
            short: "Generator 1 active power".into(),
            long: "Active power output of generator 1".into(),
        })
    );
    let failed: Vec<_> = failures.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(failed, ["Gen1F", ""]);
    assert!(matches!(
        failures.first().map(|f| &f.source),
        Some(NameError::MissingUnits { .. })
    ));
}

#[rstest]
fn register_overwrites_existing_entry(mut registry: Registry) {
    register_all(&mut registry, &["Gen1P"]);
    registry
        .register("Gen1P", "MW", "big", "")
        .unwrap_or_else(|err| panic!("should register: {err}"));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("Gen1P").map(|e| e.units.as_str()), Some("MW"));
}

#[test]
fn register_rejects_malformed_names() {
    let mut registry = Registry::new();
    assert!(matches!(
        registry.register("Gen 1", "", "", ""),
        Err(NameError::MalformedName { .. })
    ));
    assert!(registry.is_empty());
}

#[rstest]
#[case(NameQuery::default(), &["EssP", "Gen1P", "Gen1PPa", "Gen2Q", "Pv1P", "t_step"])]
#[case(NameQuery::default().with_only("Gen*"), &["Gen1P", "Gen1PPa", "Gen2Q"])]
#[case(NameQuery::default().with_exclude("*Pa|t_*"), &["EssP", "Gen1P", "Gen2Q", "Pv1P"])]
#[case(NameQuery::default().with_device("Gen1|Pv?"), &["Gen1P", "Gen1PPa", "Pv1P"])]
#[case(NameQuery::default().with_only_big(true), &["EssP", "Gen1P", "Gen1PPa", "Gen2Q", "Pv1P"])]
#[case(NameQuery::default().with_only(""), &[])]
fn filters_registered_names(#[case] filter: NameQuery, #[case] expected: &[&str]) {
    let mut registry = Registry::new();
    register_all(
        &mut registry,
        &["Gen2Q", "Gen1P", "Pv1P", "EssP", "t_step", "Gen1PPa"],
    );
    assert_eq!(query(&registry, &filter), expected);
}

#[rstest]
fn clear_resets_everything(mut registry: Registry) {
    registry.rules_mut().define("<Names>", "Gen1P");
    register_all(&mut registry, &["Gen1P"]);

    registry.clear();
    registry.clear();

    assert!(registry.is_empty());
    assert!(registry.rules().is_empty());
    assert_eq!(registry.metadata(), &Metadata::default());
}

#[test]
fn clear_is_safe_on_fresh_registry() {
    let mut registry = Registry::new();
    registry.clear();
    assert!(registry.is_empty());
}
