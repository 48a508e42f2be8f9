//! Grammar and description sources expanded into a populated registry.

use ohm_names::{NameEntry, NameError, NameQuery, Registry, expand, merge_description, parse_grammar};
use rstest::{fixture, rstest};

const GRAMMAR: &str = "\
# generated plant names
<Names> ::= <Dev><Q>|<Dev>Max<Q>Pa
<Dev> ::= Gen<N>
<N> ::= 1|2
<Q> ::= P|Q
";

const DESCRIPTION: &str = "\
Name,Rule,Units,Short,Long
Pv1,<Dev>,,PV inverter 1,
<Q>,|F,,,
P,,kW,active power,
Q,,kvar,reactive power,
Max,maximum,,,
Gen1P,,,,Active power output of generator 1
# Gen3,<Dev>,,,
";

#[fixture]
fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.rules_mut().overlay(parse_grammar(GRAMMAR));
    merge_description(DESCRIPTION.as_bytes(), &mut registry)
        .unwrap_or_else(|err| panic!("description should merge: {err}"));
    registry
}

fn generated(registry: &Registry) -> Vec<String> {
    expand(registry.rules(), "<Names>")
        .unwrap_or_else(|err| panic!("grammar should expand: {err}"))
        .into_iter()
        .collect()
}

#[rstest]
fn description_rows_extend_grammar(registry: Registry) {
    assert_eq!(registry.rules().get("<Dev>"), Some("Gen<N>|Pv1"));
    assert_eq!(registry.rules().get("<Q>"), Some("P|Q|F"));

    let names = generated(&registry);
    assert_eq!(names.len(), 18);
    assert!(names.iter().any(|name| name == "Pv1MaxFPa"));
    assert!(!names.iter().any(|name| name.starts_with("Gen3")));
}

#[rstest]
fn populates_resolvable_names_and_reports_the_rest(mut registry: Registry) {
    let names = generated(&registry);
    let failures = registry.populate(&names);

    assert_eq!(registry.len(), 12);
    assert_eq!(failures.len(), 6);
    assert!(
        failures
            .iter()
            .all(|failure| matches!(&failure.source, NameError::MissingUnits { kind, .. } if kind == "F"))
    );
    assert_eq!(
        registry.get("Gen1P"),
        Some(&NameEntry {
            units: "kW".into(),
            short: "Gen1 active power".into(),
            long: "Active power output of generator 1".into(),
        })
    );
    assert_eq!(
        registry.get("Pv1MaxQPa").map(|entry| entry.short.as_str()),
        Some("PV inverter 1 maximum reactive power Pa")
    );
}

#[rstest]
fn queries_the_populated_registry(mut registry: Registry) {
    let names = generated(&registry);
    registry.populate(&names);

    let query = NameQuery::default().with_device("Gen2").with_exclude("*Pa");
    let selected = registry
        .query(&query)
        .unwrap_or_else(|err| panic!("query should compile: {err}"));
    assert_eq!(selected, ["Gen2P", "Gen2Q"]);
}
