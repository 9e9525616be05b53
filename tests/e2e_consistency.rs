//! End-to-end tests for the assertion consistency checker.
//!
//! Covers directional cycles, purely simultaneous cycles, mixed cycles,
//! branching DAGs, and records loaded from JSON.

use relgraph::{are_facts_consistent, Assertion, AssertionKind, FactChecker};

fn consistent(facts: &[Assertion]) -> bool {
    are_facts_consistent(facts).unwrap()
}

// ============================================================================
// 1. Cycles
// ============================================================================

#[test]
fn test_directional_cycle() {
    let facts = vec![
        Assertion::directional("A", "B"),
        Assertion::directional("B", "C"),
        Assertion::directional("C", "A"),
    ];
    assert!(!consistent(&facts));
}

#[test]
fn test_simultaneous_cycle() {
    let facts = vec![
        Assertion::simultaneous("A", "B"),
        Assertion::simultaneous("B", "C"),
        Assertion::simultaneous("C", "A"),
    ];
    assert!(consistent(&facts));
}

#[test]
fn test_simultaneous_pair_stated_twice() {
    assert!(consistent(&[Assertion::simultaneous("A", "B"), Assertion::simultaneous("B", "A")]));
}

#[test]
fn test_long_directional_cycle_closed_through_simultaneity() {
    // A < B < C < D, then D ~ A.
    let facts = vec![
        Assertion::directional("A", "B"),
        Assertion::directional("B", "C"),
        Assertion::directional("C", "D"),
        Assertion::simultaneous("D", "A"),
    ];
    let checker = FactChecker::new(&facts).unwrap();
    let found = checker.find_contradiction().expect("contradiction");
    assert_eq!(found.component.len(), 4);
    assert!(!checker.are_facts_consistent());
}

#[test]
fn test_simultaneous_cluster_with_outgoing_order() {
    // {A, B, C} coincide and all precede D.
    let facts = vec![
        Assertion::simultaneous("A", "B"),
        Assertion::simultaneous("B", "C"),
        Assertion::directional("A", "D"),
        Assertion::directional("C", "D"),
    ];
    assert!(consistent(&facts));
}

// ============================================================================
// 2. Branching without cycles
// ============================================================================

#[test]
fn test_wide_reconvergent_dag() {
    let mut facts = Vec::new();
    for i in 0..20 {
        facts.push(Assertion::directional("root", format!("mid{i}")));
        facts.push(Assertion::directional(format!("mid{i}"), "sink"));
    }
    assert!(consistent(&facts));
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let facts: Vec<_> = (0..50_000)
        .map(|i| Assertion::directional(format!("p{i}"), format!("p{}", i + 1)))
        .collect();
    assert!(consistent(&facts));

    let mut closed = facts;
    closed.push(Assertion::directional("p50000", "p0"));
    assert!(!consistent(&closed));
}

// ============================================================================
// 3. Records from JSON
// ============================================================================

#[test]
fn test_assertions_from_json() {
    let json = r#"[
        {"person_a": "Ann", "person_b": "Ben", "kind": "ONE_DIRECTIONAL"},
        {"person_a": "Ben", "person_b": "Cat", "kind": "SIMULTANEOUS"},
        {"person_a": "Cat", "person_b": "Ann", "kind": "ONE_DIRECTIONAL"}
    ]"#;
    let facts: Vec<Assertion> = serde_json::from_str(json).unwrap();
    assert_eq!(facts[1].kind, AssertionKind::Simultaneous);
    assert!(!consistent(&facts));
}
