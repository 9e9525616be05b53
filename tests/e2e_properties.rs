//! Property tests across the three engines.
//!
//! Random inputs are checked against straightforward reference models
//! (plain BFS, linear scans) rather than fixed expectations.

use std::collections::{BTreeSet, HashMap, VecDeque};

use proptest::prelude::*;
use relgraph::{
    are_facts_consistent, Assertion, CoauthorRecord, CollaborationGraph, ContactRecord,
    ContactTracer,
};

const ORIGIN: &str = "Paul Erdös";

fn author(i: usize) -> String {
    if i == 0 { ORIGIN.to_string() } else { format!("author{i}") }
}

fn bibliography(papers: &[BTreeSet<usize>]) -> Vec<CoauthorRecord> {
    // The origin always appears, even if only on its own paper.
    let mut records = vec![CoauthorRecord::new("origin-solo", [ORIGIN])];
    for (i, authors) in papers.iter().enumerate() {
        records.push(CoauthorRecord::new(format!("paper{i}"), authors.iter().map(|&a| author(a))));
    }
    records
}

/// Reference hop distances by breadth-first search over co-author sets.
fn bfs_hops(records: &[CoauthorRecord]) -> HashMap<String, u32> {
    let mut adj: HashMap<&str, BTreeSet<&str>> = HashMap::new();
    for r in records {
        for a in &r.authors {
            let entry = adj.entry(a.as_str()).or_default();
            for b in &r.authors {
                if a != b {
                    entry.insert(b.as_str());
                }
            }
        }
    }

    let mut dist = HashMap::new();
    let mut queue = VecDeque::from([(ORIGIN, 0u32)]);
    dist.insert(ORIGIN.to_string(), 0);
    while let Some((v, d)) = queue.pop_front() {
        for &w in adj.get(v).into_iter().flatten() {
            if !dist.contains_key(w) {
                dist.insert(w.to_string(), d + 1);
                queue.push_back((w, d + 1));
            }
        }
    }
    dist
}

fn papers_strategy() -> impl Strategy<Value = Vec<BTreeSet<usize>>> {
    prop::collection::vec(prop::collection::btree_set(0usize..8, 1..4), 0..12)
}

fn contacts_strategy() -> impl Strategy<Value = Vec<(usize, usize, i64)>> {
    prop::collection::vec((0usize..6, 0usize..6, 0i64..500), 0..30)
        .prop_map(|v| v.into_iter().filter(|(a, b, _)| a != b).collect())
}

fn contact_records(contacts: &[(usize, usize, i64)]) -> Vec<ContactRecord> {
    contacts
        .iter()
        .map(|&(a, b, t)| ContactRecord::new(format!("p{a}"), format!("p{b}"), t))
        .collect()
}

proptest! {
    #[test]
    fn prop_hop_distance_matches_bfs(papers in papers_strategy()) {
        let records = bibliography(&papers);
        let graph = CollaborationGraph::new(&records).unwrap();
        let reference = bfs_hops(&records);

        let mut all_reachable = true;
        for i in 0..8 {
            let name = author(i);
            let Ok(got) = graph.distance_of(&name) else { continue };
            let expected = reference.get(&name).copied();
            prop_assert_eq!(got, expected, "author {}", name);
            all_reachable &= expected.is_some();
        }
        prop_assert_eq!(graph.is_origin_connected_to_all(), all_reachable);
    }

    #[test]
    fn prop_extra_joint_paper_never_increases_weighted_distance(
        papers in papers_strategy(),
        pair in (0usize..8, 0usize..8),
    ) {
        let records = bibliography(&papers);
        let before = CollaborationGraph::new(&records).unwrap();
        let (a, b) = (author(pair.0), author(pair.1));
        prop_assume!(pair.0 != pair.1);
        prop_assume!(before.distance_of(&a).is_ok() && before.distance_of(&b).is_ok());

        let mut merged = records.clone();
        merged.push(CoauthorRecord::new("extra", [a, b]));
        let after = CollaborationGraph::new(&merged).unwrap();

        for i in 0..8 {
            let name = author(i);
            let Ok(old) = before.weighted_distance_of(&name) else { continue };
            let new = after.weighted_distance_of(&name).unwrap();
            match (old, new) {
                (Some(o), Some(n)) => prop_assert!(n <= o + 1e-9, "{}: {} > {}", name, n, o),
                (Some(_), None) => prop_assert!(false, "{} became unreachable", name),
                _ => {}
            }
        }
    }

    #[test]
    fn prop_contacts_after_is_time_filtered_subset(
        contacts in contacts_strategy(),
        cutoff in 0i64..600,
    ) {
        let tracer = ContactTracer::from_traces(&contact_records(&contacts)).unwrap();
        for p in 0..6 {
            let name = format!("p{p}");
            let Ok(all) = tracer.contacts_of(&name) else { continue };
            let after = tracer.contacts_after(&name, cutoff).unwrap();
            prop_assert!(after.is_subset(&all));

            for other in &all {
                let met_late = tracer
                    .contact_times_between(&name, other)
                    .unwrap()
                    .iter()
                    .any(|&t| t >= cutoff);
                prop_assert_eq!(after.contains(other), met_late);
            }
        }
    }

    #[test]
    fn prop_reinserting_contacts_changes_nothing(contacts in contacts_strategy()) {
        let records = contact_records(&contacts);
        let once = ContactTracer::from_traces(&records).unwrap();
        let mut twice = ContactTracer::from_traces(&records).unwrap();
        twice.extend(&records).unwrap();

        prop_assert_eq!(once.contact_count(), twice.contact_count());
        for a in 0..6 {
            for b in 0..6 {
                let (x, y) = (format!("p{a}"), format!("p{b}"));
                if let Ok(times) = once.contact_times_between(&x, &y) {
                    let again = twice.contact_times_between(&x, &y).unwrap();
                    prop_assert!(times.windows(2).all(|w| w[0] < w[1]));
                    prop_assert_eq!(times, again);
                }
            }
        }
    }

    #[test]
    fn prop_simultaneous_only_facts_are_consistent(
        pairs in prop::collection::vec((0usize..6, 0usize..6), 0..20),
    ) {
        let facts: Vec<_> = pairs
            .iter()
            .map(|&(a, b)| Assertion::simultaneous(format!("p{a}"), format!("p{b}")))
            .collect();
        prop_assert!(are_facts_consistent(&facts).unwrap());
    }

    #[test]
    fn prop_forward_only_facts_are_consistent(
        pairs in prop::collection::vec((0usize..8, 0usize..8), 0..20),
    ) {
        // Arcs only go from lower to higher index: no cycle is possible.
        let facts: Vec<_> = pairs
            .iter()
            .filter(|(a, b)| a < b)
            .map(|&(a, b)| Assertion::directional(format!("p{a}"), format!("p{b}")))
            .collect();
        prop_assert!(are_facts_consistent(&facts).unwrap());
    }
}
