//! # Contact Propagation Tracer
//!
//! Timestamped contact graph with point queries and a forward spread trace.
//!
//! Every contact `(A, B, t)` is stored as two arcs, `A → B` and `B → A`, both
//! carrying `t`. Each person's arcs are kept in ascending timestamp order, so
//! "everyone met at or after `t`" is a binary search plus a suffix scan.
//!
//! ## Spread rule
//!
//! Someone contagious from time `c` infects everyone they meet at `t >= c`.
//! A person infected at `t` becomes contagious at `t + incubation`
//! (`TracerConfig::incubation`, 60 by default). A person is visited at most
//! once: the first contagion time discovered for them is the one used.

use hashbrown::HashSet;

use crate::config::TracerConfig;
use crate::graph::{Edge, Graph, VertexId};
use crate::model::ContactRecord;
use crate::Result;

/// Contact graph supporting incremental insertion.
#[derive(Debug, Clone, Default)]
pub struct ContactTracer {
    graph: Graph<i64>,
    config: TracerConfig,
    contacts: usize,
}

impl ContactTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty tracer with custom settings. Fails with `Error::Config` on a
    /// negative incubation.
    pub fn with_config(config: TracerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, ..Self::default() })
    }

    /// Build from a batch of records, suppressing duplicates.
    pub fn from_traces(traces: &[ContactRecord]) -> Result<Self> {
        Self::from_traces_with_config(traces, TracerConfig::default())
    }

    pub fn from_traces_with_config(traces: &[ContactRecord], config: TracerConfig) -> Result<Self> {
        let mut tracer = Self::with_config(config)?;
        tracer.extend(traces)?;
        Ok(tracer)
    }

    pub fn extend(&mut self, traces: &[ContactRecord]) -> Result<()> {
        for trace in traces {
            self.add_trace(trace)?;
        }
        tracing::debug!(
            people = self.graph.vertex_count(),
            contacts = self.contacts,
            "contact graph extended"
        );
        Ok(())
    }

    /// Record a contact. Returns `false` if the same pair already met at the
    /// same time, in which case nothing changes.
    pub fn add_trace(&mut self, trace: &ContactRecord) -> Result<bool> {
        let a = self.graph.ensure_vertex(&trace.person1);
        let b = self.graph.ensure_vertex(&trace.person2);
        let time = trace.time;

        if self.has_arc(a, b, time) {
            tracing::trace!(
                person1 = %trace.person1,
                person2 = %trace.person2,
                time,
                "duplicate contact ignored"
            );
            return Ok(false);
        }

        self.graph.add_edge_sorted_by_key(a, b, time, |t| *t)?;
        if a != b {
            self.graph.add_edge_sorted_by_key(b, a, time, |t| *t)?;
        }
        self.contacts += 1;
        Ok(true)
    }

    // ========================================================================
    // Point queries
    // ========================================================================

    /// Every time `person1` and `person2` met, ascending.
    pub fn contact_times_between(&self, person1: &str, person2: &str) -> Result<Vec<i64>> {
        let a = self.graph.index_of(person1)?;
        let b = self.graph.index_of(person2)?;
        Ok(self
            .graph
            .edges_at(a)
            .iter()
            .filter(|e| e.to == b)
            .map(|e| e.payload)
            .collect())
    }

    /// Everyone `person` ever met.
    pub fn contacts_of(&self, person: &str) -> Result<HashSet<&str>> {
        let edges = self.graph.edges_of(person)?;
        Ok(self.labels(edges))
    }

    /// Everyone `person` met at or after `time`.
    pub fn contacts_after(&self, person: &str, time: i64) -> Result<HashSet<&str>> {
        let id = self.graph.index_of(person)?;
        Ok(self.labels(self.edges_from(id, time)))
    }

    // ========================================================================
    // Spread
    // ========================================================================

    /// People who may have been infected, directly or transitively, by
    /// `person` becoming contagious at `contagion_time`. Excludes `person`.
    pub fn contact_trace(&self, person: &str, contagion_time: i64) -> Result<HashSet<&str>> {
        let origin = self.graph.index_of(person)?;
        let mut visited = vec![false; self.graph.vertex_count()];
        let mut infected = HashSet::new();

        // Each frame resumes a person's arc scan where the last child left off,
        // matching the visit order of the recursive formulation.
        let mut stack = vec![Spread { vertex: origin, cursor: self.first_from(origin, contagion_time) }];
        visited[origin.index()] = true;

        while let Some(top) = stack.last_mut() {
            let Some(edge) = self.graph.edges_at(top.vertex).get(top.cursor) else {
                stack.pop();
                continue;
            };
            top.cursor += 1;

            let next = edge.to;
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            infected.insert(self.graph.label(next));

            let contagious_from = edge.payload.saturating_add(self.config.incubation);
            stack.push(Spread { vertex: next, cursor: self.first_from(next, contagious_from) });
        }

        tracing::debug!(
            origin = person,
            contagion_time,
            infected = infected.len(),
            "contact trace complete"
        );
        Ok(infected)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn people_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Distinct contacts stored (duplicates excluded).
    pub fn contact_count(&self) -> usize {
        self.contacts
    }

    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    fn has_arc(&self, from: VertexId, to: VertexId, time: i64) -> bool {
        self.edges_from(from, time)
            .iter()
            .take_while(|e| e.payload == time)
            .any(|e| e.to == to)
    }

    fn first_from(&self, id: VertexId, time: i64) -> usize {
        self.graph.edges_at(id).partition_point(|e| e.payload < time)
    }

    fn edges_from(&self, id: VertexId, time: i64) -> &[Edge<i64>] {
        let edges = self.graph.edges_at(id);
        &edges[self.first_from(id, time)..]
    }

    fn labels(&self, edges: &[Edge<i64>]) -> HashSet<&str> {
        edges.iter().map(|e| self.graph.label(e.to)).collect()
    }
}

/// Explicit-stack frame for the spread trace.
#[derive(Debug, Clone, Copy)]
struct Spread {
    vertex: VertexId,
    cursor: usize,
}

// ============================================================================
// Tests
// ============================================================================
