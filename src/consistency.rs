//! # Consistency Checker
//!
//! Decides whether a set of ordering/simultaneity assertions can all hold.
//!
//! Each assertion becomes an arc `A → B`; simultaneity also adds `B → A`.
//! A cycle built only from simultaneity arcs just says "these all coincide",
//! which is satisfiable. A cycle that contains at least one directional arc
//! asks some entity to strictly precede itself: contradiction.
//!
//! An arc lies on a cycle exactly when both endpoints share a strongly
//! connected component, so the check is one iterative Tarjan pass that stops
//! at the first component holding a directional arc.

use std::fmt;

use crate::graph::{Graph, VertexId};
use crate::model::{Assertion, AssertionKind};
use crate::Result;

/// A directional assertion that sits on a cycle, plus the entities of that
/// cycle's strongly connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contradiction {
    pub from: String,
    pub to: String,
    pub component: Vec<String>,
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' before '{}' conflicts with cycle over [{}]",
            self.from,
            self.to,
            self.component.join(", ")
        )
    }
}

/// Assertion graph built once from a fixed fact list.
#[derive(Debug, Clone)]
pub struct FactChecker {
    graph: Graph<AssertionKind>,
    assertions: usize,
}

impl FactChecker {
    pub fn new(facts: &[Assertion]) -> Result<Self> {
        let mut graph = Graph::new();
        for fact in facts {
            let a = graph.ensure_vertex(&fact.person_a);
            let b = graph.ensure_vertex(&fact.person_b);
            graph.connect(a, b, fact.kind)?;
            if fact.kind.is_symmetric() {
                graph.connect(b, a, fact.kind)?;
            }
        }
        tracing::debug!(
            entities = graph.vertex_count(),
            assertions = facts.len(),
            arcs = graph.edge_count(),
            "assertion graph built"
        );
        Ok(Self { graph, assertions: facts.len() })
    }

    /// `true` if no cycle contains a directional assertion.
    pub fn are_facts_consistent(&self) -> bool {
        self.find_contradiction().is_none()
    }

    /// First contradiction found, if any.
    pub fn find_contradiction(&self) -> Option<Contradiction> {
        let mut walk = Walk::new(self.graph.vertex_count());

        for root in 0..self.graph.vertex_count() {
            let root = VertexId(root);
            if walk.is_visited(root) {
                continue;
            }
            walk.enter(root);

            while let Some(frame) = walk.path.last_mut() {
                let v = frame.vertex;
                let edges = self.graph.edges_at(v);

                if let Some(edge) = edges.get(frame.cursor) {
                    frame.cursor += 1;
                    let w = edge.to;
                    if !walk.is_visited(w) {
                        walk.enter(w);
                    } else if walk.on_stack[w.index()] {
                        let low = walk.low[v.index()].min(walk.order[w.index()]);
                        walk.low[v.index()] = low;
                    }
                    continue;
                }

                // Backtrack.
                walk.path.pop();
                if let Some(parent) = walk.path.last() {
                    let p = parent.vertex.index();
                    walk.low[p] = walk.low[p].min(walk.low[v.index()]);
                }

                if walk.low[v.index()] == walk.order[v.index()] {
                    let members = walk.close_component(v);
                    if let Some(found) = self.directional_arc_within(&members, &walk) {
                        tracing::debug!(%found, "contradictory assertions");
                        return Some(found);
                    }
                }
            }
        }

        None
    }

    pub fn entity_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn assertion_count(&self) -> usize {
        self.assertions
    }

    fn directional_arc_within(&self, members: &[VertexId], walk: &Walk) -> Option<Contradiction> {
        for &u in members {
            for edge in self.graph.edges_at(u) {
                if edge.payload == AssertionKind::OneDirectional
                    && walk.component[edge.to.index()] == walk.component[u.index()]
                {
                    return Some(Contradiction {
                        from: self.graph.label(u).to_string(),
                        to: self.graph.label(edge.to).to_string(),
                        component: members
                            .iter()
                            .map(|&m| self.graph.label(m).to_string())
                            .collect(),
                    });
                }
            }
        }
        None
    }
}

/// Convenience wrapper: build a checker and run it once.
pub fn are_facts_consistent(facts: &[Assertion]) -> Result<bool> {
    Ok(FactChecker::new(facts)?.are_facts_consistent())
}

// ============================================================================
// Traversal state
// ============================================================================

const UNSET: usize = usize::MAX;

/// One level of the explicit DFS path.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    cursor: usize,
}

/// Tarjan bookkeeping, indexed by `VertexId`.
struct Walk {
    /// Discovery order; `UNSET` until visited.
    order: Vec<usize>,
    low: Vec<usize>,
    /// Set on discovery, cleared when the vertex's component closes.
    on_stack: Vec<bool>,
    component: Vec<usize>,
    stack: Vec<VertexId>,
    path: Vec<Frame>,
    next_order: usize,
    next_component: usize,
}

impl Walk {
    fn new(n: usize) -> Self {
        Self {
            order: vec![UNSET; n],
            low: vec![UNSET; n],
            on_stack: vec![false; n],
            component: vec![UNSET; n],
            stack: Vec::new(),
            path: Vec::new(),
            next_order: 0,
            next_component: 0,
        }
    }

    fn is_visited(&self, v: VertexId) -> bool {
        self.order[v.index()] != UNSET
    }

    fn enter(&mut self, v: VertexId) {
        let i = v.index();
        self.order[i] = self.next_order;
        self.low[i] = self.next_order;
        self.next_order += 1;
        self.on_stack[i] = true;
        self.stack.push(v);
        self.path.push(Frame { vertex: v, cursor: 0 });
    }

    /// Pop the component rooted at `root` and label it.
    fn close_component(&mut self, root: VertexId) -> Vec<VertexId> {
        let id = self.next_component;
        self.next_component += 1;
        let mut members = Vec::new();
        while let Some(m) = self.stack.pop() {
            self.on_stack[m.index()] = false;
            self.component[m.index()] = id;
            members.push(m);
            if m == root {
                break;
            }
        }
        members
    }
}

// ============================================================================
// Tests
// ============================================================================
