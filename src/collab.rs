//! # Collaboration Distance Engine
//!
//! Co-authorship distances ("Erdős numbers") from a fixed origin author.
//!
//! Every paper contributes one directed edge per ordered pair of distinct
//! co-authors, so the relation is symmetric by construction and two authors
//! who wrote `k` papers together are joined by `k` parallel edges each way.
//!
//! Two distance vectors are computed once, at construction:
//!
//! | Mode | Edge cost | Meaning |
//! |------|-----------|---------|
//! | unweighted | `1` | fewest co-authorship hops |
//! | weighted | `1 / k` | frequent collaborators are "closer" |
//!
//! All distance queries afterwards are O(1) reads.

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::config::CollabConfig;
use crate::graph::shortest_path::single_source;
use crate::graph::{Graph, VertexId};
use crate::model::CoauthorRecord;
use crate::{Error, Result};

/// Dense paper index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaperId(pub usize);

/// Edge payload: the paper behind the edge and its current traversal cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coauthorship {
    pub paper: PaperId,
    pub cost: f64,
}

#[derive(Debug, Clone)]
struct Paper {
    title: String,
    authors: SmallVec<[VertexId; 4]>,
}

/// Precomputed collaboration distances over a fixed set of papers.
#[derive(Debug, Clone)]
pub struct CollaborationGraph {
    graph: Graph<Coauthorship>,
    papers: Vec<Paper>,
    paper_index: HashMap<String, PaperId>,
    origin: VertexId,
    hops: Vec<f64>,
    weighted: Vec<f64>,
}

impl CollaborationGraph {
    /// Build with the default origin ([`crate::config::DEFAULT_ORIGIN`]).
    pub fn new(records: &[CoauthorRecord]) -> Result<Self> {
        Self::with_config(records, &CollabConfig::default())
    }

    pub fn with_config(records: &[CoauthorRecord], config: &CollabConfig) -> Result<Self> {
        let mut graph: Graph<Coauthorship> = Graph::new();
        let mut papers = Vec::with_capacity(records.len());
        let mut paper_index = HashMap::with_capacity(records.len());

        for record in records {
            if record.authors.is_empty() {
                return Err(Error::InvalidRecord(format!(
                    "paper '{}' has no authors",
                    record.paper
                )));
            }

            let paper = PaperId(papers.len());
            let authors: SmallVec<[VertexId; 4]> = record
                .authors
                .iter()
                .map(|a| graph.ensure_vertex(a))
                .collect();

            for &from in &authors {
                for &to in &authors {
                    if from != to {
                        graph.connect(from, to, Coauthorship { paper, cost: 1.0 })?;
                    }
                }
            }

            paper_index.insert(record.paper.clone(), paper);
            papers.push(Paper { title: record.paper.clone(), authors });
        }

        let origin = graph
            .get(&config.origin)
            .ok_or_else(|| Error::MissingOrigin(config.origin.clone()))?;

        let hops = single_source(&graph, origin, |_| 1.0);

        // Costs are read during relaxation: the rewrite must finish first.
        assign_reciprocal_costs(&mut graph);
        let weighted = single_source(&graph, origin, |e| e.payload.cost);

        tracing::debug!(
            origin = %config.origin,
            authors = graph.vertex_count(),
            papers = papers.len(),
            edges = graph.edge_count(),
            "collaboration graph built"
        );

        Ok(Self { graph, papers, paper_index, origin, hops, weighted })
    }

    // ========================================================================
    // Distances
    // ========================================================================

    /// Fewest co-authorship hops from the origin. `None` if unreachable.
    pub fn distance_of(&self, author: &str) -> Result<Option<u32>> {
        let id = self.graph.index_of(author)?;
        let d = self.hops[id.index()];
        Ok(d.is_finite().then_some(d as u32))
    }

    /// Weighted distance from the origin. `None` if unreachable.
    pub fn weighted_distance_of(&self, author: &str) -> Result<Option<f64>> {
        let id = self.graph.index_of(author)?;
        let d = self.weighted[id.index()];
        Ok(d.is_finite().then_some(d))
    }

    /// Whether every known author has a finite distance from the origin.
    pub fn is_origin_connected_to_all(&self) -> bool {
        self.hops.iter().all(|d| d.is_finite())
    }

    /// Mean unweighted distance of a paper's authors.
    ///
    /// Infinite if any author is unreachable from the origin.
    pub fn average_distance_of(&self, paper: &str) -> Result<f64> {
        let paper = self.paper(paper)?;
        let total: f64 = paper.authors.iter().map(|a| self.hops[a.index()]).sum();
        Ok(total / paper.authors.len() as f64)
    }

    // ========================================================================
    // Neighbourhood
    // ========================================================================

    /// Distinct papers on any of the author's outgoing edges.
    ///
    /// Sole-authored papers carry no edges and are therefore not listed.
    pub fn papers_of(&self, author: &str) -> Result<HashSet<&str>> {
        Ok(self
            .graph
            .edges_of(author)?
            .iter()
            .map(|e| self.papers[e.payload.paper.0].title.as_str())
            .collect())
    }

    /// Distinct co-authors one edge away.
    pub fn collaborators_of(&self, author: &str) -> Result<HashSet<&str>> {
        Ok(self
            .graph
            .edges_of(author)?
            .iter()
            .map(|e| self.graph.label(e.to))
            .collect())
    }

    /// Authors of a paper in listing order.
    pub fn authors_of(&self, paper: &str) -> Result<Vec<&str>> {
        let paper = self.paper(paper)?;
        Ok(paper.authors.iter().map(|&a| self.graph.label(a)).collect())
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn origin(&self) -> &str {
        self.graph.label(self.origin)
    }

    pub fn author_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn paper_count(&self) -> usize {
        self.papers.len()
    }

    fn paper(&self, title: &str) -> Result<&Paper> {
        self.paper_index
            .get(title)
            .map(|id| &self.papers[id.0])
            .ok_or_else(|| Error::NotFound(format!("Paper '{title}'")))
    }
}

/// Set each edge's cost to `1 / k`, `k` being the number of parallel edges
/// between the same ordered pair.
fn assign_reciprocal_costs(graph: &mut Graph<Coauthorship>) {
    let mut tally: HashMap<VertexId, u32> = HashMap::new();
    for idx in 0..graph.vertex_count() {
        let id = VertexId(idx);
        tally.clear();
        for edge in graph.edges_at(id) {
            *tally.entry(edge.to).or_insert(0) += 1;
        }
        for edge in graph.edges_at_mut(id) {
            if let Some(&k) = tally.get(&edge.to) {
                edge.payload.cost = 1.0 / f64::from(k);
            }
        }
    }
    tracing::trace!(edges = graph.edge_count(), "reciprocal collaboration costs assigned");
}

// ============================================================================
// Tests
// ============================================================================
