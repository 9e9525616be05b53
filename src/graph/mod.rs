//! # Graph Core
//!
//! A label-keyed adjacency-list multigraph shared by every engine.
//!
//! Vertices are entity labels mapped to dense `VertexId`s by a
//! [`VertexRegistry`]; edges live in one contiguous `Vec` of per-vertex
//! adjacency lists indexed by `VertexId`. Parallel edges are kept as-is.
//!
//! ## Ordering contract
//!
//! | Insert with | `edges_of` order |
//! |-------------|------------------|
//! | `add_edge` / `connect` | insertion order |
//! | `add_edge_sorted_by_key` | ascending key, ties in insertion order |
//!
//! An engine picks one insertion style per graph and sticks to it.

pub mod registry;
pub mod shortest_path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use registry::VertexRegistry;

/// Dense vertex index, stable for the lifetime of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directed arc to `to` carrying an engine-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<P> {
    pub to: VertexId,
    pub payload: P,
}

/// Adjacency-list multigraph keyed by string labels.
#[derive(Debug, Clone)]
pub struct Graph<P> {
    registry: VertexRegistry,
    adjacency: Vec<Vec<Edge<P>>>,
    edge_count: usize,
}

impl<P> Default for Graph<P> {
    fn default() -> Self {
        Self {
            registry: VertexRegistry::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<P> Graph<P> {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Vertices
    // ========================================================================

    /// Register a new vertex. Fails with `DuplicateVertex` if already present.
    pub fn add_vertex(&mut self, label: &str) -> Result<VertexId> {
        let id = self.registry.register(label)?;
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Register `label` if new; return its index either way.
    pub fn ensure_vertex(&mut self, label: &str) -> VertexId {
        let (id, fresh) = self.registry.ensure(label);
        if fresh {
            self.adjacency.push(Vec::new());
        }
        id
    }

    pub fn index_of(&self, label: &str) -> Result<VertexId> {
        self.registry.index_of(label)
    }

    pub fn get(&self, label: &str) -> Option<VertexId> {
        self.registry.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.registry.contains(label)
    }

    /// Label of `id`, or `None` if this graph never handed it out.
    pub fn label_of(&self, id: VertexId) -> Option<&str> {
        self.registry.label(id)
    }

    /// Label of a vertex handed out by this graph.
    ///
    /// # Panics
    /// If `id` was not produced by this graph.
    pub(crate) fn label(&self, id: VertexId) -> &str {
        match self.registry.label(id) {
            Some(label) => label,
            None => panic!("vertex {id} is not registered in this graph"),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &str)> {
        self.registry.iter()
    }

    // ========================================================================
    // Edges
    // ========================================================================

    /// Append `from → to` by label. Both endpoints must be registered.
    pub fn add_edge(&mut self, from: &str, to: &str, payload: P) -> Result<()> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.connect(from, to, payload)
    }

    /// Append `from → to` by index.
    pub fn connect(&mut self, from: VertexId, to: VertexId, payload: P) -> Result<()> {
        self.check(to)?;
        let list = self.list_mut(from)?;
        list.push(Edge { to, payload });
        self.edge_count += 1;
        Ok(())
    }

    /// Insert `from → to` keeping `from`'s list ascending by `key(payload)`.
    ///
    /// Equal keys stay in insertion order.
    pub fn add_edge_sorted_by_key<K, F>(
        &mut self,
        from: VertexId,
        to: VertexId,
        payload: P,
        key: F,
    ) -> Result<()>
    where
        K: Ord,
        F: Fn(&P) -> K,
    {
        self.check(to)?;
        let list = self.list_mut(from)?;
        let k = key(&payload);
        let pos = list.partition_point(|e| key(&e.payload) <= k);
        list.insert(pos, Edge { to, payload });
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `label`, in the graph's ordering contract.
    pub fn edges_of(&self, label: &str) -> Result<&[Edge<P>]> {
        let id = self.index_of(label)?;
        Ok(self.edges_at(id))
    }

    /// Outgoing edges by index. Unknown indices have no edges.
    pub fn edges_at(&self, id: VertexId) -> &[Edge<P>] {
        match self.adjacency.get(id.index()) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Mutable payload access for rewrite passes. The edge set itself is fixed.
    pub fn edges_at_mut(&mut self, id: VertexId) -> &mut [Edge<P>] {
        match self.adjacency.get_mut(id.index()) {
            Some(list) => list,
            None => &mut [],
        }
    }

    fn check(&self, id: VertexId) -> Result<()> {
        if id.index() < self.adjacency.len() {
            Ok(())
        } else {
            Err(Error::NotFound(format!("Vertex {id}")))
        }
    }

    fn list_mut(&mut self, id: VertexId) -> Result<&mut Vec<Edge<P>>> {
        self.adjacency
            .get_mut(id.index())
            .ok_or_else(|| Error::NotFound(format!("Vertex {id}")))
    }
}

// ============================================================================
// Tests
// ============================================================================
