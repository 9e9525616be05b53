//! # relgraph — Graph Analytics over Relationship Records
//!
//! Three small engines that each build a private label-keyed graph from a
//! flat list of records and run one well-defined traversal over it.
//!
//! ## Design Principles
//!
//! 1. **One graph core**: every engine uses [`graph::Graph`], an adjacency
//!    list over dense indices plus a label registry
//! 2. **Records own nothing**: [`model`] types are plain data, produced by
//!    whatever parses the caller's input
//! 3. **Build once, query cheaply**: heavy work happens at construction
//! 4. **Fail fast**: queries naming unknown entities return [`Error::NotFound`]
//!
//! ## Quick Start
//!
//! ```rust
//! use relgraph::{CoauthorRecord, CollaborationGraph, config::CollabConfig};
//!
//! # fn example() -> relgraph::Result<()> {
//! let papers = vec![
//!     CoauthorRecord::new("Graphs I", ["Erdős", "Ada"]),
//!     CoauthorRecord::new("Graphs II", ["Ada", "Bob"]),
//! ];
//! let graph = CollaborationGraph::with_config(&papers, &CollabConfig::with_origin("Erdős"))?;
//!
//! assert_eq!(graph.distance_of("Bob")?, Some(2));
//! assert!(graph.is_origin_connected_to_all());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Engines
//!
//! | Engine | Module | Algorithm |
//! |--------|--------|-----------|
//! | `CollaborationGraph` | `collab` | Dijkstra, unit and `1/k` weights |
//! | `FactChecker` | `consistency` | iterative Tarjan SCC |
//! | `ContactTracer` | `contact` | time-filtered explicit-stack DFS |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod config;
pub mod collab;
pub mod consistency;
pub mod contact;

// ============================================================================
// Re-exports: Model (the records)
// ============================================================================

pub use model::{Assertion, AssertionKind, CoauthorRecord, ContactRecord};

// ============================================================================
// Re-exports: Graph core
// ============================================================================

pub use graph::{Edge, Graph, VertexId, VertexRegistry};

// ============================================================================
// Re-exports: Engines
// ============================================================================

pub use collab::CollaborationGraph;
pub use consistency::{are_facts_consistent, Contradiction, FactChecker};
pub use contact::ContactTracer;
pub use config::{CollabConfig, EngineConfig, TracerConfig};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate vertex: {0}")]
    DuplicateVertex(String),

    #[error("Origin entity '{0}' does not appear in any record")]
    MissingOrigin(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
