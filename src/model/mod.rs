//! # Relationship Records
//!
//! Plain value types handed to the engines by whatever parses the raw input.
//! They cross every boundary: caller ↔ engine construction ↔ tests.
//!
//! Design rule: NO graph indices here. Records carry labels only; each engine
//! maps labels to its own dense `VertexId`s.

pub mod record;

pub use record::{Assertion, AssertionKind, CoauthorRecord, ContactRecord};
