//! Label → dense index registry.

use hashbrown::HashMap;

use super::VertexId;
use crate::{Error, Result};

/// Append-only mapping between entity labels and dense `VertexId`s.
///
/// Index `n` is always the `n`-th label ever registered; nothing is removed.
#[derive(Debug, Clone, Default)]
pub struct VertexRegistry {
    ids: HashMap<String, VertexId>,
    labels: Vec<String>,
}

impl VertexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `label`, failing if it is already known.
    pub fn register(&mut self, label: &str) -> Result<VertexId> {
        if self.ids.contains_key(label) {
            return Err(Error::DuplicateVertex(label.to_string()));
        }
        Ok(self.insert_new(label))
    }

    /// Register `label` if new, otherwise return its existing index.
    pub fn ensure(&mut self, label: &str) -> (VertexId, bool) {
        match self.ids.get(label) {
            Some(&id) => (id, false),
            None => (self.insert_new(label), true),
        }
    }

    pub fn get(&self, label: &str) -> Option<VertexId> {
        self.ids.get(label).copied()
    }

    pub fn index_of(&self, label: &str) -> Result<VertexId> {
        self.get(label)
            .ok_or_else(|| Error::NotFound(format!("Entity '{label}'")))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.labels.get(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &str)> {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, l)| (VertexId(i), l.as_str()))
    }

    fn insert_new(&mut self, label: &str) -> VertexId {
        let id = VertexId(self.labels.len());
        self.labels.push(label.to_string());
        self.ids.insert(label.to_string(), id);
        id
    }
}
