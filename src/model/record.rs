//! Input records for the three engines.

use serde::{Deserialize, Serialize};

/// A paper and the authors who wrote it.
///
/// `authors` is ordered and duplicate-free, with at least one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoauthorRecord {
    pub paper: String,
    pub authors: Vec<String>,
}

impl CoauthorRecord {
    pub fn new(
        paper: impl Into<String>,
        authors: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            paper: paper.into(),
            authors: authors.into_iter().map(Into::into).collect(),
        }
    }
}

/// How an assertion relates its two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssertionKind {
    /// A precedes-or-coincides-with B. One arc, A → B.
    OneDirectional,
    /// A coincides with B. Holds in both directions.
    Simultaneous,
}

impl AssertionKind {
    pub fn is_symmetric(self) -> bool {
        matches!(self, AssertionKind::Simultaneous)
    }
}

/// A pairwise ordering or simultaneity assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assertion {
    pub person_a: String,
    pub person_b: String,
    pub kind: AssertionKind,
}

impl Assertion {
    pub fn new(person_a: impl Into<String>, person_b: impl Into<String>, kind: AssertionKind) -> Self {
        Self {
            person_a: person_a.into(),
            person_b: person_b.into(),
            kind,
        }
    }

    pub fn directional(person_a: impl Into<String>, person_b: impl Into<String>) -> Self {
        Self::new(person_a, person_b, AssertionKind::OneDirectional)
    }

    pub fn simultaneous(person_a: impl Into<String>, person_b: impl Into<String>) -> Self {
        Self::new(person_a, person_b, AssertionKind::Simultaneous)
    }
}

/// Two people met at `time`. The pair is unordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactRecord {
    pub person1: String,
    pub person2: String,
    pub time: i64,
}

impl ContactRecord {
    pub fn new(person1: impl Into<String>, person2: impl Into<String>, time: i64) -> Self {
        Self {
            person1: person1.into(),
            person2: person2.into(),
            time,
        }
    }
}
