//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config:
//!
//! ```rust
//! use relgraph::config::EngineConfig;
//!
//! let cfg = EngineConfig::from_json(r#"{ "tracer": { "incubation": 30 } }"#).unwrap();
//! assert_eq!(cfg.tracer.incubation, 30);
//! assert_eq!(cfg.collab.origin, relgraph::config::DEFAULT_ORIGIN);
//! ```

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The reference author collaboration distances are measured from.
pub const DEFAULT_ORIGIN: &str = "Paul Erdös";

/// Time units between being infected and becoming contagious.
pub const DEFAULT_INCUBATION: i64 = 60;

/// Settings for the collaboration distance engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollabConfig {
    pub origin: String,
}

impl Default for CollabConfig {
    fn default() -> Self {
        Self { origin: DEFAULT_ORIGIN.to_string() }
    }
}

impl CollabConfig {
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self { origin: origin.into() }
    }
}

/// Settings for the contact propagation tracer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerConfig {
    pub incubation: i64,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self { incubation: DEFAULT_INCUBATION }
    }
}

impl TracerConfig {
    /// Incubation must be non-negative: nobody spreads before being infected.
    pub fn validate(&self) -> Result<()> {
        if self.incubation < 0 {
            return Err(Error::Config(format!(
                "tracer.incubation must be >= 0, got {}",
                self.incubation
            )));
        }
        Ok(())
    }
}

/// Combined configuration for embedding applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub collab: CollabConfig,
    pub tracer: TracerConfig,
}

impl EngineConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: EngineConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.collab.origin.is_empty() {
            return Err(Error::Config("collab.origin must not be empty".into()));
        }
        self.tracer.validate()
    }
}
