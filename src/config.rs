//! Simulation configuration.
//!
//! Holds the knobs the boundary feeds into a batch: the Round Robin
//! quantum and the input batch cap. Loadable from JSON; every field is
//! optional and falls back to its default.
//!
//! ```json
//! { "quantum": 4, "max_batch": 50 }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::scheduler::DEFAULT_QUANTUM;

/// Maximum number of `(arrival, burst)` pairs read from input.
pub const DEFAULT_MAX_BATCH: usize = 100;

/// Configuration for one scheduling batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin time quantum. Validated when the batch runs.
    pub quantum: i64,
    /// Input pairs beyond this count are dropped.
    pub max_batch: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            max_batch: DEFAULT_MAX_BATCH,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the batch cap.
    pub fn with_max_batch(mut self, max_batch: usize) -> Self {
        self.max_batch = max_batch;
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&text)
    }
}

/// Failure to load a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(std::io::Error),
    /// The file is not valid configuration JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {e}"),
            ConfigError::Parse(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}
