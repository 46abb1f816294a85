//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Default number of transitions retained when history is enabled.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Runtime options for an [`Engine`](crate::engine::Engine).
///
/// Missing fields deserialize to their defaults, so hosts can keep only the
/// options they change in their own config files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Record every committed transition.
    pub record_history: bool,

    /// Maximum records kept; the oldest are dropped first.
    pub history_limit: usize,
}

impl EngineConfig {
    /// Configuration with history recording on and the given bound.
    pub fn with_history(limit: usize) -> Self {
        Self {
            record_history: true,
            history_limit: limit,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            record_history: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
