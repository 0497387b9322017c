#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default reserved namespace marker.
pub const DEFAULT_NAMESPACE: &str = "custompapi";

/// Default bound on substitutions performed by a single resolve.
pub const DEFAULT_MAX_EXPANSIONS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Namespace marker identifying this engine's own placeholder syntax.
    /// An expanded value containing it is never forwarded to the external
    /// resolver, so the external framework cannot re-enter this engine.
    pub namespace: String,
    /// Maximum number of `${...}` substitutions per resolve. Each reference
    /// occurrence in an acyclic graph costs one substitution; a cyclic graph
    /// exhausts the budget and is reported as an error instead of hanging.
    pub max_expansions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            max_expansions: DEFAULT_MAX_EXPANSIONS,
        }
    }
}

impl Config {
    /// True when `value` still carries this engine's namespace marker.
    pub fn is_internal(&self, value: &str) -> bool {
        value.contains(&self.namespace)
    }
}
