//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default depth limit for the recursive DFS variant
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 1_000;

/// Search configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum call depth for recursive DFS before it fails with a recursion limit error
    #[serde(default = "default_max_recursion_depth")]
    pub max_recursion_depth: usize,

    /// Heuristic used by path searches when none is given explicitly
    #[serde(default)]
    pub default_heuristic: HeuristicKind,

    /// Override for the graph description's `undirected` flag (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undirected: Option<bool>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            default_heuristic: HeuristicKind::default(),
            undirected: None,
        }
    }
}

fn default_max_recursion_depth() -> usize {
    DEFAULT_MAX_RECURSION_DEPTH
}

/// Named heuristics selectable from config and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    /// Straight-line distance between node positions
    #[default]
    Euclidean,
    /// Always zero; turns A* into Dijkstra
    Zero,
}

impl std::str::FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" => Ok(HeuristicKind::Euclidean),
            "zero" | "none" => Ok(HeuristicKind::Zero),
            other => Err(format!(
                "unknown heuristic '{}' (expected: euclidean, zero)",
                other
            )),
        }
    }
}

impl std::fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeuristicKind::Euclidean => write!(f, "euclidean"),
            HeuristicKind::Zero => write!(f, "zero"),
        }
    }
}
