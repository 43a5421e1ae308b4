//! Search configuration for graphwalk
//!
//! Configuration is read from a TOML file; every field is optional.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};

pub use types::{HeuristicKind, SearchConfig, DEFAULT_MAX_RECURSION_DEPTH};

impl SearchConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SearchConfig = toml::from_str(&content)?;

        if config.max_recursion_depth == 0 {
            return Err(GraphError::UsageError(
                "max_recursion_depth must be at least 1".to_string(),
            ));
        }

        tracing::debug!(
            path = %path.display(),
            max_recursion_depth = config.max_recursion_depth,
            heuristic = %config.default_heuristic,
            "loaded search config"
        );
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the effective directedness for a graph description
    pub fn resolve_undirected(&self, described: bool) -> bool {
        self.undirected.unwrap_or(described)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_recursion_depth, DEFAULT_MAX_RECURSION_DEPTH);
        assert_eq!(config.default_heuristic, HeuristicKind::Euclidean);
        assert_eq!(config.undirected, None);
    }

    #[test]
    fn test_load_partial_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        fs::write(&path, "default_heuristic = \"zero\"\n").unwrap();

        let config = SearchConfig::load(&path).unwrap();
        assert_eq!(config.default_heuristic, HeuristicKind::Zero);
        assert_eq!(config.max_recursion_depth, DEFAULT_MAX_RECURSION_DEPTH);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        let config = SearchConfig {
            max_recursion_depth: 64,
            default_heuristic: HeuristicKind::Zero,
            undirected: Some(false),
        };
        config.save(&path).unwrap();
        assert_eq!(SearchConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graphwalk.toml");
        fs::write(&path, "max_recursion_depth = 0\n").unwrap();

        let err = SearchConfig::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::UsageError(_)));
    }

    #[test]
    fn test_resolve_undirected() {
        let mut config = SearchConfig::default();
        assert!(config.resolve_undirected(true));
        config.undirected = Some(false);
        assert!(!config.resolve_undirected(true));
    }

    #[test]
    fn test_heuristic_from_str() {
        assert_eq!("Euclidean".parse::<HeuristicKind>(), Ok(HeuristicKind::Euclidean));
        assert_eq!("none".parse::<HeuristicKind>(), Ok(HeuristicKind::Zero));
        assert!("manhattan".parse::<HeuristicKind>().is_err());
    }
}
