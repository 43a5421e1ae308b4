//! Structured graph descriptions (JSON, TOML or YAML)
//!
//! ```toml
//! undirected = true
//!
//! [[nodes]]
//! id = "1"
//! position = [0, 0]
//!
//! [[edges]]
//! from = "1"
//! to = "2"
//! weight = 3.0   # optional; defaults to the distance between positions
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::builder::GraphBuilder;
use crate::graph::store::Graph;
use crate::graph::types::{Node, NodeId};

/// Serialized form of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(default = "default_undirected")]
    pub undirected: bool,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

fn default_undirected() -> bool {
    true
}

/// File formats a description can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionFormat {
    Json,
    Toml,
    Yaml,
}

impl DescriptionFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();
        match ext.as_str() {
            "json" => Ok(DescriptionFormat::Json),
            "toml" => Ok(DescriptionFormat::Toml),
            "yaml" | "yml" => Ok(DescriptionFormat::Yaml),
            other => Err(GraphError::unsupported(
                "graph file extension",
                if other.is_empty() { "<none>" } else { other },
                "json, toml, yaml, yml",
            )),
        }
    }
}

impl GraphDescription {
    pub fn parse(content: &str, format: DescriptionFormat) -> Result<Self> {
        let description: GraphDescription = match format {
            DescriptionFormat::Json => serde_json::from_str(content)?,
            DescriptionFormat::Toml => toml::from_str(content)?,
            DescriptionFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(description)
    }

    /// Read a description from disk, choosing the parser by extension
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let format = DescriptionFormat::from_path(path)?;
        let content = fs::read_to_string(path)?;
        let description = Self::parse(&content, format)?;
        tracing::debug!(
            nodes = description.nodes.len(),
            edges = description.edges.len(),
            ?format,
            "loaded graph description"
        );
        Ok(description)
    }

    /// Builder populated from this description
    pub fn to_builder(&self) -> GraphBuilder {
        let mut builder = GraphBuilder::new(self.undirected);
        for node in &self.nodes {
            builder.add_node(node.id.clone(), node.position);
        }
        for edge in &self.edges {
            match edge.weight {
                Some(weight) => builder.add_edge(edge.from.clone(), edge.to.clone(), weight),
                None => builder.add_euclidean_edge(edge.from.clone(), edge.to.clone()),
            };
        }
        builder
    }
}

impl Graph {
    pub fn from_description(description: &GraphDescription) -> Result<Graph> {
        description.to_builder().build()
    }
}

/// Load and build a graph from a description file
pub fn load_graph(path: &Path) -> Result<Graph> {
    Graph::from_description(&GraphDescription::load(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::{Cost, Position};
    use tempfile::tempdir;

    const TRIANGLE_TOML: &str = r#"
undirected = true

[[nodes]]
id = "1"
position = [0, 0]

[[nodes]]
id = "2"
position = [3, 0]

[[nodes]]
id = "3"
position = [3, 4]

[[edges]]
from = "1"
to = "2"

[[edges]]
from = "2"
to = "3"
weight = 4.0
"#;

    #[test]
    fn test_parse_toml() {
        let description = GraphDescription::parse(TRIANGLE_TOML, DescriptionFormat::Toml).unwrap();
        assert!(description.undirected);
        assert_eq!(description.nodes.len(), 3);
        assert_eq!(description.nodes[2].position, Some(Position::new(3, 4)));
        assert_eq!(description.edges[0].weight, None);
        assert_eq!(description.edges[1].weight, Some(4.0));

        let graph = Graph::from_description(&description).unwrap();
        assert_eq!(graph.edge_weight("2", "1"), Some(Cost::new(3.0)));
    }

    #[test]
    fn test_parse_json_defaults_undirected() {
        let json = r#"{
            "nodes": [{"id": "a"}, {"id": "b"}],
            "edges": [{"from": "a", "to": "b", "weight": 2}]
        }"#;
        let graph = Graph::from_description(
            &GraphDescription::parse(json, DescriptionFormat::Json).unwrap(),
        )
        .unwrap();
        assert!(graph.is_undirected());
        assert_eq!(graph.edge_weight("b", "a"), Some(Cost::new(2.0)));
    }

    #[test]
    fn test_parse_yaml_directed() {
        let yaml = r#"
undirected: false
nodes:
  - id: x
  - id: y
edges:
  - from: x
    to: y
    weight: 1.5
"#;
        let graph = Graph::from_description(
            &GraphDescription::parse(yaml, DescriptionFormat::Yaml).unwrap(),
        )
        .unwrap();
        assert!(!graph.is_undirected());
        assert_eq!(graph.edge_weight("y", "x"), None);
    }

    #[test]
    fn test_dangling_edge_fails_construction() {
        let json = r#"{"nodes": [{"id": "a"}], "edges": [{"from": "a", "to": "b", "weight": 1}]}"#;
        let description = GraphDescription::parse(json, DescriptionFormat::Json).unwrap();
        assert!(matches!(
            Graph::from_description(&description),
            Err(GraphError::DanglingEdge { .. })
        ));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DescriptionFormat::from_path(Path::new("g.YML")).unwrap(),
            DescriptionFormat::Yaml
        );
        assert!(matches!(
            DescriptionFormat::from_path(Path::new("graph.txt")),
            Err(GraphError::Unsupported { .. })
        ));
        assert!(DescriptionFormat::from_path(Path::new("graph")).is_err());
    }

    #[test]
    fn test_load_graph_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("triangle.toml");
        fs::write(&path, TRIANGLE_TOML).unwrap();

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_graph(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
