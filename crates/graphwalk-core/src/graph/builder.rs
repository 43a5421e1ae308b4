//! Batch construction of a [`Graph`]
//!
//! A graph is built once from a complete node and edge description and is
//! read-only afterwards. Validation happens in [`GraphBuilder::build`]: every
//! edge endpoint must be declared, node ids must be unique and weights must be
//! finite and non-negative, so a dangling or half-built graph is never returned.

use crate::error::{GraphError, Result};
use crate::graph::store::Graph;
use crate::graph::types::{Cost, Node, NodeId, Position};

#[derive(Debug, Clone, Copy, PartialEq)]
enum EdgeWeight {
    Explicit(Cost),
    /// Distance between the endpoints' positions
    Euclidean,
}

#[derive(Debug, Clone)]
struct PendingEdge {
    from: NodeId,
    to: NodeId,
    weight: EdgeWeight,
}

#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    undirected: bool,
    nodes: Vec<Node>,
    edges: Vec<PendingEdge>,
}

impl GraphBuilder {
    pub fn new(undirected: bool) -> Self {
        GraphBuilder {
            undirected,
            ..Default::default()
        }
    }

    pub fn undirected() -> Self {
        Self::new(true)
    }

    pub fn directed() -> Self {
        Self::new(false)
    }

    pub fn add_node(&mut self, id: impl Into<NodeId>, position: Option<Position>) -> &mut Self {
        self.nodes.push(Node {
            id: id.into(),
            position,
        });
        self
    }

    /// Declare a node at `(x, y)`
    pub fn add_location(&mut self, id: impl Into<NodeId>, x: i64, y: i64) -> &mut Self {
        self.add_node(id, Some(Position::new(x, y)))
    }

    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        weight: impl Into<Cost>,
    ) -> &mut Self {
        self.edges.push(PendingEdge {
            from: from.into(),
            to: to.into(),
            weight: EdgeWeight::Explicit(weight.into()),
        });
        self
    }

    /// Add an edge weighted by the distance between its endpoints' positions
    pub fn add_euclidean_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
    ) -> &mut Self {
        self.edges.push(PendingEdge {
            from: from.into(),
            to: to.into(),
            weight: EdgeWeight::Euclidean,
        });
        self
    }

    #[tracing::instrument(
        skip(self),
        fields(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            undirected = self.undirected
        )
    )]
    pub fn build(&self) -> Result<Graph> {
        let mut graph = Graph::empty(self.undirected);
        for node in &self.nodes {
            graph.insert_node(node.clone())?;
        }

        for edge in &self.edges {
            let weight = match edge.weight {
                EdgeWeight::Explicit(cost) => cost,
                EdgeWeight::Euclidean => self.euclidean_weight(&graph, edge)?,
            };
            graph.insert_edge(&edge.from, &edge.to, weight)?;
        }

        tracing::debug!(nodes = graph.node_count(), arcs = graph.edge_count(), "graph built");
        Ok(graph)
    }

    fn euclidean_weight(&self, graph: &Graph, edge: &PendingEdge) -> Result<Cost> {
        for endpoint in [&edge.from, &edge.to] {
            if !graph.contains(endpoint) {
                return Err(GraphError::dangling_edge(&edge.from, &edge.to, endpoint));
            }
        }
        graph.distance(&edge.from, &edge.to).map(Cost::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_triangle() {
        let graph = GraphBuilder::undirected()
            .add_location("1", 0, 0)
            .add_location("2", 3, 0)
            .add_location("3", 3, 4)
            .add_edge("1", "2", 3.0)
            .add_edge("2", "3", 4.0)
            .build()
            .unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_weight("1", "2"), Some(Cost::new(3.0)));
        assert_eq!(graph.edge_weight("2", "1"), Some(Cost::new(3.0)));
        assert_eq!(graph.edge_weight("1", "3"), None);
    }

    #[test]
    fn test_edges_may_precede_nodes() {
        let graph = GraphBuilder::directed()
            .add_edge("a", "b", 1.0)
            .add_node("a", None)
            .add_node("b", None)
            .build()
            .unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_euclidean_edge_weight() {
        let graph = GraphBuilder::directed()
            .add_location("a", 0, 0)
            .add_location("b", 6, 8)
            .add_euclidean_edge("a", "b")
            .build()
            .unwrap();
        assert_eq!(graph.edge_weight("a", "b"), Some(Cost::new(10.0)));
    }

    #[test]
    fn test_euclidean_edge_needs_positions() {
        let err = GraphBuilder::directed()
            .add_location("a", 0, 0)
            .add_node("b", None)
            .add_euclidean_edge("a", "b")
            .build()
            .unwrap_err();
        assert!(matches!(err, GraphError::MissingPosition { id } if id == "b"));
    }

    #[test]
    fn test_euclidean_edge_far_apart() {
        let graph = GraphBuilder::directed()
            .add_location("a", i64::MAX, 0)
            .add_location("b", -1, 0)
            .add_euclidean_edge("a", "b")
            .build()
            .unwrap();
        let weight = graph.edge_weight("a", "b").unwrap();
        assert!(weight.is_valid_weight());
        assert!(weight.value() > 9.0e18);
    }

    #[test]
    fn test_euclidean_edge_dangling() {
        let err = GraphBuilder::directed()
            .add_location("a", 0, 0)
            .add_euclidean_edge("a", "z")
            .build()
            .unwrap_err();
        assert!(matches!(err, GraphError::DanglingEdge { missing, .. } if missing == "z"));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let err = GraphBuilder::directed()
            .add_node("a", None)
            .add_location("a", 1, 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, GraphError::DuplicateNode { id } if id == "a"));
    }

    #[test]
    fn test_undirected_listing_both_directions() {
        // Each endpoint lists the other, as adjacency-list descriptions do
        let graph = GraphBuilder::undirected()
            .add_location("a", 0, 0)
            .add_location("b", 0, 2)
            .add_euclidean_edge("a", "b")
            .add_euclidean_edge("b", "a")
            .build()
            .unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_nan_weight_rejected() {
        let err = GraphBuilder::directed()
            .add_node("a", None)
            .add_node("b", None)
            .add_edge("a", "b", f64::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { .. }));
    }
}
