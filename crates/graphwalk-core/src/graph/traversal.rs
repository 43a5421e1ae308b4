use crate::error::{GraphError, Result};
use crate::graph::types::{Cost, Node};

/// Trait for providing graph adjacency and node data to the search algorithms
pub trait GraphProvider {
    fn get_node(&self, id: &str) -> Option<&Node>;
    fn get_neighbors(&self, id: &str) -> Vec<&Node>;
    fn get_weighted_neighbors(&self, id: &str) -> Vec<(&Node, Cost)>;
    fn node_ids(&self) -> Vec<&str>;

    /// Look up a node, failing with `NodeNotFound` when it is absent
    fn require_node(&self, id: &str) -> Result<&Node> {
        self.get_node(id)
            .ok_or_else(|| GraphError::node_not_found(id))
    }
}
