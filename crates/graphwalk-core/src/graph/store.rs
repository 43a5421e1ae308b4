//! In-memory weighted graph
//!
//! The graph owns both the node values and the adjacency relation. Each node id
//! maps to an insertion-ordered list of `(neighbor id, weight)` pairs; the plain
//! neighbor view is derived from that list, so the weighted and unweighted
//! views can never disagree.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Cost, Edge, Node, NodeId};

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    adjacency: HashMap<NodeId, Vec<(NodeId, Cost)>>,
    undirected: bool,
    arc_count: usize,
}

impl Graph {
    pub(crate) fn empty(undirected: bool) -> Self {
        Graph {
            undirected,
            ..Default::default()
        }
    }

    pub(crate) fn insert_node(&mut self, node: Node) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode { id: node.id });
        }
        self.adjacency.insert(node.id.clone(), Vec::new());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Insert the arc `from -> to`, plus its mirror when the graph is undirected.
    ///
    /// Re-inserting an existing arc with the same weight is a no-op; a different
    /// weight is rejected.
    pub(crate) fn insert_edge(&mut self, from: &str, to: &str, weight: Cost) -> Result<()> {
        for endpoint in [from, to] {
            if !self.nodes.contains_key(endpoint) {
                return Err(GraphError::dangling_edge(from, to, endpoint));
            }
        }
        if !weight.is_valid_weight() {
            crate::bail_weight!(from, to, weight.value());
        }

        self.insert_arc(from, to, weight)?;
        if self.undirected && from != to {
            self.insert_arc(to, from, weight)?;
        }
        Ok(())
    }

    fn insert_arc(&mut self, from: &str, to: &str, weight: Cost) -> Result<()> {
        let arcs = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| GraphError::node_not_found(from))?;

        if let Some((_, existing)) = arcs.iter().find(|(id, _)| id == to) {
            if existing.value() == weight.value() {
                return Ok(());
            }
            return Err(GraphError::ConflictingEdge {
                from: from.to_string(),
                to: to.to_string(),
                existing: existing.value(),
                requested: weight.value(),
            });
        }

        arcs.push((to.to_string(), weight));
        self.arc_count += 1;
        Ok(())
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Result<&Node> {
        self.get(id).ok_or_else(|| GraphError::node_not_found(id))
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes, sorted by id
    pub fn nodes(&self) -> Vec<&Node> {
        let mut nodes: Vec<&Node> = self.nodes.values().collect();
        nodes.sort();
        nodes
    }

    /// Plain neighbor view, in edge insertion order
    pub fn neighbors(&self, id: &str) -> Result<Vec<&Node>> {
        Ok(self
            .arcs(id)?
            .iter()
            .filter_map(|(to, _)| self.nodes.get(to))
            .collect())
    }

    /// Weighted neighbor view, in edge insertion order
    pub fn weighted_neighbors(&self, id: &str) -> Result<Vec<Edge>> {
        Ok(self
            .arcs(id)?
            .iter()
            .map(|(to, weight)| Edge {
                from: id.to_string(),
                to: to.clone(),
                weight: *weight,
            })
            .collect())
    }

    /// Weight of the arc `from -> to`, if there is one
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<Cost> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(id, _)| id == to)
            .map(|(_, weight)| *weight)
    }

    /// Euclidean distance between the positions of two nodes
    pub fn distance(&self, a: &str, b: &str) -> Result<f64> {
        let a = self.node(a)?;
        let b = self.node(b)?;
        match (a.position, b.position) {
            (Some(pa), Some(pb)) => Ok(pa.distance_to(&pb)),
            (None, _) => Err(GraphError::MissingPosition { id: a.id.clone() }),
            (_, None) => Err(GraphError::MissingPosition { id: b.id.clone() }),
        }
    }

    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored directed arcs; an undirected edge between two distinct
    /// nodes counts twice.
    pub fn edge_count(&self) -> usize {
        self.arc_count
    }

    fn arcs(&self, id: &str) -> Result<&[(NodeId, Cost)]> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::node_not_found(id))
    }
}

impl GraphProvider for Graph {
    fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn get_neighbors(&self, id: &str) -> Vec<&Node> {
        self.neighbors(id).unwrap_or_default()
    }

    fn get_weighted_neighbors(&self, id: &str) -> Vec<(&Node, Cost)> {
        self.adjacency
            .get(id)
            .map(|arcs| {
                arcs.iter()
                    .filter_map(|(to, weight)| self.nodes.get(to).map(|node| (node, *weight)))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn node_ids(&self) -> Vec<&str> {
        self.nodes().into_iter().map(Node::id).collect()
    }
}
