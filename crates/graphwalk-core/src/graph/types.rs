use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Identity of a node within a graph
pub type NodeId = String;

/// Integer 2D position, used for distance heuristics and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i64; 2]", into = "[i64; 2]")]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Position { x, y }
    }

    /// Straight-line distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        dx.hypot(dy)
    }
}

impl From<[i64; 2]> for Position {
    fn from([x, y]: [i64; 2]) -> Self {
        Position { x, y }
    }
}

impl From<Position> for [i64; 2] {
    fn from(pos: Position) -> Self {
        [pos.x, pos.y]
    }
}

/// A vertex of the graph.
///
/// Equality, hashing and ordering look only at `id`: two nodes with the same id
/// are the same node regardless of position. Adjacency lives in the graph, not
/// on the node, so nodes are plain immutable values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Node {
            id: id.into(),
            position: None,
        }
    }

    pub fn at(id: impl Into<NodeId>, x: i64, y: i64) -> Self {
        Node {
            id: id.into(),
            position: Some(Position::new(x, y)),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// Cost of traversing an edge, or of a whole path
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Total order over costs, usable for heap ordering
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Whether this cost is usable as an edge weight
    pub fn is_valid_weight(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl From<u32> for Cost {
    fn from(hops: u32) -> Self {
        Cost(hops as f64)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One weighted adjacency entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Cost,
}

/// Visitation order produced by BFS or DFS
#[derive(Debug, Clone, Serialize)]
pub struct Traversal {
    pub root: NodeId,
    pub order: Vec<Node>,
}

impl Traversal {
    /// Node ids in visitation order
    pub fn ids(&self) -> Vec<&str> {
        self.order.iter().map(Node::id).collect()
    }
}

/// A node annotated with its hop count from the traversal root
#[derive(Debug, Clone, Serialize)]
pub struct VisitedNode {
    #[serde(flatten)]
    pub node: Node,
    pub depth: u32,
}

/// Result of a target-seeking depth-first search
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub found: bool,
    pub path: Vec<Node>,
}

impl SearchOutcome {
    pub fn ids(&self) -> Vec<&str> {
        self.path.iter().map(Node::id).collect()
    }
}

/// Shortest path between two nodes
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: NodeId,
    pub to: NodeId,
    pub nodes: Vec<Node>,
    pub cost: Cost,
}

impl PathResult {
    pub fn ids(&self) -> Vec<&str> {
        self.nodes.iter().map(Node::id).collect()
    }

    /// Number of edges on the path
    pub fn path_length(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}
