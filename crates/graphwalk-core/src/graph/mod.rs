//! Weighted graph store and search algorithms
//!
//! Provides the in-memory graph and the algorithms that run over it:
//! - Batch construction from a builder or a serialized description
//! - BFS and DFS traversal, cycle detection
//! - A* and Dijkstra shortest paths
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod builder;
pub mod description;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{
    a_star, bfs, bfs_depths, bfs_find, dfs, dfs_find, dfs_find_recursive, dfs_recursive,
    dfs_recursive_with_limit, dijkstra, find_any_cycle, find_cycle, graph_has_cycle, has_cycle,
    path_cost, Euclidean, Heuristic, Zero,
};
pub use builder::GraphBuilder;
pub use description::{load_graph, DescriptionFormat, EdgeDescription, GraphDescription};
pub use store::Graph;
pub use traversal::GraphProvider;
pub use types::{
    Cost, Edge, Node, NodeId, PathResult, Position, SearchOutcome, Traversal, VisitedNode,
};
