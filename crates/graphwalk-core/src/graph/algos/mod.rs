//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first traversal and reachability
//! - `dfs`: Depth-first traversal, iterative and recursive
//! - `cycle`: Back-edge cycle detection
//! - `astar`: Informed shortest path, plus Dijkstra as its zero-heuristic case
//! - `heuristic`: Cost-to-goal estimates for `astar`
//! - `path`: Path reconstruction and costing

pub mod astar;
pub mod bfs;
pub mod cycle;
pub mod dfs;
pub mod heuristic;
pub mod path;

pub use astar::{a_star, dijkstra};
pub use bfs::{bfs, bfs_depths, bfs_find};
pub use cycle::{find_any_cycle, find_cycle, graph_has_cycle, has_cycle};
pub use dfs::{dfs, dfs_find, dfs_find_recursive, dfs_recursive, dfs_recursive_with_limit};
pub use heuristic::{Euclidean, Heuristic, Zero};
pub use path::{path_cost, reconstruct_path};
