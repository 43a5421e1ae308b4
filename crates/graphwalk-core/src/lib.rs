//! Graphwalk Core Library
//!
//! In-memory weighted graphs with breadth-first and depth-first traversal,
//! cycle detection and A* shortest paths.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
