use crate::error::Result;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Node, Traversal, VisitedNode};
use crate::trace_time;
use std::collections::{HashSet, VecDeque};
use std::time::Instant;

/// Breadth-first traversal from `source`.
///
/// Nodes come out in non-decreasing hop distance from the source. Neighbors
/// at the same level appear in edge insertion order.
pub fn bfs(provider: &dyn GraphProvider, source: &str) -> Result<Traversal> {
    let order = bfs_depths(provider, source)?
        .into_iter()
        .map(|visited| visited.node)
        .collect();
    Ok(Traversal {
        root: source.to_string(),
        order,
    })
}

/// Breadth-first traversal annotated with each node's hop count in the BFS
/// tree, which is the minimum number of edges from `source`.
#[tracing::instrument(skip(provider), fields(source = %source))]
pub fn bfs_depths(provider: &dyn GraphProvider, source: &str) -> Result<Vec<VisitedNode>> {
    let start = Instant::now();
    let root = provider.require_node(source)?;

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&Node, u32)> = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(root.id());
    queue.push_back((root, 0));
    order.push(VisitedNode {
        node: root.clone(),
        depth: 0,
    });

    while let Some((current, depth)) = queue.pop_front() {
        for neighbor in provider.get_neighbors(current.id()) {
            if visited.insert(neighbor.id()) {
                queue.push_back((neighbor, depth + 1));
                order.push(VisitedNode {
                    node: neighbor.clone(),
                    depth: depth + 1,
                });
            }
        }
    }

    trace_time!(start, "bfs", visited = order.len());
    tracing::debug!(visited = order.len(), "bfs complete");
    Ok(order)
}

/// Whether `target` is reachable from `source`.
///
/// Returns as soon as the target is dequeued, without recording the
/// visitation order.
#[tracing::instrument(skip(provider), fields(source = %source, target = %target))]
pub fn bfs_find(provider: &dyn GraphProvider, source: &str, target: &str) -> Result<bool> {
    let root = provider.require_node(source)?;
    provider.require_node(target)?;

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&Node> = VecDeque::new();
    visited.insert(root.id());
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        if current.id() == target {
            tracing::debug!(explored = visited.len(), "bfs target found");
            return Ok(true);
        }

        for neighbor in provider.get_neighbors(current.id()) {
            if visited.insert(neighbor.id()) {
                queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(explored = visited.len(), "bfs target not reachable");
    Ok(false)
}
