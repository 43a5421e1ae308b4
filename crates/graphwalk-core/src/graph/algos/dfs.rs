//! Depth-first traversal, iterative and recursive.
//!
//! Both variants append a node to the path the first time it is reached and
//! never expand it again, so diamonds and cycles terminate. The iterative
//! variant pushes neighbors in reverse so it pops them in adjacency order,
//! which makes its visitation order identical to the recursive one.
//!
//! The recursive variant uses one stack frame per path edge. It fails with
//! `RecursionLimit` instead of overflowing the thread stack once the limit is
//! reached; prefer the iterative variant for long chains.

use crate::config::DEFAULT_MAX_RECURSION_DEPTH;
use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Node, SearchOutcome, Traversal};
use crate::trace_time;
use std::collections::HashSet;
use std::time::Instant;

fn iterative<'g>(
    provider: &'g dyn GraphProvider,
    root: &'g Node,
    target: Option<&str>,
) -> (Vec<&'g Node>, bool) {
    let mut path: Vec<&Node> = Vec::new();
    let mut on_path: HashSet<&str> = HashSet::new();
    let mut stack = vec![root];

    while let Some(current) = stack.pop() {
        if !on_path.insert(current.id()) {
            continue;
        }
        path.push(current);

        if target == Some(current.id()) {
            return (path, true);
        }

        for neighbor in provider.get_neighbors(current.id()).into_iter().rev() {
            if !on_path.contains(neighbor.id()) {
                stack.push(neighbor);
            }
        }
    }

    (path, false)
}

struct RecursiveWalk<'g, 't> {
    provider: &'g dyn GraphProvider,
    target: Option<&'t str>,
    max_depth: usize,
    path: Vec<&'g Node>,
    on_path: HashSet<&'g str>,
}

impl<'g> RecursiveWalk<'g, '_> {
    /// Visit `node` at call depth `depth`; true once the target has been reached
    fn visit(&mut self, node: &'g Node, depth: usize) -> Result<bool> {
        if self.on_path.contains(node.id()) {
            return Ok(false);
        }
        if depth > self.max_depth {
            return Err(GraphError::RecursionLimit {
                limit: self.max_depth,
            });
        }

        self.on_path.insert(node.id());
        self.path.push(node);

        if self.target == Some(node.id()) {
            return Ok(true);
        }

        let provider = self.provider;
        for neighbor in provider.get_neighbors(node.id()) {
            if self.visit(neighbor, depth + 1)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn recursive<'g>(
    provider: &'g dyn GraphProvider,
    root: &'g Node,
    target: Option<&str>,
    max_depth: usize,
) -> Result<(Vec<&'g Node>, bool)> {
    let mut walk = RecursiveWalk {
        provider,
        target,
        max_depth,
        path: Vec::new(),
        on_path: HashSet::new(),
    };
    let found = walk.visit(root, 1)?;
    Ok((walk.path, found))
}

fn owned(path: Vec<&Node>) -> Vec<Node> {
    path.into_iter().cloned().collect()
}

/// Iterative depth-first traversal from `source`
#[tracing::instrument(skip(provider), fields(source = %source))]
pub fn dfs(provider: &dyn GraphProvider, source: &str) -> Result<Traversal> {
    let start = Instant::now();
    let root = provider.require_node(source)?;
    let (path, _) = iterative(provider, root, None);
    trace_time!(start, "dfs", visited = path.len());
    Ok(Traversal {
        root: source.to_string(),
        order: owned(path),
    })
}

/// Iterative depth-first search that stops at `target`.
///
/// When the target is found the path holds every node visited up to and
/// including it; otherwise it holds the full exploration from `source`.
#[tracing::instrument(skip(provider), fields(source = %source, target = %target))]
pub fn dfs_find(provider: &dyn GraphProvider, source: &str, target: &str) -> Result<SearchOutcome> {
    let root = provider.require_node(source)?;
    provider.require_node(target)?;
    let (path, found) = iterative(provider, root, Some(target));
    tracing::debug!(found, visited = path.len(), "dfs search complete");
    Ok(SearchOutcome {
        found,
        path: owned(path),
    })
}

/// Recursive depth-first traversal with the default depth limit
pub fn dfs_recursive(provider: &dyn GraphProvider, source: &str) -> Result<Traversal> {
    dfs_recursive_with_limit(provider, source, DEFAULT_MAX_RECURSION_DEPTH)
}

/// Recursive depth-first traversal that nests at most `max_depth` calls
#[tracing::instrument(skip(provider), fields(source = %source))]
pub fn dfs_recursive_with_limit(
    provider: &dyn GraphProvider,
    source: &str,
    max_depth: usize,
) -> Result<Traversal> {
    let start = Instant::now();
    let root = provider.require_node(source)?;
    let (path, _) = recursive(provider, root, None, max_depth)?;
    trace_time!(start, "dfs_recursive", visited = path.len());
    Ok(Traversal {
        root: source.to_string(),
        order: owned(path),
    })
}

/// Recursive counterpart of [`dfs_find`]
#[tracing::instrument(skip(provider), fields(source = %source, target = %target))]
pub fn dfs_find_recursive(
    provider: &dyn GraphProvider,
    source: &str,
    target: &str,
    max_depth: usize,
) -> Result<SearchOutcome> {
    let root = provider.require_node(source)?;
    provider.require_node(target)?;
    let (path, found) = recursive(provider, root, Some(target), max_depth)?;
    tracing::debug!(found, visited = path.len(), "recursive dfs search complete");
    Ok(SearchOutcome {
        found,
        path: owned(path),
    })
}
