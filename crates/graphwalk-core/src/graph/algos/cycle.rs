//! Cycle detection as a depth-first specialization.
//!
//! Each node is either unvisited, on the active DFS path (`in_path`), or
//! finished. Meeting an `in_path` neighbor is a back-edge and therefore a
//! cycle. A node leaves `in_path` when all of its neighbors are done, so a
//! node reached again through a second branch (a diamond) is not mistaken for
//! an ancestor.
//!
//! The DFS keeps its own frame stack rather than recursing, so deep graphs
//! cannot overflow the thread stack.
//!
//! Cycles are directed: in an undirected graph every edge is stored both
//! ways, so any edge forms a two-node cycle.

use crate::error::Result;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Node;
use std::collections::{HashMap, HashSet};

struct Frame<'g> {
    node: &'g Node,
    neighbors: Vec<&'g Node>,
    next: usize,
}

impl<'g> Frame<'g> {
    fn new(provider: &'g dyn GraphProvider, node: &'g Node) -> Self {
        Frame {
            node,
            neighbors: provider.get_neighbors(node.id()),
            next: 0,
        }
    }
}

/// Run the DFS from `root`, sharing `visited` with earlier runs.
///
/// Returns the first cycle found, starting and ending at the back-edge target.
fn search_from<'g>(
    provider: &'g dyn GraphProvider,
    root: &'g Node,
    visited: &mut HashSet<&'g str>,
) -> Option<Vec<&'g Node>> {
    // Node id -> index of its frame on the stack
    let mut in_path: HashMap<&'g str, usize> = HashMap::new();
    let mut stack = vec![Frame::new(provider, root)];
    visited.insert(root.id());
    in_path.insert(root.id(), 0);

    while let Some(frame) = stack.last_mut() {
        let Some(&neighbor) = frame.neighbors.get(frame.next) else {
            in_path.remove(frame.node.id());
            stack.pop();
            continue;
        };
        frame.next += 1;

        if let Some(&ancestor) = in_path.get(neighbor.id()) {
            let mut cycle: Vec<&Node> = stack[ancestor..].iter().map(|f| f.node).collect();
            cycle.push(neighbor);
            return Some(cycle);
        }

        if visited.insert(neighbor.id()) {
            in_path.insert(neighbor.id(), stack.len());
            stack.push(Frame::new(provider, neighbor));
        }
    }

    None
}

/// First cycle reachable from `source`, as the node sequence around it
#[tracing::instrument(skip(provider), fields(source = %source))]
pub fn find_cycle(provider: &dyn GraphProvider, source: &str) -> Result<Option<Vec<Node>>> {
    let root = provider.require_node(source)?;
    let mut visited = HashSet::new();
    let cycle = search_from(provider, root, &mut visited);
    tracing::debug!(found = cycle.is_some(), explored = visited.len(), "cycle search complete");
    Ok(cycle.map(|nodes| nodes.into_iter().cloned().collect()))
}

/// Whether a cycle is reachable from `source`
pub fn has_cycle(provider: &dyn GraphProvider, source: &str) -> Result<bool> {
    Ok(find_cycle(provider, source)?.is_some())
}

/// First cycle anywhere in the graph, trying every not-yet-visited node as a root
#[tracing::instrument(skip(provider))]
pub fn find_any_cycle(provider: &dyn GraphProvider) -> Option<Vec<Node>> {
    let mut visited: HashSet<&str> = HashSet::new();
    for id in provider.node_ids() {
        if visited.contains(id) {
            continue;
        }
        let Some(root) = provider.get_node(id) else {
            continue;
        };
        if let Some(cycle) = search_from(provider, root, &mut visited) {
            tracing::debug!(root = %id, length = cycle.len(), "cycle found");
            return Some(cycle.into_iter().cloned().collect());
        }
    }
    tracing::debug!(explored = visited.len(), "graph is acyclic");
    None
}

/// Whether the graph contains a cycle in any component
pub fn graph_has_cycle(provider: &dyn GraphProvider) -> bool {
    find_any_cycle(provider).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::builder::GraphBuilder;
    use crate::graph::store::Graph;

    fn directed(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut builder = GraphBuilder::directed();
        for id in nodes {
            builder.add_node(*id, None);
        }
        for (from, to) in edges {
            builder.add_edge(*from, *to, 1.0);
        }
        builder.build().unwrap()
    }

    fn ids(nodes: &[Node]) -> Vec<&str> {
        nodes.iter().map(Node::id).collect()
    }

    #[test]
    fn test_three_cycle_with_isolated_node() {
        let graph = directed(&["0", "1", "2", "3"], &[("0", "1"), ("1", "2"), ("2", "0")]);
        assert!(has_cycle(&graph, "0").unwrap());
        assert!(has_cycle(&graph, "1").unwrap());
        assert!(!has_cycle(&graph, "3").unwrap());
        assert!(graph_has_cycle(&graph));
    }

    #[test]
    fn test_cycle_nodes_reported() {
        let graph = directed(
            &["s", "a", "b", "c"],
            &[("s", "a"), ("a", "b"), ("b", "c"), ("c", "a")],
        );
        let cycle = find_cycle(&graph, "s").unwrap().unwrap();
        assert_eq!(ids(&cycle), vec!["a", "b", "c", "a"]);
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let graph = directed(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        for node in graph.nodes() {
            assert!(!has_cycle(&graph, node.id()).unwrap(), "source {}", node.id());
        }
        assert!(!graph_has_cycle(&graph));
    }

    #[test]
    fn test_shared_descendant_reached_after_backtrack() {
        // D is finished via B before C reaches it again
        let graph = directed(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("B", "D"), ("D", "E"), ("A", "C"), ("C", "D"), ("C", "E")],
        );
        assert!(!has_cycle(&graph, "A").unwrap());
    }

    #[test]
    fn test_self_loop() {
        let graph = directed(&["x"], &[("x", "x")]);
        let cycle = find_cycle(&graph, "x").unwrap().unwrap();
        assert_eq!(ids(&cycle), vec!["x", "x"]);
    }

    #[test]
    fn test_cycle_unreachable_from_source() {
        let graph = directed(
            &["root", "leaf", "p", "q"],
            &[("root", "leaf"), ("p", "q"), ("q", "p")],
        );
        assert!(!has_cycle(&graph, "root").unwrap());
        assert!(has_cycle(&graph, "p").unwrap());
        assert!(graph_has_cycle(&graph));
    }

    #[test]
    fn test_undirected_edge_is_a_cycle() {
        let graph = GraphBuilder::undirected()
            .add_node("a", None)
            .add_node("b", None)
            .add_edge("a", "b", 1.0)
            .build()
            .unwrap();
        assert!(has_cycle(&graph, "a").unwrap());
    }

    #[test]
    fn test_empty_graph_has_no_cycle() {
        let graph = GraphBuilder::directed().build().unwrap();
        assert!(!graph_has_cycle(&graph));
        assert!(find_any_cycle(&graph).is_none());
    }

    #[test]
    fn test_unknown_source() {
        let graph = directed(&["a"], &[]);
        assert!(matches!(
            has_cycle(&graph, "b"),
            Err(GraphError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut builder = GraphBuilder::directed();
        for i in 0..100_000 {
            builder.add_node(i.to_string(), None);
        }
        for i in 1..100_000 {
            builder.add_edge((i - 1).to_string(), i.to_string(), 1.0);
        }
        builder.add_edge("99999", "0", 1.0);
        let graph = builder.build().unwrap();
        let cycle = find_cycle(&graph, "0").unwrap().unwrap();
        assert_eq!(cycle.len(), 100_001);
    }
}
