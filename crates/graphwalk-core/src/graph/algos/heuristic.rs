use crate::config::HeuristicKind;
use crate::graph::types::Node;

/// Estimate of the remaining cost from a node to the goal.
///
/// A* only guarantees a shortest path when the estimate never exceeds the
/// true remaining cost.
pub trait Heuristic {
    fn estimate(&self, node: &Node, goal: &Node) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(&Node, &Node) -> f64,
{
    fn estimate(&self, node: &Node, goal: &Node) -> f64 {
        self(node, goal)
    }
}

/// Straight-line distance between positions; 0 when either node has none
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Heuristic for Euclidean {
    fn estimate(&self, node: &Node, goal: &Node) -> f64 {
        match (node.position, goal.position) {
            (Some(a), Some(b)) => a.distance_to(&b),
            _ => 0.0,
        }
    }
}

/// Uninformed estimate; A* with it behaves like Dijkstra
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _node: &Node, _goal: &Node) -> f64 {
        0.0
    }
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, node: &Node, goal: &Node) -> f64 {
        match self {
            HeuristicKind::Euclidean => Euclidean.estimate(node, goal),
            HeuristicKind::Zero => Zero.estimate(node, goal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        let a = Node::at("a", 0, 0);
        let b = Node::at("b", 3, 4);
        assert_eq!(Euclidean.estimate(&a, &b), 5.0);
        assert_eq!(Euclidean.estimate(&a, &Node::new("c")), 0.0);
    }

    #[test]
    fn test_kind_dispatch() {
        let a = Node::at("a", 0, 0);
        let b = Node::at("b", 0, 7);
        assert_eq!(HeuristicKind::Euclidean.estimate(&a, &b), 7.0);
        assert_eq!(HeuristicKind::Zero.estimate(&a, &b), 0.0);
    }

    #[test]
    fn test_closure_heuristic() {
        let manhattan = |n: &Node, g: &Node| match (n.position, g.position) {
            (Some(a), Some(b)) => ((a.x - b.x).abs() + (a.y - b.y).abs()) as f64,
            _ => 0.0,
        };
        assert_eq!(manhattan.estimate(&Node::at("a", 1, 1), &Node::at("b", 4, 5)), 7.0);
    }
}
