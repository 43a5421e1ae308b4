use crate::error::Result;
use crate::graph::algos::heuristic::{Heuristic, Zero};
use crate::graph::algos::path::reconstruct_path;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Cost, Node, PathResult};
use crate::trace_time;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

/// Frontier entry, ordered by f-score and then by insertion sequence so that
/// equal scores pop first-in first-out
#[derive(Debug, Clone)]
struct FrontierEntry<'g> {
    node: &'g Node,
    f_score: Cost,
    seq: u64,
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry<'_> {}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .total_cmp(&other.f_score)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during one A* search
struct SearchState<'g> {
    frontier: BinaryHeap<Reverse<FrontierEntry<'g>>>,
    came_from: HashMap<&'g str, &'g Node>,
    g_score: HashMap<&'g str, Cost>,
    f_score: HashMap<&'g str, Cost>,
    next_seq: u64,
    expanded: usize,
    stale: usize,
}

impl<'g> SearchState<'g> {
    fn new() -> Self {
        Self {
            frontier: BinaryHeap::new(),
            came_from: HashMap::new(),
            g_score: HashMap::new(),
            f_score: HashMap::new(),
            next_seq: 0,
            expanded: 0,
            stale: 0,
        }
    }

    fn g(&self, id: &str) -> Cost {
        self.g_score.get(id).copied().unwrap_or(Cost::INFINITY)
    }

    fn push(&mut self, node: &'g Node, g_score: Cost, f_score: Cost) {
        self.g_score.insert(node.id(), g_score);
        self.f_score.insert(node.id(), f_score);
        self.frontier.push(Reverse(FrontierEntry {
            node,
            f_score,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    /// An entry is stale once its node was re-queued with a better score
    fn is_stale(&self, entry: &FrontierEntry<'_>) -> bool {
        self.f_score
            .get(entry.node.id())
            .is_some_and(|current| current.total_cmp(&entry.f_score) != Ordering::Equal)
    }
}

/// A* shortest path from `start` to `goal`.
///
/// Returns `Ok(None)` when the goal is unreachable. The returned path is a
/// shortest one whenever `heuristic` never overestimates the remaining cost.
/// Improved nodes are re-queued rather than re-prioritised in place; the
/// outdated copies are skipped when popped. Ties on f-score pop in insertion
/// order.
#[tracing::instrument(skip(provider, heuristic), fields(start = %start, goal = %goal))]
pub fn a_star<H>(
    provider: &dyn GraphProvider,
    start: &str,
    goal: &str,
    heuristic: &H,
) -> Result<Option<PathResult>>
where
    H: Heuristic + ?Sized,
{
    let timer = Instant::now();
    let start_node = provider.require_node(start)?;
    let goal_node = provider.require_node(goal)?;

    let mut state = SearchState::new();
    let h_start = Cost::new(heuristic.estimate(start_node, goal_node));
    state.push(start_node, Cost::ZERO, h_start);

    while let Some(Reverse(entry)) = state.frontier.pop() {
        if state.is_stale(&entry) {
            state.stale += 1;
            continue;
        }

        let current = entry.node;
        if current == goal_node {
            let cost = state.g(current.id());
            let nodes = reconstruct_path(&state.came_from, current);
            trace_time!(timer, "a_star", expanded = state.expanded, stale = state.stale);
            tracing::debug!(
                cost = cost.value(),
                hops = nodes.len().saturating_sub(1),
                "path found"
            );
            return Ok(Some(PathResult {
                from: start.to_string(),
                to: goal.to_string(),
                nodes,
                cost,
            }));
        }

        state.expanded += 1;
        let current_g = state.g(current.id());
        for (neighbor, weight) in provider.get_weighted_neighbors(current.id()) {
            let tentative_g = current_g + weight;
            if tentative_g.value() < state.g(neighbor.id()).value() {
                let f = tentative_g + Cost::new(heuristic.estimate(neighbor, goal_node));
                state.came_from.insert(neighbor.id(), current);
                state.push(neighbor, tentative_g, f);
                tracing::trace!(
                    node = %neighbor.id(),
                    g = tentative_g.value(),
                    f = f.value(),
                    "relaxed"
                );
            }
        }
    }

    trace_time!(timer, "a_star", expanded = state.expanded, stale = state.stale);
    tracing::debug!(expanded = state.expanded, "no path");
    Ok(None)
}

/// Uninformed shortest path; A* with a zero heuristic
pub fn dijkstra(
    provider: &dyn GraphProvider,
    start: &str,
    goal: &str,
) -> Result<Option<PathResult>> {
    a_star(provider, start, goal, &Zero)
}
