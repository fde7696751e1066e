/// Traversal strategies
///
/// Each strategy implements a single unit-of-work step function: pop one
/// node from its frontier (or make one greedy move), relax its neighbors
/// and push the next candidates, then report whether the search terminated.
/// The engine drives the step loop, which is what allows the same
/// implementation to run to completion instantly or be animated one step
/// at a time.

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod frontier;
pub mod greedy;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use greedy::GreedyNearest;

use crate::engine::{EventSink, SearchConfig};
use crate::graph::GraphModel;
use crate::state::SearchState;
use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which traversal algorithm to run
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    DepthFirst,
    BreadthFirst,
    Greedy,
    Dijkstra,
    AStar,
}

impl StrategyKind {
    /// Every strategy, in a fixed presentation order
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::DepthFirst,
        StrategyKind::BreadthFirst,
        StrategyKind::Greedy,
        StrategyKind::Dijkstra,
        StrategyKind::AStar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::DepthFirst => "dfs",
            StrategyKind::BreadthFirst => "bfs",
            StrategyKind::Greedy => "greedy",
            StrategyKind::Dijkstra => "dijkstra",
            StrategyKind::AStar => "astar",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dfs" => Ok(StrategyKind::DepthFirst),
            "bfs" => Ok(StrategyKind::BreadthFirst),
            "greedy" => Ok(StrategyKind::Greedy),
            "dijkstra" => Ok(StrategyKind::Dijkstra),
            "astar" | "a*" => Ok(StrategyKind::AStar),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}

/// What one step of a strategy accomplished
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// A node was expanded (or greedy moved); the search continues
    Expanded,
    /// A stale frontier entry was discarded (lazy deletion); not counted
    /// as an expansion
    Skipped,
    /// The goal node was reached
    Found,
    /// The frontier is exhausted (or greedy dead-ended) without reaching
    /// the goal
    Exhausted,
}

/// One traversal algorithm, driven step by step by the engine
///
/// `initialize` seeds the frontier and any precomputed state (A* fills the
/// heuristic column here); `step` performs exactly one unit of work.
/// Strategies own their frontier; everything per-node lives in
/// [`SearchState`], and no field of a node is mutated after that node is
/// marked visited.
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn initialize(&mut self, graph: &dyn GraphModel, state: &mut SearchState);

    fn step(
        &mut self,
        graph: &dyn GraphModel,
        state: &mut SearchState,
        sink: &EventSink,
    ) -> StepOutcome;
}

/// Construct the strategy for `kind` over a `start` -> `end` search
pub fn build(
    kind: StrategyKind,
    start: NodeId,
    end: NodeId,
    config: &SearchConfig,
) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::DepthFirst => Box::new(DepthFirst::new(start, end)),
        StrategyKind::BreadthFirst => Box::new(BreadthFirst::new(start, end)),
        StrategyKind::Greedy => Box::new(GreedyNearest::new(start, end)),
        StrategyKind::Dijkstra => Box::new(Dijkstra::new(start, end)),
        StrategyKind::AStar => Box::new(AStar::new(start, end, config.heuristic_scale)),
    }
}

/// Emit the path-under-consideration preview for `node` by walking its
/// predecessor chain. The weighted strategies re-emit this on every pop,
/// mirroring the live path redraw of the visual front-ends.
pub(crate) fn emit_path_preview(state: &SearchState, node: NodeId, sink: &EventSink) {
    let mut current = node;
    let mut remaining = state.node_count();
    while let Some(prev) = state.predecessor(current) {
        sink.push(crate::types::SearchEvent::PathStep {
            from: prev,
            to: current,
        });
        current = prev;
        // Guard against a corrupted predecessor cycle.
        remaining -= 1;
        if remaining == 0 {
            break;
        }
    }
}
