use super::frontier::MinFrontier;
use super::{emit_path_preview, StepOutcome, Strategy};
use crate::engine::EventSink;
use crate::graph::GraphModel;
use crate::state::SearchState;
use crate::types::{NodeId, SearchEvent};

/// A* search
///
/// Identical to Dijkstra except the frontier key is
/// `distance + scale * euclidean(node, end)`; the per-node estimates are
/// computed once at initialization. The path is only guaranteed shortest
/// while the scaled heuristic stays admissible. The default scale of 100
/// deliberately biases the search toward greedy, faster but possibly
/// suboptimal behavior, and callers tune it per weight units.
pub struct AStar {
    start: NodeId,
    end: NodeId,
    scale: f64,
    frontier: MinFrontier,
    nbuf: Vec<(NodeId, f64)>,
}

impl AStar {
    pub fn new(start: NodeId, end: NodeId, scale: f64) -> Self {
        Self {
            start,
            end,
            scale,
            frontier: MinFrontier::new(),
            nbuf: Vec::new(),
        }
    }
}

impl Strategy for AStar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn initialize(&mut self, graph: &dyn GraphModel, state: &mut SearchState) {
        // Precompute every node's scaled straight-line estimate to the goal.
        let goal = graph.position(self.end);
        for i in 0..graph.node_count() {
            let id = NodeId::new(i);
            state.set_heuristic(id, self.scale * graph.position(id).distance_to(goal));
        }
        state.set_distance(self.start, 0.0);
        self.frontier.push(state.heuristic(self.start), self.start);
    }

    fn step(
        &mut self,
        graph: &dyn GraphModel,
        state: &mut SearchState,
        sink: &EventSink,
    ) -> StepOutcome {
        let Some(node) = self.frontier.pop() else {
            return StepOutcome::Exhausted;
        };

        emit_path_preview(state, node, sink);

        if node == self.end {
            return StepOutcome::Found;
        }

        if state.is_visited(node) {
            return StepOutcome::Skipped;
        }

        state.mark_visited(node);
        sink.push(SearchEvent::Visited { node });
        let distance = state.distance(node);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        graph.neighbors(node, &mut nbuf);
        for &(neighbor, weight) in nbuf.iter() {
            if state.is_visited(neighbor) {
                continue;
            }
            let candidate = distance + weight;
            if candidate < state.distance(neighbor) {
                if state.distance(neighbor).is_infinite() {
                    sink.probe(node, neighbor);
                }
                state.set_distance(neighbor, candidate);
                state.set_predecessor(neighbor, node);
                self.frontier
                    .push(candidate + state.heuristic(neighbor), neighbor);
            }
        }
        self.nbuf = nbuf;

        StepOutcome::Expanded
    }
}
