use super::frontier::MinFrontier;
use super::{emit_path_preview, StepOutcome, Strategy};
use crate::engine::EventSink;
use crate::graph::GraphModel;
use crate::state::SearchState;
use crate::types::{NodeId, SearchEvent};

/// Dijkstra's algorithm
///
/// Min-frontier keyed by cumulative distance with lazy deletion: relaxing a
/// node already in the frontier pushes a second entry instead of decreasing
/// its key, and stale entries are discarded when popped (the visited check).
/// With the non-negative weights the graph models guarantee, the found path
/// has minimum total weight.
pub struct Dijkstra {
    start: NodeId,
    end: NodeId,
    frontier: MinFrontier,
    nbuf: Vec<(NodeId, f64)>,
}

impl Dijkstra {
    pub fn new(start: NodeId, end: NodeId) -> Self {
        Self {
            start,
            end,
            frontier: MinFrontier::new(),
            nbuf: Vec::new(),
        }
    }
}

impl Strategy for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn initialize(&mut self, _graph: &dyn GraphModel, state: &mut SearchState) {
        state.set_distance(self.start, 0.0);
        self.frontier.push(0.0, self.start);
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

        // Live preview of the path under consideration, emitted for every
        // pop exactly as the front-ends redraw it.
        emit_path_preview(state, node, sink);

        if node == self.end {
            return StepOutcome::Found;
        }

        // Lazy deletion: a duplicate entry for an already-finalized node.
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
                // First relaxation of this node: its tentative distance is
                // still the "never reached" default.
                if state.distance(neighbor).is_infinite() {
                    sink.probe(node, neighbor);
                }
                state.set_distance(neighbor, candidate);
                state.set_predecessor(neighbor, node);
                self.frontier.push(candidate, neighbor);
            }
        }
        self.nbuf = nbuf;

        StepOutcome::Expanded
    }
}
