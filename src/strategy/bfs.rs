use super::{StepOutcome, Strategy};
use crate::engine::EventSink;
use crate::graph::GraphModel;
use crate::state::SearchState;
use crate::types::{NodeId, SearchEvent};

/// Breadth-first search
///
/// FIFO frontier with claim-on-enqueue: a node is marked visited the moment
/// it is enqueued, so it is enqueued exactly once. Edge weights are ignored
/// for traversal decisions, which makes the found path minimal in hop count
/// by the standard BFS layering argument.
pub struct BreadthFirst {
    start: NodeId,
    end: NodeId,
    queue: std::collections::VecDeque<NodeId>,
    nbuf: Vec<(NodeId, f64)>,
}

impl BreadthFirst {
    pub fn new(start: NodeId, end: NodeId) -> Self {
        Self {
            start,
            end,
            queue: std::collections::VecDeque::new(),
            nbuf: Vec::new(),
        }
    }
}

impl Strategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn initialize(&mut self, _graph: &dyn GraphModel, state: &mut SearchState) {
        state.set_distance(self.start, 0.0);
        state.mark_visited(self.start);
        self.queue.push_back(self.start);
    }

    fn step(
        &mut self,
        graph: &dyn GraphModel,
        state: &mut SearchState,
        sink: &EventSink,
    ) -> StepOutcome {
        let Some(node) = self.queue.pop_front() else {
            return StepOutcome::Exhausted;
        };

        if node == self.end {
            return StepOutcome::Found;
        }

        sink.push(SearchEvent::Visited { node });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        graph.neighbors(node, &mut nbuf);
        for &(neighbor, _) in nbuf.iter() {
            if !state.is_visited(neighbor) {
                state.set_predecessor(neighbor, node);
                // Claim on enqueue.
                state.mark_visited(neighbor);
                sink.probe(node, neighbor);
                self.queue.push_back(neighbor);
            }
        }
        self.nbuf = nbuf;

        StepOutcome::Expanded
    }
}
