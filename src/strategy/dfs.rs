use super::{StepOutcome, Strategy};
use crate::engine::EventSink;
use crate::graph::GraphModel;
use crate::state::SearchState;
use crate::types::{NodeId, SearchEvent};

/// Depth-first search
///
/// Stack frontier; exploration is last-pushed-first, so the path shape is
/// determined entirely by the graph's neighbor order. A neighbor is claimed
/// at push time by assigning its predecessor, which guarantees it can never
/// be pushed twice. Produces *a* path, not necessarily a shortest one.
pub struct DepthFirst {
    start: NodeId,
    end: NodeId,
    stack: Vec<NodeId>,
    nbuf: Vec<(NodeId, f64)>,
}

impl DepthFirst {
    pub fn new(start: NodeId, end: NodeId) -> Self {
        Self {
            start,
            end,
            stack: Vec::new(),
            nbuf: Vec::new(),
        }
    }
}

impl Strategy for DepthFirst {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn initialize(&mut self, _graph: &dyn GraphModel, state: &mut SearchState) {
        state.set_distance(self.start, 0.0);
        self.stack.push(self.start);
    }

    fn step(
        &mut self,
        graph: &dyn GraphModel,
        state: &mut SearchState,
        sink: &EventSink,
    ) -> StepOutcome {
        let Some(node) = self.stack.pop() else {
            return StepOutcome::Exhausted;
        };

        if node == self.end {
            return StepOutcome::Found;
        }

        state.mark_visited(node);
        sink.push(SearchEvent::Visited { node });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        graph.neighbors(node, &mut nbuf);
        for &(neighbor, _) in nbuf.iter() {
            // Claim on push: an unvisited node with a predecessor is already
            // on the stack.
            if !state.is_visited(neighbor) && state.predecessor(neighbor).is_none() {
                state.set_predecessor(neighbor, node);
                sink.probe(node, neighbor);
                self.stack.push(neighbor);
            }
        }
        self.nbuf = nbuf;

        StepOutcome::Expanded
    }
}
