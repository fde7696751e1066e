use super::{StepOutcome, Strategy};
use crate::engine::EventSink;
use crate::graph::GraphModel;
use crate::state::SearchState;
use crate::types::{NodeId, SearchEvent};

/// Greedy nearest-neighbor walk
///
/// No frontier: only a current node. Each step moves to the unvisited
/// neighbor with the smallest direct edge weight (first wins on ties, i.e.
/// the graph's neighbor order). The moment the current node has no unvisited
/// neighbor the walk dead-ends and reports Exhausted, even when the goal is
/// still reachable through a pricier first hop. That limitation is inherent
/// to pure local search and is kept on purpose.
pub struct GreedyNearest {
    end: NodeId,
    current: NodeId,
    nbuf: Vec<(NodeId, f64)>,
}

impl GreedyNearest {
    pub fn new(start: NodeId, end: NodeId) -> Self {
        Self {
            end,
            current: start,
            nbuf: Vec::new(),
        }
    }
}

impl Strategy for GreedyNearest {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn initialize(&mut self, _graph: &dyn GraphModel, state: &mut SearchState) {
        state.set_distance(self.current, 0.0);
    }

    fn step(
        &mut self,
        graph: &dyn GraphModel,
        state: &mut SearchState,
        sink: &EventSink,
    ) -> StepOutcome {
        if self.current == self.end {
            return StepOutcome::Found;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        graph.neighbors(self.current, &mut nbuf);
        let mut best: Option<(NodeId, f64)> = None;
        for &(neighbor, weight) in nbuf.iter() {
            if state.is_visited(neighbor) {
                continue;
            }
            // Strict < keeps the earliest neighbor on ties.
            if best.map_or(true, |(_, w)| weight < w) {
                best = Some((neighbor, weight));
            }
        }
        self.nbuf = nbuf;

        let Some((next, weight)) = best else {
            // Dead end: the walk cannot back out.
            return StepOutcome::Exhausted;
        };

        state.mark_visited(self.current);
        sink.push(SearchEvent::Visited { node: self.current });
        state.set_predecessor(next, self.current);
        state.set_distance(next, state.distance(self.current) + weight);
        sink.push(SearchEvent::PathStep {
            from: self.current,
            to: next,
        });
        self.current = next;

        StepOutcome::Expanded
    }
}
