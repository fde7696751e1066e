/// Per-run mutable search state
///
/// The graphs themselves stay immutable; everything a strategy mutates lives
/// here, indexed by `NodeId`. One instance belongs to exactly one run and is
/// reset before the run starts.
use crate::types::NodeId;

/// Arena of per-node search fields
///
/// Defaults: not visited, distance +inf, no predecessor, heuristic +inf (the
/// heuristic column is only filled by A*, which stores the already-scaled
/// estimate).
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    visited: Vec<bool>,
    distance: Vec<f64>,
    predecessor: Vec<Option<NodeId>>,
    heuristic: Vec<f64>,
}

impl SearchState {
    pub fn new(node_count: usize) -> Self {
        let mut state = Self::default();
        state.reset(node_count);
        state
    }

    /// Reset every field to its default for a graph of `node_count` nodes
    pub fn reset(&mut self, node_count: usize) {
        self.visited.clear();
        self.visited.resize(node_count, false);
        self.distance.clear();
        self.distance.resize(node_count, f64::INFINITY);
        self.predecessor.clear();
        self.predecessor.resize(node_count, None);
        self.heuristic.clear();
        self.heuristic.resize(node_count, f64::INFINITY);
    }

    pub fn node_count(&self) -> usize {
        self.visited.len()
    }

    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited[id.index()]
    }

    pub fn mark_visited(&mut self, id: NodeId) {
        self.visited[id.index()] = true;
    }

    pub fn distance(&self, id: NodeId) -> f64 {
        self.distance[id.index()]
    }

    pub fn set_distance(&mut self, id: NodeId, distance: f64) {
        self.distance[id.index()] = distance;
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessor[id.index()]
    }

    pub fn set_predecessor(&mut self, id: NodeId, pred: NodeId) {
        self.predecessor[id.index()] = Some(pred);
    }

    pub fn heuristic(&self, id: NodeId) -> f64 {
        self.heuristic[id.index()]
    }

    pub fn set_heuristic(&mut self, id: NodeId, estimate: f64) {
        self.heuristic[id.index()] = estimate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SearchState::new(3);
        let id = NodeId::new(1);
        assert!(!state.is_visited(id));
        assert_eq!(state.distance(id), f64::INFINITY);
        assert_eq!(state.predecessor(id), None);
        assert_eq!(state.heuristic(id), f64::INFINITY);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = SearchState::new(2);
        let id = NodeId::new(0);
        state.mark_visited(id);
        state.set_distance(id, 4.5);
        state.set_predecessor(id, NodeId::new(1));
        state.set_heuristic(id, 2.0);

        state.reset(4);
        assert_eq!(state.node_count(), 4);
        assert!(!state.is_visited(id));
        assert_eq!(state.distance(id), f64::INFINITY);
        assert_eq!(state.predecessor(id), None);
        assert_eq!(state.heuristic(id), f64::INFINITY);
    }
}
