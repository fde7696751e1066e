use crate::types::NodeId;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Entry in the weighted strategies' priority frontier
///
/// `seq` is a monotonically increasing push counter: entries with equal keys
/// pop in insertion order, which keeps tie-breaks (and therefore the chosen
/// path on equal-weight graphs) deterministic.
#[derive(Debug, Clone, PartialEq)]
struct FrontierEntry {
    key: f64,
    seq: u64,
    node: NodeId,
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for a min-heap; keys are finite non-negative
        // floats so total_cmp gives a plain numeric order.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue over `(key, NodeId)` with lazy deletion
///
/// Duplicate entries for a node are allowed instead of a decrease-key
/// operation; the strategy discards stale pops by checking the visited
/// flag. Equal keys pop in insertion order, so the observable path choice
/// is stable across runs.
#[derive(Debug, Default)]
pub struct MinFrontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl MinFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: f64, node: NodeId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry { key, seq, node });
    }

    /// Pop the node with the smallest key (oldest wins ties)
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_order() {
        let mut q = MinFrontier::new();
        q.push(3.0, NodeId::new(3));
        q.push(1.0, NodeId::new(1));
        q.push(2.0, NodeId::new(2));
        assert_eq!(q.pop(), Some(NodeId::new(1)));
        assert_eq!(q.pop(), Some(NodeId::new(2)));
        assert_eq!(q.pop(), Some(NodeId::new(3)));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn test_equal_keys_pop_in_push_order() {
        let mut q = MinFrontier::new();
        q.push(1.0, NodeId::new(9));
        q.push(1.0, NodeId::new(4));
        q.push(1.0, NodeId::new(7));
        assert_eq!(q.pop(), Some(NodeId::new(9)));
        assert_eq!(q.pop(), Some(NodeId::new(4)));
        assert_eq!(q.pop(), Some(NodeId::new(7)));
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut q = MinFrontier::new();
        q.push(2.0, NodeId::new(0));
        q.push(1.0, NodeId::new(0));
        assert_eq!(q.pop(), Some(NodeId::new(0)));
        assert!(!q.is_empty());
    }
}
