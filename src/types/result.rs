use super::NodeId;
use serde::{Deserialize, Serialize};

/// How a search run terminated
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// A route from start to end was found
    Found,
    /// The frontier was exhausted (or greedy dead-ended) before reaching
    /// the end node
    Unreachable,
    /// The run was cancelled by the caller before it could terminate
    Cancelled,
}

/// The terminal outcome of one search run
///
/// `path` is ordered start -> end inclusive and is empty unless
/// `status == Found`. `total_weight` is re-derived from the graph along the
/// path (never taken from cached per-node distances), so summing the edge
/// weights of consecutive `path` entries always reproduces it exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Route from start to end, both inclusive
    pub path: Vec<NodeId>,
    /// Sum of edge weights along `path`
    pub total_weight: f64,
    /// Number of edges in `path`
    pub hop_count: usize,
    /// Number of nodes the strategy expanded (stale frontier pops excluded)
    pub steps_explored: usize,
    /// Terminal status
    pub status: SearchStatus,
}

impl SearchResult {
    /// An empty result with the given status and step count
    pub fn terminal(status: SearchStatus, steps_explored: usize) -> Self {
        Self {
            path: Vec::new(),
            total_weight: 0.0,
            hop_count: 0,
            steps_explored,
            status,
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }
}
