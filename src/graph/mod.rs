/// Graph models
///
/// The engine consumes graphs through the read-only [`GraphModel`]
/// abstraction. Two concrete shapes are provided:
/// - [`GridGraph`]: a 4-connected grid with blockable cells, unit weights
/// - [`MatrixGraph`]: a dense distance matrix over arbitrary 2D points
///
/// Edge absence is represented by the [`NO_EDGE`] sentinel weight inside
/// `MatrixGraph`; `neighbors` never yields it.

pub mod grid;
pub mod matrix;

pub use grid::GridGraph;
pub use matrix::MatrixGraph;

use crate::types::{NodeId, Point};
use thiserror::Error;

/// Sentinel weight marking the absence of an edge
pub const NO_EDGE: f64 = f64::INFINITY;

/// Graph construction errors
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("edge {a}-{b} is a self loop")]
    SelfLoop { a: usize, b: usize },

    #[error("edge index {index} out of range for {count} nodes")]
    EdgeIndexOutOfRange { index: usize, count: usize },

    #[error("{labels} labels supplied for {count} nodes")]
    LabelCountMismatch { labels: usize, count: usize },
}

/// Read-only adjacency abstraction the strategies traverse
///
/// Implementations must be deterministic: `neighbors` returns the same
/// sequence, in the same stable order, for the same id every time. That
/// order decides tie-breaks in every strategy. The
/// grid enumerates up, right, down, left; the matrix enumerates by
/// increasing index. No self-loops, no negative weights, and the `NO_EDGE`
/// sentinel is never yielded.
pub trait GraphModel {
    /// Number of nodes; fixed after construction
    fn node_count(&self) -> usize;

    /// Append `(neighbor, weight)` pairs of `id` to `buf` in the graph's
    /// stable neighbor order. The caller clears `buf` beforehand.
    fn neighbors(&self, id: NodeId, buf: &mut Vec<(NodeId, f64)>);

    /// Position of a node, used for straight-line heuristic estimates
    fn position(&self, id: NodeId) -> Point;
}

/// Look up the weight of the direct edge `from -> to`, if present
///
/// Path reconstruction uses this to re-derive weights from the graph as
/// queried instead of trusting cached distances.
pub fn edge_weight(graph: &dyn GraphModel, from: NodeId, to: NodeId) -> Option<f64> {
    let mut buf = Vec::new();
    graph.neighbors(from, &mut buf);
    buf.into_iter()
        .find(|(n, _)| *n == to)
        .map(|(_, w)| w)
}
