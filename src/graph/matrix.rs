use super::{GraphError, GraphModel, NO_EDGE};
use crate::types::{NodeId, Point};

/// A dense distance matrix over arbitrary labeled 2D points
///
/// The matrix stores one weight per ordered pair; `NO_EDGE` marks absent
/// edges and the diagonal is always `NO_EDGE` (no self-loops). Weights are
/// Euclidean distances between the endpoints' positions. Neighbors are
/// enumerated in increasing index order.
#[derive(Clone, Debug)]
pub struct MatrixGraph {
    points: Vec<Point>,
    labels: Vec<String>,
    // Flat row-major n*n weight matrix.
    matrix: Vec<f64>,
}

impl MatrixGraph {
    /// Build the complete graph: every distinct pair is connected by its
    /// Euclidean distance
    pub fn complete(points: Vec<Point>) -> Self {
        let n = points.len();
        let mut matrix = vec![NO_EDGE; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let dist = points[i].distance_to(points[j]);
                matrix[i * n + j] = dist;
                matrix[j * n + i] = dist;
            }
        }
        Self {
            labels: default_labels(n),
            points,
            matrix,
        }
    }

    /// Build a graph with only the explicitly listed undirected edges; all
    /// unlisted pairs (and the diagonal) are `NO_EDGE`
    pub fn with_edges(points: Vec<Point>, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let n = points.len();
        let mut matrix = vec![NO_EDGE; n * n];
        for &(a, b) in edges {
            if a >= n {
                return Err(GraphError::EdgeIndexOutOfRange { index: a, count: n });
            }
            if b >= n {
                return Err(GraphError::EdgeIndexOutOfRange { index: b, count: n });
            }
            if a == b {
                return Err(GraphError::SelfLoop { a, b });
            }
            let dist = points[a].distance_to(points[b]);
            matrix[a * n + b] = dist;
            matrix[b * n + a] = dist;
        }
        Ok(Self {
            labels: default_labels(n),
            points,
            matrix,
        })
    }

    /// Replace the default index labels
    pub fn with_labels(mut self, labels: Vec<String>) -> Result<Self, GraphError> {
        if labels.len() != self.points.len() {
            return Err(GraphError::LabelCountMismatch {
                labels: labels.len(),
                count: self.points.len(),
            });
        }
        self.labels = labels;
        Ok(self)
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id.index()]
    }

    /// Weight of the ordered pair `(a, b)`; `NO_EDGE` when absent
    pub fn weight(&self, a: NodeId, b: NodeId) -> f64 {
        self.matrix[a.index() * self.points.len() + b.index()]
    }
}

fn default_labels(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

impl GraphModel for MatrixGraph {
    fn node_count(&self) -> usize {
        self.points.len()
    }

    fn neighbors(&self, id: NodeId, buf: &mut Vec<(NodeId, f64)>) {
        let n = self.points.len();
        let row = &self.matrix[id.index() * n..(id.index() + 1) * n];
        for (j, &w) in row.iter().enumerate() {
            if w != NO_EDGE {
                buf.push((NodeId::new(j), w));
            }
        }
    }

    fn position(&self, id: NodeId) -> Point {
        self.points[id.index()]
    }
}
