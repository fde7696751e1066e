use super::GraphModel;
use crate::types::{NodeId, Point};

/// A 4-connected grid of cells, each either open or a wall
///
/// Cells map bijectively to node ids (`row * cols + col`). Wall cells keep
/// their id but have no incident edges. Every present edge has weight 1.
/// Neighbors are enumerated up, right, down, left.
#[derive(Clone, Debug)]
pub struct GridGraph {
    rows: usize,
    cols: usize,
    walls: Vec<bool>,
}

impl GridGraph {
    /// Create an open grid with no walls
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            walls: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Id of the cell at `(row, col)`
    pub fn node_id(&self, row: usize, col: usize) -> NodeId {
        debug_assert!(row < self.rows && col < self.cols);
        NodeId::new(row * self.cols + col)
    }

    /// Id of the cell at `(row, col)`, or `None` when the coordinates fall
    /// outside the grid. An out-of-range column must not alias into the
    /// next row, so both axes are checked.
    pub fn try_node_id(&self, row: usize, col: usize) -> Option<NodeId> {
        (row < self.rows && col < self.cols).then(|| NodeId::new(row * self.cols + col))
    }

    /// Cell coordinates `(row, col)` of a node
    pub fn cell(&self, id: NodeId) -> (usize, usize) {
        (id.index() / self.cols, id.index() % self.cols)
    }

    pub fn set_wall(&mut self, row: usize, col: usize, wall: bool) {
        let id = self.node_id(row, col);
        self.walls[id.index()] = wall;
    }

    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.walls[self.node_id(row, col).index()]
    }
}

impl GraphModel for GridGraph {
    fn node_count(&self) -> usize {
        self.rows * self.cols
    }

    fn neighbors(&self, id: NodeId, buf: &mut Vec<(NodeId, f64)>) {
        let (row, col) = self.cell(id);
        if self.walls[id.index()] {
            return;
        }
        // Up, right, down, left. This order decides tie-breaks downstream.
        if row > 0 && !self.is_wall(row - 1, col) {
            buf.push((self.node_id(row - 1, col), 1.0));
        }
        if col + 1 < self.cols && !self.is_wall(row, col + 1) {
            buf.push((self.node_id(row, col + 1), 1.0));
        }
        if row + 1 < self.rows && !self.is_wall(row + 1, col) {
            buf.push((self.node_id(row + 1, col), 1.0));
        }
        if col > 0 && !self.is_wall(row, col - 1) {
            buf.push((self.node_id(row, col - 1), 1.0));
        }
    }

    fn position(&self, id: NodeId) -> Point {
        let (row, col) = self.cell(id);
        Point::new(col as f64, row as f64)
    }
}
