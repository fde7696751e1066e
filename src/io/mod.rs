/// Input collaborators
///
/// The engine itself only ever sees a built `GraphModel` plus node ids;
/// these helpers own the file formats the two front-ends use:
/// - tab-separated point files with an optional explicit edge list
///   (`points`)
/// - the `.mz` maze persistence format (`maze`)
///
/// Malformed input is rejected as a whole with [`InputError`]; no graph is
/// ever partially accepted.

pub mod maze;
pub mod points;

pub use maze::{load_maze, parse_maze, save_maze, write_maze, MazeFile};
pub use points::{load_points, parse_points};

use thiserror::Error;

/// Malformed graph-construction input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("graph construction error: {0}")]
    Graph(#[from] crate::graph::GraphError),

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: &'static str,
        found: usize,
    },

    #[error("line {line}: invalid number {value:?}")]
    BadNumber { line: u64, value: String },

    #[error("line {line}: point record after the edge list began")]
    PointAfterEdges { line: u64 },

    #[error("invalid maze header {0:?} (expected: rows cols cellSize)")]
    BadHeader(String),

    #[error("maze row {row}: expected {expected} cells, found {found}")]
    BadRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("maze row {row}: invalid cell code {code:?}")]
    BadCellCode { row: usize, code: char },
}

pub type InputResult<T> = Result<T, InputError>;
