/// Maze persistence format
///
/// Header line `rows cols cellSize`, then `rows` lines of `cols` digit
/// codes: `0` open, `1` wall, `2` start, `3` end. The engine never sees
/// this format; it only receives the decoded [`GridGraph`] and node ids.
use super::{InputError, InputResult};
use crate::graph::GridGraph;
use crate::types::NodeId;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// A decoded maze file
#[derive(Clone, Debug)]
pub struct MazeFile {
    pub grid: GridGraph,
    pub start: Option<NodeId>,
    pub end: Option<NodeId>,
    /// Cell pixel size, carried through for the rendering collaborator
    pub cell_size: u32,
}

/// Load a `.mz` maze file
pub fn load_maze<P: AsRef<Path>>(path: P) -> InputResult<MazeFile> {
    let file = File::open(path)?;
    parse_maze(file)
}

/// Parse maze content from any reader
pub fn parse_maze<R: Read>(reader: R) -> InputResult<MazeFile> {
    let mut lines = BufReader::new(reader).lines();

    let header = lines.next().unwrap_or(Ok(String::new()))?;
    let fields: Vec<&str> = header.split_whitespace().collect();
    let [rows, cols, cell_size] = fields[..] else {
        return Err(InputError::BadHeader(header));
    };
    let rows: usize = rows
        .parse()
        .map_err(|_| InputError::BadHeader(header.clone()))?;
    let cols: usize = cols
        .parse()
        .map_err(|_| InputError::BadHeader(header.clone()))?;
    let cell_size: u32 = cell_size
        .parse()
        .map_err(|_| InputError::BadHeader(header.clone()))?;

    let mut grid = GridGraph::new(rows, cols);
    let mut start = None;
    let mut end = None;

    for row in 0..rows {
        let line = lines.next().unwrap_or(Ok(String::new()))?;
        let cells: Vec<char> = line.trim_end().chars().collect();
        if cells.len() != cols {
            return Err(InputError::BadRowLength {
                row,
                expected: cols,
                found: cells.len(),
            });
        }
        for (col, code) in cells.into_iter().enumerate() {
            match code {
                '0' => {}
                '1' => grid.set_wall(row, col, true),
                '2' => start = Some(grid.node_id(row, col)),
                '3' => end = Some(grid.node_id(row, col)),
                code => return Err(InputError::BadCellCode { row, code }),
            }
        }
    }

    tracing::debug!(rows, cols, "parsed maze file");

    Ok(MazeFile {
        grid,
        start,
        end,
        cell_size,
    })
}

/// Save a maze to a `.mz` file
pub fn save_maze<P: AsRef<Path>>(
    path: P,
    grid: &GridGraph,
    start: Option<NodeId>,
    end: Option<NodeId>,
    cell_size: u32,
) -> InputResult<()> {
    let file = File::create(path)?;
    write_maze(BufWriter::new(file), grid, start, end, cell_size)
}

/// Write maze content to any writer
pub fn write_maze<W: Write>(
    mut writer: W,
    grid: &GridGraph,
    start: Option<NodeId>,
    end: Option<NodeId>,
    cell_size: u32,
) -> InputResult<()> {
    writeln!(writer, "{} {} {}", grid.rows(), grid.cols(), cell_size)?;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let id = grid.node_id(row, col);
            let code = if start == Some(id) {
                '2'
            } else if end == Some(id) {
                '3'
            } else if grid.is_wall(row, col) {
                '1'
            } else {
                '0'
            };
            write!(writer, "{code}")?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
