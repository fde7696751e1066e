/// Tab-separated point files
///
/// Each point record is `label <TAB> x <TAB> y`. Optionally the records are
/// followed by an explicit edge list of `indexA <TAB> indexB` pairs; when an
/// edge list is present every unlisted pair has no edge, otherwise the graph
/// is complete. Blank lines are ignored.
use super::{InputError, InputResult};
use crate::graph::MatrixGraph;
use crate::types::Point;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load a point file into a [`MatrixGraph`]
pub fn load_points<P: AsRef<Path>>(path: P) -> InputResult<MatrixGraph> {
    let file = File::open(path)?;
    parse_points(file)
}

/// Parse point-file content from any reader
pub fn parse_points<R: Read>(reader: R) -> InputResult<MatrixGraph> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut labels: Vec<String> = Vec::new();
    let mut points: Vec<Point> = Vec::new();
    let mut edges: Vec<(usize, usize)> = Vec::new();
    let mut in_edge_list = false;

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        match record.len() {
            3 => {
                if in_edge_list {
                    return Err(InputError::PointAfterEdges { line });
                }
                labels.push(record[0].to_string());
                points.push(Point::new(
                    parse_number(&record[1], line)?,
                    parse_number(&record[2], line)?,
                ));
            }
            2 => {
                in_edge_list = true;
                edges.push((
                    parse_index(&record[0], line)?,
                    parse_index(&record[1], line)?,
                ));
            }
            found => {
                return Err(InputError::FieldCount {
                    line,
                    expected: "3 (point) or 2 (edge)",
                    found,
                });
            }
        }
    }

    tracing::debug!(
        points = points.len(),
        edges = edges.len(),
        explicit_edges = in_edge_list,
        "parsed point file"
    );

    let graph = if in_edge_list {
        MatrixGraph::with_edges(points, &edges)?
    } else {
        MatrixGraph::complete(points)
    };
    Ok(graph.with_labels(labels)?)
}

fn parse_number(value: &str, line: u64) -> InputResult<f64> {
    // Non-finite coordinates would produce NaN or infinite edge weights,
    // which the graphs never carry.
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(InputError::BadNumber {
            line,
            value: value.to_string(),
        }),
    }
}

fn parse_index(value: &str, line: u64) -> InputResult<usize> {
    value.trim().parse().map_err(|_| InputError::BadNumber {
        line,
        value: value.to_string(),
    })
}
