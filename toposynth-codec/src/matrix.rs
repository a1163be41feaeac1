//! Adjacency-matrix encoding and decoding.

use std::fs;
use std::path::Path;

use toposynth_core::{Graph, GraphBuilder};
use tracing::{Span, field, instrument};

use crate::{CodecError, MatrixError, atomic::write_atomically};

/// Renders `graph` as a square `0`/`1` adjacency matrix, one newline-terminated
/// row per node. An empty graph renders as an empty string.
///
/// # Examples
/// ```
/// use toposynth_codec::encode_matrix;
/// use toposynth_core::{ChainParams, linear_chain};
///
/// let graph = linear_chain(&ChainParams::new(3))?;
/// assert_eq!(encode_matrix(&graph), "0,1,0\n1,0,1\n0,1,0\n");
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
#[must_use]
pub fn encode_matrix(graph: &Graph) -> String {
    let nodes = graph.node_count();
    let mut out = String::with_capacity(nodes * nodes * 2);
    let mut row = vec!['0'; nodes];
    for node in graph.nodes() {
        row.fill('0');
        for &neighbour in graph.neighbours(node) {
            if let Some(cell) = row.get_mut(neighbour) {
                *cell = '1';
            }
        }
        for (column, cell) in row.iter().enumerate() {
            if column > 0 {
                out.push(',');
            }
            out.push(*cell);
        }
        out.push('\n');
    }
    out
}

/// Parses an adjacency matrix into a graph.
///
/// Surrounding whitespace is ignored and blank content yields the empty
/// graph. Rows may end in `\n` or `\r\n`; entries are trimmed before being
/// parsed as integers and any nonzero entry marks an edge.
///
/// # Errors
/// Returns [`CodecError::MalformedMatrix`] when a row length differs from the
/// row count, an entry is not an integer, a diagonal entry is nonzero, or the
/// matrix is not symmetric.
///
/// # Examples
/// ```
/// use toposynth_codec::{CodecError, MatrixError, decode_matrix};
///
/// let graph = decode_matrix("0,1,0\n1,0,0\n0,0,0\n")?;
/// assert_eq!(graph.node_count(), 3);
/// assert!(graph.contains_edge(0, 1));
///
/// let err = decode_matrix("0,1\n0,0\n").expect_err("asymmetric");
/// assert!(matches!(
///     err,
///     CodecError::MalformedMatrix(MatrixError::Asymmetric { row: 0, column: 1 })
/// ));
/// # Ok::<(), CodecError>(())
/// ```
pub fn decode_matrix(content: &str) -> Result<Graph, CodecError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(Graph::empty());
    }

    let lines: Vec<&str> = trimmed.lines().collect();
    let size = lines.len();
    let mut cells = Vec::with_capacity(size);
    for (row, line) in lines.into_iter().enumerate() {
        let parsed = parse_row(row, line)?;
        if parsed.len() != size {
            return Err(MatrixError::NonSquare {
                row,
                expected: size,
                found: parsed.len(),
            }
            .into());
        }
        cells.push(parsed);
    }

    let is_set = |row: usize, column: usize| {
        cells
            .get(row)
            .and_then(|values| values.get(column))
            .copied()
            .unwrap_or(false)
    };

    let mut builder = GraphBuilder::with_nodes(size);
    for row in 0..size {
        if is_set(row, row) {
            return Err(MatrixError::SelfLoop { node: row }.into());
        }
        for column in (row + 1)..size {
            let forward = is_set(row, column);
            if forward != is_set(column, row) {
                return Err(MatrixError::Asymmetric { row, column }.into());
            }
            if forward {
                builder.add_edge(row, column)?;
            }
        }
    }
    Ok(builder.build())
}

fn parse_row(row: usize, line: &str) -> Result<Vec<bool>, MatrixError> {
    line.split(',')
        .enumerate()
        .map(|(column, raw)| {
            let value = raw.trim();
            value
                .parse::<i64>()
                .map(|entry| entry != 0)
                .map_err(|_| MatrixError::InvalidEntry {
                    row,
                    column,
                    value: value.to_owned(),
                })
        })
        .collect()
}

/// Writes `graph` to `path` as an adjacency matrix.
///
/// # Errors
/// Returns [`CodecError::Io`] when the file cannot be written. No file is
/// created or modified in that case.
#[instrument(
    name = "codec.write_matrix",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn write_matrix(path: &Path, graph: &Graph) -> Result<(), CodecError> {
    write_atomically(path, &encode_matrix(graph))
}

/// Reads and decodes the adjacency matrix stored at `path`.
///
/// # Errors
/// Returns [`CodecError::Io`] when the file cannot be read and
/// [`CodecError::MalformedMatrix`] when its content is not UTF-8 or is
/// otherwise invalid.
#[instrument(
    name = "codec.read_matrix",
    err,
    fields(nodes = field::Empty, edges = field::Empty),
)]
pub fn read_matrix(path: &Path) -> Result<Graph, CodecError> {
    let bytes = fs::read(path).map_err(CodecError::io(path))?;
    let content = String::from_utf8(bytes).map_err(|err| {
        let valid = err.utf8_error().valid_up_to();
        let row = err
            .as_bytes()
            .iter()
            .take(valid)
            .filter(|&&byte| byte == b'\n')
            .count();
        MatrixError::InvalidEncoding { row }
    })?;
    let graph = decode_matrix(&content)?;
    let span = Span::current();
    span.record("nodes", graph.node_count());
    span.record("edges", graph.edge_count());
    Ok(graph)
}
