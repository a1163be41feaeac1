//! Error types for graph encoding and decoding.

use std::{io, path::PathBuf};

use thiserror::Error;
use toposynth_core::GraphError;

/// Ways an adjacency-matrix document can be malformed.
///
/// Rows and columns are zero-based.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MatrixError {
    /// The file content is not valid UTF-8.
    #[error("line {row} is not valid UTF-8")]
    InvalidEncoding {
        /// Line holding the first invalid byte.
        row: usize,
    },
    /// A row's entry count differs from the number of rows.
    #[error("row {row} has {found} entries but the matrix has {expected} rows")]
    NonSquare {
        /// Offending row.
        row: usize,
        /// Number of rows in the matrix.
        expected: usize,
        /// Entries found on the row.
        found: usize,
    },
    /// An entry does not parse as an integer.
    #[error("entry ({row}, {column}) is not an integer: `{value}`")]
    InvalidEntry {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        column: usize,
        /// Trimmed entry text.
        value: String,
    },
    /// A diagonal entry is nonzero.
    #[error("diagonal entry ({node}, {node}) is nonzero")]
    SelfLoop {
        /// Node carrying the loop.
        node: usize,
    },
    /// An entry disagrees with its mirror across the diagonal.
    #[error("entries ({row}, {column}) and ({column}, {row}) disagree")]
    Asymmetric {
        /// Upper-triangle row.
        row: usize,
        /// Upper-triangle column.
        column: usize,
    },
}

/// Errors surfaced by codec reads and writes.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Reading or writing `path` failed.
    #[error("i/o error on `{path}`: {source}")]
    Io {
        /// File that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A matrix document did not describe a simple undirected graph.
    #[error("malformed matrix: {0}")]
    MalformedMatrix(#[from] MatrixError),
    /// Graph assembly rejected a decoded edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CodecError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CODEC_IO",
            Self::MalformedMatrix(_) => "CODEC_MALFORMED_MATRIX",
            Self::Graph(_) => "CODEC_GRAPH_ASSEMBLY",
        }
    }
}
