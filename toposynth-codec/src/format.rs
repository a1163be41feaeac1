//! Output format selection and conventional file names.

use std::{fmt, path::Path};

use toposynth_core::{Graph, TopologyKind};

use crate::{CodecError, edges, matrix};

/// Interchange formats a graph can be written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GraphFormat {
    /// Both orientations of every edge plus isolated-node markers.
    EdgeList,
    /// Square `0`/`1` adjacency matrix.
    #[default]
    Matrix,
}

impl GraphFormat {
    /// File extension used for this format, without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::EdgeList => "csv",
            Self::Matrix => "mat",
        }
    }

    /// Renders `graph` in this format.
    #[must_use]
    pub fn encode(self, graph: &Graph) -> String {
        match self {
            Self::EdgeList => edges::encode_edges(graph),
            Self::Matrix => matrix::encode_matrix(graph),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EdgeList => "edges",
            Self::Matrix => "matrix",
        })
    }
}

/// Writes `graph` to `path` in `format`.
///
/// # Errors
/// Returns [`CodecError::Io`] when the file cannot be written.
pub fn write_graph(path: &Path, graph: &Graph, format: GraphFormat) -> Result<(), CodecError> {
    match format {
        GraphFormat::EdgeList => edges::write_edges(path, graph),
        GraphFormat::Matrix => matrix::write_matrix(path, graph),
    }
}

/// Conventional file name `graph-{kind}[_{replicate}].{ext}`.
///
/// The replicate suffix only applies to stochastic kinds, since every
/// replicate of a deterministic kind is the same graph.
///
/// # Examples
/// ```
/// use toposynth_codec::{GraphFormat, graph_file_name};
/// use toposynth_core::TopologyKind;
///
/// assert_eq!(
///     graph_file_name(TopologyKind::CometKite, Some(3), GraphFormat::Matrix),
///     "graph-comet-kite_3.mat",
/// );
/// assert_eq!(
///     graph_file_name(TopologyKind::Star, Some(3), GraphFormat::EdgeList),
///     "graph-star.csv",
/// );
/// ```
#[must_use]
pub fn graph_file_name(kind: TopologyKind, replicate: Option<u32>, format: GraphFormat) -> String {
    let extension = format.extension();
    match replicate.filter(|_| kind.is_stochastic()) {
        Some(replicate) => format!("graph-{kind}_{replicate}.{extension}"),
        None => format!("graph-{kind}.{extension}"),
    }
}
