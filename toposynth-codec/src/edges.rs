//! Edge-list encoding.

use std::fmt::Write as _;
use std::path::Path;

use toposynth_core::Graph;
use tracing::instrument;

use crate::{CodecError, atomic::write_atomically};

const HEADER: &str = "from,to";
const ISOLATED_MARKER: &str = "NONE";

/// Renders `graph` as an edge list.
///
/// The header `from,to` is followed by both orientations of every edge in
/// ascending canonical order, then one `n,NONE` line per isolated node.
///
/// # Examples
/// ```
/// use toposynth_codec::encode_edges;
/// use toposynth_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::with_nodes(3);
/// builder.add_edge(0, 1)?;
/// let text = encode_edges(&builder.build());
/// assert_eq!(text, "from,to\n0,1\n1,0\n2,NONE\n");
/// # Ok::<(), toposynth_core::GraphError>(())
/// ```
#[must_use]
pub fn encode_edges(graph: &Graph) -> String {
    let mut out = String::with_capacity(8 + graph.edge_count() * 16);
    out.push_str(HEADER);
    out.push('\n');
    for edge in graph.edges() {
        let (low, high) = (edge.low(), edge.high());
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{low},{high}");
        let _ = writeln!(out, "{high},{low}");
    }
    for node in graph.isolated_nodes() {
        let _ = writeln!(out, "{node},{ISOLATED_MARKER}");
    }
    out
}

/// Writes `graph` to `path` as an edge list.
///
/// # Errors
/// Returns [`CodecError::Io`] when the file cannot be written. No file is
/// created or modified in that case.
#[instrument(
    name = "codec.write_edges",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn write_edges(path: &Path, graph: &Graph) -> Result<(), CodecError> {
    write_atomically(path, &encode_edges(graph))
}
