//! Serialisation for toposynth graphs.
//!
//! Two text formats are supported. The edge list (`.csv`) is write-only and
//! lists every edge in both orientations followed by `n,NONE` markers for
//! isolated nodes. The adjacency matrix (`.mat`) is a square grid of `0`/`1`
//! entries and can be decoded back into a [`Graph`](toposynth_core::Graph).
//!
//! Every file write is all-or-nothing: content is staged in a temporary file
//! beside the destination and renamed into place once complete.

mod atomic;
mod edges;
mod errors;
mod format;
mod matrix;

pub use edges::{encode_edges, write_edges};
pub use errors::{CodecError, MatrixError};
pub use format::{GraphFormat, graph_file_name, write_graph};
pub use matrix::{decode_matrix, encode_matrix, read_matrix, write_matrix};

#[cfg(test)]
mod tests;
