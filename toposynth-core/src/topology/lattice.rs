//! Toroidal lattice.

use tracing::instrument;

use crate::{error::Result, graph::Graph, graph::GraphBuilder};

use super::{ToroidalLatticeParams, finish};

const fn wrap_back(index: usize, len: usize) -> usize {
    if index == 0 { len - 1 } else { index - 1 }
}

const fn wrap_forward(index: usize, len: usize) -> usize {
    if index + 1 == len { 0 } else { index + 1 }
}

/// Generates a `width x height` grid where node `r * width + c` links to its
/// four neighbours, wrapping around both axes.
///
/// Dimensions of two make the forward and backward neighbour coincide and a
/// dimension of one makes the node its own neighbour; the duplicate pairs are
/// absorbed and the self-pairs skipped, so the result is always simple. For
/// `width, height >= 3` every node has degree four.
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
///
/// # Examples
/// ```
/// use toposynth_core::{ToroidalLatticeParams, toroidal_lattice};
///
/// let graph = toroidal_lattice(&ToroidalLatticeParams::new(4, 3)?)?;
/// assert_eq!(graph.edge_count(), 24);
/// assert!(graph.contains_edge(0, 3));
/// assert!(graph.contains_edge(0, 8));
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
#[instrument(
    name = "topology.toroidal_lattice",
    skip(params),
    fields(width = params.width(), height = params.height()),
)]
pub fn toroidal_lattice(params: &ToroidalLatticeParams) -> Result<Graph> {
    let (width, height) = (params.width(), params.height());
    let mut builder = GraphBuilder::with_nodes(params.node_count());
    let node_id = |row: usize, col: usize| row * width + col;

    for row in 0..height {
        for col in 0..width {
            let current = node_id(row, col);
            let neighbours = [
                node_id(wrap_back(row, height), col),
                node_id(wrap_forward(row, height), col),
                node_id(row, wrap_back(col, width)),
                node_id(row, wrap_forward(col, width)),
            ];
            for neighbour in neighbours {
                if neighbour != current {
                    builder.add_edge(current, neighbour)?;
                }
            }
        }
    }

    Ok(finish(builder))
}
