//! Complete ("well-mixed") graph.

use tracing::instrument;

use crate::{error::Result, graph::Graph, graph::GraphBuilder};

use super::{WellMixedParams, add_clique, finish};

/// Generates the complete graph: an edge between every pair of distinct nodes.
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
///
/// # Examples
/// ```
/// use toposynth_core::{WellMixedParams, well_mixed};
///
/// let graph = well_mixed(&WellMixedParams::new(5))?;
/// assert_eq!(graph.edge_count(), 10);
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
#[instrument(name = "topology.well_mixed", skip(params), fields(nodes = params.nodes()))]
pub fn well_mixed(params: &WellMixedParams) -> Result<Graph> {
    let mut builder = GraphBuilder::with_nodes(params.nodes());
    add_clique(&mut builder, 0..params.nodes())?;
    Ok(finish(builder))
}
