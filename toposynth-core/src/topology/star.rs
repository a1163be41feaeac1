//! Star graph.

use tracing::instrument;

use crate::{error::Result, graph::Graph, graph::GraphBuilder};

use super::{StarParams, finish};

/// Generates a hub (node `0`) connected to leaves `1..=nodes`.
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
///
/// # Examples
/// ```
/// use toposynth_core::{StarParams, star};
///
/// let graph = star(&StarParams::new(3)?)?;
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.degree(0), 3);
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
#[instrument(name = "topology.star", skip(params), fields(leaves = params.nodes()))]
pub fn star(params: &StarParams) -> Result<Graph> {
    let mut builder = GraphBuilder::new();
    let hub = builder.add_node();
    for leaf in builder.add_nodes(params.nodes()) {
        builder.add_edge(hub, leaf)?;
    }
    Ok(finish(builder))
}
