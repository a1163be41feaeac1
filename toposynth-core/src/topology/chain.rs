//! Linear and circular chains.

use tracing::instrument;

use crate::{error::Result, graph::Graph, graph::GraphBuilder};

use super::{ChainParams, finish};

fn path(nodes: usize) -> Result<GraphBuilder> {
    let mut builder = GraphBuilder::with_nodes(nodes);
    for node in 1..nodes {
        builder.add_edge(node - 1, node)?;
    }
    Ok(builder)
}

/// Generates the path `0 - 1 - ... - (nodes - 1)`.
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
///
/// # Examples
/// ```
/// use toposynth_core::{ChainParams, linear_chain};
///
/// let graph = linear_chain(&ChainParams::new(4))?;
/// assert!(graph.contains_edge(2, 3));
/// assert!(!graph.contains_edge(3, 0));
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
#[instrument(name = "topology.linear_chain", skip(params), fields(nodes = params.nodes()))]
pub fn linear_chain(params: &ChainParams) -> Result<Graph> {
    Ok(finish(path(params.nodes())?))
}

/// Generates the path `0 - ... - (nodes - 1)` closed by the edge
/// `{nodes - 1, 0}` when there is more than one node.
///
/// With two nodes the closing edge coincides with the only path edge, so
/// the result equals the linear chain.
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
///
/// # Examples
/// ```
/// use toposynth_core::{ChainParams, circular_chain};
///
/// let graph = circular_chain(&ChainParams::new(4))?;
/// assert!(graph.contains_edge(3, 0));
/// assert_eq!(graph.edge_count(), 4);
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
#[instrument(name = "topology.circular_chain", skip(params), fields(nodes = params.nodes()))]
pub fn circular_chain(params: &ChainParams) -> Result<Graph> {
    let nodes = params.nodes();
    let mut builder = path(nodes)?;
    if nodes > 1 {
        builder.add_edge(nodes - 1, 0)?;
    }
    Ok(finish(builder))
}
