//! Erdős–Rényi `G(n, p)` graphs.

use rand::Rng;
use tracing::instrument;

use crate::{
    error::Result,
    graph::{Graph, GraphBuilder},
    topology::{ErdosRenyiParams, finish},
};

use super::seeded_rng;

/// Generates a `G(n, p)` graph seeded from [`ErdosRenyiParams::seed`].
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
///
/// # Examples
/// ```
/// use toposynth_core::{ErdosRenyiParams, erdos_renyi};
///
/// let empty = erdos_renyi(&ErdosRenyiParams::new(6, 0.0, 3)?)?;
/// assert_eq!(empty.edge_count(), 0);
/// let complete = erdos_renyi(&ErdosRenyiParams::new(6, 1.0, 3)?)?;
/// assert_eq!(complete.edge_count(), 15);
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
pub fn erdos_renyi(params: &ErdosRenyiParams) -> Result<Graph> {
    erdos_renyi_with_rng(params, &mut seeded_rng(params.seed()))
}

/// Generates a `G(n, p)` graph with one Bernoulli trial per pair drawn from
/// `rng`, visiting pairs by ascending `i`, then ascending `j > i`.
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
#[instrument(
    name = "topology.erdos_renyi",
    skip(params, rng),
    fields(nodes = params.nodes(), edge_prob = params.edge_prob()),
)]
pub fn erdos_renyi_with_rng<R: Rng + ?Sized>(
    params: &ErdosRenyiParams,
    rng: &mut R,
) -> Result<Graph> {
    let nodes = params.nodes();
    let mut builder = GraphBuilder::with_nodes(nodes);
    for i in 0..nodes {
        for j in (i + 1)..nodes {
            if rng.gen_bool(params.edge_prob()) {
                builder.add_edge(i, j)?;
            }
        }
    }
    Ok(finish(builder))
}
