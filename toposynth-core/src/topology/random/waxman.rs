//! Waxman distance-decay graphs.

use rand::Rng;
use tracing::instrument;

use crate::{
    error::Result,
    graph::{Graph, GraphBuilder},
    topology::{WaxmanParams, finish},
};

use super::{euclidean_distance, sample_points, seeded_rng};

/// Generates a Waxman graph seeded from [`WaxmanParams::seed`].
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
///
/// # Examples
/// ```
/// use toposynth_core::{WaxmanParams, waxman};
///
/// let graph = waxman(&WaxmanParams::new(10, 0.2, 0.0, 1)?)?;
/// assert_eq!(graph.node_count(), 10);
/// assert_eq!(graph.edge_count(), 0);
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
pub fn waxman(params: &WaxmanParams) -> Result<Graph> {
    waxman_with_rng(params, &mut seeded_rng(params.seed()))
}

/// Generates a Waxman graph drawing placement and trials from `rng`.
///
/// All nodes are placed in the unit square first; then each pair `{i, j}`,
/// in ascending order, is connected with probability
/// `beta * exp(-distance(i, j) / alpha)`.
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
#[instrument(
    name = "topology.waxman",
    skip(params, rng),
    fields(nodes = params.nodes(), alpha = params.alpha(), beta = params.beta()),
)]
pub fn waxman_with_rng<R: Rng + ?Sized>(params: &WaxmanParams, rng: &mut R) -> Result<Graph> {
    let points = sample_points(rng, params.nodes(), 2);
    let mut builder = GraphBuilder::with_nodes(params.nodes());
    for (i, left) in points.iter().enumerate() {
        for (offset, right) in points.iter().skip(i + 1).enumerate() {
            let distance = euclidean_distance(left, right);
            let probability = params.beta() * (-distance / params.alpha()).exp();
            if rng.gen_bool(probability.clamp(0.0, 1.0)) {
                builder.add_edge(i, i + 1 + offset)?;
            }
        }
    }
    Ok(finish(builder))
}
