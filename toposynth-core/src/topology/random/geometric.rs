//! Random geometric graphs.

use rand::Rng;
use tracing::instrument;

use crate::{
    error::Result,
    graph::{Graph, GraphBuilder},
    topology::{GeometricParams, finish},
};

use super::{euclidean_distance, sample_points, seeded_rng};

/// Generates a random geometric graph seeded from [`GeometricParams::seed`].
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
///
/// # Examples
/// ```
/// use toposynth_core::{GeometricParams, random_geometric};
///
/// // A radius covering the unit square's diagonal connects everything.
/// let graph = random_geometric(&GeometricParams::new(6, 1.5, 2, 4)?)?;
/// assert_eq!(graph.edge_count(), 15);
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
pub fn random_geometric(params: &GeometricParams) -> Result<Graph> {
    random_geometric_with_rng(params, &mut seeded_rng(params.seed()))
}

/// Places nodes uniformly in the unit hypercube using `rng` and connects every
/// pair whose Euclidean distance is at most the radius.
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
#[instrument(
    name = "topology.random_geometric",
    skip(params, rng),
    fields(nodes = params.nodes(), radius = params.radius(), dimension = params.dimension()),
)]
pub fn random_geometric_with_rng<R: Rng + ?Sized>(
    params: &GeometricParams,
    rng: &mut R,
) -> Result<Graph> {
    let points = sample_points(rng, params.nodes(), params.dimension());
    let mut builder = GraphBuilder::with_nodes(params.nodes());
    for (i, left) in points.iter().enumerate() {
        for (offset, right) in points.iter().skip(i + 1).enumerate() {
            if euclidean_distance(left, right) <= params.radius() {
                builder.add_edge(i, i + 1 + offset)?;
            }
        }
    }
    Ok(finish(builder))
}
