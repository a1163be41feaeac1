//! Comet-kite graph: a complete core with tree-shaped tails.
//!
//! Construction follows Möller et al., "Exploring and mapping the universe of
//! evolutionary graphs identifies structural properties affecting fixation
//! probability and time".

use rand::{Rng, seq::SliceRandom};
use tracing::instrument;

use crate::{error::Result, graph::Graph, graph::GraphBuilder};

use super::{CometKiteParams, add_clique, finish, random::seeded_rng};

/// Node the pendant tails hang from.
const TAIL_ROOT: usize = 0;

/// Generates a comet-kite graph seeded from [`CometKiteParams::seed`].
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
///
/// # Examples
/// ```
/// use toposynth_core::{CometKiteParams, comet_kite};
///
/// let params = CometKiteParams::new(4, 2, 3, 11)?;
/// let first = comet_kite(&params)?;
/// let second = comet_kite(&params)?;
/// assert_eq!(first, second);
/// assert_eq!(first.node_count(), 9);
/// assert_eq!(first.edge_count(), 6 + 2 + 3);
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
pub fn comet_kite(params: &CometKiteParams) -> Result<Graph> {
    comet_kite_with_rng(params, &mut seeded_rng(params.seed()))
}

/// Generates a comet-kite graph drawing attachment points from `rng`.
///
/// 1. Build a complete core on `core_size` nodes; stop if it is empty.
/// 2. Attach `num_tails` pendant nodes to node `0`; stop if there are none.
/// 3. For each additional node, pick a tail node uniformly (earlier
///    additions included), attach the new node to it, and make it a tail node.
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
#[instrument(
    name = "topology.comet_kite",
    skip(params, rng),
    fields(
        core_size = params.core_size(),
        num_tails = params.num_tails(),
        additional_tail_nodes = params.additional_tail_nodes(),
    ),
)]
pub fn comet_kite_with_rng<R: Rng + ?Sized>(
    params: &CometKiteParams,
    rng: &mut R,
) -> Result<Graph> {
    let mut builder = GraphBuilder::with_nodes(params.core_size());
    add_clique(&mut builder, 0..params.core_size())?;
    if params.core_size() == 0 {
        return Ok(finish(builder));
    }

    let mut tail_nodes: Vec<usize> = builder.add_nodes(params.num_tails()).collect();
    for &tail in &tail_nodes {
        builder.add_edge(TAIL_ROOT, tail)?;
    }

    for _ in 0..params.additional_tail_nodes() {
        let Some(&attach_point) = tail_nodes.choose(rng) else {
            break;
        };
        let new_node = builder.add_node();
        builder.add_edge(attach_point, new_node)?;
        tail_nodes.push(new_node);
    }

    Ok(finish(builder))
}
