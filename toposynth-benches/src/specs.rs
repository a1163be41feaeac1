//! Representative topology parameters keyed by target size.

use toposynth_core::{
    BarabasiAlbertParams, ChainParams, CometKiteParams, ErdosRenyiParams, GeometricParams,
    StarParams, ToroidalLatticeParams, TopologyError, TopologyKind, TopologySpec, WaxmanParams,
    WellMixedParams,
};

/// Seed shared by every stochastic benchmark.
pub const SEED: u64 = 42;

/// Edges each Barabási–Albert node attaches with.
const BA_EDGES_PER_NODE: usize = 3;

/// Largest `side` with `side * side <= nodes`, at least 1.
fn lattice_side(nodes: usize) -> usize {
    let mut side = 1;
    while (side + 1) * (side + 1) <= nodes {
        side += 1;
    }
    side
}

/// Builds a specification of `kind` with roughly `nodes` nodes.
///
/// # Errors
/// Returns [`TopologyError`] when `nodes` is too small for the family, e.g.
/// Barabási–Albert needs more than three nodes.
///
/// # Examples
/// ```
/// use toposynth_benches::specs::spec_for;
/// use toposynth_core::TopologyKind;
///
/// let spec = spec_for(TopologyKind::ToroidalLattice, 100)?;
/// assert_eq!(spec.generate()?.node_count(), 100);
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
pub fn spec_for(kind: TopologyKind, nodes: usize) -> Result<TopologySpec, TopologyError> {
    Ok(match kind {
        TopologyKind::WellMixed => TopologySpec::WellMixed(WellMixedParams::new(nodes)),
        TopologyKind::ToroidalLattice => {
            let side = lattice_side(nodes);
            TopologySpec::ToroidalLattice(ToroidalLatticeParams::new(side, side)?)
        }
        TopologyKind::CometKite => {
            let core = (nodes / 4).max(1);
            let tails = (nodes / 8).max(1);
            let additional = nodes.saturating_sub(core + tails);
            TopologySpec::CometKite(CometKiteParams::new(core, tails, additional, SEED)?)
        }
        TopologyKind::CircularChain => TopologySpec::CircularChain(ChainParams::new(nodes)),
        TopologyKind::LinearChain => TopologySpec::LinearChain(ChainParams::new(nodes)),
        TopologyKind::Star => TopologySpec::Star(StarParams::new(nodes.saturating_sub(1))?),
        TopologyKind::RandomErdosRenyi => {
            TopologySpec::RandomErdosRenyi(ErdosRenyiParams::new(nodes, 0.05, SEED)?)
        }
        TopologyKind::RandomBarabasiAlbert => TopologySpec::RandomBarabasiAlbert(
            BarabasiAlbertParams::new(nodes, BA_EDGES_PER_NODE, SEED)?,
        ),
        TopologyKind::RandomWaxman => {
            TopologySpec::RandomWaxman(WaxmanParams::new(nodes, 0.1, 0.4, SEED)?)
        }
        TopologyKind::RandomGeometric => {
            TopologySpec::RandomGeometric(GeometricParams::new(nodes, 0.1, 2, SEED)?)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(3, 1)]
    #[case(4, 2)]
    #[case(99, 9)]
    #[case(100, 10)]
    fn lattice_side_is_floor_sqrt(#[case] nodes: usize, #[case] expected: usize) {
        assert_eq!(lattice_side(nodes), expected);
    }

    #[test]
    fn every_kind_builds_near_the_target_size() {
        for kind in TopologyKind::ALL {
            let spec = spec_for(kind, 64).expect("64 nodes suit every family");
            assert_eq!(spec.kind(), kind);
            let graph = spec.generate().expect("generation succeeds");
            assert_eq!(graph.node_count(), 64, "{kind}");
        }
    }

    #[test]
    fn tiny_sizes_are_rejected_for_preferential_attachment() {
        assert!(spec_for(TopologyKind::RandomBarabasiAlbert, 3).is_err());
    }
}
