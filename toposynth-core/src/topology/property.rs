//! Property checks shared by every topology family.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult, TestRunner};

use super::*;
use crate::test_utils::suite_proptest_config;

const CASES: u32 = 64;

fn spec_strategy() -> impl Strategy<Value = TopologySpec> {
    let seed = any::<u64>();
    prop_oneof![
        (0_usize..24).prop_map(|n| TopologySpec::WellMixed(WellMixedParams::new(n))),
        (1_usize..9, 1_usize..9).prop_filter_map("lattice", |(w, h)| {
            ToroidalLatticeParams::new(w, h)
                .ok()
                .map(TopologySpec::ToroidalLattice)
        }),
        (0_usize..8, 1_usize..6, 0_usize..30, seed.clone()).prop_filter_map(
            "comet",
            |(core, tails, extra, seed)| {
                CometKiteParams::new(core, tails, extra, seed)
                    .ok()
                    .map(TopologySpec::CometKite)
            },
        ),
        (0_usize..40).prop_map(|n| TopologySpec::CircularChain(ChainParams::new(n))),
        (0_usize..40).prop_map(|n| TopologySpec::LinearChain(ChainParams::new(n))),
        (0_usize..40).prop_filter_map("star", |n| StarParams::new(n).ok().map(TopologySpec::Star)),
        (0_usize..30, 0.0_f64..=1.0, seed.clone()).prop_filter_map("er", |(n, p, seed)| {
            ErdosRenyiParams::new(n, p, seed)
                .ok()
                .map(TopologySpec::RandomErdosRenyi)
        }),
        (2_usize..40, 1_usize..6, seed.clone()).prop_filter_map("ba", |(n, m, seed)| {
            BarabasiAlbertParams::new(n, m, seed)
                .ok()
                .map(TopologySpec::RandomBarabasiAlbert)
        }),
        (0_usize..30, 0.05_f64..2.0, 0.0_f64..=1.0, seed.clone()).prop_filter_map(
            "waxman",
            |(n, alpha, beta, seed)| {
                WaxmanParams::new(n, alpha, beta, seed)
                    .ok()
                    .map(TopologySpec::RandomWaxman)
            },
        ),
        (0_usize..30, 0.0_f64..1.5, 1_usize..4, seed).prop_filter_map(
            "geometric",
            |(n, radius, dimension, seed)| {
                GeometricParams::new(n, radius, dimension, seed)
                    .ok()
                    .map(TopologySpec::RandomGeometric)
            },
        ),
    ]
}

fn check_simple(graph: &Graph) -> TestCaseResult {
    for pair in graph.edges().windows(2) {
        if pair[0] >= pair[1] {
            return Err(TestCaseError::fail(format!(
                "edges out of order: {:?} then {:?}",
                pair[0], pair[1]
            )));
        }
    }
    for edge in graph.edges() {
        if edge.low() >= edge.high() || edge.high() >= graph.node_count() {
            return Err(TestCaseError::fail(format!(
                "edge {edge:?} invalid for {} nodes",
                graph.node_count()
            )));
        }
    }
    let degree_sum: usize = graph.nodes().map(|node| graph.degree(node)).sum();
    if degree_sum != 2 * graph.edge_count() {
        return Err(TestCaseError::fail(format!(
            "degree sum {degree_sum} != 2 * {}",
            graph.edge_count()
        )));
    }
    Ok(())
}

#[test]
fn every_generated_graph_is_simple_and_reproducible() {
    let mut runner = TestRunner::new(suite_proptest_config(CASES));
    let result = runner.run(&spec_strategy(), |spec| {
        let graph = spec.generate().map_err(|err| TestCaseError::fail(err.to_string()))?;
        check_simple(&graph)?;
        let again = spec.generate().map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(&graph, &again);
        Ok(())
    });
    if let Err(err) = result {
        panic!("{err}");
    }
}

#[test]
fn circular_chain_is_linear_chain_plus_closing_edge() {
    let mut runner = TestRunner::new(suite_proptest_config(CASES));
    let result = runner.run(&(3_usize..200), |nodes| {
        let params = ChainParams::new(nodes);
        let linear = linear_chain(&params).map_err(|err| TestCaseError::fail(err.to_string()))?;
        let circular =
            circular_chain(&params).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(circular.edge_count(), linear.edge_count() + 1);
        prop_assert!(circular.contains_edge(0, nodes - 1));
        prop_assert!(circular.nodes().all(|node| circular.degree(node) == 2));
        Ok(())
    });
    if let Err(err) = result {
        panic!("{err}");
    }
}

#[test]
fn comet_kite_grows_one_edge_per_added_node() {
    let mut runner = TestRunner::new(suite_proptest_config(CASES));
    let strategy = (1_usize..10, 1_usize..6, 0_usize..40, any::<u64>());
    let result = runner.run(&strategy, |(core, tails, extra, seed)| {
        let params = CometKiteParams::new(core, tails, extra, seed)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        let graph = comet_kite(&params).map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(graph.node_count(), core + tails + extra);
        prop_assert_eq!(graph.edge_count(), core * (core - 1) / 2 + tails + extra);
        Ok(())
    });
    if let Err(err) = result {
        panic!("{err}");
    }
}
