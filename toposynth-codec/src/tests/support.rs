use proptest::test_runner::Config as ProptestConfig;
use toposynth_core::{Graph, GraphBuilder};
use toposynth_test_support::proptest_profile::ProptestRunProfile;

pub(super) fn graph_from_pairs(nodes: usize, pairs: &[(usize, usize)]) -> Graph {
    let mut builder = GraphBuilder::with_nodes(nodes);
    for &(a, b) in pairs {
        builder.add_edge(a, b).expect("fixture edges are valid");
    }
    builder.build()
}

pub(super) fn proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
