use toposynth_core::{
    BarabasiAlbertParams, CometKiteParams, ErdosRenyiParams, GeometricParams, GraphBuilder,
    GraphError, GraphErrorCode, StarParams, ToroidalLatticeParams, TopologyError,
    TopologyErrorCode, WaxmanParams,
};
use rstest::rstest;

#[rstest]
#[case(GraphError::SelfLoop { node: 2 }, GraphErrorCode::SelfLoop, "GRAPH_SELF_LOOP")]
#[case(
    GraphError::NodeOutOfRange { node: 9, node_count: 3 },
    GraphErrorCode::NodeOutOfRange,
    "GRAPH_NODE_OUT_OF_RANGE",
)]
fn returns_expected_graph_code(
    #[case] error: GraphError,
    #[case] expected: GraphErrorCode,
    #[case] rendered: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), rendered);
    assert_eq!(expected.to_string(), rendered);
}

#[rstest]
#[case(
    TopologyError::InvalidParameter { parameter: "width", reason: "must be > 0".into() },
    TopologyErrorCode::InvalidParameter,
    None,
)]
#[case(
    TopologyError::Graph(GraphError::SelfLoop { node: 0 }),
    TopologyErrorCode::GraphAssembly,
    Some(GraphErrorCode::SelfLoop),
)]
fn returns_expected_topology_code(
    #[case] error: TopologyError,
    #[case] expected: TopologyErrorCode,
    #[case] graph_code: Option<GraphErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.graph_code(), graph_code);
}

#[test]
fn topology_codes_are_stable() {
    assert_eq!(
        TopologyErrorCode::InvalidParameter.as_str(),
        "TOPOLOGY_INVALID_PARAMETER"
    );
    assert_eq!(
        TopologyErrorCode::GraphAssembly.as_str(),
        "TOPOLOGY_GRAPH_ASSEMBLY"
    );
}

#[test]
fn graph_errors_convert_into_topology_errors() {
    let mut builder = GraphBuilder::with_nodes(2);
    let error: TopologyError = builder
        .add_edge(1, 1)
        .expect_err("self-loops are rejected")
        .into();
    assert_eq!(error.code(), TopologyErrorCode::GraphAssembly);
    assert_eq!(
        error.to_string(),
        "self-loop on node 1 is not permitted in a simple graph"
    );
}

fn parameter_of(result: Result<impl std::fmt::Debug, TopologyError>) -> &'static str {
    match result.expect_err("parameters must be rejected") {
        TopologyError::InvalidParameter { parameter, .. } => parameter,
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn invalid_parameters_name_the_offending_field() {
    assert_eq!(parameter_of(ToroidalLatticeParams::new(0, 4)), "width");
    assert_eq!(parameter_of(ToroidalLatticeParams::new(4, 0)), "height");
    assert_eq!(
        parameter_of(CometKiteParams::new(3, 0, 2, 1)),
        "additional_tail_nodes"
    );
    assert_eq!(parameter_of(StarParams::new(usize::MAX)), "nodes");
    assert_eq!(parameter_of(ErdosRenyiParams::new(5, 1.5, 1)), "edge_prob");
    assert_eq!(
        parameter_of(BarabasiAlbertParams::new(5, 5, 1)),
        "edges_per_new_node"
    );
    assert_eq!(parameter_of(WaxmanParams::new(5, 0.0, 0.5, 1)), "alpha");
    assert_eq!(parameter_of(WaxmanParams::new(5, 0.5, -0.1, 1)), "beta");
    assert_eq!(parameter_of(GeometricParams::new(5, -1.0, 2, 1)), "radius");
    assert_eq!(parameter_of(GeometricParams::new(5, 0.3, 0, 1)), "dimension");
}

#[test]
fn invalid_parameter_message_includes_reason() {
    let error = ErdosRenyiParams::new(5, f64::NAN, 1).expect_err("NaN is not a probability");
    let message = error.to_string();
    assert!(message.starts_with("invalid parameter `edge_prob`:"), "{message}");
}
