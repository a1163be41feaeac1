//! Unit tests for the graph model and its builder.

use rstest::rstest;

use super::{Edge, Graph, GraphBuilder};
use crate::error::GraphError;

fn path_graph(nodes: usize) -> Graph {
    let mut builder = GraphBuilder::with_nodes(nodes);
    for node in 1..nodes {
        builder
            .add_edge(node - 1, node)
            .expect("path edges are valid");
    }
    builder.build()
}

#[rstest]
#[case(0, 1, Some((0, 1)))]
#[case(7, 3, Some((3, 7)))]
#[case(4, 4, None)]
fn edge_new_canonicalises_endpoints(
    #[case] a: usize,
    #[case] b: usize,
    #[case] expected: Option<(usize, usize)>,
) {
    let edge = Edge::new(a, b).map(|edge| (edge.low(), edge.high()));
    assert_eq!(edge, expected);
}

#[test]
fn edge_other_returns_opposite_endpoint() {
    let edge = Edge::new(2, 9).expect("distinct endpoints");
    assert_eq!(edge.other(2), Some(9));
    assert_eq!(edge.other(9), Some(2));
    assert_eq!(edge.other(4), None);
}

#[test]
fn builder_absorbs_duplicate_edges_in_either_orientation() {
    let mut builder = GraphBuilder::with_nodes(3);
    assert_eq!(builder.add_edge(0, 2), Ok(true));
    assert_eq!(builder.add_edge(2, 0), Ok(false));
    assert_eq!(builder.add_edge(0, 2), Ok(false));
    assert_eq!(builder.edge_count(), 1);
}

#[test]
fn builder_rejects_self_loops() {
    let mut builder = GraphBuilder::with_nodes(2);
    assert_eq!(builder.add_edge(1, 1), Err(GraphError::SelfLoop { node: 1 }));
}

#[rstest]
#[case(0, 3)]
#[case(3, 0)]
#[case(5, 9)]
fn builder_rejects_unknown_endpoints(#[case] a: usize, #[case] b: usize) {
    let mut builder = GraphBuilder::with_nodes(3);
    let err = builder.add_edge(a, b).expect_err("endpoint is out of range");
    assert!(matches!(
        err,
        GraphError::NodeOutOfRange { node_count: 3, .. }
    ));
}

#[test]
fn add_nodes_returns_contiguous_range() {
    let mut builder = GraphBuilder::new();
    assert_eq!(builder.add_node(), 0);
    assert_eq!(builder.add_nodes(3), 1..4);
    assert_eq!(builder.add_node(), 4);
    assert_eq!(builder.node_count(), 5);
}

#[test]
fn frozen_graph_sorts_edges_and_neighbours() {
    let mut builder = GraphBuilder::with_nodes(4);
    for (a, b) in [(3, 1), (0, 3), (2, 1), (1, 0)] {
        builder.add_edge(a, b).expect("valid edge");
    }
    let graph = builder.build();

    let pairs: Vec<(usize, usize)> = graph
        .edges()
        .iter()
        .map(|edge| (edge.low(), edge.high()))
        .collect();
    assert_eq!(pairs, vec![(0, 1), (0, 3), (1, 2), (1, 3)]);
    assert_eq!(graph.neighbours(1), &[0, 2, 3]);
    assert_eq!(graph.degree(1), 3);
    assert_eq!(graph.degree(2), 1);
}

#[test]
fn isolated_nodes_are_reported_in_order() {
    let mut builder = GraphBuilder::with_nodes(5);
    builder.add_edge(1, 3).expect("valid edge");
    let graph = builder.build();
    let isolated: Vec<usize> = graph.isolated_nodes().collect();
    assert_eq!(isolated, vec![0, 2, 4]);
}

#[rstest]
#[case(0, 0)]
#[case(1, 0)]
#[case(4, 3)]
fn path_graph_has_expected_counts(#[case] nodes: usize, #[case] edges: usize) {
    let graph = path_graph(nodes);
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.edge_count(), edges);
    assert_eq!(graph.nodes(), 0..nodes);
}

#[test]
fn contains_edge_is_symmetric_and_rejects_self_pairs() {
    let graph = path_graph(3);
    assert!(graph.contains_edge(0, 1));
    assert!(graph.contains_edge(1, 0));
    assert!(!graph.contains_edge(0, 2));
    assert!(!graph.contains_edge(1, 1));
}

#[test]
fn unknown_nodes_have_no_neighbours() {
    let graph = path_graph(2);
    assert!(graph.neighbours(10).is_empty());
    assert_eq!(graph.degree(10), 0);
}

#[test]
fn empty_graph_has_no_nodes() {
    let graph = Graph::empty();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph, GraphBuilder::new().build());
}
