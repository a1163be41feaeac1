use rstest::rstest;
use tempfile::TempDir;
use toposynth_core::{Graph, StarParams, star};

use super::support::graph_from_pairs;
use crate::{encode_edges, write_edges};

#[rstest]
#[case::empty(Graph::empty(), "from,to\n")]
#[case::single_isolated(graph_from_pairs(1, &[]), "from,to\n0,NONE\n")]
#[case::one_edge(graph_from_pairs(2, &[(1, 0)]), "from,to\n0,1\n1,0\n")]
#[case::mixed(
    graph_from_pairs(5, &[(3, 1), (0, 1)]),
    "from,to\n0,1\n1,0\n1,3\n3,1\n2,NONE\n4,NONE\n",
)]
fn encode_edges_lists_both_orientations(#[case] graph: Graph, #[case] expected: &str) {
    assert_eq!(encode_edges(&graph), expected);
}

#[test]
fn star_edge_list_is_hub_first() {
    let graph = star(&StarParams::new(2).expect("valid params")).expect("generation succeeds");
    assert_eq!(encode_edges(&graph), "from,to\n0,1\n1,0\n0,2\n2,0\n");
}

#[test]
fn edge_line_count_is_header_plus_twice_edges_plus_isolated() {
    let graph = graph_from_pairs(6, &[(0, 1), (1, 2), (4, 5)]);
    let lines = encode_edges(&graph).lines().count();
    assert_eq!(lines, 1 + 2 * 3 + 1);
}

#[test]
fn write_edges_persists_encoded_text() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("graph-star.csv");
    let graph = graph_from_pairs(3, &[(0, 2)]);
    write_edges(&path, &graph)?;
    assert_eq!(std::fs::read_to_string(&path)?, encode_edges(&graph));
    Ok(())
}
