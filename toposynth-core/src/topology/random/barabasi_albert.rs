//! Barabási–Albert preferential attachment.

use rand::{Rng, seq::SliceRandom};
use tracing::instrument;

use crate::{
    error::Result,
    graph::{Graph, GraphBuilder},
    topology::{BarabasiAlbertParams, add_clique, finish},
};

use super::seeded_rng;

/// Generates a scale-free graph seeded from [`BarabasiAlbertParams::seed`].
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
///
/// # Examples
/// ```
/// use toposynth_core::{BarabasiAlbertParams, barabasi_albert};
///
/// let graph = barabasi_albert(&BarabasiAlbertParams::new(20, 2, 5)?)?;
/// // One core edge plus two per node after the core.
/// assert_eq!(graph.edge_count(), 1 + 18 * 2);
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
pub fn barabasi_albert(params: &BarabasiAlbertParams) -> Result<Graph> {
    barabasi_albert_with_rng(params, &mut seeded_rng(params.seed()))
}

/// Generates a scale-free graph drawing attachment targets from `rng`.
///
/// Nodes `0..m` form a complete core. Every later node picks `m` distinct
/// existing targets, each with probability proportional to its degree at the
/// moment the node arrives, and then connects to all of them.
///
/// # Errors
/// Only fails if graph assembly rejects an edge, which indicates a bug.
#[instrument(
    name = "topology.barabasi_albert",
    skip(params, rng),
    fields(nodes = params.nodes(), edges_per_new_node = params.edges_per_new_node()),
)]
pub fn barabasi_albert_with_rng<R: Rng + ?Sized>(
    params: &BarabasiAlbertParams,
    rng: &mut R,
) -> Result<Graph> {
    let nodes = params.nodes();
    let per_node = params.edges_per_new_node();
    let mut builder = GraphBuilder::with_nodes(nodes);
    add_clique(&mut builder, 0..per_node)?;
    let mut degrees = vec![per_node - 1; per_node];
    degrees.resize(nodes, 0);
    let mut weights = DegreeTree::new(nodes);
    for (node, &degree) in degrees.iter().enumerate() {
        weights.add(node, degree);
    }

    for new_node in per_node..nodes {
        let mut targets = Vec::with_capacity(per_node);
        while targets.len() < per_node {
            let Some(target) = select_by_degree(rng, &weights, new_node, &targets) else {
                break;
            };
            weights.remove(target, degrees.get(target).copied().unwrap_or(0));
            targets.push(target);
        }
        for &target in &targets {
            builder.add_edge(new_node, target)?;
            if let Some(degree) = degrees.get_mut(target) {
                *degree += 1;
                weights.add(target, *degree);
            }
        }
        if let Some(degree) = degrees.get_mut(new_node) {
            *degree += targets.len();
            weights.add(new_node, *degree);
        }
    }

    Ok(finish(builder))
}

/// Binary indexed tree over node degrees.
///
/// Nodes already picked for the current arrival are removed while it draws
/// its remaining targets, so their weight is zero.
#[derive(Debug)]
struct DegreeTree {
    tree: Vec<usize>,
    total: usize,
}

impl DegreeTree {
    fn new(len: usize) -> Self {
        Self {
            tree: vec![0; len + 1],
            total: 0,
        }
    }

    fn add(&mut self, node: usize, amount: usize) {
        self.total += amount;
        let mut index = node + 1;
        while let Some(slot) = self.tree.get_mut(index) {
            *slot += amount;
            index += index & index.wrapping_neg();
        }
    }

    fn remove(&mut self, node: usize, amount: usize) {
        self.total -= amount;
        let mut index = node + 1;
        while let Some(slot) = self.tree.get_mut(index) {
            *slot -= amount;
            index += index & index.wrapping_neg();
        }
    }

    /// Smallest node whose cumulative weight exceeds `threshold`.
    /// Requires `threshold < self.total`.
    fn locate(&self, threshold: usize) -> usize {
        let len = self.tree.len() - 1;
        let mut position = 0;
        let mut remaining = threshold;
        let mut step = if len == 0 { 0 } else { 1 << len.ilog2() };
        while step > 0 {
            if let Some(&weight) = self.tree.get(position + step)
                && weight <= remaining
            {
                position += step;
                remaining -= weight;
            }
            step >>= 1;
        }
        position
    }
}

/// Picks a node below `candidates` with probability proportional to its
/// weight in `weights`. Falls back to a uniform pick among nodes outside
/// `exclude` when every remaining weight is zero; returns `None` only when
/// nothing remains.
fn select_by_degree<R: Rng + ?Sized>(
    rng: &mut R,
    weights: &DegreeTree,
    candidates: usize,
    exclude: &[usize],
) -> Option<usize> {
    if weights.total == 0 {
        let open: Vec<usize> = (0..candidates)
            .filter(|node| !exclude.contains(node))
            .collect();
        return open.choose(rng).copied();
    }
    Some(weights.locate(rng.gen_range(0..weights.total)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn tree_of(degrees: &[usize], exclude: &[usize]) -> DegreeTree {
        let mut tree = DegreeTree::new(degrees.len());
        for (node, &degree) in degrees.iter().enumerate() {
            if !exclude.contains(&node) {
                tree.add(node, degree);
            }
        }
        tree
    }

    /// Straight scan over every earlier node; the tree must agree draw for draw.
    fn scan_select<R: Rng + ?Sized>(
        rng: &mut R,
        degrees: &[usize],
        candidates: usize,
        exclude: &[usize],
    ) -> Option<usize> {
        let weight = |node: usize| {
            if exclude.contains(&node) {
                0
            } else {
                degrees.get(node).copied().unwrap_or(0)
            }
        };
        let total: usize = (0..candidates).map(weight).sum();
        if total == 0 {
            let open: Vec<usize> = (0..candidates)
                .filter(|node| !exclude.contains(node))
                .collect();
            return open.choose(rng).copied();
        }
        let mut threshold = rng.gen_range(0..total);
        for node in 0..candidates {
            if threshold < weight(node) {
                return Some(node);
            }
            threshold -= weight(node);
        }
        None
    }

    fn scan_barabasi_albert(nodes: usize, per_node: usize, seed: u64) -> Graph {
        let mut rng = seeded_rng(seed);
        let mut builder = GraphBuilder::with_nodes(nodes);
        add_clique(&mut builder, 0..per_node).expect("core is valid");
        let mut degrees = vec![per_node - 1; per_node];
        degrees.resize(nodes, 0);
        for new_node in per_node..nodes {
            let mut targets = Vec::with_capacity(per_node);
            while targets.len() < per_node {
                let Some(target) = scan_select(&mut rng, &degrees, new_node, &targets) else {
                    break;
                };
                targets.push(target);
            }
            for &target in &targets {
                builder.add_edge(new_node, target).expect("edge is valid");
                degrees[target] += 1;
                degrees[new_node] += 1;
            }
        }
        builder.build()
    }

    #[test]
    fn select_by_degree_never_returns_excluded_nodes() {
        let degrees = [3, 1, 4, 1, 5];
        let tree = tree_of(&degrees, &[2, 4]);
        let mut rng = seeded_rng(8);
        for _ in 0..200 {
            let pick = select_by_degree(&mut rng, &tree, degrees.len(), &[2, 4])
                .expect("candidates remain");
            assert!(![2, 4].contains(&pick));
        }
    }

    #[test]
    fn select_by_degree_skips_zero_degree_nodes_when_weights_exist() {
        let degrees = [0, 2, 0];
        let tree = tree_of(&degrees, &[]);
        let mut rng = seeded_rng(1);
        for _ in 0..50 {
            assert_eq!(select_by_degree(&mut rng, &tree, 3, &[]), Some(1));
        }
    }

    #[test]
    fn select_by_degree_falls_back_to_uniform_choice() {
        let tree = tree_of(&[0, 0, 0], &[]);
        let mut rng = seeded_rng(2);
        assert_eq!(select_by_degree(&mut rng, &tree, 3, &[0, 2]), Some(1));
    }

    #[test]
    fn select_by_degree_reports_exhaustion() {
        let tree = tree_of(&[2, 2], &[0, 1]);
        let mut rng = seeded_rng(4);
        assert_eq!(select_by_degree(&mut rng, &tree, 2, &[0, 1]), None);
    }

    #[rstest]
    #[case(&[5], 0, 0)]
    #[case(&[5], 4, 0)]
    #[case(&[1, 0, 2, 3], 0, 0)]
    #[case(&[1, 0, 2, 3], 1, 2)]
    #[case(&[1, 0, 2, 3], 2, 2)]
    #[case(&[1, 0, 2, 3], 3, 3)]
    #[case(&[1, 0, 2, 3], 5, 3)]
    #[case(&[0, 0, 0, 0, 0, 7], 6, 5)]
    fn locate_finds_the_first_node_past_the_threshold(
        #[case] degrees: &[usize],
        #[case] threshold: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(tree_of(degrees, &[]).locate(threshold), expected);
    }

    #[rstest]
    #[case(40, 1, 3)]
    #[case(60, 3, 17)]
    #[case(97, 8, 0)]
    fn tree_selection_matches_a_full_scan(
        #[case] nodes: usize,
        #[case] per_node: usize,
        #[case] seed: u64,
    ) {
        let params = BarabasiAlbertParams::new(nodes, per_node, seed).expect("valid params");
        let graph = barabasi_albert(&params).expect("generation succeeds");
        assert_eq!(graph, scan_barabasi_albert(nodes, per_node, seed));
    }

    #[test]
    fn dense_attachment_at_experiment_scale_completes() {
        let (nodes, per_node) = (1024, 102);
        let params = BarabasiAlbertParams::new(nodes, per_node, 5).expect("valid params");
        let graph = barabasi_albert(&params).expect("generation succeeds");
        assert_eq!(
            graph.edge_count(),
            per_node * (per_node - 1) / 2 + (nodes - per_node) * per_node
        );
    }

    #[test]
    fn single_edge_attachment_builds_a_tree() {
        let params = BarabasiAlbertParams::new(30, 1, 12).expect("valid params");
        let graph = barabasi_albert(&params).expect("generation succeeds");
        assert_eq!(graph.edge_count(), 29);
        assert!(graph.isolated_nodes().next().is_none());
    }
}
