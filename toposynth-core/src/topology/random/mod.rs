//! Stochastic topology families.
//!
//! Every generator here is a function of its parameter record and an explicit
//! random generator. The seeded entry points build a [`TopologyRng`] from the
//! record's seed; ChaCha8 is used because its output stream is fixed across
//! platforms and releases, keeping graphs reproducible from the seed alone.
//! Random draws happen in ascending node order, then ascending pair order
//! (`i` before `j`, `i < j`).

mod barabasi_albert;
mod erdos_renyi;
mod geometric;
mod waxman;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use barabasi_albert::{barabasi_albert, barabasi_albert_with_rng};
pub use erdos_renyi::{erdos_renyi, erdos_renyi_with_rng};
pub use geometric::{random_geometric, random_geometric_with_rng};
pub use waxman::{waxman, waxman_with_rng};

/// Generator used by the seeded topology entry points.
pub type TopologyRng = ChaCha8Rng;

/// Builds the generator the seeded entry points use for `seed`.
///
/// # Examples
/// ```
/// use rand::Rng;
/// use toposynth_core::seeded_rng;
///
/// let a: u64 = seeded_rng(9).gen_range(0..1_000);
/// let b: u64 = seeded_rng(9).gen_range(0..1_000);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn seeded_rng(seed: u64) -> TopologyRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Places `nodes` points uniformly in the unit hypercube of `dimension`
/// axes, drawing every coordinate of node `0` before node `1`.
fn sample_points<R: Rng + ?Sized>(rng: &mut R, nodes: usize, dimension: usize) -> Vec<Vec<f64>> {
    (0..nodes)
        .map(|_| (0..dimension).map(|_| rng.gen_range(0.0..1.0)).collect())
        .collect()
}

fn euclidean_distance(left: &[f64], right: &[f64]) -> f64 {
    left.iter()
        .zip(right)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}
