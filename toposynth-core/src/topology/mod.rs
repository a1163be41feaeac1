//! Topology families and the dispatch surface that selects between them.
//!
//! Each family exposes a pure generator taking its typed parameter record.
//! Stochastic families carry an explicit seed and additionally offer a
//! `*_with_rng` variant that threads a caller-owned generator through every
//! choice. [`TopologySpec`] bundles a family with its parameters so callers
//! can dispatch through one exhaustive `match`.

mod chain;
mod comet_kite;
mod lattice;
mod params;
mod random;
mod star;
mod well_mixed;

use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::debug;

use crate::{
    error::{GraphError, Result},
    graph::{Graph, GraphBuilder},
};

pub use chain::{circular_chain, linear_chain};
pub use comet_kite::{comet_kite, comet_kite_with_rng};
pub use lattice::toroidal_lattice;
pub use params::{
    BarabasiAlbertParams, ChainParams, CometKiteParams, ErdosRenyiParams, GeometricParams,
    StarParams, ToroidalLatticeParams, WaxmanParams, WellMixedParams,
};
pub use random::{
    TopologyRng, barabasi_albert, barabasi_albert_with_rng, erdos_renyi, erdos_renyi_with_rng,
    random_geometric, random_geometric_with_rng, seeded_rng, waxman, waxman_with_rng,
};
pub use star::star;
pub use well_mixed::well_mixed;

/// Names every supported topology family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TopologyKind {
    /// Complete graph.
    WellMixed,
    /// 2D lattice with wrap-around on both axes.
    ToroidalLattice,
    /// Complete core with randomly grown tails.
    CometKite,
    /// Closed cycle.
    CircularChain,
    /// Open path.
    LinearChain,
    /// Hub connected to every leaf.
    Star,
    /// Independent per-pair edges.
    RandomErdosRenyi,
    /// Degree-proportional preferential attachment.
    RandomBarabasiAlbert,
    /// Distance-decay connections between random points.
    RandomWaxman,
    /// Radius-threshold connections between random points.
    RandomGeometric,
}

impl TopologyKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::WellMixed,
        Self::ToroidalLattice,
        Self::CometKite,
        Self::CircularChain,
        Self::LinearChain,
        Self::Star,
        Self::RandomErdosRenyi,
        Self::RandomBarabasiAlbert,
        Self::RandomWaxman,
        Self::RandomGeometric,
    ];

    /// Stable kebab-case name used in file names and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WellMixed => "well-mixed",
            Self::ToroidalLattice => "toroidal-lattice",
            Self::CometKite => "comet-kite",
            Self::CircularChain => "circular-chain",
            Self::LinearChain => "linear-chain",
            Self::Star => "star",
            Self::RandomErdosRenyi => "random-erdos-renyi",
            Self::RandomBarabasiAlbert => "random-barabasi-albert",
            Self::RandomWaxman => "random-waxman",
            Self::RandomGeometric => "random-geometric",
        }
    }

    /// Whether generation consumes randomness, so each replicate needs its
    /// own graph.
    ///
    /// # Examples
    /// ```
    /// use toposynth_core::TopologyKind;
    ///
    /// assert!(TopologyKind::CometKite.is_stochastic());
    /// assert!(!TopologyKind::ToroidalLattice.is_stochastic());
    /// ```
    #[must_use]
    pub const fn is_stochastic(self) -> bool {
        matches!(
            self,
            Self::CometKite
                | Self::RandomErdosRenyi
                | Self::RandomBarabasiAlbert
                | Self::RandomWaxman
                | Self::RandomGeometric
        )
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a topology name is not recognised.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unrecognised topology kind `{name}`")]
pub struct UnknownTopologyKind {
    /// The rejected name.
    pub name: String,
}

impl FromStr for TopologyKind {
    type Err = UnknownTopologyKind;

    fn from_str(raw: &str) -> core::result::Result<Self, Self::Err> {
        let needle = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| UnknownTopologyKind {
                name: needle.to_owned(),
            })
    }
}

/// A topology family together with its validated parameters.
///
/// # Examples
/// ```
/// use toposynth_core::{ChainParams, TopologyKind, TopologySpec};
///
/// let spec = TopologySpec::LinearChain(ChainParams::new(4));
/// assert_eq!(spec.kind(), TopologyKind::LinearChain);
/// let graph = spec.generate()?;
/// assert_eq!(graph.edge_count(), 3);
/// # Ok::<(), toposynth_core::TopologyError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TopologySpec {
    /// See [`well_mixed`].
    WellMixed(WellMixedParams),
    /// See [`toroidal_lattice`].
    ToroidalLattice(ToroidalLatticeParams),
    /// See [`comet_kite`].
    CometKite(CometKiteParams),
    /// See [`circular_chain`].
    CircularChain(ChainParams),
    /// See [`linear_chain`].
    LinearChain(ChainParams),
    /// See [`star`].
    Star(StarParams),
    /// See [`erdos_renyi`].
    RandomErdosRenyi(ErdosRenyiParams),
    /// See [`barabasi_albert`].
    RandomBarabasiAlbert(BarabasiAlbertParams),
    /// See [`waxman`].
    RandomWaxman(WaxmanParams),
    /// See [`random_geometric`].
    RandomGeometric(GeometricParams),
}

impl TopologySpec {
    /// The family this specification belongs to.
    #[must_use]
    pub const fn kind(&self) -> TopologyKind {
        match self {
            Self::WellMixed(_) => TopologyKind::WellMixed,
            Self::ToroidalLattice(_) => TopologyKind::ToroidalLattice,
            Self::CometKite(_) => TopologyKind::CometKite,
            Self::CircularChain(_) => TopologyKind::CircularChain,
            Self::LinearChain(_) => TopologyKind::LinearChain,
            Self::Star(_) => TopologyKind::Star,
            Self::RandomErdosRenyi(_) => TopologyKind::RandomErdosRenyi,
            Self::RandomBarabasiAlbert(_) => TopologyKind::RandomBarabasiAlbert,
            Self::RandomWaxman(_) => TopologyKind::RandomWaxman,
            Self::RandomGeometric(_) => TopologyKind::RandomGeometric,
        }
    }

    /// Seed carried by stochastic families; `None` for deterministic ones.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        match self {
            Self::CometKite(params) => Some(params.seed()),
            Self::RandomErdosRenyi(params) => Some(params.seed()),
            Self::RandomBarabasiAlbert(params) => Some(params.seed()),
            Self::RandomWaxman(params) => Some(params.seed()),
            Self::RandomGeometric(params) => Some(params.seed()),
            Self::WellMixed(_)
            | Self::ToroidalLattice(_)
            | Self::CircularChain(_)
            | Self::LinearChain(_)
            | Self::Star(_) => None,
        }
    }

    /// Generates the graph described by this specification.
    ///
    /// # Errors
    /// Propagates [`crate::TopologyError`] from the selected generator.
    pub fn generate(&self) -> Result<Graph> {
        match self {
            Self::WellMixed(params) => well_mixed(params),
            Self::ToroidalLattice(params) => toroidal_lattice(params),
            Self::CometKite(params) => comet_kite(params),
            Self::CircularChain(params) => circular_chain(params),
            Self::LinearChain(params) => linear_chain(params),
            Self::Star(params) => star(params),
            Self::RandomErdosRenyi(params) => erdos_renyi(params),
            Self::RandomBarabasiAlbert(params) => barabasi_albert(params),
            Self::RandomWaxman(params) => waxman(params),
            Self::RandomGeometric(params) => random_geometric(params),
        }
    }
}

/// Connects every pair of nodes in `nodes`.
pub(crate) fn add_clique(
    builder: &mut GraphBuilder,
    nodes: std::ops::Range<usize>,
) -> core::result::Result<(), GraphError> {
    for high in nodes.clone() {
        for low in nodes.start..high {
            builder.add_edge(low, high)?;
        }
    }
    Ok(())
}

/// Freezes `builder` and reports the size of the finished graph.
pub(crate) fn finish(builder: GraphBuilder) -> Graph {
    let graph = builder.build();
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "topology generated"
    );
    graph
}

#[cfg(test)]
mod property;
