//! Per-kind topology arguments and their conversion into validated specs.

use clap::{Args, Subcommand};
use toposynth_core::{
    BarabasiAlbertParams, ChainParams, CometKiteParams, ErdosRenyiParams, GeometricParams,
    StarParams, ToroidalLatticeParams, TopologyError, TopologyKind, TopologySpec, WaxmanParams,
    WellMixedParams,
};

/// Topology to generate, one subcommand per family.
#[derive(Debug, Subcommand, Clone)]
pub enum TopologyArgs {
    /// Complete graph.
    WellMixed(NodesArgs),
    /// Grid with wrap-around on both axes.
    ToroidalLattice(LatticeArgs),
    /// Complete core with randomly grown tails.
    CometKite(CometKiteArgs),
    /// Closed cycle.
    CircularChain(NodesArgs),
    /// Open path.
    LinearChain(NodesArgs),
    /// Hub connected to `--nodes` leaves.
    Star(NodesArgs),
    /// Independent per-pair edges.
    RandomErdosRenyi(ErdosRenyiArgs),
    /// Preferential attachment.
    RandomBarabasiAlbert(BarabasiAlbertArgs),
    /// Distance-decay connections between random points.
    RandomWaxman(WaxmanArgs),
    /// Radius-threshold connections between random points.
    RandomGeometric(GeometricArgs),
}

/// Single node-count argument.
#[derive(Debug, Args, Clone)]
pub struct NodesArgs {
    /// Number of nodes (leaves for `star`).
    #[arg(long)]
    pub nodes: usize,
}

/// Lattice dimensions.
#[derive(Debug, Args, Clone)]
pub struct LatticeArgs {
    /// Number of columns.
    #[arg(long)]
    pub width: usize,
    /// Number of rows.
    #[arg(long)]
    pub height: usize,
}

/// Seed shared by the stochastic families.
#[derive(Debug, Args, Clone, Default)]
pub struct SeedArgs {
    /// Random seed; defaults to the replicate id, or 0 without one.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SeedArgs {
    fn resolve(&self, replicate: Option<u32>) -> u64 {
        self.seed
            .or_else(|| replicate.map(u64::from))
            .unwrap_or_default()
    }
}

/// Comet-kite shape.
#[derive(Debug, Args, Clone)]
pub struct CometKiteArgs {
    /// Nodes in the complete core.
    #[arg(long)]
    pub core_size: usize,
    /// Pendant nodes attached to node 0.
    #[arg(long)]
    pub num_tails: usize,
    /// Nodes grown onto random tail nodes.
    #[arg(long, default_value_t = 0)]
    pub additional_tail_nodes: usize,
    #[command(flatten)]
    pub seed: SeedArgs,
}

/// Erdős–Rényi parameters.
#[derive(Debug, Args, Clone)]
pub struct ErdosRenyiArgs {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,
    /// Probability of each possible edge.
    #[arg(long)]
    pub edge_prob: f64,
    #[command(flatten)]
    pub seed: SeedArgs,
}

/// Barabási–Albert parameters.
#[derive(Debug, Args, Clone)]
pub struct BarabasiAlbertArgs {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,
    /// Edges attached from each new node.
    #[arg(long)]
    pub edges_per_new_node: usize,
    #[command(flatten)]
    pub seed: SeedArgs,
}

/// Waxman parameters.
#[derive(Debug, Args, Clone)]
pub struct WaxmanArgs {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,
    /// Distance decay scale.
    #[arg(long, default_value_t = 0.1)]
    pub alpha: f64,
    /// Maximum connection probability.
    #[arg(long, default_value_t = 0.4)]
    pub beta: f64,
    #[command(flatten)]
    pub seed: SeedArgs,
}

/// Random geometric parameters.
#[derive(Debug, Args, Clone)]
pub struct GeometricArgs {
    /// Number of nodes.
    #[arg(long)]
    pub nodes: usize,
    /// Connection radius.
    #[arg(long)]
    pub radius: f64,
    /// Dimension of the unit hypercube.
    #[arg(long, default_value_t = 2)]
    pub dimension: usize,
    #[command(flatten)]
    pub seed: SeedArgs,
}

impl TopologyArgs {
    /// Family selected by these arguments.
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

    /// Validates the arguments into a [`TopologySpec`].
    ///
    /// # Errors
    /// Returns [`TopologyError::InvalidParameter`] when a value is rejected.
    pub fn to_spec(&self, replicate: Option<u32>) -> Result<TopologySpec, TopologyError> {
        Ok(match self {
            Self::WellMixed(args) => TopologySpec::WellMixed(WellMixedParams::new(args.nodes)),
            Self::ToroidalLattice(args) => TopologySpec::ToroidalLattice(
                ToroidalLatticeParams::new(args.width, args.height)?,
            ),
            Self::CometKite(args) => TopologySpec::CometKite(CometKiteParams::new(
                args.core_size,
                args.num_tails,
                args.additional_tail_nodes,
                args.seed.resolve(replicate),
            )?),
            Self::CircularChain(args) => TopologySpec::CircularChain(ChainParams::new(args.nodes)),
            Self::LinearChain(args) => TopologySpec::LinearChain(ChainParams::new(args.nodes)),
            Self::Star(args) => TopologySpec::Star(StarParams::new(args.nodes)?),
            Self::RandomErdosRenyi(args) => TopologySpec::RandomErdosRenyi(ErdosRenyiParams::new(
                args.nodes,
                args.edge_prob,
                args.seed.resolve(replicate),
            )?),
            Self::RandomBarabasiAlbert(args) => {
                TopologySpec::RandomBarabasiAlbert(BarabasiAlbertParams::new(
                    args.nodes,
                    args.edges_per_new_node,
                    args.seed.resolve(replicate),
                )?)
            }
            Self::RandomWaxman(args) => TopologySpec::RandomWaxman(WaxmanParams::new(
                args.nodes,
                args.alpha,
                args.beta,
                args.seed.resolve(replicate),
            )?),
            Self::RandomGeometric(args) => TopologySpec::RandomGeometric(GeometricParams::new(
                args.nodes,
                args.radius,
                args.dimension,
                args.seed.resolve(replicate),
            )?),
        })
    }
}
