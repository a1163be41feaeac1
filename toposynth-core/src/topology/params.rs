//! Typed parameter records for each topology family.
//!
//! Every record validates its inputs on construction, so holding one is proof
//! that the generator it feeds cannot be asked for an impossible graph.

use crate::error::{Result, TopologyError};

fn checked_probability(parameter: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(TopologyError::invalid(
            parameter,
            format!("probability must lie in [0, 1] (got {value})"),
        ))
    }
}

/// Parameters for the complete ("well-mixed") graph.
///
/// # Examples
/// ```
/// use toposynth_core::WellMixedParams;
///
/// assert_eq!(WellMixedParams::new(8).nodes(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WellMixedParams {
    nodes: usize,
}

impl WellMixedParams {
    /// Creates parameters for a complete graph on `nodes` nodes.
    #[must_use]
    pub const fn new(nodes: usize) -> Self {
        Self { nodes }
    }

    /// Number of nodes.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }
}

/// Parameters for a toroidal (wrap-around) 2D lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToroidalLatticeParams {
    width: usize,
    height: usize,
}

impl ToroidalLatticeParams {
    /// Creates lattice parameters.
    ///
    /// # Errors
    /// Returns [`TopologyError::InvalidParameter`] when either dimension is
    /// zero or when `width * height` overflows.
    ///
    /// # Examples
    /// ```
    /// use toposynth_core::ToroidalLatticeParams;
    ///
    /// let params = ToroidalLatticeParams::new(4, 3)?;
    /// assert_eq!(params.node_count(), 12);
    /// assert!(ToroidalLatticeParams::new(0, 3).is_err());
    /// # Ok::<(), toposynth_core::TopologyError>(())
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 {
            return Err(TopologyError::invalid("width", "width must be at least 1"));
        }
        if height == 0 {
            return Err(TopologyError::invalid("height", "height must be at least 1"));
        }
        if width.checked_mul(height).is_none() {
            return Err(TopologyError::invalid(
                "height",
                format!("a {width}x{height} lattice exceeds the addressable node range"),
            ));
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of lattice nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.width * self.height
    }
}

/// Parameters for the comet-kite graph: a complete core with randomly grown
/// tails hanging off node `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CometKiteParams {
    core_size: usize,
    num_tails: usize,
    additional_tail_nodes: usize,
    seed: u64,
}

impl CometKiteParams {
    /// Creates comet-kite parameters.
    ///
    /// # Errors
    /// Returns [`TopologyError::InvalidParameter`] when
    /// `additional_tail_nodes > 0` but `num_tails == 0` (there is no tail to
    /// extend), or when the total node count overflows.
    ///
    /// # Examples
    /// ```
    /// use toposynth_core::CometKiteParams;
    ///
    /// let params = CometKiteParams::new(4, 2, 3, 7)?;
    /// assert_eq!(params.node_count(), 9);
    /// assert!(CometKiteParams::new(4, 0, 3, 7).is_err());
    /// # Ok::<(), toposynth_core::TopologyError>(())
    /// ```
    pub fn new(
        core_size: usize,
        num_tails: usize,
        additional_tail_nodes: usize,
        seed: u64,
    ) -> Result<Self> {
        if additional_tail_nodes > 0 && num_tails == 0 {
            return Err(TopologyError::invalid(
                "additional_tail_nodes",
                format!(
                    "{additional_tail_nodes} additional tail nodes requested but num_tails is 0"
                ),
            ));
        }
        if core_size
            .checked_add(num_tails)
            .and_then(|sum| sum.checked_add(additional_tail_nodes))
            .is_none()
        {
            return Err(TopologyError::invalid(
                "additional_tail_nodes",
                "total node count exceeds the addressable node range",
            ));
        }
        Ok(Self {
            core_size,
            num_tails,
            additional_tail_nodes,
            seed,
        })
    }

    /// Size of the complete core.
    #[must_use]
    pub const fn core_size(&self) -> usize {
        self.core_size
    }

    /// Number of pendant tails attached to the tail root.
    #[must_use]
    pub const fn num_tails(&self) -> usize {
        self.num_tails
    }

    /// Number of nodes grown onto existing tails.
    #[must_use]
    pub const fn additional_tail_nodes(&self) -> usize {
        self.additional_tail_nodes
    }

    /// Seed for tail attachment choices.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Node count of the generated graph. Zero when the core is empty.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        if self.core_size == 0 {
            0
        } else {
            self.core_size + self.num_tails + self.additional_tail_nodes
        }
    }
}

/// Parameters shared by the linear and circular chain families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainParams {
    nodes: usize,
}

impl ChainParams {
    /// Creates chain parameters.
    #[must_use]
    pub const fn new(nodes: usize) -> Self {
        Self { nodes }
    }

    /// Number of nodes along the chain.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }
}

/// Parameters for a star: one hub with `nodes` leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarParams {
    nodes: usize,
}

impl StarParams {
    /// Creates star parameters for `nodes` leaves (plus the hub).
    ///
    /// # Errors
    /// Returns [`TopologyError::InvalidParameter`] when the hub cannot be
    /// added without overflowing the node range.
    pub fn new(nodes: usize) -> Result<Self> {
        if nodes == usize::MAX {
            return Err(TopologyError::invalid(
                "nodes",
                "leaf count leaves no room for the hub node",
            ));
        }
        Ok(Self { nodes })
    }

    /// Number of leaves.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }
}

/// Parameters for the Erdős–Rényi `G(n, p)` model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErdosRenyiParams {
    nodes: usize,
    edge_prob: f64,
    seed: u64,
}

impl ErdosRenyiParams {
    /// Creates Erdős–Rényi parameters.
    ///
    /// # Errors
    /// Returns [`TopologyError::InvalidParameter`] when `edge_prob` lies
    /// outside `[0, 1]` or is not a number.
    ///
    /// # Examples
    /// ```
    /// use toposynth_core::ErdosRenyiParams;
    ///
    /// assert!(ErdosRenyiParams::new(10, 0.25, 1).is_ok());
    /// assert!(ErdosRenyiParams::new(10, 1.5, 1).is_err());
    /// assert!(ErdosRenyiParams::new(10, f64::NAN, 1).is_err());
    /// ```
    pub fn new(nodes: usize, edge_prob: f64, seed: u64) -> Result<Self> {
        Ok(Self {
            nodes,
            edge_prob: checked_probability("edge_prob", edge_prob)?,
            seed,
        })
    }

    /// Number of nodes.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Per-pair edge probability.
    #[must_use]
    pub const fn edge_prob(&self) -> f64 {
        self.edge_prob
    }

    /// Seed for the per-pair trials.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

/// Parameters for Barabási–Albert preferential attachment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarabasiAlbertParams {
    nodes: usize,
    edges_per_new_node: usize,
    seed: u64,
}

impl BarabasiAlbertParams {
    /// Creates preferential-attachment parameters.
    ///
    /// # Errors
    /// Returns [`TopologyError::InvalidParameter`] unless
    /// `1 <= edges_per_new_node < nodes`.
    ///
    /// # Examples
    /// ```
    /// use toposynth_core::BarabasiAlbertParams;
    ///
    /// assert!(BarabasiAlbertParams::new(10, 2, 1).is_ok());
    /// assert!(BarabasiAlbertParams::new(10, 0, 1).is_err());
    /// assert!(BarabasiAlbertParams::new(3, 3, 1).is_err());
    /// ```
    pub fn new(nodes: usize, edges_per_new_node: usize, seed: u64) -> Result<Self> {
        if edges_per_new_node == 0 {
            return Err(TopologyError::invalid(
                "edges_per_new_node",
                "each new node must attach at least one edge",
            ));
        }
        if edges_per_new_node >= nodes {
            return Err(TopologyError::invalid(
                "edges_per_new_node",
                format!("must be smaller than nodes ({edges_per_new_node} >= {nodes})"),
            ));
        }
        Ok(Self {
            nodes,
            edges_per_new_node,
            seed,
        })
    }

    /// Number of nodes.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Edges attached by every node after the initial core.
    #[must_use]
    pub const fn edges_per_new_node(&self) -> usize {
        self.edges_per_new_node
    }

    /// Seed for target selection.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

/// Parameters for the Waxman distance-decay model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaxmanParams {
    nodes: usize,
    alpha: f64,
    beta: f64,
    seed: u64,
}

impl WaxmanParams {
    /// Creates Waxman parameters.
    ///
    /// # Errors
    /// Returns [`TopologyError::InvalidParameter`] when `alpha` is not a
    /// positive finite number or `beta` lies outside `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use toposynth_core::WaxmanParams;
    ///
    /// assert!(WaxmanParams::new(10, 0.2, 0.4, 1).is_ok());
    /// assert!(WaxmanParams::new(10, 0.0, 0.4, 1).is_err());
    /// assert!(WaxmanParams::new(10, 0.2, -0.1, 1).is_err());
    /// ```
    pub fn new(nodes: usize, alpha: f64, beta: f64, seed: u64) -> Result<Self> {
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(TopologyError::invalid(
                "alpha",
                format!("alpha must be a positive finite number (got {alpha})"),
            ));
        }
        Ok(Self {
            nodes,
            alpha,
            beta: checked_probability("beta", beta)?,
            seed,
        })
    }

    /// Number of nodes.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Distance decay scale.
    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Maximum connection probability.
    #[must_use]
    pub const fn beta(&self) -> f64 {
        self.beta
    }

    /// Seed for placement and per-pair trials.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

/// Parameters for the random geometric graph in the unit hypercube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricParams {
    nodes: usize,
    radius: f64,
    dimension: usize,
    seed: u64,
}

impl GeometricParams {
    /// Creates random geometric graph parameters.
    ///
    /// # Errors
    /// Returns [`TopologyError::InvalidParameter`] when `radius` is negative
    /// or not finite, or when `dimension` is zero.
    ///
    /// # Examples
    /// ```
    /// use toposynth_core::GeometricParams;
    ///
    /// assert!(GeometricParams::new(10, 0.3, 2, 1).is_ok());
    /// assert!(GeometricParams::new(10, -0.3, 2, 1).is_err());
    /// assert!(GeometricParams::new(10, 0.3, 0, 1).is_err());
    /// ```
    pub fn new(nodes: usize, radius: f64, dimension: usize, seed: u64) -> Result<Self> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(TopologyError::invalid(
                "radius",
                format!("radius must be a non-negative finite number (got {radius})"),
            ));
        }
        if dimension == 0 {
            return Err(TopologyError::invalid(
                "dimension",
                "dimension must be at least 1",
            ));
        }
        Ok(Self {
            nodes,
            radius,
            dimension,
            seed,
        })
    }

    /// Number of nodes.
    #[must_use]
    pub const fn nodes(&self) -> usize {
        self.nodes
    }

    /// Connection radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Dimension of the unit hypercube.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Seed for node placement.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}
