//! Local mutable accumulator used to assemble a [`Graph`].

use std::collections::BTreeSet;

use crate::error::GraphError;

use super::{Edge, Graph};

/// Accumulates nodes and edges, then freezes them into a [`Graph`].
///
/// Duplicate edges are absorbed regardless of orientation, so generators may
/// emit the same pair more than once.
///
/// # Examples
/// ```
/// use toposynth_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_node();
/// let b = builder.add_node();
/// assert!(builder.add_edge(a, b)?);
/// assert!(!builder.add_edge(b, a)?);
/// assert_eq!(builder.build().edge_count(), 1);
/// # Ok::<(), toposynth_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    node_count: usize,
    edges: BTreeSet<Edge>,
}

impl GraphBuilder {
    /// Creates a builder with no nodes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated with nodes `0..node_count`.
    #[must_use]
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            node_count,
            edges: BTreeSet::new(),
        }
    }

    /// Number of nodes added so far.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of distinct edges added so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Appends one node and returns its id.
    pub fn add_node(&mut self) -> usize {
        let node = self.node_count;
        self.node_count += 1;
        node
    }

    /// Appends `count` nodes and returns their id range.
    pub fn add_nodes(&mut self, count: usize) -> std::ops::Range<usize> {
        let start = self.node_count;
        self.node_count += count;
        start..self.node_count
    }

    /// Adds the undirected edge `{a, b}`.
    ///
    /// Returns `true` when the edge is new and `false` when it was already
    /// present in either orientation.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when `a == b` and
    /// [`GraphError::NodeOutOfRange`] when either endpoint has not been added.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<bool, GraphError> {
        for node in [a, b] {
            if node >= self.node_count {
                return Err(GraphError::NodeOutOfRange {
                    node,
                    node_count: self.node_count,
                });
            }
        }
        let edge = Edge::new(a, b).ok_or(GraphError::SelfLoop { node: a })?;
        Ok(self.edges.insert(edge))
    }

    /// Freezes the accumulated state into an immutable [`Graph`].
    #[must_use]
    pub fn build(self) -> Graph {
        Graph::from_sorted_edges(self.node_count, self.edges.into_iter().collect())
    }
}
