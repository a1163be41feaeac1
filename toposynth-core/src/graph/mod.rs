//! Frozen undirected simple graph model.
//!
//! A [`Graph`] is produced once by a [`GraphBuilder`] and never mutated
//! afterwards. Nodes are the dense range `0..node_count`; edges are stored
//! canonically (`low < high`) in ascending order, alongside sorted neighbour
//! lists derived when the builder is frozen.

mod builder;

use std::ops::Range;

pub use builder::GraphBuilder;

/// An unordered pair of distinct nodes, stored with the lower id first.
///
/// # Examples
/// ```
/// use toposynth_core::Edge;
///
/// let edge = Edge::new(5, 2).expect("distinct endpoints");
/// assert_eq!((edge.low(), edge.high()), (2, 5));
/// assert!(Edge::new(3, 3).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    low: usize,
    high: usize,
}

impl Edge {
    /// Builds the canonical form of `{a, b}`, or `None` when `a == b`.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    pub fn low(&self) -> usize {
        self.low
    }

    /// Returns the larger endpoint.
    #[must_use]
    pub fn high(&self) -> usize {
        self.high
    }

    /// Returns the endpoint opposite `node`, if `node` lies on this edge.
    #[must_use]
    pub fn other(&self, node: usize) -> Option<usize> {
        if node == self.low {
            Some(self.high)
        } else if node == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

/// Undirected simple graph over the node range `0..node_count`.
///
/// # Examples
/// ```
/// use toposynth_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::with_nodes(3);
/// builder.add_edge(0, 1)?;
/// builder.add_edge(2, 1)?;
/// let graph = builder.build();
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert!(graph.contains_edge(1, 2));
/// assert_eq!(graph.neighbours(1), &[0, 2]);
/// # Ok::<(), toposynth_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    node_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Freezes sorted, deduplicated edges into a graph. Callers guarantee
    /// every endpoint is below `node_count`.
    pub(crate) fn from_sorted_edges(node_count: usize, edges: Vec<Edge>) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for edge in &edges {
            if let Some(list) = adjacency.get_mut(edge.low) {
                list.push(edge.high);
            }
            if let Some(list) = adjacency.get_mut(edge.high) {
                list.push(edge.low);
            }
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }
        Self {
            node_count,
            edges,
            adjacency,
        }
    }

    /// Returns the empty graph (no nodes, no edges).
    #[must_use]
    pub fn empty() -> Self {
        Self::from_sorted_edges(0, Vec::new())
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Node identifiers in ascending order.
    #[must_use]
    pub fn nodes(&self) -> Range<usize> {
        0..self.node_count
    }

    /// Canonical edges in ascending `(low, high)` order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns whether `{a, b}` is an edge. Always `false` when `a == b`.
    #[must_use]
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        Edge::new(a, b).is_some_and(|edge| self.edges.binary_search(&edge).is_ok())
    }

    /// Sorted neighbours of `node`; empty for unknown nodes.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Degree of `node`; zero for unknown nodes.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.neighbours(node).len()
    }

    /// Nodes without incident edges, in ascending order.
    pub fn isolated_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, list)| list.is_empty())
            .map(|(node, _)| node)
    }
}

#[cfg(test)]
mod tests;
