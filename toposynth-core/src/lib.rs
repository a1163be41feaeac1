//! Toposynth core library.
//!
//! Builds undirected simple graphs for a fixed catalogue of network
//! topologies. Every generator is a pure function of a validated parameter
//! record; stochastic families are reproducible from the seed they carry.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod topology;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result, TopologyError, TopologyErrorCode},
    graph::{Edge, Graph, GraphBuilder},
    topology::*,
};
