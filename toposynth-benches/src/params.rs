//! Benchmark parameter types.

use std::fmt;

use toposynth_core::TopologyKind;

/// Parameters for a generator or codec benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct TopologyBenchParams {
    /// Family under test.
    pub kind: TopologyKind,
    /// Approximate node count.
    pub nodes: usize,
}

impl fmt::Display for TopologyBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={}", self.kind, self.nodes)
    }
}
