//! Command-line interface orchestration for toposynth.
//!
//! `generate` builds one topology and writes it as an adjacency matrix or an
//! edge list; `inspect` decodes a matrix file and reports its size.

mod commands;
mod topology;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, FormatArg, GenerateCommand, GenerateSummary,
    InspectArgs, InspectSummary, render_summary, run_cli,
};
pub use topology::{
    BarabasiAlbertArgs, CometKiteArgs, ErdosRenyiArgs, GeometricArgs, LatticeArgs, NodesArgs,
    SeedArgs, TopologyArgs, WaxmanArgs,
};

#[cfg(test)]
mod test_helpers;
