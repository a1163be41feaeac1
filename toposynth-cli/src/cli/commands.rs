//! Command implementations and argument parsing for the toposynth CLI.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use toposynth_codec::{CodecError, GraphFormat, graph_file_name, read_matrix, write_graph};
use toposynth_core::{TopologyError, TopologyKind};
use tracing::{Span, field, info, instrument};

use super::topology::TopologyArgs;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "toposynth", about = "Generate and inspect synthetic network topologies.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a topology and write it to a file.
    Generate(GenerateCommand),
    /// Decode an adjacency-matrix file and report its size.
    Inspect(InspectArgs),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Matrix)]
    pub format: FormatArg,

    /// Exact destination file.
    #[arg(long, conflicts_with = "dump_dir")]
    pub output: Option<PathBuf>,

    /// Directory receiving a conventionally named file; created if missing.
    #[arg(long = "dump-dir")]
    pub dump_dir: Option<PathBuf>,

    /// Replicate id appended to stochastic file names and used as the
    /// default seed.
    #[arg(long)]
    pub replicate: Option<u32>,

    /// Topology family and its parameters.
    #[command(subcommand)]
    pub topology: TopologyArgs,
}

/// Options accepted by the `inspect` command.
#[derive(Debug, Args, Clone)]
pub struct InspectArgs {
    /// Adjacency-matrix file to decode.
    pub path: PathBuf,
}

/// Output formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Square `0`/`1` adjacency matrix (`.mat`).
    Matrix,
    /// Edge list with isolated-node markers (`.csv`).
    Edges,
}

impl From<FormatArg> for GraphFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Matrix => Self::Matrix,
            FormatArg::Edges => Self::EdgeList,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Creating the dump directory failed.
    #[error("failed to create directory `{path}`: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Parameter validation or generation failed.
    #[error(transparent)]
    Topology(#[from] TopologyError),
    /// Reading or writing a graph file failed.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl CliError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CreateDir { .. } => "CLI_CREATE_DIR",
            Self::Topology(err) => err.code().as_str(),
            Self::Codec(err) => err.code(),
        }
    }
}

/// Result of a successful `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// File the graph was written to.
    pub path: PathBuf,
    /// Family that was generated.
    pub kind: TopologyKind,
    /// Format of the written file.
    pub format: GraphFormat,
    /// Seed used, for stochastic families.
    pub seed: Option<u64>,
    /// Node count of the written graph.
    pub nodes: usize,
    /// Edge count of the written graph.
    pub edges: usize,
}

/// Result of a successful `inspect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectSummary {
    /// File that was decoded.
    pub path: PathBuf,
    /// Node count.
    pub nodes: usize,
    /// Edge count.
    pub edges: usize,
    /// Nodes without neighbours.
    pub isolated: usize,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// A graph file was written.
    Generated(GenerateSummary),
    /// A matrix file was decoded.
    Inspected(InspectSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when validation, generation, or file access fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use toposynth_cli::cli::{
/// #     Cli, Command, ExecutionSummary, FormatArg, GenerateCommand, NodesArgs, TopologyArgs,
/// #     run_cli,
/// # };
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let cli = Cli {
///     command: Command::Generate(GenerateCommand {
///         format: FormatArg::Matrix,
///         output: None,
///         dump_dir: Some(dir.path().to_path_buf()),
///         replicate: None,
///         topology: TopologyArgs::LinearChain(NodesArgs { nodes: 4 }),
///     }),
/// };
/// let ExecutionSummary::Generated(summary) = run_cli(cli)? else {
///     panic!("generate returns a generate summary");
/// };
/// assert_eq!(summary.edges, 3);
/// assert!(summary.path.ends_with("graph-linear-chain.mat"));
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Generate(command) => {
            Span::current().record("command", "generate");
            run_generate(&command).map(ExecutionSummary::Generated)
        }
        Command::Inspect(args) => {
            Span::current().record("command", "inspect");
            run_inspect(&args.path).map(ExecutionSummary::Inspected)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(
        kind = %command.topology.kind(),
        format = ?command.format,
        replicate = field::Empty,
        path = field::Empty,
    ),
)]
pub(super) fn run_generate(command: &GenerateCommand) -> Result<GenerateSummary, CliError> {
    let span = Span::current();
    if let Some(replicate) = command.replicate {
        span.record("replicate", replicate);
    }

    let kind = command.topology.kind();
    let format = GraphFormat::from(command.format);
    let spec = command.topology.to_spec(command.replicate)?;
    let graph = spec.generate()?;

    let path = resolve_output_path(command, kind, format)?;
    span.record("path", field::display(path.display()));
    write_graph(&path, &graph, format)?;

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph written"
    );
    Ok(GenerateSummary {
        path,
        kind,
        format,
        seed: spec.seed(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    })
}

#[instrument(name = "cli.inspect", err, skip(path), fields(path = %path.display()))]
pub(super) fn run_inspect(path: &Path) -> Result<InspectSummary, CliError> {
    let graph = read_matrix(path)?;
    let summary = InspectSummary {
        path: path.to_path_buf(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        isolated: graph.isolated_nodes().count(),
    };
    info!(
        nodes = summary.nodes,
        edges = summary.edges,
        "matrix inspected"
    );
    Ok(summary)
}

/// Picks the destination: `--output` verbatim, otherwise the conventional
/// file name inside `--dump-dir` (default `.`), creating the directory.
pub(super) fn resolve_output_path(
    command: &GenerateCommand,
    kind: TopologyKind,
    format: GraphFormat,
) -> Result<PathBuf, CliError> {
    if let Some(output) = &command.output {
        return Ok(output.clone());
    }
    let directory = command
        .dump_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&directory).map_err(|source| CliError::CreateDir {
        path: directory.clone(),
        source,
    })?;
    Ok(directory.join(graph_file_name(kind, command.replicate, format)))
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use toposynth_cli::cli::{ExecutionSummary, InspectSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary::Inspected(InspectSummary {
///     path: PathBuf::from("graph.mat"),
///     nodes: 4,
///     edges: 3,
///     isolated: 0,
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "path: graph.mat\nnodes: 4\nedges: 3\nisolated: 0\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Generated(generated) => {
            writeln!(writer, "path: {}", generated.path.display())?;
            writeln!(writer, "kind: {}", generated.kind)?;
            writeln!(writer, "format: {}", generated.format)?;
            if let Some(seed) = generated.seed {
                writeln!(writer, "seed: {seed}")?;
            }
            writeln!(writer, "nodes: {}", generated.nodes)?;
            writeln!(writer, "edges: {}", generated.edges)?;
        }
        ExecutionSummary::Inspected(inspected) => {
            writeln!(writer, "path: {}", inspected.path.display())?;
            writeln!(writer, "nodes: {}", inspected.nodes)?;
            writeln!(writer, "edges: {}", inspected.edges)?;
            writeln!(writer, "isolated: {}", inspected.isolated)?;
        }
    }
    Ok(())
}
