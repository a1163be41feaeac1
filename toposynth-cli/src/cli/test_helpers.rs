//! Small helpers shared across CLI tests.

use std::path::Path;

use tempfile::TempDir;

use super::{
    Cli, CliError, Command, ExecutionSummary, FormatArg, GenerateCommand, GenerateSummary,
    TopologyArgs, run_cli,
};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

/// `generate` writing into `dir` under the conventional file name.
pub(super) fn generate_into(
    dir: &Path,
    format: FormatArg,
    replicate: Option<u32>,
    topology: TopologyArgs,
) -> Cli {
    Cli {
        command: Command::Generate(GenerateCommand {
            format,
            output: None,
            dump_dir: Some(dir.to_path_buf()),
            replicate,
            topology,
        }),
    }
}

pub(super) fn expect_generated(cli: Cli) -> GenerateSummary {
    match run_cli(cli) {
        Ok(ExecutionSummary::Generated(summary)) => summary,
        Ok(other) => panic!("expected a generate summary, got {other:?}"),
        Err(err) => panic!("generate failed: {err}"),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
