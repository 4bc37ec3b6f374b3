//! `trailhead`: search a built-in world and print its canonical JSON report.
//!
//! Exit codes: 0 solved, 2 no path (frontier or budget exhausted), 1 error.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use trailhead_harness::cli::{Cli, EXIT_NO_PATH};
use trailhead_harness::logging;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    let run = match cli.execute() {
        Ok(run) => run,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let bytes = match run.to_canonical_json_bytes() {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(&bytes).and_then(|()| stdout.write_all(b"\n")) {
        eprintln!("error: cannot write report: {e}");
        return ExitCode::FAILURE;
    }

    info!(world_id = run.world_id, solved = run.is_solved(), "done");
    if run.is_solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NO_PATH)
    }
}
