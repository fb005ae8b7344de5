//! Command implementation for the wordbench CLI.

use std::io::{self, Write};

use clap::CommandFactory;
use log::info;

use crate::benchmark::Benchmark;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::query::ConsoleProgress;

/// Usage text for the binary.
pub fn usage() -> String {
    WordbenchArgs::command().render_help().to_string()
}

/// Execute a benchmark run described by `args`, writing to stdout.
pub fn execute_command(args: WordbenchArgs) -> Result<()> {
    let stdout = io::stdout();
    run_benchmark(&args, stdout.lock())
}

/// Run the benchmark and present the result on `out`.
pub fn run_benchmark<W: Write>(args: &WordbenchArgs, out: W) -> Result<()> {
    let config = args.to_config()?;
    info!(
        "benchmarking {} on {}",
        config.method,
        config.wordlist_file.display()
    );

    let benchmark = Benchmark::new(config);
    let mut console = ConsoleProgress::new(out);
    let report = benchmark.run(&mut console)?;

    let mut out = console.into_inner();
    output_report(&mut out, &report, args)?;
    out.flush()?;
    Ok(())
}
