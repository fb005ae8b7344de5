//! wordbench CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use env_logger::Builder;
use log::LevelFilter;

use wordbench::cli::args::*;
use wordbench::cli::commands::*;
use wordbench::error::WordbenchError;

fn main() {
    // Every argument error exits with status 1, not clap's default of 2.
    let args = match WordbenchArgs::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            let _ = e.print();
            process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            eprint!("{}", usage());
            process::exit(1);
        }
    };

    // --help prints usage to stdout and still exits with status 1.
    if args.help {
        print!("{}", usage());
        process::exit(1);
    }

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("{e}");
        if matches!(e, WordbenchError::Config(_)) {
            eprint!("{}", usage());
        }
        process::exit(1);
    }
}
