//! Command line argument parsing for wordbench using clap.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::benchmark::BenchmarkConfig;
use crate::corpus::CorpusKind;
use crate::error::{Result, WordbenchError};
use crate::tokenizer::DEFAULT_CHUNK_SIZE;

/// wordbench - compare linear-scan and hash-set word lookup
#[derive(Parser, Debug, Clone)]
#[command(name = "wordbench")]
#[command(about = "Compare linear-scan and hash-set lookup over a word list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(disable_help_flag = true)]
pub struct WordbenchArgs {
    /// Read the word list from this file
    #[arg(short = 'f', long = "wordlist-file", value_name = "PATH")]
    pub wordlist_file: Option<PathBuf>,

    /// Lookup method to benchmark
    #[arg(short = 't', long = "test-method", value_enum, default_value_t = CorpusKind::Strcmp)]
    pub test_method: CorpusKind,

    /// Bytes requested per read while ingesting
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Do not print progress during the query phase
    #[arg(long)]
    pub no_progress: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Print this text and exit
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,
}

impl WordbenchArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the run configuration, rejecting missing or invalid values.
    pub fn to_config(&self) -> Result<BenchmarkConfig> {
        let wordlist_file = self
            .wordlist_file
            .clone()
            .ok_or_else(|| WordbenchError::config("wordlist file must be given"))?;

        let config = BenchmarkConfig::new(wordlist_file)
            .with_method(self.test_method)
            .with_chunk_size(self.chunk_size)
            .with_progress(!self.no_progress && self.output_format == OutputFormat::Human);
        config.validate()?;
        Ok(config)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Progress line and total time
    Human,
    /// Full report as JSON
    Json,
}
