//! Benchmark orchestration.
//!
//! A run moves through three phases exactly once each:
//!
//! 1. **Ingest**: tokenize the word list into the selected corpus and the
//!    replay list.
//! 2. **Query**: replay every token against the corpus, timed.
//! 3. **Report**: hand back a [`BenchmarkReport`] for presentation.
//!
//! Any error ends the run; there is no partial report.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::corpus::CorpusKind;
use crate::error::{Result, WordbenchError};
use crate::query::{NoProgress, ProgressListener, QueryRunner};
use crate::tokenizer::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, ingest};

/// Configuration for a benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Newline-delimited word list to read.
    pub wordlist_file: PathBuf,

    /// Lookup strategy under test.
    pub method: CorpusKind,

    /// Bytes requested per read while ingesting.
    pub chunk_size: usize,

    /// Whether to emit progress notifications during the query phase.
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            wordlist_file: PathBuf::new(),
            method: CorpusKind::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            show_progress: true,
        }
    }
}

impl BenchmarkConfig {
    /// Create a configuration for `wordlist_file` with default settings.
    pub fn new<P: Into<PathBuf>>(wordlist_file: P) -> Self {
        Self {
            wordlist_file: wordlist_file.into(),
            ..Default::default()
        }
    }

    /// Set the lookup strategy.
    pub fn with_method(mut self, method: CorpusKind) -> Self {
        self.method = method;
        self
    }

    /// Set the read chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set whether progress is reported.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Check the configuration before any work is done.
    pub fn validate(&self) -> Result<()> {
        if self.wordlist_file.as_os_str().is_empty() {
            return Err(WordbenchError::config("wordlist file must be given"));
        }
        if self.chunk_size == 0 {
            return Err(WordbenchError::config("chunk size must be greater than zero"));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(WordbenchError::config(format!(
                "chunk size must not exceed {MAX_CHUNK_SIZE} bytes"
            )));
        }
        Ok(())
    }
}

/// Phases of a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ingest,
    Query,
    Report,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Ingest => f.write_str("ingest"),
            Phase::Query => f.write_str("query"),
            Phase::Report => f.write_str("report"),
        }
    }
}

/// Result of a completed benchmark run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub method: CorpusKind,
    pub wordlist_file: PathBuf,
    /// Records read from the word list.
    pub total_count: usize,
    /// Inserts that stored a new corpus entry.
    pub inserted_count: usize,
    /// Entries held by the corpus after ingestion.
    pub corpus_len: usize,
    pub bytes_read: u64,
    pub ingest_duration: Duration,
    /// Time spent in the query phase.
    pub query_duration: Duration,
}

impl BenchmarkReport {
    /// The `Total Time: <secs>.<nanos> seconds` line.
    pub fn total_time_line(&self) -> String {
        format!(
            "Total Time: {}.{:09} seconds",
            self.query_duration.as_secs(),
            self.query_duration.subsec_nanos()
        )
    }
}

/// A single benchmark run.
#[derive(Debug)]
pub struct Benchmark {
    config: BenchmarkConfig,
}

impl Benchmark {
    pub fn new(config: BenchmarkConfig) -> Self {
        Benchmark { config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Run all phases, sending query progress to `listener`.
    pub fn run(&self, listener: &mut dyn ProgressListener) -> Result<BenchmarkReport> {
        self.config.validate()?;

        info!("phase {}: method {}", Phase::Ingest, self.config.method);
        let mut corpus = self.config.method.create();
        let ingested = ingest(
            &self.config.wordlist_file,
            corpus.as_mut(),
            self.config.chunk_size,
        )?;
        info!(
            "read {} tokens, corpus holds {} entries",
            ingested.total_count,
            corpus.len()
        );

        info!("phase {}", Phase::Query);
        let mut silent = NoProgress;
        let listener: &mut dyn ProgressListener = if self.config.show_progress {
            listener
        } else {
            &mut silent
        };
        let query_duration = QueryRunner::new().run(&ingested.replay, corpus.as_ref(), listener)?;

        info!("phase {}", Phase::Report);
        Ok(BenchmarkReport {
            method: self.config.method,
            wordlist_file: self.config.wordlist_file.clone(),
            total_count: ingested.total_count,
            inserted_count: ingested.inserted_count,
            corpus_len: corpus.len(),
            bytes_read: ingested.bytes_read,
            ingest_duration: ingested.elapsed,
            query_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.method, CorpusKind::Strcmp);
        assert_eq!(config.chunk_size, 16 * 1024);
        assert!(config.show_progress);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = BenchmarkConfig::new("words.txt")
            .with_method(CorpusKind::Uthash)
            .with_chunk_size(64)
            .with_progress(false);

        assert_eq!(config.wordlist_file, PathBuf::from("words.txt"));
        assert_eq!(config.method, CorpusKind::Uthash);
        assert_eq!(config.chunk_size, 64);
        assert!(!config.show_progress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let config = BenchmarkConfig::new("words.txt").with_chunk_size(0);
        assert!(matches!(config.validate(), Err(WordbenchError::Config(_))));
    }

    #[test]
    fn test_oversized_chunk_size_rejected() {
        let config = BenchmarkConfig::new("words.txt").with_chunk_size(MAX_CHUNK_SIZE);
        assert!(config.validate().is_ok());

        for chunk_size in [MAX_CHUNK_SIZE + 1, usize::MAX / 2, usize::MAX] {
            let config = BenchmarkConfig::new("words.txt").with_chunk_size(chunk_size);
            assert!(matches!(config.validate(), Err(WordbenchError::Config(_))));
        }
    }

    #[test]
    fn test_oversized_chunk_size_fails_before_ingest() {
        let config =
            BenchmarkConfig::new("/nonexistent/wordbench.txt").with_chunk_size(usize::MAX / 2);
        let result = Benchmark::new(config).run(&mut NoProgress);
        assert!(matches!(result, Err(WordbenchError::Config(_))));
    }

    #[test]
    fn test_total_time_line_pads_nanos() {
        let report = BenchmarkReport {
            method: CorpusKind::Strcmp,
            wordlist_file: PathBuf::from("words.txt"),
            total_count: 0,
            inserted_count: 0,
            corpus_len: 0,
            bytes_read: 0,
            ingest_duration: Duration::ZERO,
            query_duration: Duration::new(2, 5_000),
        };
        assert_eq!(report.total_time_line(), "Total Time: 2.000005000 seconds");
    }

    #[test]
    fn test_missing_file_fails_in_ingest() {
        let benchmark = Benchmark::new(BenchmarkConfig::new("/nonexistent/wordbench.txt"));
        let result = benchmark.run(&mut NoProgress);
        assert!(matches!(result, Err(WordbenchError::Open { .. })));
    }
}
