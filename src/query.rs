//! Query phase: replay every ingested token against the corpus.
//!
//! The runner times one pass over the [`ReplayList`], calling
//! [`Corpus::contains`] for each entry. A token that was ingested but is not
//! found is a logic error and aborts the pass.
//!
//! Progress is reported every `total / 20` completed queries (integer
//! division). When `total` is not a multiple of 20 the last partial bucket
//! never fires, and when `total < 20` the step is zero and no progress is
//! reported at all.
//!
//! # Examples
//!
//! ```
//! use wordbench::corpus::CorpusKind;
//! use wordbench::query::{NoProgress, QueryRunner};
//! use wordbench::token::{ReplayList, Token};
//!
//! let replay: ReplayList = ["a", "b", "a"].into_iter().map(Token::from).collect();
//! let mut corpus = CorpusKind::Uthash.create();
//! for token in &replay {
//!     corpus.insert(token.as_bytes());
//! }
//!
//! let elapsed = QueryRunner::new().run(&replay, corpus.as_ref(), &mut NoProgress).unwrap();
//! assert!(elapsed.as_secs() < 60);
//! ```

use std::io::Write;
use std::time::{Duration, Instant};

use log::debug;

use crate::corpus::Corpus;
use crate::error::{Result, WordbenchError};
use crate::token::ReplayList;

/// Number of progress buckets per pass.
pub const PROGRESS_BUCKETS: usize = 20;

/// A progress notification for the query phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Queries completed so far.
    pub completed: usize,
    /// Queries in the whole pass.
    pub total: usize,
}

impl Progress {
    /// Completion percentage, `100 * completed / total`.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        100.0 * self.completed as f64 / self.total as f64
    }
}

/// Receiver of progress notifications.
pub trait ProgressListener {
    fn on_progress(&mut self, progress: &Progress);
}

impl<F: FnMut(&Progress)> ProgressListener for F {
    fn on_progress(&mut self, progress: &Progress) {
        self(progress)
    }
}

/// Discards all progress notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressListener for NoProgress {
    fn on_progress(&mut self, _progress: &Progress) {}
}

/// Writes `\rCompleted: %NN` lines, overwriting the previous one.
#[derive(Debug)]
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        ConsoleProgress { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressListener for ConsoleProgress<W> {
    fn on_progress(&mut self, progress: &Progress) {
        let _ = write!(self.out, "\rCompleted: %{:.0}", progress.percent());
        let _ = self.out.flush();
    }
}

/// Step between progress notifications for a pass of `total` queries.
///
/// Zero means progress is never reported.
pub fn progress_step(total: usize) -> usize {
    total / PROGRESS_BUCKETS
}

/// Runs the timed query pass.
#[derive(Debug, Default, Clone)]
pub struct QueryRunner;

impl QueryRunner {
    pub fn new() -> Self {
        QueryRunner
    }

    /// Look up every token of `replay` in `corpus` and return the elapsed
    /// monotonic time.
    pub fn run(
        &self,
        replay: &ReplayList,
        corpus: &dyn Corpus,
        listener: &mut dyn ProgressListener,
    ) -> Result<Duration> {
        let total = replay.len();
        let step = progress_step(total);
        debug!(
            "replaying {total} tokens against {} corpus (progress step {step})",
            corpus.name()
        );

        let start = Instant::now();
        let mut completed = 0;
        for token in replay {
            if !corpus.contains(token.as_bytes()) {
                return Err(WordbenchError::invariant(token.to_string()));
            }
            completed += 1;
            if step != 0 && completed % step == 0 {
                listener.on_progress(&Progress { completed, total });
            }
        }
        let elapsed = start.elapsed();

        debug!("query pass finished in {elapsed:?}");
        Ok(elapsed)
    }
}
