//! Corpus abstraction for wordbench.
//!
//! A corpus is the membership store built from the word list and queried
//! during the replay phase. The two strategies under comparison implement
//! the same [`Corpus`] trait and are chosen once at startup through
//! [`CorpusKind::create`], so the rest of the program never branches on the
//! selected method.
//!
//! # Corpus Types
//!
//! ## LinearCorpus (`strcmp`)
//! - Ordered sequence scanned front to back with byte-wise equality
//! - Appends every inserted token without checking for duplicates, so it
//!   holds all tokens rather than the distinct ones
//!
//! ## HashCorpus (`uthash`)
//! - Content-keyed hash set with O(1) amortized membership
//! - Inserts a key only once
//!
//! # Example
//!
//! ```
//! use wordbench::corpus::CorpusKind;
//!
//! let mut corpus = CorpusKind::Uthash.create();
//! assert!(corpus.insert(b"apple"));
//! assert!(!corpus.insert(b"apple"));
//! assert!(corpus.contains(b"apple"));
//! assert!(!corpus.contains(b"pear"));
//! ```

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod hash;
pub mod linear;

pub use hash::HashCorpus;
pub use linear::LinearCorpus;

/// A membership store for word-list tokens.
pub trait Corpus: Send + Sync {
    /// Record `token` in the corpus.
    ///
    /// Returns `true` if the corpus stored a new entry.
    fn insert(&mut self, token: &[u8]) -> bool;

    /// Check whether `token` is present, comparing exact byte content.
    fn contains(&self, token: &[u8]) -> bool;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the strategy, as accepted on the command line.
    fn name(&self) -> &'static str;
}

/// The lookup strategies that can be benchmarked.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusKind {
    /// Linear scan with byte-wise comparison
    #[default]
    Strcmp,
    /// Hash-set lookup keyed by content
    Uthash,
}

impl CorpusKind {
    /// Construct an empty corpus of this kind.
    pub fn create(self) -> Box<dyn Corpus> {
        match self {
            CorpusKind::Strcmp => Box::new(LinearCorpus::new()),
            CorpusKind::Uthash => Box::new(HashCorpus::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CorpusKind::Strcmp => "strcmp",
            CorpusKind::Uthash => "uthash",
        }
    }
}

impl fmt::Display for CorpusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
