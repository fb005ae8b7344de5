//! # wordbench
//!
//! A micro-benchmark comparing two ways of looking up words from a word
//! list: a linear scan with byte-wise comparison and a content-keyed hash
//! set.
//!
//! A run reads the word list once, feeding every line into the selected
//! [`corpus::Corpus`] and into a replay list, then replays the whole list
//! against the corpus and times that query pass.
//!
//! ```no_run
//! use wordbench::benchmark::{Benchmark, BenchmarkConfig};
//! use wordbench::corpus::CorpusKind;
//! use wordbench::query::NoProgress;
//!
//! # fn main() -> wordbench::error::Result<()> {
//! let config = BenchmarkConfig::new("/usr/share/dict/words").with_method(CorpusKind::Uthash);
//! let report = Benchmark::new(config).run(&mut NoProgress)?;
//! println!("{}", report.total_time_line());
//! # Ok(())
//! # }
//! ```

pub mod benchmark;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod query;
pub mod token;
pub mod tokenizer;
pub mod util;

pub mod prelude {
    pub use crate::benchmark::{Benchmark, BenchmarkConfig, BenchmarkReport};
    pub use crate::corpus::{Corpus, CorpusKind, HashCorpus, LinearCorpus};
    pub use crate::error::{Result, WordbenchError};
    pub use crate::query::{Progress, ProgressListener, QueryRunner};
    pub use crate::token::{ReplayList, Token};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
