//! Linear-scan corpus.

use super::Corpus;

use crate::token::Token;

/// A corpus stored as a plain sequence and searched front to back.
///
/// Insertion never checks for an existing entry: every token is appended,
/// so after ingestion the corpus holds all tokens of the input, duplicates
/// included. This mirrors the `strcmp` method being benchmarked and differs
/// from [`HashCorpus`](super::HashCorpus), which stores each distinct token
/// once. Lookups still succeed for every ingested token, only the scan
/// length changes.
#[derive(Clone, Debug, Default)]
pub struct LinearCorpus {
    words: Vec<Token>,
}

impl LinearCorpus {
    /// Create an empty linear corpus.
    pub fn new() -> Self {
        LinearCorpus { words: Vec::new() }
    }
}

impl Corpus for LinearCorpus {
    fn insert(&mut self, token: &[u8]) -> bool {
        self.words.push(Token::new(token));
        true
    }

    fn contains(&self, token: &[u8]) -> bool {
        // First inserted, first checked; stops at the first match.
        self.words.iter().any(|word| word.as_bytes() == token)
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn name(&self) -> &'static str {
        "strcmp"
    }
}
