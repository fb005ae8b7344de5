//! Hash-set corpus.

use ahash::AHashSet;

use super::Corpus;

use crate::token::Token;

/// A corpus backed by a content-keyed hash set.
///
/// Each distinct byte sequence is stored exactly once.
#[derive(Clone, Debug, Default)]
pub struct HashCorpus {
    words: AHashSet<Token>,
}

impl HashCorpus {
    /// Create an empty hash corpus.
    pub fn new() -> Self {
        HashCorpus {
            words: AHashSet::new(),
        }
    }
}

impl Corpus for HashCorpus {
    fn insert(&mut self, token: &[u8]) -> bool {
        // Probe with the borrowed slice so duplicates never allocate.
        if self.words.contains(token) {
            return false;
        }
        self.words.insert(Token::new(token))
    }

    fn contains(&self, token: &[u8]) -> bool {
        self.words.contains(token)
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn name(&self) -> &'static str {
        "uthash"
    }
}
