//! Token and replay list types.
//!
//! A [`Token`] is the raw byte content of one line of the word list with the
//! trailing newline stripped. No encoding validation or normalization is
//! applied, so an empty line is an empty token.
//!
//! A [`ReplayList`] records every token in input order, duplicates
//! included. It is filled once during ingestion and replayed against the
//! corpus during the query phase.
//!
//! # Examples
//!
//! ```
//! use wordbench::token::{ReplayList, Token};
//!
//! let mut replay = ReplayList::new();
//! replay.push(Token::from("apple"));
//! replay.push(Token::from("apple"));
//!
//! assert_eq!(replay.len(), 2);
//! assert_eq!(replay.iter().next().unwrap().as_bytes(), b"apple");
//! ```

use std::borrow::Borrow;
use std::fmt;

/// One newline-stripped line of the word list.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(Box<[u8]>);

impl Token {
    /// Create a token by copying `bytes`.
    pub fn new(bytes: &[u8]) -> Self {
        Token(bytes.into())
    }

    /// The raw bytes of the token.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Lets content-keyed sets of tokens be probed with a plain byte slice.
impl Borrow<[u8]> for Token {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Token {
    fn from(bytes: &[u8]) -> Self {
        Token::new(bytes)
    }
}

impl From<Vec<u8>> for Token {
    fn from(bytes: Vec<u8>) -> Self {
        Token(bytes.into_boxed_slice())
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::new(text.as_bytes())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// Every token of the input in original order, duplicates included.
#[derive(Clone, Debug, Default)]
pub struct ReplayList {
    tokens: Vec<Token>,
}

impl ReplayList {
    /// Create an empty replay list.
    pub fn new() -> Self {
        ReplayList { tokens: Vec::new() }
    }

    /// Append a token.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of recorded tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate tokens in the order they were read.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a ReplayList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Token> for ReplayList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        ReplayList {
            tokens: iter.into_iter().collect(),
        }
    }
}
