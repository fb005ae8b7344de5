//! Streaming line tokenizer for word lists.
//!
//! The word list is read in fixed-size chunks into a [`CarryBuffer`]. Each
//! chunk is split on `\n`; whatever follows the last newline is an
//! unterminated fragment, which is moved to the front of the buffer so the
//! next read lands right after it. A line may therefore span any number of
//! reads and still comes out as one token.
//!
//! Records are exactly what splitting the whole input on `\n` yields, with
//! one exception: an empty input yields no record at all.
//!
//! | input       | tokens          |
//! |-------------|-----------------|
//! | `""`        | (none)          |
//! | `"a\nb"`    | `a`, `b`        |
//! | `"a\nb\n"`  | `a`, `b`, `""`  |
//! | `"a\n\nb"`  | `a`, `""`, `b`  |
//!
//! # Examples
//!
//! ```
//! use std::io::Cursor;
//! use wordbench::tokenizer::LineTokenizer;
//!
//! let tokens: Vec<String> = LineTokenizer::with_chunk_size(Cursor::new("alpha\nbeta"), 4)
//!     .map(|t| t.unwrap().to_string())
//!     .collect();
//! assert_eq!(tokens, vec!["alpha", "beta"]);
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::corpus::Corpus;
use crate::error::{Result, WordbenchError};
use crate::token::{ReplayList, Token};
use crate::util::simd::ascii::find_newline;

/// Default number of bytes requested per read.
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024;

/// Largest chunk size accepted from configuration.
///
/// Longer lines still work: the buffer grows past the chunk size on demand.
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// An owned byte buffer holding carried-over data plus the latest read.
///
/// `buf[pos..len]` is the unconsumed data; everything before `pos` has
/// already been handed out as lines.
#[derive(Debug)]
pub struct CarryBuffer {
    buf: Vec<u8>,
    len: usize,
    pos: usize,
}

impl CarryBuffer {
    /// Create a buffer that reads up to `chunk_size` bytes at a time.
    pub fn new(chunk_size: usize) -> Self {
        CarryBuffer {
            buf: vec![0; chunk_size.max(1)],
            len: 0,
            pos: 0,
        }
    }

    /// Current buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes read but not yet returned as a line.
    pub fn pending(&self) -> &[u8] {
        &self.buf[self.pos..self.len]
    }

    /// Move the unconsumed fragment to the front of the buffer.
    pub fn compact(&mut self) {
        if self.pos > 0 {
            self.buf.copy_within(self.pos..self.len, 0);
            self.len -= self.pos;
            self.pos = 0;
        }
    }

    /// Append one read from `reader` after the carried fragment.
    ///
    /// Returns the number of bytes read; `0` means end of input. When the
    /// fragment alone fills the buffer the buffer doubles, so lines longer
    /// than the chunk size are kept whole.
    pub fn fill_from<R: Read>(&mut self, reader: &mut R) -> io::Result<usize> {
        self.compact();
        if self.len == self.capacity() {
            let grown = self.capacity() * 2;
            debug!("growing line buffer to {grown} bytes");
            self.buf.resize(grown, 0);
        }

        let n = reader.read(&mut self.buf[self.len..])?;
        self.len += n;
        Ok(n)
    }

    /// Split off the next newline-terminated line, without its newline.
    pub fn next_line(&mut self) -> Option<&[u8]> {
        let start = self.pos;
        let offset = find_newline(self.pending())?;
        self.pos = start + offset + 1;
        Some(&self.buf[start..start + offset])
    }

    /// Consume and return the unterminated fragment.
    pub fn take_remainder(&mut self) -> &[u8] {
        let start = self.pos;
        self.pos = self.len;
        &self.buf[start..self.len]
    }
}

/// Iterator over the newline-separated tokens of a reader.
pub struct LineTokenizer<R> {
    reader: R,
    buffer: CarryBuffer,
    bytes_read: u64,
    finished: bool,
}

impl<R: Read> LineTokenizer<R> {
    /// Create a tokenizer using [`DEFAULT_CHUNK_SIZE`].
    pub fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, DEFAULT_CHUNK_SIZE)
    }

    /// Create a tokenizer reading `chunk_size` bytes at a time.
    pub fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        LineTokenizer {
            reader,
            buffer: CarryBuffer::new(chunk_size),
            bytes_read: 0,
            finished: false,
        }
    }

    /// Total bytes consumed from the reader so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl<R: Read> Iterator for LineTokenizer<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            if let Some(line) = self.buffer.next_line() {
                return Some(Ok(Token::new(line)));
            }

            match self.buffer.fill_from(&mut self.reader) {
                Ok(0) => {
                    self.finished = true;
                    if self.bytes_read == 0 {
                        return None;
                    }
                    // The last record has no newline after it (possibly empty).
                    return Some(Ok(Token::new(self.buffer.take_remainder())));
                }
                Ok(n) => self.bytes_read += n as u64,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(WordbenchError::Read(e)));
                }
            }
        }
    }
}

/// Outcome of the ingestion phase.
#[derive(Debug)]
pub struct Ingested {
    /// Every token in input order.
    pub replay: ReplayList,
    /// Number of records read.
    pub total_count: usize,
    /// Number of `Corpus::insert` calls that stored a new entry.
    pub inserted_count: usize,
    /// Bytes consumed from the input.
    pub bytes_read: u64,
    /// Wall-clock time spent ingesting.
    pub elapsed: Duration,
}

/// Tokenize `reader`, feeding every token to `corpus` and the replay list.
///
/// A read error aborts ingestion; no partial result is returned.
pub fn ingest_reader<R: Read>(
    reader: R,
    corpus: &mut dyn Corpus,
    chunk_size: usize,
) -> Result<Ingested> {
    let start = Instant::now();
    let mut tokenizer = LineTokenizer::with_chunk_size(reader, chunk_size);
    let mut replay = ReplayList::new();
    let mut inserted_count = 0;

    for token in tokenizer.by_ref() {
        let token = token?;
        if corpus.insert(token.as_bytes()) {
            inserted_count += 1;
        }
        replay.push(token);
    }

    let ingested = Ingested {
        total_count: replay.len(),
        replay,
        inserted_count,
        bytes_read: tokenizer.bytes_read(),
        elapsed: start.elapsed(),
    };
    debug!(
        "ingested {} tokens ({} bytes) into {} corpus in {:?}",
        ingested.total_count,
        ingested.bytes_read,
        corpus.name(),
        ingested.elapsed
    );
    Ok(ingested)
}

/// Open the word list at `path` and ingest it into `corpus`.
pub fn ingest(path: &Path, corpus: &mut dyn Corpus, chunk_size: usize) -> Result<Ingested> {
    let file = File::open(path).map_err(|e| WordbenchError::open(path, e))?;
    info!("reading word list from {}", path.display());
    ingest_reader(file, corpus, chunk_size)
}
