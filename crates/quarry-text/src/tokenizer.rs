//! Term extraction from byte streams and string fragments.
//!
//! The same classification backs both entry points: [`tokenize`] for
//! in-memory fragments (query atoms, tests) and [`read_tokens`] for
//! ingestion from an [`io::Read`] source. [`Tokenizer`] is the
//! incremental core that carries a partial term across chunk
//! boundaries.

use std::io::{self, Read};

/// A single term emitted by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The term text.
    pub text: String,
    /// 0-based ordinal of this term within its source, counted over
    /// emitted terms only.
    pub position: usize,
}

/// Returns true if `byte` separates terms.
///
/// Separators are the ASCII whitespace class (space, tab, line feed,
/// vertical tab, form feed, carriage return) and the ASCII punctuation
/// class. Every other byte, including digits and all non-ASCII bytes,
/// is a term byte.
pub fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r') || byte.is_ascii_punctuation()
}

/// Iterator over the tokens of an in-memory fragment.
///
/// Produced by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    /// Unscanned remainder of the input.
    rest: &'a [u8],
    /// Position assigned to the next emitted term.
    next_position: usize,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = self.rest;
        let Some(start) = rest.iter().position(|&b| !is_separator(b)) else {
            self.rest = &[];
            return None;
        };
        let rest = &rest[start..];
        let len = rest
            .iter()
            .position(|&b| is_separator(b))
            .unwrap_or(rest.len());
        self.rest = &rest[len..];

        let position = self.next_position;
        self.next_position += 1;
        Some(Token {
            text: String::from_utf8_lossy(&rest[..len]).into_owned(),
            position,
        })
    }
}

/// Tokenizes an in-memory fragment, assigning positions from 0.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens {
        rest: text.as_bytes(),
        next_position: 0,
    }
}

/// Incremental tokenizer over a chunked byte stream.
///
/// Feed arbitrary chunks with [`Tokenizer::feed`]; a term split across
/// a chunk boundary is buffered and emitted whole. Call
/// [`Tokenizer::finish`] once the stream ends to flush a trailing term.
#[derive(Debug, Default)]
pub struct Tokenizer {
    /// Bytes of a term still open at the end of the last chunk.
    pending: Vec<u8>,
    /// Position assigned to the next emitted term.
    next_position: usize,
}

impl Tokenizer {
    /// Creates a tokenizer with its position counter at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one chunk, emitting every term completed within it.
    pub fn feed<F: FnMut(Token)>(&mut self, chunk: &[u8], emit: &mut F) {
        for &byte in chunk {
            if is_separator(byte) {
                self.flush(emit);
            } else {
                self.pending.push(byte);
            }
        }
    }

    /// Flushes a term left open by the final chunk.
    pub fn finish<F: FnMut(Token)>(&mut self, emit: &mut F) {
        self.flush(emit);
    }

    /// Emits the buffered term, if any, and advances the counter.
    fn flush<F: FnMut(Token)>(&mut self, emit: &mut F) {
        if self.pending.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        emit(Token {
            text,
            position: self.next_position,
        });
        self.next_position += 1;
    }
}

/// Tokenizes an entire byte stream, passing each term to `emit`.
///
/// The source is consumed synchronously to completion. The only error
/// surfaced is the reader's own.
pub fn read_tokens<R: Read>(mut reader: R, mut emit: impl FnMut(Token)) -> io::Result<()> {
    let mut tokenizer = Tokenizer::new();
    let mut buf = [0u8; 8192];

    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        tokenizer.feed(&buf[..read], &mut emit);
    }
    tokenizer.finish(&mut emit);
    Ok(())
}
