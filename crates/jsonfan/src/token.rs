//! Token records and the per-message token store.
//!
//! A tokenizer (see [`crate::tokenizer`]) describes one message as a flat,
//! fixed-capacity sequence of [`Token`] records laid out pre-order,
//! depth-first: the records for a composite's descendants occupy the
//! contiguous range immediately following the composite's own record. The
//! [`TokenStore`] pairs that sequence with the borrowed source text for the
//! lifetime of one parsed message; the next parse builds a fresh store.

use heapless::Vec;

/// Default capacity of the token sequence, in records.
///
/// One record is needed per object, array, string, and scalar in the
/// message, so this bounds both message size and nesting depth.
pub const DEFAULT_TOKEN_CAPACITY: usize = 128;

/// The syntactic class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An object; `children` counts its key/value pairs.
    Object,
    /// An array; `children` counts its elements.
    Array,
    /// A quoted string; the span excludes the quotes.
    String,
    /// An unquoted run of non-delimiter characters. May be promoted to
    /// [`TokenKind::String`] by scalar classification; the promotion is the
    /// only mutation a token ever sees.
    Scalar,
}

/// A typed span descriptor produced by tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Syntactic class of the span.
    pub kind: TokenKind,
    /// Byte offset of the span's first character in the source text.
    pub start: usize,
    /// Byte offset one past the span's last character.
    pub end: usize,
    /// Number of immediate children. Objects count one per key/value pair;
    /// a key counts 1 when a value follows it and 0 when the value is
    /// omitted.
    pub children: usize,
}

impl Token {
    pub(crate) fn span_len(&self) -> usize {
        self.end - self.start
    }
}

/// The token sequence and source text of one in-flight message.
///
/// Owned exclusively by one [`crate::Message`]; starting a new parse builds
/// a new store rather than mutating this one.
#[derive(Debug)]
pub struct TokenStore<'src, const N: usize> {
    text: &'src str,
    tokens: Vec<Token, N>,
}

impl<'src, const N: usize> TokenStore<'src, N> {
    pub(crate) fn new(text: &'src str, tokens: Vec<Token, N>) -> Self {
        Self { text, tokens }
    }

    /// Number of valid records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub(crate) fn token(&self, index: usize) -> Option<Token> {
        self.tokens.get(index).copied()
    }

    /// The source text for `index`, detached from the store borrow.
    ///
    /// Spans are produced at ASCII delimiters, so slicing cannot split a
    /// UTF-8 sequence; a record pointing outside the text yields `""`.
    pub(crate) fn span(&self, index: usize) -> &'src str {
        self.tokens
            .get(index)
            .and_then(|t| self.text.get(t.start..t.end))
            .unwrap_or("")
    }

    pub(crate) fn parts_mut(&mut self) -> (&'src str, &mut [Token]) {
        (self.text, &mut self.tokens)
    }
}
