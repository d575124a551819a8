//! The tokenizer seam and its permissive default implementation.
//!
//! The core consumes a flat pre-order token sequence (see
//! [`crate::token`]) and never tokenizes text itself; [`Tokenizer`] is the
//! seam a deployment can replace. [`PermissiveTokenizer`] is the default:
//! it accepts the loose grammar gateway firmware actually emits — unquoted
//! words and keys tokenize as scalars, string spans are kept raw (escape
//! sequences locate the closing quote but are never decoded), and no
//! grammar validation happens beyond bracket balance. Scalar
//! classification and re-serialization later canonicalize whatever this
//! layer let through.

use heapless::Vec;

use crate::{
    error::TokenizeError,
    token::{Token, TokenKind},
};

/// Produces the token sequence for one message.
///
/// Implementations must emit records pre-order, depth-first, with child
/// counts as documented on [`Token`]: an object counts one child per
/// key/value pair, a key counts 1 when a value follows it, an array counts
/// its elements. Spans must fall on UTF-8 character boundaries.
pub trait Tokenizer {
    /// Tokenizes `text` into `tokens`, replacing any previous contents.
    ///
    /// # Errors
    ///
    /// [`TokenizeError::TokenOverflow`] when the message needs more than
    /// `N` records, [`TokenizeError::Partial`] when the text ends inside a
    /// token, and [`TokenizeError::Malformed`] for input the implementation
    /// refuses outright.
    fn tokenize<const N: usize>(
        &self,
        text: &str,
        tokens: &mut Vec<Token, N>,
    ) -> Result<(), TokenizeError>;
}

/// Marks a composite token whose closing bracket has not been seen yet.
const OPEN: usize = usize::MAX;

/// jsmn-style non-strict tokenizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveTokenizer;

fn push<const N: usize>(tokens: &mut Vec<Token, N>, token: Token) -> Result<(), TokenizeError> {
    tokens.push(token).map_err(|_| TokenizeError::TokenOverflow)
}

fn last_open(tokens: &[Token]) -> Option<usize> {
    tokens.iter().rposition(|t| t.end == OPEN)
}

/// Ends a scalar run. `"` deliberately does not: a stray quote mid-word
/// stays part of the span, as in the original grammar.
fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | b',' | b']' | b'}' | b':')
}

impl Tokenizer for PermissiveTokenizer {
    fn tokenize<const N: usize>(
        &self,
        text: &str,
        tokens: &mut Vec<Token, N>,
    ) -> Result<(), TokenizeError> {
        tokens.clear();
        let bytes = text.as_bytes();
        // Index of the token collecting children: the innermost open
        // composite, or the pending key after a `:`.
        let mut sup: Option<usize> = None;
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b' ' | b'\t' | b'\r' | b'\n' => i += 1,
                byte @ (b'{' | b'[') => {
                    let kind = if byte == b'{' {
                        TokenKind::Object
                    } else {
                        TokenKind::Array
                    };
                    if let Some(p) = sup {
                        tokens[p].children += 1;
                    }
                    push(
                        tokens,
                        Token {
                            kind,
                            start: i,
                            end: OPEN,
                            children: 0,
                        },
                    )?;
                    sup = Some(tokens.len() - 1);
                    i += 1;
                }
                byte @ (b'}' | b']') => {
                    let kind = if byte == b'}' {
                        TokenKind::Object
                    } else {
                        TokenKind::Array
                    };
                    let open = last_open(tokens).ok_or(TokenizeError::Malformed)?;
                    if tokens[open].kind != kind {
                        return Err(TokenizeError::Malformed);
                    }
                    tokens[open].end = i + 1;
                    sup = last_open(&tokens[..open]);
                    i += 1;
                }
                b'"' => {
                    let start = i + 1;
                    let mut j = start;
                    loop {
                        match bytes.get(j).copied() {
                            None => return Err(TokenizeError::Partial),
                            Some(b'"') => break,
                            Some(b'\\') => j += 2,
                            Some(_) => j += 1,
                        }
                    }
                    if let Some(p) = sup {
                        tokens[p].children += 1;
                    }
                    push(
                        tokens,
                        Token {
                            kind: TokenKind::String,
                            start,
                            end: j,
                            children: 0,
                        },
                    )?;
                    i = j + 1;
                }
                b':' => {
                    // The token just completed is the key; its value counts
                    // toward it.
                    sup = tokens.len().checked_sub(1);
                    i += 1;
                }
                b',' => {
                    if let Some(p) = sup {
                        if !matches!(tokens[p].kind, TokenKind::Object | TokenKind::Array) {
                            sup = last_open(tokens);
                        }
                    }
                    i += 1;
                }
                _ => {
                    let start = i;
                    let mut j = i;
                    while j < bytes.len() && !is_delimiter(bytes[j]) {
                        j += 1;
                    }
                    if let Some(p) = sup {
                        tokens[p].children += 1;
                    }
                    push(
                        tokens,
                        Token {
                            kind: TokenKind::Scalar,
                            start,
                            end: j,
                            children: 0,
                        },
                    )?;
                    i = j;
                }
            }
        }
        if tokens.iter().any(|t| t.end == OPEN) {
            return Err(TokenizeError::Partial);
        }
        Ok(())
    }
}
