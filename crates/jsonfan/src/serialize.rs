//! Bounded re-serialization of a token subtree.
//!
//! [`write_value`] regenerates canonical text for the subtree rooted at a
//! token index: objects as `{"key": value,...}` (colon-space after each
//! key), arrays as `[a,b]`, strings quoted, and scalars either bare (when
//! classification keeps them) or quoted. The output therefore satisfies a
//! stricter grammar than the source text, whatever the tokenizer accepted.
//!
//! The walk consumes records in pre-order straight out of the flat token
//! sequence; `budget` caps how many records may be consumed so that a
//! truncated or inconsistent sequence terminates instead of running off the
//! end. Capacity overflow aborts the write immediately and the buffer
//! contents are unspecified.

use crate::{
    classify,
    out_buffer::{OutBuffer, Overflow},
    token::{Token, TokenKind},
};

fn span<'a>(text: &'a str, token: &Token) -> &'a str {
    text.get(token.start..token.end).unwrap_or("")
}

/// Writes the canonical text of the subtree at `from` into `out`.
///
/// Returns the number of token records consumed (the subtree's record
/// count), or [`Overflow`] when the text does not fit. A `budget` of 0
/// writes nothing and consumes nothing.
pub(crate) fn write_value(
    out: &mut OutBuffer<'_>,
    text: &str,
    tokens: &mut [Token],
    from: usize,
    budget: usize,
) -> Result<usize, Overflow> {
    if budget == 0 || from >= tokens.len() {
        return Ok(0);
    }
    if tokens[from].kind == TokenKind::Scalar {
        tokens[from].kind = classify::classified_kind(span(text, &tokens[from]));
    }
    let token = tokens[from];
    match token.kind {
        TokenKind::Scalar => {
            out.push_str(span(text, &token))?;
            Ok(1)
        }
        TokenKind::String => {
            out.push_byte(b'"')?;
            out.push_str(span(text, &token))?;
            out.push_byte(b'"')?;
            Ok(1)
        }
        TokenKind::Object => {
            out.push_byte(b'{')?;
            let mut used = 0;
            for pair in 0..token.children {
                if pair > 0 {
                    out.push_byte(b',')?;
                }
                let key_index = from + 1 + used;
                let Some(key) = tokens.get(key_index).copied() else {
                    break;
                };
                used += write_value(out, text, tokens, key_index, budget.saturating_sub(1 + used))?;
                out.push_str(": ")?;
                if key.children > 0 {
                    used += write_value(
                        out,
                        text,
                        tokens,
                        from + 1 + used,
                        budget.saturating_sub(1 + used),
                    )?;
                } else {
                    out.push_str("null")?;
                }
            }
            out.push_byte(b'}')?;
            Ok(1 + used)
        }
        TokenKind::Array => {
            out.push_byte(b'[')?;
            let mut used = 0;
            for element in 0..token.children {
                if element > 0 {
                    out.push_byte(b',')?;
                }
                used += write_value(
                    out,
                    text,
                    tokens,
                    from + 1 + used,
                    budget.saturating_sub(1 + used),
                )?;
            }
            out.push_byte(b']')?;
            Ok(1 + used)
        }
    }
}
