//! Scalar classification, YAML-style: an unquoted span stays a bare literal
//! only when it is `null`, `true`, `false`, or an optionally-negative
//! integer. Everything else is promoted to a string and quoted on output.

use crate::token::TokenKind;

/// The kind a [`TokenKind::Scalar`] span should serialize as.
///
/// The promotion is monotonic: callers overwrite the token's kind with the
/// result, and re-classifying a promoted token is a no-op because the
/// serializer only consults this function for `Scalar` kinds.
pub(crate) fn classified_kind(span: &str) -> TokenKind {
    if is_bare_literal(span) {
        TokenKind::Scalar
    } else {
        TokenKind::String
    }
}

fn is_bare_literal(span: &str) -> bool {
    matches!(span, "null" | "true" | "false") || is_integer(span)
}

/// `-?[0-9]+`: a leading `-` counts only when at least one digit follows.
fn is_integer(span: &str) -> bool {
    let digits = span.strip_prefix('-').unwrap_or(span);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
