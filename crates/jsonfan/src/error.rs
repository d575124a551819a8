//! Error types. Every failure is local to one message or one pull; there
//! is no fatal state, and a failed pull leaves the cursor where it was.

use thiserror::Error;

/// Tokenization failure, surfaced through [`ParseError::Tokenize`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizeError {
    /// The message needs more token records than the fixed capacity holds.
    #[error("token capacity exceeded")]
    TokenOverflow,
    /// The text ends in the middle of a token.
    #[error("message text ends inside a token")]
    Partial,
    /// Structurally impossible input, such as an unbalanced closer.
    #[error("unbalanced or misplaced structural character")]
    Malformed,
}

/// Failure to turn message text into a [`crate::Message`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The tokenizer rejected the text.
    #[error("tokenize error: {0}")]
    Tokenize(#[from] TokenizeError),
    /// The tokenizer produced no records at all.
    #[error("message contained no tokens")]
    Empty,
}

/// Failure of one cursor pull. Distinct from exhaustion, which is
/// `Ok(None)`: an overflow leaves the cursor unadvanced, so the same pull
/// can be retried with a larger buffer or the message abandoned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullError {
    /// The attribute's canonical value text does not fit the value buffer.
    /// No partial output is exposed.
    #[error("canonical value does not fit the value buffer")]
    ValueOverflow,
    /// The topic (prefix plus key) does not fit the topic buffer.
    #[error("topic does not fit the topic buffer")]
    TopicOverflow,
}
