//! Allocation-free fan-out of compact JSON event messages — the kind
//! metering and sensor gateways emit — into flat (topic, value) pairs for
//! a topic-based transport.
//!
//! A message arrives in an envelope whose single first-level key selects
//! the shape: `{"f": {<instance>: {<attrs>}}}` routes each attribute under
//! the instance name (`water_meter/1/litres`), while `{"n": {<attrs>}}`
//! uses the bare attribute key as the topic. Values are re-serialized
//! canonically: unquoted stray words become quoted strings, recognized
//! literals and integers stay bare, and nested objects/arrays are
//! regenerated as strict JSON text.
//!
//! The crate is `#![no_std]` and never allocates: tokens live in a
//! fixed-capacity store and all output goes into caller-supplied buffers,
//! with exact capacity accounting and distinct overflow errors. Pulls
//! resume attribute-by-attribute across calls without re-parsing.
//!
//! # Examples
//!
//! ```rust
//! use jsonfan::Decoder;
//!
//! let decoder = Decoder::new();
//! let mut message = decoder
//!     .parse(r#"{"n": {"battv": 3123, "uptime": 12345}}"#)
//!     .unwrap();
//!
//! let (mut topic, mut value) = ([0u8; 48], [0u8; 96]);
//! while let Some(pair) = message.pull_node(&mut topic, &mut value).unwrap() {
//!     // publish(pair.topic, pair.value)
//!     assert!(!pair.topic.is_empty());
//! }
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod classify;
mod cursor;
mod decoder;
mod error;
mod options;
mod out_buffer;
mod serialize;
mod shape;
mod token;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use cursor::Pair;
pub use decoder::{Decoder, Message};
pub use error::{ParseError, PullError, TokenizeError};
pub use options::DecoderOptions;
pub use shape::Shape;
pub use token::{DEFAULT_TOKEN_CAPACITY, Token, TokenKind, TokenStore};
pub use tokenizer::{PermissiveTokenizer, Tokenizer};
