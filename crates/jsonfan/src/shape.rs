//! First-level message shape classification.

use crate::token::TokenStore;

/// How a message routes, decided once per parse from the envelope's first
/// key.
///
/// The decision is purely lexical: the key must be exactly one character,
/// `f` for a function message or `n` for a node message, and nothing past
/// the key is validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `{"f": {<instance>: {<attrs>}}}` — attributes route under the
    /// instance name; `root` indexes the value object of the `f` key.
    Function {
        /// Token index of the function body object.
        root: usize,
    },
    /// `{"n": {<attrs>}}` — attribute keys are the whole topic; `root`
    /// indexes the attribute dictionary itself.
    Node {
        /// Token index of the attribute dictionary.
        root: usize,
    },
    /// Any other first key. Not an error: both cursors simply report
    /// immediate exhaustion.
    Unrecognized,
}

/// Token index of the envelope key's value object: envelope at 0, first
/// key at 1, its value at 2.
const ROOT: usize = 2;

pub(crate) fn classify<const N: usize>(store: &TokenStore<'_, N>) -> Shape {
    let Some(key) = store.token(1) else {
        return Shape::Unrecognized;
    };
    if key.span_len() != 1 {
        return Shape::Unrecognized;
    }
    match store.span(1).as_bytes().first().copied() {
        Some(b'f') => Shape::Function { root: ROOT },
        Some(b'n') => Shape::Node { root: ROOT },
        _ => Shape::Unrecognized,
    }
}
