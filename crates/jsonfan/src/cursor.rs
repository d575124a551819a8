//! Attribute cursors: stateful per-message iterators yielding one
//! (topic, value) pair per pull.
//!
//! Both cursors share the same emit step — copy the attribute key into the
//! topic buffer, re-serialize the value subtree into the value buffer,
//! advance past the consumed records. They differ only in topic prefixing:
//! the function cursor prepends the function-instance name and a
//! separator, the node cursor emits the bare key. Buffer overflow leaves
//! the cursor unadvanced so the identical pull can be retried.

use crate::{error::PullError, out_buffer::OutBuffer, serialize, token::TokenStore};

/// One flattened attribute: topic text and canonical value text, both
/// views into the buffers the caller passed to the pull.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<'buf> {
    /// Topic path text, e.g. `water_meter/1/litres` or `battv`.
    pub topic: &'buf str,
    /// Canonical value text, e.g. `123`, `"on"`, or `{"a": 1}`.
    pub value: &'buf str,
}

/// Iterates the attribute object nested inside a function body:
/// `{<instance>: {<key>: <value>, ...}}`.
///
/// The instance-name prefix length and the first attribute's token index
/// are resolved lazily on the first pull and reused for the rest of the
/// message.
#[derive(Debug)]
pub(crate) struct FunctionCursor {
    next_token: usize,
    next_ordinal: usize,
    prefix_len: Option<usize>,
}

impl FunctionCursor {
    pub(crate) const fn new() -> Self {
        Self {
            next_token: 0,
            next_ordinal: 0,
            prefix_len: None,
        }
    }

    pub(crate) fn pull<'buf, const N: usize>(
        &mut self,
        store: &mut TokenStore<'_, N>,
        root: usize,
        separator: char,
        topic: &'buf mut [u8],
        value: &'buf mut [u8],
    ) -> Result<Option<Pair<'buf>>, PullError> {
        // Layout inside the function body: root is `{<instance>: {...}}`,
        // the instance name sits at root+1, the attribute dictionary at
        // root+2, and its first key at root+3.
        if store.token(root + 1).is_none() {
            return Ok(None);
        }
        let name = store.span(root + 1);
        if self.prefix_len.is_none() {
            self.prefix_len = Some(name.len() + separator.len_utf8());
            self.next_token = root + 3;
        }
        let Some(dict) = store.token(root + 2) else {
            return Ok(None);
        };
        if self.next_ordinal >= dict.children {
            return Ok(None);
        }
        let key_index = self.next_token;
        match emit(store, key_index, Some((name, separator)), topic, value)? {
            Some((pair, consumed)) => {
                self.next_token = key_index + 1 + consumed;
                self.next_ordinal += 1;
                Ok(Some(pair))
            }
            None => Ok(None),
        }
    }
}

/// Iterates a flat attribute dictionary; the key alone is the topic.
#[derive(Debug)]
pub(crate) struct NodeCursor {
    next_token: usize,
    next_ordinal: usize,
}

impl NodeCursor {
    pub(crate) const fn starting_at(next_token: usize) -> Self {
        Self {
            next_token,
            next_ordinal: 0,
        }
    }

    pub(crate) fn pull<'buf, const N: usize>(
        &mut self,
        store: &mut TokenStore<'_, N>,
        root: usize,
        topic: &'buf mut [u8],
        value: &'buf mut [u8],
    ) -> Result<Option<Pair<'buf>>, PullError> {
        let Some(dict) = store.token(root) else {
            return Ok(None);
        };
        if self.next_ordinal >= dict.children {
            return Ok(None);
        }
        let key_index = self.next_token;
        match emit(store, key_index, None, topic, value)? {
            Some((pair, consumed)) => {
                self.next_token = key_index + 1 + consumed;
                self.next_ordinal += 1;
                Ok(Some(pair))
            }
            None => Ok(None),
        }
    }
}

/// Copies the key (optionally prefixed) into `topic` and the canonical
/// value text into `value`; returns the pair and the number of value
/// records consumed. A key with no value subtree yields `null` and
/// consumes nothing beyond the key itself.
fn emit<'buf, const N: usize>(
    store: &mut TokenStore<'_, N>,
    key_index: usize,
    prefix: Option<(&str, char)>,
    topic: &'buf mut [u8],
    value: &'buf mut [u8],
) -> Result<Option<(Pair<'buf>, usize)>, PullError> {
    let Some(key) = store.token(key_index) else {
        return Ok(None);
    };
    let key_span = store.span(key_index);

    let mut topic_out = OutBuffer::new(topic);
    if let Some((name, separator)) = prefix {
        topic_out
            .push_str(name)
            .map_err(|_| PullError::TopicOverflow)?;
        topic_out
            .push_char(separator)
            .map_err(|_| PullError::TopicOverflow)?;
    }
    topic_out
        .push_str(key_span)
        .map_err(|_| PullError::TopicOverflow)?;

    let mut value_out = OutBuffer::new(value);
    let consumed = if key.children > 0 {
        let budget = store.len().saturating_sub(key_index + 1);
        let (text, tokens) = store.parts_mut();
        serialize::write_value(&mut value_out, text, tokens, key_index + 1, budget)
            .map_err(|_| PullError::ValueOverflow)?
    } else {
        value_out
            .push_str("null")
            .map_err(|_| PullError::ValueOverflow)?;
        0
    };

    Ok(Some((
        Pair {
            topic: topic_out.into_str(),
            value: value_out.into_str(),
        },
        consumed,
    )))
}
