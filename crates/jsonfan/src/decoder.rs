//! The decoder entry point and the per-message session.
//!
//! [`Decoder::parse`] tokenizes one message, classifies its shape, and
//! hands back a [`Message`] holding the token store and both cursors. The
//! message is the unit of state: pulling mutates it, and the next parse
//! builds a fresh one — nothing persists across messages.

use heapless::Vec;

use crate::{
    cursor::{FunctionCursor, NodeCursor, Pair},
    error::{ParseError, PullError},
    options::DecoderOptions,
    shape::{self, Shape},
    token::{DEFAULT_TOKEN_CAPACITY, TokenStore},
    tokenizer::{PermissiveTokenizer, Tokenizer},
};

/// Turns raw message text into [`Message`] sessions.
///
/// Reusable across messages; holds only the tokenizer and options. The
/// token capacity `N` bounds message size and nesting depth.
///
/// # Examples
///
/// ```rust
/// use jsonfan::Decoder;
///
/// let decoder = Decoder::new();
/// let mut message = decoder.parse(r#"{"n": {"battv": 3123}}"#).unwrap();
///
/// let (mut topic, mut value) = ([0u8; 48], [0u8; 96]);
/// let pair = message.pull_node(&mut topic, &mut value).unwrap().unwrap();
/// assert_eq!((pair.topic, pair.value), ("battv", "3123"));
/// ```
#[derive(Debug, Default)]
pub struct Decoder<T = PermissiveTokenizer, const N: usize = DEFAULT_TOKEN_CAPACITY> {
    tokenizer: T,
    options: DecoderOptions,
}

impl Decoder {
    /// A decoder with the permissive tokenizer, default options, and
    /// default token capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Tokenizer, const N: usize> Decoder<T, N> {
    /// A decoder over a caller-supplied tokenizer implementation.
    pub fn with_tokenizer(tokenizer: T, options: DecoderOptions) -> Self {
        Self { tokenizer, options }
    }

    /// Replaces the options, keeping the tokenizer.
    #[must_use]
    pub fn with_options(mut self, options: DecoderOptions) -> Self {
        self.options = options;
        self
    }

    /// Tokenizes and shape-classifies one message.
    ///
    /// # Errors
    ///
    /// [`ParseError::Tokenize`] when the text cannot be tokenized within
    /// capacity, and [`ParseError::Empty`] when it holds no tokens at all.
    /// An unrecognized shape is not an error; the resulting message's
    /// cursors are simply exhausted from the start.
    pub fn parse<'src>(&self, text: &'src str) -> Result<Message<'src, N>, ParseError> {
        let mut tokens = Vec::new();
        self.tokenizer.tokenize(text, &mut tokens)?;
        if tokens.is_empty() {
            return Err(ParseError::Empty);
        }
        let store = TokenStore::new(text, tokens);
        let shape = shape::classify(&store);
        Ok(Message::new(store, shape, self.options.topic_separator))
    }
}

/// One parsed message: token store, shape, and both attribute cursors.
///
/// Pulls resume attribute-by-attribute across calls without re-parsing;
/// each successful pull advances the matching cursor by exactly one
/// attribute. Dropping the message discards all of it.
#[derive(Debug)]
pub struct Message<'src, const N: usize = DEFAULT_TOKEN_CAPACITY> {
    store: TokenStore<'src, N>,
    shape: Shape,
    separator: char,
    function: FunctionCursor,
    node: NodeCursor,
}

impl<'src, const N: usize> Message<'src, N> {
    pub(crate) fn new(store: TokenStore<'src, N>, shape: Shape, separator: char) -> Self {
        let node = match shape {
            Shape::Node { root } => NodeCursor::starting_at(root + 1),
            _ => NodeCursor::starting_at(0),
        };
        Self {
            store,
            shape,
            separator,
            function: FunctionCursor::new(),
            node,
        }
    }

    /// The shape the classifier assigned to this message.
    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of token records the message tokenized into.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.store.len()
    }

    /// Pulls the next attribute of a function message.
    ///
    /// The topic is `<instance><separator><key>`, the value the canonical
    /// re-serialization of the attribute's subtree. Returns `Ok(None)`
    /// once all attributes are produced, or immediately when the message
    /// is not function-shaped; exhaustion is stable across repeated calls.
    ///
    /// # Errors
    ///
    /// [`PullError::TopicOverflow`] / [`PullError::ValueOverflow`] when a
    /// buffer is too small. The cursor does not advance, so the pull can
    /// be retried with larger buffers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonfan::Decoder;
    ///
    /// let decoder = Decoder::new();
    /// let text = r#"{"f": {"water_meter/1": {"litres": 123, "tamper": 0}}}"#;
    /// let mut message = decoder.parse(text).unwrap();
    ///
    /// let (mut topic, mut value) = ([0u8; 48], [0u8; 96]);
    /// let mut seen = 0;
    /// while let Some(pair) = message.pull_function(&mut topic, &mut value).unwrap() {
    ///     if seen == 0 {
    ///         assert_eq!((pair.topic, pair.value), ("water_meter/1/litres", "123"));
    ///     }
    ///     seen += 1;
    /// }
    /// assert_eq!(seen, 2);
    /// ```
    pub fn pull_function<'buf>(
        &mut self,
        topic: &'buf mut [u8],
        value: &'buf mut [u8],
    ) -> Result<Option<Pair<'buf>>, PullError> {
        match self.shape {
            Shape::Function { root } => {
                self.function
                    .pull(&mut self.store, root, self.separator, topic, value)
            }
            _ => Ok(None),
        }
    }

    /// Pulls the next attribute of a node message.
    ///
    /// Same contract as [`Message::pull_function`], but the attribute key
    /// alone is the topic — no prefix is prepended.
    ///
    /// # Errors
    ///
    /// See [`Message::pull_function`].
    pub fn pull_node<'buf>(
        &mut self,
        topic: &'buf mut [u8],
        value: &'buf mut [u8],
    ) -> Result<Option<Pair<'buf>>, PullError> {
        match self.shape {
            Shape::Node { root } => self.node.pull(&mut self.store, root, topic, value),
            _ => Ok(None),
        }
    }
}
