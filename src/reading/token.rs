use std::fmt;
use std::ops::Deref;

use super::tokenizer::tokenize_text;

/// One whitespace-delimited word of the input, kept verbatim.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered tokens of one reading session.
///
/// Built once from the input text and never mutated afterwards; a new session
/// builds a new stream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: tokenize_text(text),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Tokens `[cursor, cursor + size)`, truncated at the end of the stream.
    pub fn window(&self, cursor: usize, size: usize) -> &[Token] {
        let start = cursor.min(self.tokens.len());
        let end = cursor.saturating_add(size).min(self.tokens.len());
        &self.tokens[start..end]
    }

    /// The chunk string at `cursor`: up to `size` tokens joined by single spaces.
    pub fn chunk(&self, cursor: usize, size: usize) -> String {
        self.window(cursor, size)
            .iter()
            .map(Token::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}
