mod cursor;
mod lexer_error;
mod position;
mod token;

use cursor::Cursor;
pub use lexer_error::LexError;
pub use position::SourcePosition;
use std::sync::Arc;
pub use token::{Token, TokenKind};

pub type Result<T> = std::result::Result<T, LexError>;

/// Longest identifier or keyword accepted by default, in bytes.
pub const DEFAULT_MAX_IDENTIFIER_LEN: usize = 1023;

/// Every token of one source file, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
    end: SourcePosition,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>, end: SourcePosition) -> Self {
        Self { tokens, end }
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

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Position just past the last character of the source.
    pub fn end_position(&self) -> &SourcePosition {
        &self.end
    }
}

impl<'a> IntoIterator for &'a TokenBuffer {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;
    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[inline]
fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    max_identifier_len: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(file: impl Into<Arc<str>>, source: &'a str) -> Self {
        let start = SourcePosition::start_of(file);
        Self {
            cursor: Cursor::new(source, start),
            max_identifier_len: DEFAULT_MAX_IDENTIFIER_LEN,
        }
    }

    #[must_use]
    pub fn with_max_identifier_len(mut self, limit: usize) -> Self {
        self.max_identifier_len = limit;
        self
    }

    /// Scans the next token. `Ok(None)` marks the end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.cursor.skip_whitespaces();
        let Some(c) = self.cursor.peek() else {
            return Ok(None);
        };

        let token = match c {
            c if c.is_ascii_alphabetic() => self.lex_identifier()?,
            c => {
                let position = self.cursor.position().clone();
                let kind = TokenKind::try_from((c, &position))?;
                self.cursor.take();
                Token::new(kind, position)
            }
        };

        tracing::trace!("lexed {} at {}", token.tag_name(), token.position);
        Ok(Some(token))
    }

    fn lex_identifier(&mut self) -> Result<Token> {
        let position = self.cursor.position().clone();
        let rest = self.cursor.as_str();
        let length = rest
            .find(|c: char| !is_identifier_char(c))
            .unwrap_or(rest.len());

        if length > self.max_identifier_len {
            return Err(LexError::IdentifierTooLong {
                length,
                limit: self.max_identifier_len,
                position,
            });
        }

        let word = &rest[..length];
        // identifier characters are ascii, one byte per char
        for _ in 0..length {
            self.cursor.take();
        }
        Ok(Token::new(TokenKind::from(word), position))
    }

    pub fn lex(mut self) -> Result<TokenBuffer> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        let end = self.cursor.position().clone();
        tracing::debug!("lexed {} tokens from {}", tokens.len(), end.file);
        Ok(TokenBuffer::new(tokens, end))
    }
}

pub fn lex(file: impl Into<Arc<str>>, source: &str) -> Result<TokenBuffer> {
    Lexer::new(file, source).lex()
}
