use crate::lexer::{SourcePosition, Token, TokenBuffer, TokenKind};
use crate::parser::{Expected, ParseError, Result};

/// Number of tokens, the current one included, the parser may inspect.
///
/// Toplevel disambiguation needs `type IDENTIFIER '('`.
pub const MAX_LOOKAHEAD: usize = 3;

#[derive(Debug)]
pub struct Cursor<'a> {
    tokens: &'a TokenBuffer,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenBuffer) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.position
    }

    /// Returns the current token and advances past it.
    ///
    /// Once every token has been consumed this keeps returning `None`
    /// without moving the cursor.
    pub fn get(&mut self) -> Option<&'a Token> {
        if self.position >= self.tokens.len() {
            return None;
        }
        let token = self.tokens.get(self.position);
        self.position += 1;
        token
    }

    pub fn peek(&self) -> Option<&'a Token> {
        if self.position >= self.tokens.len() {
            return None;
        }
        self.tokens.get(self.position)
    }

    /// Peeks `n` tokens ahead; `peek_nth(0)` is [`peek`](Self::peek).
    pub fn peek_nth(&self, n: usize) -> Result<Option<&'a Token>> {
        if n >= MAX_LOOKAHEAD {
            return Err(ParseError::LookaheadExceeded {
                requested: n + 1,
                limit: MAX_LOOKAHEAD,
                position: self.current_position().clone(),
            });
        }
        Ok(self.tokens.get(self.position + n))
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Position of the next token, or the end of the source once exhausted.
    pub fn current_position(&self) -> &'a SourcePosition {
        self.peek()
            .map_or_else(|| self.tokens.end_position(), |t| &t.position)
    }

    pub fn bump_if(&mut self, kind: &TokenKind) -> bool {
        let condition = self.peek().is_some_and(|t| &t.kind == kind);
        if condition {
            self.position += 1;
        }
        condition
    }

    pub fn peek_is(&self, kind: &TokenKind) -> bool {
        self.peek().is_some_and(|t| &t.kind == kind)
    }

    pub fn peek_or_error(&self, expected: &[Expected]) -> Result<&'a Token> {
        self.peek()
            .ok_or_else(|| ParseError::UnexpectedEndOfInput {
                expected: expected.to_vec(),
                position: self.tokens.end_position().clone(),
            })
    }

    /// Consumes the next token if it matches `kind`.
    ///
    /// On mismatch the cursor is left on the offending token.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token> {
        let expected = [Expected::from(kind.clone())];
        let next = self.peek_or_error(&expected)?;
        if &next.kind == kind {
            self.position += 1;
            Ok(next)
        } else {
            Err(unexpected(expected.to_vec(), next))
        }
    }

    /// Consumes an identifier and returns its text.
    pub fn expect_identifier(&mut self) -> Result<&'a str> {
        let next = self.peek_or_error(&[Expected::Identifier])?;
        if let TokenKind::Identifier(name) = &next.kind {
            self.position += 1;
            Ok(name.as_str())
        } else {
            Err(unexpected(vec![Expected::Identifier], next))
        }
    }
}

pub(super) fn unexpected(expected: Vec<Expected>, found: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        expected,
        found: found.kind.clone(),
        position: found.position.clone(),
    }
}

#[cfg(test)]
mod cursor_tests {
    use super::*;
    use crate::lexer::lex;

    fn buffer(input: &str) -> TokenBuffer {
        lex("test.c", input).unwrap()
    }

    #[test]
    fn test_empty_buffer() {
        let tokens = buffer("");
        let mut cursor = Cursor::new(&tokens);
        assert!(cursor.at_end());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.get(), None);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_no_read_past_last_token() {
        let tokens = buffer("int x ;");
        let mut cursor = Cursor::new(&tokens);
        cursor.get();
        cursor.get();
        // positioned exactly at the last valid index
        assert_eq!(cursor.peek().map(|t| &t.kind), Some(&TokenKind::Semicolon));
        assert_eq!(cursor.get().map(|t| &t.kind), Some(&TokenKind::Semicolon));
        // index == len: nothing left
        assert_eq!(cursor.index(), tokens.len());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.get(), None);
        assert_eq!(cursor.get(), None);
        assert_eq!(cursor.index(), tokens.len());
    }

    #[test]
    fn test_peek_does_not_advance() {
        let tokens = buffer("int x");
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.peek(), cursor.peek());
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.get().map(|t| &t.kind), Some(&TokenKind::Int));
    }

    #[test]
    fn test_bounded_lookahead() {
        let tokens = buffer("int f ( ) ;");
        let cursor = Cursor::new(&tokens);
        assert_eq!(
            cursor.peek_nth(2).unwrap().map(|t| &t.kind),
            Some(&TokenKind::OpenParanth)
        );
        assert!(matches!(
            cursor.peek_nth(3),
            Err(ParseError::LookaheadExceeded {
                requested: 4,
                limit: MAX_LOOKAHEAD,
                ..
            })
        ));
    }

    #[test]
    fn test_expect_keeps_cursor_on_mismatch() {
        let tokens = buffer("int )");
        let mut cursor = Cursor::new(&tokens);
        assert!(cursor.expect(&TokenKind::Int).is_ok());
        let err = cursor.expect_identifier().unwrap_err();
        assert_eq!(err.position(), &SourcePosition::new("test.c", 1, 5));
        assert_eq!(cursor.index(), 1);
        assert!(cursor.bump_if(&TokenKind::CloseParanth));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_end_position_when_exhausted() {
        let tokens = buffer("int\n");
        let mut cursor = Cursor::new(&tokens);
        cursor.get();
        let err = cursor.expect(&TokenKind::Semicolon).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedEndOfInput {
                expected: vec![Expected::Token(TokenKind::Semicolon)],
                position: SourcePosition::new("test.c", 2, 1),
            }
        );
    }
}
