use crate::lexer::{SourcePosition, TokenKind};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// What a production was looking for when it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    Identifier,
    TypeSpecifier,
    Statement,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{position}: expected {}, but got {found}", ExpectedList(.expected))]
    UnexpectedToken {
        expected: Vec<Expected>,
        found: TokenKind,
        position: SourcePosition,
    },
    #[error("{position}: reached unexpected end of input, expected {}", ExpectedList(.expected))]
    UnexpectedEndOfInput {
        expected: Vec<Expected>,
        position: SourcePosition,
    },
    #[error("{position}: expression nests more than {limit} `+` operators")]
    ExpressionTooDeep {
        limit: usize,
        position: SourcePosition,
    },
    #[error("{position}: lookahead of {requested} tokens requested, the limit is {limit}")]
    LookaheadExceeded {
        requested: usize,
        limit: usize,
        position: SourcePosition,
    },
}

impl ParseError {
    pub fn position(&self) -> &SourcePosition {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::ExpressionTooDeep { position, .. }
            | Self::LookaheadExceeded { position, .. } => position,
        }
    }

    pub fn expected(&self) -> &[Expected] {
        match self {
            Self::UnexpectedToken { expected, .. } | Self::UnexpectedEndOfInput { expected, .. } => {
                expected.as_slice()
            }
            Self::ExpressionTooDeep { .. } | Self::LookaheadExceeded { .. } => &[],
        }
    }
}

impl From<TokenKind> for Expected {
    fn from(kind: TokenKind) -> Self {
        Self::Token(kind)
    }
}

impl Display for Expected {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{kind}"),
            Self::Identifier => write!(f, "identifier"),
            Self::TypeSpecifier => write!(f, "type specifier"),
            Self::Statement => write!(f, "statement"),
        }
    }
}

struct ExpectedList<'a>(&'a [Expected]);

impl Display for ExpectedList<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.0 {
            [] => write!(f, "nothing"),
            [only] => write!(f, "{only}"),
            [init @ .., last] => {
                for (i, e) in init.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{e}")?;
                }
                write!(f, " or {last}")
            }
        }
    }
}
