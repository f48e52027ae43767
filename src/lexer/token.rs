use super::lexer_error::LexError;
use super::position::SourcePosition;
use std::fmt;
use std::ops::Deref;

/// Token with attached source position.
///
/// Derefs to its [`TokenKind`], so `*token == TokenKind::Int` and
/// `token.is_type_specifier()` work directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: SourcePosition,
}

/// Basic token type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// any non-keyword word (function names, parameter names, ..)
    Identifier(String),
    /// int keyword
    Int,
    /// return keyword
    Return,
    /// (
    OpenParanth,
    /// )
    CloseParanth,
    /// {
    OpenCurly,
    /// }
    CloseCurly,
    /// +
    Plus,
    /// ;
    Semicolon,
    /// ,
    Comma,
}

impl Token {
    pub fn new(kind: TokenKind, position: SourcePosition) -> Self {
        Self { kind, position }
    }
}

impl Deref for Token {
    type Target = TokenKind;
    fn deref(&self) -> &Self::Target {
        &self.kind
    }
}

impl TokenKind {
    #[inline]
    pub fn is_type_specifier(&self) -> bool {
        matches!(self, Self::Int)
    }

    #[inline]
    pub fn is_identifier(&self) -> bool {
        matches!(self, Self::Identifier(_))
    }

    /// Spelling used when dumping the token stream for inspection.
    pub fn tag_name(&self) -> String {
        let name = match self {
            Self::Identifier(name) => return format!("TOK_IDENTIFIER({name})"),
            Self::Int => "TOK_INT",
            Self::Return => "TOK_RETURN",
            Self::OpenParanth => "TOK_OPEN_PARENS",
            Self::CloseParanth => "TOK_CLOSE_PARENS",
            Self::OpenCurly => "TOK_OPEN_BRACE",
            Self::CloseCurly => "TOK_CLOSE_BRACE",
            Self::Plus => "TOK_PLUS",
            Self::Semicolon => "TOK_SEMICOLON",
            Self::Comma => "TOK_COMMA",
        };
        name.to_owned()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "identifier `{name}`"),
            Self::Int => write!(f, "`int`"),
            Self::Return => write!(f, "`return`"),
            Self::OpenParanth => write!(f, "`(`"),
            Self::CloseParanth => write!(f, "`)`"),
            Self::OpenCurly => write!(f, "`{{`"),
            Self::CloseCurly => write!(f, "`}}`"),
            Self::Plus => write!(f, "`+`"),
            Self::Semicolon => write!(f, "`;`"),
            Self::Comma => write!(f, "`,`"),
        }
    }
}

/// Single-character punctuation. The position is only used for the error.
impl TryFrom<(char, &SourcePosition)> for TokenKind {
    type Error = LexError;
    fn try_from((c, position): (char, &SourcePosition)) -> Result<Self, LexError> {
        match c {
            '(' => Ok(Self::OpenParanth),
            ')' => Ok(Self::CloseParanth),
            '{' => Ok(Self::OpenCurly),
            '}' => Ok(Self::CloseCurly),
            '+' => Ok(Self::Plus),
            ';' => Ok(Self::Semicolon),
            ',' => Ok(Self::Comma),
            _ => Err(LexError::UnexpectedChar {
                ch: c,
                position: position.clone(),
            }),
        }
    }
}

impl From<&str> for TokenKind {
    fn from(s: &str) -> Self {
        match s {
            "int" => Self::Int,
            "return" => Self::Return,
            _ => Self::Identifier(s.to_owned()),
        }
    }
}
