use crate::ast::TranslationUnit;
use crate::lexer::{self, LexError, SourcePosition};
use crate::parser::{self, ParseError};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontendError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl FrontendError {
    pub fn position(&self) -> &SourcePosition {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
        }
    }
}

/// Lexes and parses one source file.
///
/// Fails on the first lexical or syntax error; no partial tree is returned.
pub fn compile_source(
    file: impl Into<Arc<str>>,
    source: &str,
) -> Result<TranslationUnit, FrontendError> {
    let tokens = lexer::lex(file, source)?;
    let unit = parser::parse(&tokens)?;
    Ok(unit)
}
