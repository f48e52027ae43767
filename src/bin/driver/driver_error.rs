use picocc::lexer::LexError;
use picocc::parser::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("file {0} does not exist")]
    InputFileDoesNotExist(String),
    #[error(transparent)]
    Lexer(#[from] LexError),
    #[error(transparent)]
    Parser(#[from] ParseError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
