use super::position::SourcePosition;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("{position}: unexpected character: {ch:?}")]
    UnexpectedChar { ch: char, position: SourcePosition },
    #[error("{position}: identifier is {length} bytes long, the limit is {limit}")]
    IdentifierTooLong {
        length: usize,
        limit: usize,
        position: SourcePosition,
    },
}

impl LexError {
    pub fn position(&self) -> &SourcePosition {
        match self {
            Self::UnexpectedChar { position, .. } | Self::IdentifierTooLong { position, .. } => {
                position
            }
        }
    }
}
