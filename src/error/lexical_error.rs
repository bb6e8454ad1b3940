use thiserror::Error;

use crate::interpreter::lexer::Position;

/// Represents all errors that can occur while scanning source text.
///
/// The scanner stops at the first error; no partial token stream is kept.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexicalError {
    /// A character that cannot start any token.
    #[error("Error on {position}: Unknown character '{character}'.")]
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears in the source.
        position:  Position,
    },
    /// A run of digits too large to be represented as an integer.
    #[error("Error on {position}: Integer literal {literal} is too large.")]
    LiteralTooLarge {
        /// The digits as written in the source.
        literal:  String,
        /// Where the literal starts in the source.
        position: Position,
    },
}

impl LexicalError {
    /// Returns the position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnknownCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
        }
    }
}
