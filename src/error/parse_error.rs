use thiserror::Error;

use crate::interpreter::lexer::{Position, TokenKind};

/// Represents all errors that can occur while parsing a token stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParsingError {
    /// The lookahead token was not the one the grammar required.
    #[error("Error on {position}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually found.
        found:    TokenKind,
        /// Where the found token starts.
        position: Position,
    },
    /// An operand (an integer or a parenthesized expression) was required.
    #[error("Error on {position}: Expected integer or '(', found {found}.")]
    ExpectedOperand {
        /// The token kind actually found.
        found:    TokenKind,
        /// Where the found token starts.
        position: Position,
    },
}

impl ParsingError {
    /// Returns the token kinds that would have been accepted.
    #[must_use]
    pub fn expected(&self) -> &'static [TokenKind] {
        match self {
            Self::UnexpectedToken { expected, .. } => expected_slice(*expected),
            Self::ExpectedOperand { .. } => &[TokenKind::Integer, TokenKind::LeftParen],
        }
    }

    /// Returns the token kind that was found instead.
    #[must_use]
    pub const fn found(&self) -> TokenKind {
        match self {
            Self::UnexpectedToken { found, .. } | Self::ExpectedOperand { found, .. } => *found,
        }
    }

    /// Returns the position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::ExpectedOperand { position, .. } => *position,
        }
    }
}

const fn expected_slice(kind: TokenKind) -> &'static [TokenKind] {
    match kind {
        TokenKind::Integer => &[TokenKind::Integer],
        TokenKind::Plus => &[TokenKind::Plus],
        TokenKind::Minus => &[TokenKind::Minus],
        TokenKind::Multiply => &[TokenKind::Multiply],
        TokenKind::Divide => &[TokenKind::Divide],
        TokenKind::LeftParen => &[TokenKind::LeftParen],
        TokenKind::RightParen => &[TokenKind::RightParen],
        TokenKind::EndOfInput => &[TokenKind::EndOfInput],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_expected_and_found_kinds() {
        let err = ParsingError::UnexpectedToken { expected: TokenKind::RightParen,
                                                  found:    TokenKind::EndOfInput,
                                                  position: Position::new(1, 7), };
        assert_eq!(err.to_string(),
                   "Error on line 1, column 7: Expected ')', found end of input.");
        assert_eq!(err.expected(), &[TokenKind::RightParen]);
        assert_eq!(err.found(), TokenKind::EndOfInput);
    }

    #[test]
    fn operand_error_lists_both_alternatives() {
        let err = ParsingError::ExpectedOperand { found:    TokenKind::Plus,
                                                  position: Position::new(2, 1), };
        assert_eq!(err.to_string(),
                   "Error on line 2, column 1: Expected integer or '(', found '+'.");
        assert_eq!(err.expected(), &[TokenKind::Integer, TokenKind::LeftParen]);
    }
}
