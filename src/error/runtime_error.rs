use thiserror::Error;

use crate::interpreter::lexer::Position;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// The right operand of a division evaluated to zero.
    #[error("Error on {position}: Division by zero.")]
    DivisionByZero {
        /// Position of the `/` operator.
        position: Position,
    },
}
