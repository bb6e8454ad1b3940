use thiserror::Error;

/// Lexical errors.
///
/// Raised by the scanner for characters that cannot start a token and for
/// integer literals that do not fit the host integer type.
pub mod lexical_error;
/// Parsing errors.
///
/// Raised by the parser when the lookahead token does not fit the grammar.
pub mod parse_error;
/// Runtime errors.
///
/// Raised by the evaluator. Division by zero is the only one.
pub mod runtime_error;

pub use lexical_error::LexicalError;
pub use parse_error::ParsingError;
pub use runtime_error::RuntimeError;

/// Crate-level result type returned by [`crate::evaluate`] and
/// [`crate::parse`].
pub type Result<T> = std::result::Result<T, Error>;

/// Any error an evaluation can end with.
///
/// Every call fails with exactly one of these; there are no partial results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source contains text that is not a token.
    #[error(transparent)]
    Lexical(#[from] LexicalError),
    /// The tokens do not form a single well-formed expression.
    #[error(transparent)]
    Parsing(#[from] ParsingError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns `true` if this is a division by zero.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::Runtime(RuntimeError::DivisionByZero { .. }))
    }
}
