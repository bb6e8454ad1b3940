//! # reckon
//!
//! reckon evaluates integer arithmetic expressions written in Rust.
//! It scans, parses and evaluates a single expression built from
//! non-negative integer literals, `+`, `-`, `*`, `/` and parentheses, with
//! the usual precedence and left-associativity.
//!
//! ```
//! use reckon::{Number, evaluate};
//!
//! assert_eq!(evaluate("2 + 3 * 4").unwrap(), Number::Integer(14));
//! assert_eq!(evaluate("7 / 2").unwrap(), Number::Real(3.5));
//! assert!(evaluate("10 / (5 - 5)").unwrap_err().is_division_by_zero());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::{
    ast::Expr,
    error::{Error, Result},
    interpreter::value::number::Number,
};
use crate::interpreter::{evaluator::core::Evaluator, parser::core::Parser};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` it applies.
/// The tree is built by the parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the two node shapes: literals and binary operations.
/// - Attaches source positions to nodes for error reporting.
/// - Renders trees as S-expressions or as an indented dump.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// Each phase has its own error enum; [`error::Error`] wraps them so one
/// `Result` type covers a whole evaluation.
///
/// # Responsibilities
/// - Defines lexical, parsing and runtime errors.
/// - Attaches line and column numbers to every error.
pub mod error;
/// Orchestrates the pipeline that turns source text into a number.
///
/// # Responsibilities
/// - Scanner, parser, evaluator and the numeric value type.
/// - Flow of data and errors between the phases.
pub mod interpreter;

/// Evaluates a single arithmetic expression.
///
/// Every call builds its own scanner, parser and evaluator, so concurrent
/// calls share nothing. The result is all-or-nothing: a number or exactly
/// one error.
///
/// # Errors
/// - [`Error::Lexical`] for a character that is not a digit, whitespace,
///   operator or parenthesis, or for an integer literal too large for `i64`.
/// - [`Error::Parsing`] when the tokens do not form exactly one expression.
/// - [`Error::Runtime`] on division by zero.
///
/// # Examples
/// ```
/// use reckon::{Error, Number, evaluate};
///
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), Number::Integer(20));
/// assert_eq!(evaluate("8 - 3 - 2").unwrap(), Number::Integer(3));
///
/// // '$' is not part of the language.
/// assert!(matches!(evaluate("2 + $"), Err(Error::Lexical(_))));
/// ```
pub fn evaluate(source: &str) -> Result<Number> {
    debug!(source, "evaluating expression");
    let expr = parse(source)?;
    let value = Evaluator::new().eval(&expr)?;
    debug!(%value, "evaluated expression");
    Ok(value)
}

/// Parses a single arithmetic expression without evaluating it.
///
/// # Errors
/// Returns [`Error::Lexical`] or [`Error::Parsing`] under the same
/// conditions as [`evaluate`].
///
/// # Examples
/// ```
/// let tree = reckon::parse("8 - 3 - 2").unwrap();
/// assert_eq!(tree.to_string(), "(- (- 8 3) 2)");
/// ```
pub fn parse(source: &str) -> Result<Expr> {
    Parser::new(source)?.parse()
}
