/// Core parsing state and the token consumption primitive.
///
/// Holds the [`core::Parser`] type, its single token of lookahead and the
/// public entry points used to parse a full expression.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: additive (`+`,
/// `-`) and multiplicative (`*`, `/`), with one pair of open levels per
/// enclosing parenthesis.
pub mod binary;

/// Primary expression parsing.
///
/// Parses the start of an operand: an integer literal or the `(` opening a
/// parenthesized sub-expression.
pub mod primary;
