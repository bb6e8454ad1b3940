/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator walks the AST in post-order: both operands of a binary node
/// are evaluated before the operator is applied.
///
/// # Responsibilities
/// - Evaluates literals and binary operations.
/// - Keeps integer results exact and switches to reals when needed.
/// - Reports division by zero with the position of the offending operator.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The scanner reads the raw source text and produces tokens on demand:
/// integer literals, the four operators and parentheses, followed by an
/// end-of-input token that repeats forever.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Skips whitespace.
/// - Reports lexical errors for characters that cannot start a token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A predictive parser with one token of lookahead. Precedence and
/// left-associativity follow from the grammar's two rule levels, without an
/// operator table. Parenthesized groups open a new level on an explicit
/// stack rather than a recursive call.
///
/// # Responsibilities
/// - Converts tokens into a tree of literal and binary nodes.
/// - Validates the grammar, reporting what was expected and what was found.
pub mod parser;
/// The value module defines the numeric result type.
///
/// # Responsibilities
/// - Defines [`value::number::Number`], an exact integer or a real.
/// - Provides conversion and zero checks used by the evaluator.
pub mod value;
