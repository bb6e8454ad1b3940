/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`] and the tree walk that reduces an
/// expression to a single number.
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to two numbers, keeping integer results
/// exact where possible and reporting division by zero.
pub mod binary;
