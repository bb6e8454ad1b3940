/// The numeric result type.
///
/// Defines [`number::Number`], which is either an exact integer or a real.
/// Evaluation starts from integer literals and only moves to reals when an
/// exact integer result is impossible.
pub mod number;
