use std::fmt;

/// The result of evaluating an expression.
///
/// Integer arithmetic stays exact for as long as it can. A division whose
/// quotient is not a whole number, or an integer operation that would
/// overflow, produces a `Real` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// An exact 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point value.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<Number> for f64 {
    fn from(n: Number) -> Self {
        n.as_f64()
    }
}

impl Number {
    /// Converts the number to an `f64`.
    ///
    /// Integers beyond 2^53 lose precision.
    ///
    /// # Example
    /// ```
    /// use reckon::Number;
    ///
    /// assert_eq!(Number::Integer(7).as_f64(), 7.0);
    /// assert_eq!(Number::Real(3.5).as_f64(), 3.5);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Returns the integer value, if this is an exact integer.
    #[must_use]
    pub const fn as_integer(self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(n),
            Self::Real(_) => None,
        }
    }

    /// Returns `true` for an integer zero or a real that compares equal to
    /// zero (including `-0.0`).
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Returns `true` if the value is an exact integer.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_check_covers_both_representations() {
        assert!(Number::Integer(0).is_zero());
        assert!(Number::Real(0.0).is_zero());
        assert!(Number::Real(-0.0).is_zero());
        assert!(!Number::Real(1e-300).is_zero());
        assert!(!Number::Integer(-1).is_zero());
    }

    #[test]
    fn displays_without_type_decoration() {
        assert_eq!(Number::Integer(-42).to_string(), "-42");
        assert_eq!(Number::Real(3.5).to_string(), "3.5");
        assert_eq!(Number::Real(0.125).to_string(), "0.125");
    }

    #[test]
    fn converts_to_f64() {
        assert_eq!(f64::from(Number::Integer(22)), 22.0);
        assert_eq!(Number::from(2.5).as_integer(), None);
        assert_eq!(Number::from(9).as_integer(), Some(9));
    }
}
