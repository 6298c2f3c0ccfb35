use std::fmt;

/// Represents a numeric value in the calculator.
///
/// Literals written without a decimal point become `Integer`, literals with
/// one become `Real`. An operation with at least one `Real` operand produces a
/// `Real`; only `Integer` with `Integer` stays integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl Number {
    /// Returns `true` for the `Real` variant.
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(_))
    }

    /// Returns the value as an `f64`.
    ///
    /// Integers beyond 2^53 are rounded to the nearest representable real,
    /// which is the promotion mixed integer/real arithmetic relies on.
    ///
    /// # Example
    /// ```
    /// use rpncalc::Number;
    ///
    /// assert_eq!(Number::Integer(3).as_real(), 3.0);
    /// assert_eq!(Number::Real(0.5).as_real(), 0.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Returns the integer payload, or `None` for reals.
    #[must_use]
    pub const fn as_integer(self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(n),
            Self::Real(_) => None,
        }
    }
}

/// Integers print as-is. Reals use the shortest representation that
/// round-trips, with a trailing `.0` when integral (`2.0`, `0.25`).
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
