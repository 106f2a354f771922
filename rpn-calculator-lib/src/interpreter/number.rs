use std::fmt;
use std::fmt::Formatter;

/// The result of evaluating an expression.
///
/// Results without a fractional part collapse into [`Number::Integer`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

// 2^63, the first value past i64::MAX that f64 can represent exactly.
const INTEGER_LIMIT: f64 = 9_223_372_036_854_775_808.0;

impl Number {
    /// Wraps a computed value, collapsing it into an integer if it is integral
    /// and fits into an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rpn_calculator::Number;
    ///
    /// assert_eq!(Number::from_f64(757.0), Number::Integer(757));
    /// assert_eq!(Number::from_f64(50.25), Number::Float(50.25));
    /// ```
    pub fn from_f64(value: f64) -> Number {
        if value.is_finite()
            && value.fract() == 0.0
            && (-INTEGER_LIMIT..INTEGER_LIMIT).contains(&value)
        {
            Number::Integer(value as i64)
        } else {
            Number::Float(value)
        }
    }

}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(value) => write!(f, "{}", value),
            Number::Float(value) => write!(f, "{}", value),
        }
    }
}
