use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

impl BinaryOperator {
    /// Looks up the operator written as `symbol`, if there is one.
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            '^' => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Exponentiate => '^',
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
            BinaryOperator::Exponentiate => 3,
        }
    }

    /// Operators group to the left, exponentiation included, so an operator
    /// on the stack is applied first whenever it binds at least as tightly.
    pub(crate) fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Computes `left OP right`.
    ///
    /// Division is plain floating point division, a zero divisor has to be
    /// rejected by the caller.
    pub fn evaluate(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
            BinaryOperator::Exponentiate => f64::powf(left, right),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
