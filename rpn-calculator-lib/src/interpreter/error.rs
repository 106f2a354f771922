use crate::interpreter::operator::BinaryOperator;
use thiserror::Error;

/// Everything that can go wrong while converting or evaluating an expression.
///
/// Positions are zero-based character offsets into the infix expression,
/// indices are zero-based offsets into the postfix token sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    #[error("unbalanced parentheses: '{parenthesis}' at position {position} has no match")]
    UnbalancedParentheses { parenthesis: char, position: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("malformed number '{literal}' at position {position}")]
    MalformedNumber { literal: String, position: usize },

    #[error("operator '{operator}' at token {index} needs two operands, found {found}")]
    InsufficientOperands {
        operator: BinaryOperator,
        index: usize,
        found: usize,
    },

    #[error("expected exactly one value after evaluation, found {found}")]
    TooManyOperands { found: usize },

    #[error("division by zero at token {index}")]
    DivisionByZero { index: usize },
}
