use crate::interpreter::error::CalculatorError;
use crate::interpreter::number::Number;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

/// Evaluates a postfix token sequence with a value stack.
///
/// # Arguments
///
/// * `tokens`: The tokens to evaluate, in postfix order.
///
/// returns: The single value left on the stack, collapsed to an integer if it
/// has no fractional part.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::evaluator::evaluate;
/// use rpn_calculator::interpreter::token::Token;
/// use rpn_calculator::Number;
///
/// let tokens = ["1", "2", "3", "*", "+"]
///     .iter()
///     .map(|token| token.parse())
///     .collect::<Result<Vec<Token>, _>>()?;
/// assert_eq!(evaluate(tokens)?, Number::Integer(7));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(tokens: Vec<Token>) -> Result<Number, CalculatorError> {
    let mut values: Vec<f64> = Vec::with_capacity(tokens.len());

    for (index, token) in tokens.into_iter().enumerate() {
        match token {
            Token::Literal(literal) => values.push(literal.value()),
            Token::Operator(operator) => {
                let (left, right) = pop_operands(&mut values, operator, index)?;
                if operator == BinaryOperator::Divide && right == 0.0 {
                    return Err(CalculatorError::DivisionByZero { index });
                }
                values.push(operator.evaluate(left, right));
            }
        }
        trace!("stack after token {}: {:?}", index, values);
    }

    match values.as_slice() {
        [result] => Ok(Number::from_f64(*result)),
        _ => Err(CalculatorError::TooManyOperands {
            found: values.len(),
        }),
    }
}

/// Pops the right operand, then the left one.
fn pop_operands(
    values: &mut Vec<f64>,
    operator: BinaryOperator,
    index: usize,
) -> Result<(f64, f64), CalculatorError> {
    let insufficient = |found| CalculatorError::InsufficientOperands {
        operator,
        index,
        found,
    };
    let right = values.pop().ok_or_else(|| insufficient(0))?;
    let left = values.pop().ok_or_else(|| insufficient(1))?;
    Ok((left, right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    fn postfix(tokens: &[&str]) -> Vec<Token> {
        tokens.iter().map(|token| token.parse().unwrap()).collect()
    }

    #[parameterized(
        tokens = {
            &["1", "2", "3", "*", "+"],
            &["10", "4", "-"],
            &["2", "3", "^", "2", "^"],
            &["-4", "2", "^"],
            &["7"],
        },
        expected = { 7, 6, 64, 16, 7 }
    )]
    fn postfix_expression_evaluates_to_integer(tokens: &[&str], expected: i64) {
        assert_eq!(evaluate(postfix(tokens)).unwrap(), Number::Integer(expected))
    }

    #[test]
    fn first_popped_value_is_right_operand() {
        let result = evaluate(postfix(&["1", "4", "/"])).unwrap();
        assert_eq!(result, Number::Float(0.25))
    }

    #[test]
    fn lone_operator_has_insufficient_operands() {
        let error = evaluate(postfix(&["+"])).unwrap_err();
        assert_eq!(
            error,
            CalculatorError::InsufficientOperands {
                operator: BinaryOperator::Add,
                index: 0,
                found: 0
            }
        )
    }

    #[test]
    fn operator_with_one_operand_has_insufficient_operands() {
        let error = evaluate(postfix(&["3", "*"])).unwrap_err();
        assert_eq!(
            error,
            CalculatorError::InsufficientOperands {
                operator: BinaryOperator::Multiply,
                index: 1,
                found: 1
            }
        )
    }

    #[test]
    fn leftover_values_are_too_many_operands() {
        let error = evaluate(postfix(&["1", "2"])).unwrap_err();
        assert_eq!(error, CalculatorError::TooManyOperands { found: 2 })
    }

    #[test]
    fn empty_sequence_is_too_many_operands() {
        let error = evaluate(vec![]).unwrap_err();
        assert_eq!(error, CalculatorError::TooManyOperands { found: 0 })
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let error = evaluate(postfix(&["1", "0", "-", "0.0", "/"])).unwrap_err();
        assert_eq!(error, CalculatorError::DivisionByZero { index: 4 })
    }

    #[test]
    fn zero_to_negative_power_is_infinite() {
        let result = evaluate(postfix(&["0", "-1", "^"])).unwrap();
        assert_eq!(result, Number::Float(f64::INFINITY))
    }
}
