pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod number;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::CalculatorError;
use crate::interpreter::evaluator::evaluate;
use crate::interpreter::number::Number;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// Calculates the value of the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, using `+ - * / ^`,
///   parentheses, decimal numbers and unary minus.
///
/// returns: The value of the expression, as an integer if it has no fractional part.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::solve;
/// use rpn_calculator::Number;
///
/// assert_eq!(solve("(1+2)*3"), Ok(Number::Integer(9)));
/// ```
pub fn solve(expression: &str) -> Result<Number, CalculatorError> {
    let postfix_tokens = convert(expression)?;
    debug!("{} in postfix: {:?}", expression, postfix_tokens);
    let result = evaluate(postfix_tokens)?;
    debug!("{} = {}", expression, result);
    Ok(result)
}

/// Converts the given input string into an equivalent postfix token sequence,
/// which is easier to evaluate than the original string.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent postfix tokens.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let expression = "2^3^2";
/// let postfix_tokens = convert(expression)?;
/// assert_eq!(postfix_tokens.len(), 5);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Vec<Token>, CalculatorError> {
    parser::parse(expression)
}

/// Prints the given postfix tokens separated by whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::{convert, postfix_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = convert("007.50*(1+2)")?;
/// let pretty_printed_tokens = postfix_to_string(&tokens)?;
/// assert_eq!(pretty_printed_tokens, "7.5 1 2 + *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn postfix_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
