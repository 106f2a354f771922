mod infix_converter;

use crate::interpreter::error::CalculatorError;
use crate::interpreter::lexer::Lexer;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Parses the given infix expression into an equivalent postfix token sequence,
/// which can be evaluated with a single stack.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in postfix order.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::parser::parse;
///
/// let postfix_tokens = parse("(1+2)*3")?;
/// assert_eq!(format!("{:?}", postfix_tokens), "[1, 2, +, 3, *]");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(expression: &str) -> Result<Vec<Token>, CalculatorError> {
    infix_to_postfix(Lexer::new(expression))
}
