use crate::interpreter::error::CalculatorError;
use crate::interpreter::lexer::{Lexeme, Symbol};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    OpenParenthesis { position: usize },
    Operator(BinaryOperator),
}

/// Reorders infix lexemes into postfix tokens using the shunting-yard algorithm.
///
/// Lexemes are pulled one at a time, so a lexing error aborts the conversion
/// at the point it occurs.
pub(super) fn infix_to_postfix(
    lexemes: impl IntoIterator<Item = Result<Lexeme, CalculatorError>>,
) -> Result<Vec<Token>, CalculatorError> {
    let mut operators: VecDeque<Pending> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    for lexeme in lexemes {
        let Lexeme { symbol, position } = lexeme?;
        match symbol {
            Symbol::Literal(literal) => output.push(Token::Literal(literal)),
            Symbol::OpenParenthesis => operators.push_front(Pending::OpenParenthesis { position }),
            Symbol::Operator(operator) => parse_operator_token(&mut operators, &mut output, operator),
            Symbol::CloseParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output, position)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Pending>,
    output: &mut Vec<Token>,
) -> Result<(), CalculatorError> {
    while let Some(pending) = operators.pop_front() {
        match pending {
            Pending::OpenParenthesis { position } => {
                return Err(CalculatorError::UnbalancedParentheses {
                    parenthesis: '(',
                    position,
                });
            }
            Pending::Operator(operator) => output.push(Token::Operator(operator)),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Pending>,
    output: &mut Vec<Token>,
    position: usize,
) -> Result<(), CalculatorError> {
    loop {
        match operators.pop_front() {
            None => {
                return Err(CalculatorError::UnbalancedParentheses {
                    parenthesis: ')',
                    position,
                });
            }
            // Found the matching parenthesis, discard it.
            Some(Pending::OpenParenthesis { .. }) => return Ok(()),
            Some(Pending::Operator(operator)) => output.push(Token::Operator(operator)),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Pending>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(Pending::Operator(other_operator)) = operators.front().copied() {
        if !other_operator.precedence_ge(&operator) {
            break;
        }

        operators.pop_front(); // Pop other_operator
        output.push(Token::Operator(other_operator));
    }

    operators.push_front(Pending::Operator(operator));
}
