use crate::interpreter::error::CalculatorError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::{is_literal_character, Literal};
use itertools::Itertools;
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

/// A symbol of an infix expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Literal(Literal),
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
}

/// A symbol together with the character offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub symbol: Symbol,
    pub position: usize,
}

impl Symbol {
    /// Whether the next symbol has to be an operand, which is what turns a
    /// following `-` into the sign of a literal.
    fn expects_operand_after(&self) -> bool {
        matches!(self, Symbol::Operator(_) | Symbol::OpenParenthesis)
    }
}

/// Scans an infix expression left to right, one lexeme at a time.
///
/// Each conversion owns its own lexer, nothing about the scan position is
/// shared between calls.
pub struct Lexer<'a> {
    characters: Peekable<Enumerate<Chars<'a>>>,
    expects_operand: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(expression: &'a str) -> Lexer<'a> {
        Lexer {
            characters: expression.chars().enumerate().peekable(),
            expects_operand: true,
        }
    }

    fn skip_whitespace(&mut self) {
        while self
            .characters
            .next_if(|(_, character)| character.is_whitespace())
            .is_some()
        {}
    }

    fn lex_symbol(&mut self, position: usize, character: char) -> Result<Symbol, CalculatorError> {
        if is_literal_character(character) {
            return self.lex_literal("", position);
        }

        // Everything below is a single character.
        self.characters.next();
        match character {
            '-' if self.expects_operand => self.lex_literal("-", position),
            '(' => Ok(Symbol::OpenParenthesis),
            ')' => Ok(Symbol::CloseParenthesis),
            _ => match BinaryOperator::from_symbol(character) {
                Some(operator) => Ok(Symbol::Operator(operator)),
                None => Err(CalculatorError::InvalidCharacter {
                    character,
                    position,
                }),
            },
        }
    }

    fn lex_literal(&mut self, sign: &str, position: usize) -> Result<Symbol, CalculatorError> {
        let digits: String = self
            .characters
            .peeking_take_while(|(_, character)| is_literal_character(*character))
            .map(|(_, character)| character)
            .collect();
        let literal = Literal::lex(&format!("{}{}", sign, digits), position)?;
        Ok(Symbol::Literal(literal))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Lexeme, CalculatorError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let &(position, character) = self.characters.peek()?;

        let lexeme = self.lex_symbol(position, character).map(|symbol| {
            self.expects_operand = symbol.expects_operand_after();
            Lexeme { symbol, position }
        });
        Some(lexeme)
    }
}

/// Splits the given infix expression into lexemes.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The lexemes of the expression, in the order they were written.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::lexer::{tokenize, Symbol};
///
/// let lexemes = tokenize("3*-2")?;
/// assert_eq!(lexemes.len(), 3);
/// assert!(matches!(lexemes[2].symbol, Symbol::Literal(_)));
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Lexeme>, CalculatorError> {
    Lexer::new(expression).collect()
}
