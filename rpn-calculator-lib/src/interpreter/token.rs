use crate::interpreter::error::CalculatorError;
use crate::interpreter::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of a postfix expression.
#[derive(Clone, PartialEq)]
pub enum Token {
    Literal(Literal),
    Operator(BinaryOperator),
}

/// A numeric literal in canonical text form, together with its value.
///
/// The canonical form has no leading zeros (but keeps at least one digit
/// before the decimal point), no trailing zeros after the decimal point,
/// never ends in a bare `.` and may start with a `-`.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    text: String,
    value: f64,
}

impl Literal {
    /// Validates and canonicalizes the literal `text`, which started at
    /// `position` in the expression it was read from.
    pub(crate) fn lex(text: &str, position: usize) -> Result<Literal, CalculatorError> {
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text),
        };
        let malformed = || CalculatorError::MalformedNumber {
            literal: text.to_string(),
            position,
        };

        if let Some((offset, character)) = text
            .chars()
            .enumerate()
            .skip(sign.len())
            .find(|(_, character)| !is_literal_character(*character))
        {
            return Err(CalculatorError::InvalidCharacter {
                character,
                position: position + offset,
            });
        }

        let (integer, fraction) = match unsigned.split_once('.') {
            Some((_, fraction)) if fraction.contains('.') => return Err(malformed()),
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };
        if integer.is_empty() && fraction.map_or(true, str::is_empty) {
            return Err(malformed());
        }

        let integer = match integer.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        let canonical = match fraction.map(|fraction| fraction.trim_end_matches('0')) {
            None => format!("{}{}", sign, integer),
            Some("") => format!("{}{}.0", sign, integer),
            Some(fraction) => format!("{}{}.{}", sign, integer, fraction),
        };
        let value = canonical.parse::<f64>().map_err(|_| malformed())?;

        Ok(Literal {
            text: canonical,
            value,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

pub(crate) fn is_literal_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(literal) => write!(f, "{}", literal),
            Token::Operator(operator) => write!(f, "{}", operator),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = CalculatorError;

    /// Reads a single postfix token: an operator symbol or a numeric literal.
    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut characters = input.chars();
        if let (Some(symbol), None) = (characters.next(), characters.next()) {
            if let Some(operator) = BinaryOperator::from_symbol(symbol) {
                return Ok(Token::Operator(operator));
            }
        }
        Literal::lex(input, 0).map(Token::Literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
        input = { "007.50", "0", "000", "5.", ".5", "-007", "12.000", "-0.25", "100" },
        expected = { "7.5", "0", "0", "5.0", "0.5", "-7", "12.0", "-0.25", "100" }
    )]
    fn literal_is_canonicalized(input: &str, expected: &str) {
        let literal = Literal::lex(input, 0).unwrap();
        assert_eq!(literal.text(), expected)
    }

    #[test]
    fn literal_value_matches_text() {
        let literal = Literal::lex("-003.250", 0).unwrap();
        assert_eq!(literal.value(), -3.25)
    }

    #[test]
    fn literal_with_two_decimal_points_is_malformed() {
        let error = Literal::lex("1.2.3", 4).unwrap_err();
        assert_eq!(
            error,
            CalculatorError::MalformedNumber {
                literal: "1.2.3".into(),
                position: 4
            }
        )
    }

    #[parameterized(input = { ".", "-", "-." })]
    fn literal_without_digits_is_malformed(input: &str) {
        let error = Literal::lex(input, 0).unwrap_err();
        assert!(matches!(error, CalculatorError::MalformedNumber { .. }))
    }

    #[test]
    fn literal_with_foreign_character_reports_its_position() {
        let error = Literal::lex("-12x", 3).unwrap_err();
        assert_eq!(
            error,
            CalculatorError::InvalidCharacter {
                character: 'x',
                position: 6
            }
        )
    }

    #[test]
    fn literal_with_multibyte_character_reports_character_offset() {
        let error = Literal::lex("-1€5", 10).unwrap_err();
        assert_eq!(
            error,
            CalculatorError::InvalidCharacter {
                character: '€',
                position: 12
            }
        )
    }

    #[parameterized(
        input = { "+", "-", "*", "/", "^" },
        expected = {
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
            BinaryOperator::Exponentiate,
        }
    )]
    fn operator_symbol_parses_to_operator_token(input: &str, expected: BinaryOperator) {
        let token: Token = input.parse().unwrap();
        assert_eq!(token, Token::Operator(expected));
        assert!(token.is_operator())
    }

    #[test]
    fn negative_literal_parses_to_literal_token() {
        let token: Token = "-4".parse().unwrap();
        assert_eq!(token.to_string(), "-4");
        assert!(!token.is_operator())
    }

    #[test]
    fn parenthesis_is_not_a_postfix_token() {
        let error = "(".parse::<Token>().unwrap_err();
        assert_eq!(
            error,
            CalculatorError::InvalidCharacter {
                character: '(',
                position: 0
            }
        )
    }
}
