//! Lexer (tokenizer) for arithmetic input lines
//!
//! Converts a raw line into a flat [`Token`] sequence consumed by the reducer.
//! Each token is a maximal digit run followed by exactly one operator
//! character. Scanning stops at the `=` terminator, or when the input runs out
//! exactly at a token boundary.
//!
//! Any malformed token fails the whole line; tokens already built are dropped
//! with the partial vector.

use super::token::{Operator, Token};
use crate::interpreter::errors::{out_of_memory, EvalError};

/// Lexer for one input line
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given line.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, EvalError> {
        let mut tokens = Vec::new();
        // Every token consumes at least two characters
        if tokens.try_reserve(self.input.len() / 2 + 1).is_err() {
            out_of_memory();
        }

        while !self.is_at_end() {
            let token = self.next_token()?;
            let terminal = token.operator.is_terminal();
            tokens.push(token);

            if terminal {
                break;
            }
        }

        Ok(tokens)
    }

    /// Scan one digit run and the operator after it
    fn next_token(&mut self) -> Result<Token, EvalError> {
        let digits = self.digit_run();
        let column = self.current_column();

        let ch = match self.advance() {
            Some(ch) => ch,
            None => {
                return Err(EvalError::InvalidToken {
                    column,
                    message: format!("missing operator after {}", digits),
                });
            }
        };

        let operator = Operator::from_char(ch).ok_or_else(|| EvalError::InvalidToken {
            column,
            message: format!("unrecognized operator '{}'", ch.escape_default()),
        })?;

        if digits.is_empty() {
            return Err(EvalError::InvalidToken {
                column,
                message: format!("no digits before operator '{}'", operator),
            });
        }

        let value = digits.parse::<f64>().map_err(|_| EvalError::InvalidToken {
            column,
            message: format!("invalid number: {}", digits),
        })?;

        Ok(Token::new(value, operator, column))
    }

    /// Consume a maximal run of ASCII digits
    fn digit_run(&mut self) -> String {
        let mut digits = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        digits
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// 1-based column of the next unread character
    fn current_column(&self) -> usize {
        self.position + 1
    }
}

/// Tokenize a line in one call
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let tokens = tokenize("12+3*4=").unwrap();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], Token::new(12.0, Operator::Add, 3));
        assert_eq!(tokens[1], Token::new(3.0, Operator::Mul, 5));
        assert_eq!(tokens[2], Token::new(4.0, Operator::End, 7));
    }

    #[test]
    fn test_ranks_are_tagged() {
        let tokens = tokenize("1+2-3*4/5^6=").unwrap();
        let ranks: Vec<u8> = tokens.iter().map(|t| t.rank).collect();
        assert_eq!(ranks, vec![3, 3, 2, 2, 1, 0]);
    }

    #[test]
    fn test_stops_at_terminator() {
        let tokens = tokenize("2+3=garbage").unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[1].operator.is_terminal());
    }

    #[test]
    fn test_exhaustion_at_boundary_is_tolerated() {
        let tokens = tokenize("2+").unwrap();
        assert_eq!(tokens, vec![Token::new(2.0, Operator::Add, 2)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_unrecognized_operator() {
        let err = tokenize("2#3=").unwrap_err();
        assert!(matches!(err, EvalError::InvalidToken { column: 2, .. }));
        assert!(err.to_string().contains("'#'"));
    }

    #[test]
    fn test_no_digits_before_operator() {
        let err = tokenize("+3=").unwrap_err();
        match err {
            EvalError::InvalidToken { column, message } => {
                assert_eq!(column, 1);
                assert!(message.contains("no digits"));
            }
            other => panic!("Expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_digits_without_operator() {
        let err = tokenize("23").unwrap_err();
        match err {
            EvalError::InvalidToken { column, message } => {
                assert_eq!(column, 3);
                assert_eq!(message, "missing operator after 23");
            }
            other => panic!("Expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_discards_earlier_tokens() {
        // The first token is fine, the second is not
        assert!(tokenize("2+3 =").is_err());
        assert!(tokenize("2+3").is_err());
    }

    #[test]
    fn test_zero_operand_is_a_number() {
        let tokens = tokenize("5*0=").unwrap();
        assert_eq!(tokens[1].value, 0.0);
    }

    #[test]
    fn test_tokenize_is_repeatable() {
        let first = tokenize("7^2-10/5=").unwrap();
        let second = tokenize("7^2-10/5=").unwrap();
        assert_eq!(first, second);
    }
}
