//! Per-operator arithmetic used by the reducer
//!
//! # Exponentiation
//!
//! `^` multiplies the base into itself `exponent - 1` times. An exponent of
//! `0` therefore yields the base, not `1`. This is long-standing calculator
//! behaviour and is kept as is.

use super::errors::EvalError;
use crate::parser::token::{Operator, Token};

/// Combine `lhs` with the value of the token after it, using `lhs`'s operator.
pub fn apply(lhs: &Token, rhs: f64) -> Result<f64, EvalError> {
    let left = lhs.value;

    match lhs.operator {
        Operator::Add => Ok(left + rhs),
        Operator::Sub => Ok(left - rhs),
        Operator::Mul => Ok(left * rhs),
        Operator::Div => {
            if rhs == 0.0 {
                return Err(EvalError::DivisionByZero { column: lhs.column });
            }
            Ok(left / rhs)
        }
        Operator::Pow => Ok(power(left, rhs)),
        Operator::End => Ok(left),
    }
}

/// Repeated-multiplication power: `base` times itself while the counter is
/// below `exponent - 1`.
pub fn power(base: f64, exponent: f64) -> f64 {
    let mut result = base;
    let mut i = 0.0;

    while i < exponent - 1.0 {
        let next = result * base;
        // Saturated: inf, 0 and 1 never change again
        if !next.is_finite() || next == result {
            return next;
        }
        result = next;
        i += 1.0;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(value: f64, operator: Operator) -> Token {
        Token::new(value, operator, 1)
    }

    #[test]
    fn test_basic_operators() {
        assert_eq!(apply(&tok(2.0, Operator::Add), 3.0), Ok(5.0));
        assert_eq!(apply(&tok(2.0, Operator::Sub), 3.0), Ok(-1.0));
        assert_eq!(apply(&tok(2.0, Operator::Mul), 3.0), Ok(6.0));
        assert_eq!(apply(&tok(3.0, Operator::Div), 2.0), Ok(1.5));
    }

    #[test]
    fn test_division_by_zero() {
        let lhs = Token::new(7.0, Operator::Div, 2);
        assert_eq!(
            apply(&lhs, 0.0),
            Err(EvalError::DivisionByZero { column: 2 })
        );
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 3.0), 8.0);
        assert_eq!(power(3.0, 1.0), 3.0);
        assert_eq!(power(10.0, 2.0), 100.0);
    }

    #[test]
    fn test_power_zero_exponent_keeps_base() {
        // Inherited quirk: x^0 is x, not 1
        assert_eq!(power(2.0, 0.0), 2.0);
        assert_eq!(power(9.0, 0.0), 9.0);
    }

    #[test]
    fn test_power_saturates_quickly() {
        assert_eq!(power(2.0, 1e12), f64::INFINITY);
        assert_eq!(power(1.0, 1e12), 1.0);
        assert_eq!(power(0.0, 1e12), 0.0);
    }

    #[test]
    fn test_end_passes_value_through() {
        assert_eq!(apply(&tok(4.0, Operator::End), 9.0), Ok(4.0));
    }
}
