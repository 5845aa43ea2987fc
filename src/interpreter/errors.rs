//! Error types for tokenizing and reducing a single line
//!
//! This module defines [`EvalError`], which covers every failure that is local
//! to one input line. None of them end the session: the line is reported and
//! skipped.
//!
//! Running out of memory is not an `EvalError`. It goes through
//! [`out_of_memory`], which aborts the process.

use std::fmt;

/// Errors that can occur while evaluating one line
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A token without digits, or followed by something that is not an operator
    InvalidToken { column: usize, message: String },

    /// Right-hand side of `/` was zero
    DivisionByZero { column: usize },

    /// An operator with no operand after it
    MissingOperand { column: usize },

    /// Nothing to reduce
    EmptyExpression,

    /// Input longer than the configured limit
    LineTooLong { len: usize, limit: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidToken { column, message } => {
                write!(f, "Invalid token at column {}: {}", column, message)
            }
            EvalError::DivisionByZero { column } => {
                write!(f, "Division by zero at column {}", column)
            }
            EvalError::MissingOperand { column } => {
                write!(f, "Operator at column {} has no right operand", column)
            }
            EvalError::EmptyExpression => write!(f, "Empty expression"),
            EvalError::LineTooLong { len, limit } => {
                write!(
                    f,
                    "Line too long: {} characters, limit is {}",
                    len, limit
                )
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Report heap exhaustion and abort. Never returns.
pub fn out_of_memory() -> ! {
    eprintln!("OUT OF HEAP MEMORY");
    std::process::abort()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EvalError::InvalidToken {
            column: 2,
            message: "unrecognized operator '#'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid token at column 2: unrecognized operator '#'"
        );
        assert_eq!(
            EvalError::DivisionByZero { column: 4 }.to_string(),
            "Division by zero at column 4"
        );
        assert_eq!(
            EvalError::LineTooLong { len: 130, limit: 125 }.to_string(),
            "Line too long: 130 characters, limit is 125"
        );
    }
}
