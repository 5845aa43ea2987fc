//! Token definitions shared by the lexer and the reducer
//!
//! A [`Token`] is one operand together with the operator that joins it to
//! the *next* token in the sequence. Adjacency in the `Vec<Token>` is
//! adjacency in the source line.

use crate::interpreter::constants::{RANK_ADD_SUB, RANK_END, RANK_MUL_DIV, RANK_POW};
use std::fmt;

/// Operators recognised after a digit run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Pow, // ^
    End, // =
}

impl Operator {
    /// Classify a character, returning `None` for anything that is not an
    /// operator or the terminator.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            '=' => Some(Operator::End),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
            Operator::End => '=',
        }
    }

    /// Precedence rank. Lower ranks are reduced first; `End` is never reduced.
    pub fn rank(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => RANK_ADD_SUB,
            Operator::Mul | Operator::Div => RANK_MUL_DIV,
            Operator::Pow => RANK_POW,
            Operator::End => RANK_END,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Operator::End
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One operand and its trailing operator
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: f64,
    pub operator: Operator,
    /// Rank tagged at scan time, see [`Operator::rank`]
    pub rank: u8,
    /// 1-based column of the operator character
    pub column: usize,
}

impl Token {
    pub fn new(value: f64, operator: Operator, column: usize) -> Self {
        Self {
            value,
            operator,
            rank: operator.rank(),
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} {}", self.value, self.operator)
    }
}
