//! Input line scanner
//!
//! This module turns a raw input line into a token sequence:
//! - [`lexer`]: Tokenization (line text → tokens)
//! - [`token`]: Token and operator definitions
//!
//! There is no parse tree. Precedence is carried as a rank on each token and
//! applied later by the reducer in [`crate::interpreter::engine`].

pub mod lexer;
pub mod token;
