//! # Introduction
//!
//! rankcalc evaluates arithmetic lines such as `2+3*4=` without building a
//! parse tree. The line is scanned into tokens that each carry a precedence
//! rank, and the token vector is folded one rank at a time until a single
//! token holds the result. Every fold can be recorded and browsed in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Evaluation pipeline
//!
//! ```text
//! Line → Lexer → Tokens → Reducer (rank 1, 2, 3) → Result
//!                              ↘ Snapshots → TUI
//! ```
//!
//! 1. [`parser`]: scans digit runs and operators into ranked tokens.
//! 2. [`interpreter`]: reduces the tokens and captures
//!    [`snapshot::Snapshot`]s at each fold.
//! 3. [`snapshot`]: reduction trace storage and the session transcript.
//! 4. [`session`]: quit sentinel, line limit, latest evaluation.
//! 5. [`config`]: command-line options.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported input
//!
//! Non-negative integer literals, `+ - * / ^`, and an optional `=` terminator.
//! `^` binds tightest, then `* /`, then `+ -`; equal ranks fold left to right.
//! No parentheses, no unary minus.

pub mod config;
pub mod interpreter;
pub mod parser;
pub mod session;
pub mod snapshot;
pub mod ui;
