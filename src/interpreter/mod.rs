//! Expression reduction
//!
//! This module provides the evaluation logic:
//! - [`engine`]: Rank-by-rank reducer with optional snapshot trace
//! - [`ops`]: Arithmetic for each operator
//! - [`errors`]: Per-line error types and the fatal out-of-memory path
//! - [`constants`]: Ranks and session defaults
//!
//! # Execution Model
//!
//! The reducer makes three passes over the token vector, one per rank, and
//! folds matching tokens into their right-hand neighbour. A snapshot can be
//! taken after every fold for the trace view.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod ops;
