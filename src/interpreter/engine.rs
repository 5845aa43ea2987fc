//! Rank-by-rank reduction engine
//!
//! The reducer makes one left-to-right pass per rank, in the fixed order of
//! [`REDUCTION_ORDER`]. When a token's rank matches the pass, its operator
//! combines its value with the next token's value, the result is written into
//! the next token, and the current token is removed. Scanning then continues
//! at the combined token, so `8-3-2` folds as `(8-3)-2`.
//!
//! # Termination
//!
//! Every match removes one token, and there are exactly three passes. The
//! loop stops early once a single token remains.

use super::constants::REDUCTION_ORDER;
use super::errors::EvalError;
use super::ops::apply;
use crate::parser::token::Token;
use crate::snapshot::{Snapshot, SnapshotManager};

/// Reduces a token sequence to its single surviving token
#[derive(Debug, Default)]
pub struct Reducer {
    trace: Option<SnapshotManager>,
    trace_full: bool,
}

impl Reducer {
    /// A reducer that records nothing
    pub fn new() -> Self {
        Self {
            trace: None,
            trace_full: false,
        }
    }

    /// A reducer that records a [`Snapshot`] after every fold, up to
    /// `max_memory` bytes of snapshots.
    pub fn with_trace(max_memory: usize) -> Self {
        Self {
            trace: Some(SnapshotManager::new(max_memory)),
            trace_full: false,
        }
    }

    /// Recorded snapshots, empty when tracing is off
    pub fn take_trace(&mut self) -> Vec<Snapshot> {
        self.trace
            .take()
            .map(SnapshotManager::into_snapshots)
            .unwrap_or_default()
    }

    /// Reduce `tokens` to one token holding the result.
    ///
    /// A single-token sequence is returned unchanged; its operator is ignored.
    pub fn reduce(&mut self, mut tokens: Vec<Token>) -> Result<Token, EvalError> {
        if tokens.is_empty() {
            return Err(EvalError::EmptyExpression);
        }

        self.record(&tokens, None, None);

        for rank in REDUCTION_ORDER {
            if tokens.len() == 1 {
                break;
            }
            self.reduce_rank(&mut tokens, rank)?;
        }

        // Only a terminator in the middle of the sequence can leave extras
        if tokens.len() > 1 {
            return Err(EvalError::MissingOperand {
                column: tokens[0].column,
            });
        }

        tokens.pop().ok_or(EvalError::EmptyExpression)
    }

    /// One left-to-right pass folding every token of `rank` into its successor
    fn reduce_rank(&mut self, tokens: &mut Vec<Token>, rank: u8) -> Result<(), EvalError> {
        let mut i = 0;

        while i < tokens.len() {
            if tokens[i].rank != rank {
                i += 1;
                continue;
            }

            let rhs = tokens
                .get(i + 1)
                .map(|next| next.value)
                .ok_or(EvalError::MissingOperand {
                    column: tokens[i].column,
                })?;

            tokens[i + 1].value = apply(&tokens[i], rhs)?;
            tokens.remove(i);

            self.record(tokens, Some(rank), Some(i));
        }

        Ok(())
    }

    fn record(&mut self, tokens: &[Token], rank: Option<u8>, folded_at: Option<usize>) {
        if self.trace_full {
            return;
        }
        let Some(trace) = self.trace.as_mut() else {
            return;
        };

        let snapshot = Snapshot {
            tokens: tokens.to_vec(),
            rank,
            folded_at,
        };

        // Keep what was recorded so far and stop tracing
        if trace.push(snapshot).is_err() {
            self.trace_full = true;
        }
    }
}

/// Reduce without recording a trace
pub fn reduce(tokens: Vec<Token>) -> Result<Token, EvalError> {
    Reducer::new().reduce(tokens)
}
