//! Line-at-a-time session shared by the plain loop and the TUI
//!
//! [`Session::submit`] owns everything around the core: the quit sentinel,
//! the line-length limit and the transcript. Each line is fully evaluated
//! (or rejected) before the next one is accepted, and only the latest
//! evaluation is kept.

use crate::config::Config;
use crate::interpreter::constants::SENTINEL;
use crate::interpreter::engine::Reducer;
use crate::interpreter::errors::EvalError;
use crate::parser::lexer::tokenize;
use crate::parser::token::Token;
use crate::snapshot::{LineKind, Snapshot, Transcript};
use std::io::{self, BufRead, Write};

/// A successfully evaluated line
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub tokens: Vec<Token>,
    pub result: f64,
    pub trace: Vec<Snapshot>,
}

impl Evaluation {
    /// Tokens as scanned, followed by the result: `2 + 3 * 4 = 14`
    pub fn echo(&self) -> String {
        self.tokens
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(format_result(self.result)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Results are shown without a fractional part
pub fn format_result(value: f64) -> String {
    format!("{:.0}", value)
}

/// What happened to a submitted line
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line started with the sentinel; end the session
    Quit,
    /// Blank line, nothing to do
    Empty,
    Evaluated(Evaluation),
    Rejected(EvalError),
}

pub struct Session {
    config: Config,
    record_traces: bool,
    transcript: Transcript,
    last: Option<Evaluation>,
    evaluated: usize,
    rejected: usize,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            record_traces: config.trace,
            config,
            transcript: Transcript::new(),
            last: None,
            evaluated: 0,
            rejected: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Most recent successful evaluation
    pub fn last(&self) -> Option<&Evaluation> {
        self.last.as_ref()
    }

    /// (evaluated, rejected) line counts
    pub fn counts(&self) -> (usize, usize) {
        (self.evaluated, self.rejected)
    }

    /// Keep reduction traces even when `config.trace` is off, for views
    /// that display them
    pub fn record_traces(&mut self, enabled: bool) {
        self.record_traces = enabled || self.config.trace;
    }

    /// Process one input line.
    pub fn submit(&mut self, line: &str) -> Outcome {
        let line = strip_line_ending(line);

        if line.starts_with(SENTINEL) {
            return Outcome::Quit;
        }
        if line.trim().is_empty() {
            return Outcome::Empty;
        }

        self.transcript
            .push(format!("{}{}", self.config.prompt, line), LineKind::Input);

        match self.evaluate(line) {
            Ok(evaluation) => {
                self.evaluated += 1;
                self.transcript.push(evaluation.echo(), LineKind::Echo);
                self.last = Some(evaluation.clone());
                Outcome::Evaluated(evaluation)
            }
            Err(err) => {
                self.rejected += 1;
                self.transcript.push(err.to_string(), LineKind::Error);
                Outcome::Rejected(err)
            }
        }
    }

    fn evaluate(&self, line: &str) -> Result<Evaluation, EvalError> {
        let len = line.chars().count();
        if len > self.config.max_line_len {
            return Err(EvalError::LineTooLong {
                len,
                limit: self.config.max_line_len,
            });
        }

        let tokens = tokenize(line)?;
        let mut reducer = if self.record_traces {
            Reducer::with_trace(self.config.trace_memory)
        } else {
            Reducer::new()
        };
        let survivor = reducer.reduce(tokens.clone())?;

        Ok(Evaluation {
            tokens,
            result: survivor.value,
            trace: reducer.take_trace(),
        })
    }
}

/// Plain read-eval-print loop over any line source.
///
/// Results go to `out`, errors and (with `config.trace`) reduction steps go
/// to `err`. Returns on the sentinel line or at end of input.
pub fn run_lines<R, W, E>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    err: &mut E,
    show_prompt: bool,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut line = String::new();

    loop {
        if show_prompt {
            write!(out, "{}", session.config().prompt)?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match session.submit(&line) {
            Outcome::Quit => break,
            Outcome::Empty => {}
            Outcome::Evaluated(evaluation) => {
                if session.config().trace {
                    for snapshot in &evaluation.trace {
                        writeln!(err, "{}", snapshot)?;
                    }
                }
                writeln!(out, "{}", evaluation.echo())?;
            }
            Outcome::Rejected(e) => {
                writeln!(err, "Error: {}", e)?;
            }
        }
    }

    Ok(())
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Config::default())
    }

    #[test]
    fn test_sentinel_quits() {
        let mut session = session();
        assert_eq!(session.submit("0"), Outcome::Quit);
        assert_eq!(session.submit("0+1=\n"), Outcome::Quit);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_blank_line() {
        let mut session = session();
        assert_eq!(session.submit("\n"), Outcome::Empty);
        assert_eq!(session.submit("   "), Outcome::Empty);
    }

    #[test]
    fn test_echo_format() {
        let mut session = session();
        let Outcome::Evaluated(evaluation) = session.submit("2+3*4=\n") else {
            panic!("Expected evaluation");
        };
        assert_eq!(evaluation.result, 14.0);
        assert_eq!(evaluation.echo(), "2 + 3 * 4 = 14");
    }

    #[test]
    fn test_invalid_line_does_not_end_session() {
        let mut session = session();
        assert!(matches!(
            session.submit("2#3="),
            Outcome::Rejected(EvalError::InvalidToken { .. })
        ));
        let Outcome::Evaluated(evaluation) = session.submit("8-3-2=") else {
            panic!("Expected evaluation");
        };
        assert_eq!(evaluation.result, 3.0);
        assert_eq!(session.counts(), (1, 1));
    }

    #[test]
    fn test_line_too_long() {
        let mut session = Session::new(Config {
            max_line_len: 4,
            ..Config::default()
        });
        assert_eq!(
            session.submit("1+22="),
            Outcome::Rejected(EvalError::LineTooLong { len: 5, limit: 4 })
        );
        assert!(matches!(session.submit("1+2="), Outcome::Evaluated(_)));
    }

    #[test]
    fn test_repeated_line_is_evaluated_again() {
        let mut session = session();
        let first = session.submit("6/4=");
        let second = session.submit("6/4=\r\n");
        assert_eq!(first, second);
        assert_eq!(session.counts(), (2, 0));
    }

    #[test]
    fn test_only_latest_evaluation_is_kept() {
        let mut session = Session::new(Config {
            trace: true,
            ..Config::default()
        });
        for n in 1..=50 {
            session.submit(&format!("{}+1*1*1=", n));
        }
        let last = session.last().unwrap();
        assert_eq!(last.result, 51.0);
        assert_eq!(last.trace.len(), 4);
        assert_eq!(session.counts(), (50, 0));
    }

    #[test]
    fn test_traces_are_off_by_default() {
        let mut session = session();
        let Outcome::Evaluated(evaluation) = session.submit("2+3*4=") else {
            panic!("Expected evaluation");
        };
        assert!(evaluation.trace.is_empty());

        session.record_traces(true);
        let Outcome::Evaluated(evaluation) = session.submit("2+3*4=") else {
            panic!("Expected evaluation");
        };
        assert_eq!(evaluation.trace.len(), 3);
    }

    #[test]
    fn test_transcript_records_errors() {
        let mut session = session();
        session.submit("5/0=");
        let output = session.transcript().get_output();
        assert_eq!(output[0], "CALCULATOR: 5/0=");
        assert_eq!(output[1], "Division by zero at column 2");
        assert!(session.last().is_none());
    }
}
