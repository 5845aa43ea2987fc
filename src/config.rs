//! Session configuration and command-line parsing
//!
//! Arguments are read straight from `std::env::args()`; there are few enough
//! flags that a hand-written loop is clearer than a parser crate.

use crate::interpreter::constants::{DEFAULT_MAX_LINE_LEN, DEFAULT_PROMPT};
use std::fmt;

/// Byte budget for one reduction trace
pub const DEFAULT_TRACE_MEMORY: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Longest accepted input line, in characters
    pub max_line_len: usize,

    /// Use the plain line loop even when stdin is a terminal
    pub plain: bool,

    /// Print every reduction step to stderr in the plain loop
    pub trace: bool,

    pub trace_memory: usize,

    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            plain: false,
            trace: false,
            trace_memory: DEFAULT_TRACE_MEMORY,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

/// Bad command-line arguments
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    UnknownFlag(String),
    MissingValue(String),
    InvalidValue { flag: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::MissingValue(flag) => write!(f, "Option '{}' needs a value", flag),
            ConfigError::InvalidValue { flag, value } => {
                write!(f, "Invalid value '{}' for option '{}'", value, flag)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Parse arguments, excluding the program name.
    pub fn from_args<I>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--plain" => config.plain = true,
                "--trace" => config.trace = true,
                "--max-line" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.max_line_len = match value.parse::<usize>() {
                        Ok(n) if n > 0 => n,
                        _ => {
                            return Err(ConfigError::InvalidValue {
                                flag: arg.clone(),
                                value,
                            });
                        }
                    };
                }
                _ => return Err(ConfigError::UnknownFlag(arg.clone())),
            }
        }

        Ok(Command::Run(config))
    }
}

pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {} [--plain] [--trace] [--max-line N]\n\
         \n\
         Enter expressions such as 2+3*4= ; a line starting with 0 quits.\n\
         \n\
         Options:\n\
         \x20 --plain        read lines from stdin without the terminal UI\n\
         \x20 --trace        print each reduction step to stderr (plain mode)\n\
         \x20 --max-line N   longest accepted line (default {})\n\
         \x20 -h, --help     show this message",
        program_name, DEFAULT_MAX_LINE_LEN
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, ConfigError> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_line_len, 125);
        assert_eq!(config.prompt, "CALCULATOR: ");
        assert!(!config.plain);
        assert_eq!(parse(&[]), Ok(Command::Run(config)));
    }

    #[test]
    fn test_flags() {
        let Ok(Command::Run(config)) = parse(&["--plain", "--trace", "--max-line", "40"]) else {
            panic!("Expected Run");
        };
        assert!(config.plain);
        assert!(config.trace);
        assert_eq!(config.max_line_len, 40);
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["--plain", "-h"]), Ok(Command::Help));
    }

    #[test]
    fn test_bad_arguments() {
        assert_eq!(
            parse(&["--verbose"]),
            Err(ConfigError::UnknownFlag("--verbose".to_string()))
        );
        assert_eq!(
            parse(&["--max-line"]),
            Err(ConfigError::MissingValue("--max-line".to_string()))
        );
        assert!(matches!(
            parse(&["--max-line", "0"]),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse(&["--max-line", "lots"]),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
