//! Error types for SwipeChat
//!
//! State transitions never fail. Errors only arise when text from outside
//! the screen (an event script, a CLI command line) cannot be understood.

use thiserror::Error;

/// Main error type for SwipeChat operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// The first word of a line is not a known event
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    /// An event that needs an argument was given none
    #[error("line {line}: '{command}' expects {expected}")]
    MissingArgument {
        line: usize,
        command: String,
        expected: &'static str,
    },

    /// A message position was not a positive integer
    #[error("line {line}: invalid message position '{value}'")]
    InvalidPosition { line: usize, value: String },

    /// A confirmation answer was neither yes nor no
    #[error("line {line}: expected yes or no, got '{value}'")]
    InvalidAnswer { line: usize, value: String },
}

impl ChatError {
    /// Line number (1-based) the error was reported for.
    pub fn line(&self) -> usize {
        match self {
            ChatError::UnknownCommand { line, .. }
            | ChatError::MissingArgument { line, .. }
            | ChatError::InvalidPosition { line, .. }
            | ChatError::InvalidAnswer { line, .. } => *line,
        }
    }
}

/// Result type alias using ChatError
pub type ChatResult<T> = Result<T, ChatError>;
