//! # Error Types
//!
//! Every failure the interpreter can run into, grouped by where it originates:
//!
//! - [`CommandError`]: a line that does not match the command grammar. Produced by the
//!   parser, never reaches the backend.
//! - [`BackendError`]: a failure reported by a [`SongBackend`](crate::backend::SongBackend).
//! - [`SessionError`]: what the dispatcher hands back to the interaction loop.
//!
//! None of these end a session on their own. The loop prints them and reads the next line;
//! only a broken input or output stream stops it.

use std::io;

use thiserror::Error;

/// Result type used by the dispatcher and the interaction loop.
pub type Result<T> = std::result::Result<T, SessionError>;

/// A line that failed to parse into a valid command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of tokens or a keyword mismatch for a known command.
    #[error("Invalid syntax -> {0}")]
    Syntax(String),

    /// A numeric argument that is not a (non-negative, where required) integer.
    #[error("Invalid syntax -> {0}")]
    ArgumentFormat(String),

    /// The first token is not one of the six command keywords.
    #[error("Unknown command. Enter help for command instructions.")]
    UnknownCommand,
}

impl CommandError {
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax(message.into())
    }

    pub fn argument_format(message: impl Into<String>) -> Self {
        Self::ArgumentFormat(message.into())
    }
}

/// Failures a backend may report.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The catalog file could not be opened or read.
    #[error("could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The catalog file was read but its contents are not a valid catalog.
    #[error("could not parse '{path}': {source}")]
    Format {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Any other failure inside the backend.
    #[error("{0}")]
    Runtime(String),
}

impl BackendError {
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime(message.into())
    }
}

/// Errors that escape a single command and reach the interaction loop.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A backend failure the dispatcher does not report itself.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Reading the next command failed.
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl SessionError {
    /// Whether the loop can keep going after this error.
    ///
    /// Stream failures leave nowhere to report to, so they are the only fatal kind.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Backend(_))
    }
}
