//! # songly_cli
//!
//! A line-oriented interpreter for filtering a song catalog by energy and danceability.
//!
//! ## Modules
//! - [`parser`]: the six-command grammar.
//! - [`commands`]: executes parsed commands against a backend.
//! - [`session`]: the read-parse-execute loop.
//! - [`context`]: filter parameters kept between commands.
//! - [`output`]: song listings, help text and error lines.
//! - [`backend`]: the trait a song catalog implements.
//! - [`catalog`]: a JSON-backed catalog.
//! - [`cli`]: command-line options for the binary.
//! - [`error`]: error types.

pub mod backend;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod output;
pub mod parser;
pub mod session;

pub use backend::{RECENT_COUNT, SongBackend};
pub use catalog::{Song, SongCatalog};
pub use error::{BackendError, CommandError, SessionError};
pub use parser::{Command, parse_command};
pub use session::{Session, SessionEnd, SessionOptions};
