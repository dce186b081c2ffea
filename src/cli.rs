//! # CLI Argument Parsing Module
//!
//! Process-level options for the `songly` binary, parsed with
//! [`clap`](https://docs.rs/clap/). Every option can also come from a `SONGLY_*`
//! environment variable.
//!
//! The commands themselves (`load`, `energy`, `show`, ...) are not arguments: they are read
//! line by line once the session starts.
//!
//! ## Example Usage
//! ```sh
//! songly
//! songly --catalog songs.json
//! songly --script commands.txt --no-color
//! SONGLY_LOG=debug songly
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::session::{DEFAULT_PROMPT, SessionOptions};

/// Interactive song catalog filter.
#[derive(Parser, Debug)]
#[command(name = "songly", author, version)]
pub struct Cli {
    /// Catalog file to load before the first prompt.
    #[arg(short, long, env = "SONGLY_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Read commands from this file instead of standard input.
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Prompt shown before each command.
    #[arg(long, env = "SONGLY_PROMPT", default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Disable coloured output.
    #[arg(long, env = "SONGLY_NO_COLOR")]
    pub no_color: bool,

    /// Log filter directive for diagnostics on stderr (e.g. "debug", "songly_cli=trace").
    #[arg(long, env = "SONGLY_LOG", default_value = "warn")]
    pub log_level: String,
}

impl From<&Cli> for SessionOptions {
    fn from(cli: &Cli) -> Self {
        SessionOptions {
            prompt: cli.prompt.clone(),
            color: !cli.no_color,
            preload: cli
                .catalog
                .as_ref()
                .map(|path| path.to_string_lossy().into_owned()),
        }
    }
}
