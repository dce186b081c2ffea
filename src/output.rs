//! # Output Formatting
//!
//! Everything the interpreter shows the user goes through [`Printer`]: command
//! confirmations, song listings, the help text and error lines.
//!
//! The plain text is the stable contract. Colour is layered on top only when enabled, so
//! redirecting output or passing `--no-color` yields exactly the strings documented here.
//!
//! ## Example
//! ```rust
//! use songly_cli::output::format_song_list;
//!
//! let songs = vec!["A".to_string(), "B".to_string(), "C".to_string()];
//! assert_eq!(format_song_list(&songs, 2), "Found songs: A, B");
//! ```

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;
use prettytable::{Table, format, row};

pub const WELCOME: &str = "Welcome to the iSongly program!";
pub const FAREWELL: &str = "Thank you for using iSongly program.";
pub const EMPTY_LINE_HINT: &str = "Empty command. Enter help for command instructions.";
pub const NO_SONGS: &str = "No songs found.";
pub const SONGS_LEAD_IN: &str = "Found songs:";
pub const ERROR_PREFIX: &str = "Error:";

/// Syntax and description of every command, in the order they are listed in the help.
const COMMAND_SYNTAX: [(&str, &str); 8] = [
    ("load FILEPATH", "load a single file from a specified path"),
    ("energy MAX", "set the maximum energy level of songs to return"),
    ("energy MIN to MAX", "set the range of songs to return from MIN to MAX"),
    ("danceability MIN", "set the threshold danceability of songs to return"),
    ("show MAX_COUNT", "displays up to MAX_COUNT filtered songs"),
    ("show most recent", "displays five most recent songs"),
    ("help", "displays command instructions"),
    ("quit", "ends this program"),
];

/// Renders a song listing as a single line, without the trailing newline.
///
/// Shows at most `max_count` titles in the order given. An empty list or a zero count
/// renders as [`NO_SONGS`].
pub fn format_song_list(titles: &[String], max_count: usize) -> String {
    if titles.is_empty() || max_count == 0 {
        return NO_SONGS.to_string();
    }

    let shown = &titles[..titles.len().min(max_count)];
    format!("{} {}", SONGS_LEAD_IN, shown.join(", "))
}

/// Renders the command syntax instructions.
pub fn help_text() -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    for (syntax, description) in COMMAND_SYNTAX {
        table.add_row(row![format!(">>{syntax}"), format!(":{description}")]);
    }

    let mut text = String::new();
    text.push_str("================= Command Syntax Instructions =================\n");
    text.push_str("The lowercase words are keywords that need matching exactly\n");
    text.push_str("The UPPERCASE words are placeholders for arguments that you can specify\n");
    text.push_str("================= Available Commands ==========================\n");
    text.push_str(&table.to_string());
    text
}

/// Writes user-facing output to any [`Write`] sink.
pub struct Printer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Printer<W> {
    /// Wraps `out`; `color` enables ANSI styling.
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Writes a plain line.
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Writes `text` without a newline and flushes, so it shows before input is read.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Writes a single `Error: ...` line.
    pub fn error(&mut self, message: impl Display) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{} {}", ERROR_PREFIX.red().bold(), message)
        } else {
            writeln!(self.out, "{ERROR_PREFIX} {message}")
        }
    }

    /// Writes a song listing, see [`format_song_list`].
    pub fn songs(&mut self, titles: &[String], max_count: usize) -> io::Result<()> {
        let text = format_song_list(titles, max_count);
        match text.strip_prefix(SONGS_LEAD_IN) {
            Some(rest) if self.color => {
                writeln!(self.out, "{}{}", SONGS_LEAD_IN.green().bold(), rest)
            }
            _ => writeln!(self.out, "{text}"),
        }
    }

    /// Writes the command syntax instructions, see [`help_text`].
    pub fn help(&mut self) -> io::Result<()> {
        write!(self.out, "{}", help_text())
    }

    /// Writes the start-up banner.
    pub fn welcome(&mut self) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", WELCOME.bold().cyan())
        } else {
            writeln!(self.out, "{WELCOME}")
        }
    }

    /// Writes the goodbye line shown after `quit`.
    pub fn farewell(&mut self) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", FAREWELL.bold().cyan())
        } else {
            writeln!(self.out, "{FAREWELL}")
        }
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
