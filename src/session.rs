//! # Interaction Loop
//!
//! [`Session`] owns the backend, the session state and the output, and drives the
//! read-parse-execute cycle until the user quits or input runs out.
//!
//! A session prints the welcome banner and the help once, then reads one line at a time.
//! Whatever a command does, including failing in the backend, the loop reports it and goes
//! back to reading. Only a failure to read input or write output ends [`Session::run`] with
//! an error.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::backend::SongBackend;
use crate::commands;
use crate::context::SessionState;
use crate::error::{Result, SessionError};
use crate::output::{EMPTY_LINE_HINT, Printer};
use crate::parser::{Command, parse_command};

pub const DEFAULT_PROMPT: &str = ">>";

/// Knobs for a session that do not affect command semantics.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Printed (and flushed) before every read.
    pub prompt: String,
    /// Colourise errors, listings and banners.
    pub color: bool,
    /// Catalog to load after the banner, before the first prompt.
    pub preload: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            color: false,
            preload: None,
        }
    }
}

/// What the loop does after handling a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `quit`.
    Quit,
    /// The input stream was exhausted.
    EndOfInput,
}

pub struct Session<B, W: Write> {
    backend: B,
    state: SessionState,
    printer: Printer<W>,
    options: SessionOptions,
}

impl<B: SongBackend, W: Write> Session<B, W> {
    pub fn new(backend: B, out: W, options: SessionOptions) -> Self {
        let printer = Printer::new(out, options.color);
        Self {
            backend,
            state: SessionState::default(),
            printer,
            options,
        }
    }

    /// Filter parameters set so far.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The backend commands are issued against.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs the loop over `input` until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<SessionEnd> {
        info!("session started");
        self.printer.welcome()?;
        self.printer.help()?;

        if let Some(path) = self.options.preload.clone() {
            debug!(%path, "preloading catalog");
            self.supervise(&Command::Load(path))?;
        }

        let mut buf = Vec::new();
        loop {
            self.printer.prompt(&self.options.prompt)?;

            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .map_err(SessionError::Input)?;
            if read == 0 {
                info!("end of input, session finished");
                self.printer.flush()?;
                return Ok(SessionEnd::EndOfInput);
            }

            // Malformed bytes become U+FFFD instead of aborting the session.
            let line = String::from_utf8_lossy(&buf);
            if self.handle_line(&line)? == Flow::Quit {
                info!("quit requested, session finished");
                self.printer.flush()?;
                return Ok(SessionEnd::Quit);
            }
        }
    }

    /// Handles one raw input line, reporting any recoverable failure.
    ///
    /// A line that is exactly `quit` once trimmed ends the session without being parsed;
    /// `quit` with arguments goes through the parser like any other command.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();

        if line.is_empty() {
            self.printer.line(EMPTY_LINE_HINT)?;
            return Ok(Flow::Continue);
        }

        if line == "quit" {
            self.printer.farewell()?;
            return Ok(Flow::Quit);
        }

        self.supervise(&parse_command(line))?;
        Ok(Flow::Continue)
    }

    /// Executes a command and turns any recoverable error into an `Error:` line.
    fn supervise(&mut self, command: &Command) -> Result<()> {
        match commands::execute(command, &mut self.backend, &mut self.state, &mut self.printer) {
            Ok(()) => Ok(()),
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, ?command, "command failed");
                self.printer.error(&e)?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
