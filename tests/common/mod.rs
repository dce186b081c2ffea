//! Shared helpers for driving a session end to end.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{self, Cursor};

use songly_cli::output;
use songly_cli::{BackendError, Session, SessionEnd, SessionOptions, SongBackend};

/// A backend call as observed by [`FakeBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(String),
    Range(Option<i32>, Option<i32>),
    Filter(Option<i32>),
    Recent,
}

/// Failure to inject on the next matching call.
pub enum Failure {
    LoadIo,
    Runtime(&'static str),
}

/// Records every call and answers with a fixed title list.
#[derive(Default)]
pub struct FakeBackend {
    pub calls: Vec<Call>,
    pub titles: Vec<String>,
    pub failures: VecDeque<Failure>,
}

impl FakeBackend {
    pub fn with_titles(titles: &[&str]) -> Self {
        Self {
            titles: titles.iter().map(|t| t.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing(mut self, failure: Failure) -> Self {
        self.failures.push_back(failure);
        self
    }

    fn next_failure(&mut self, path: Option<&str>) -> Result<(), BackendError> {
        match self.failures.pop_front() {
            None => Ok(()),
            Some(Failure::LoadIo) => Err(BackendError::io(
                path.unwrap_or_default(),
                io::Error::new(io::ErrorKind::NotFound, "no such file"),
            )),
            Some(Failure::Runtime(message)) => Err(BackendError::runtime(message)),
        }
    }
}

impl SongBackend for FakeBackend {
    fn load(&mut self, path: &str) -> Result<(), BackendError> {
        self.calls.push(Call::Load(path.to_string()));
        self.next_failure(Some(path))
    }

    fn set_energy_range(
        &mut self,
        min: Option<i32>,
        max: Option<i32>,
    ) -> Result<Vec<String>, BackendError> {
        self.calls.push(Call::Range(min, max));
        self.next_failure(None)?;
        Ok(self.titles.clone())
    }

    fn filter_by_danceability(
        &mut self,
        threshold: Option<i32>,
    ) -> Result<Vec<String>, BackendError> {
        self.calls.push(Call::Filter(threshold));
        self.next_failure(None)?;
        Ok(self.titles.clone())
    }

    fn most_recent(&mut self) -> Result<Vec<String>, BackendError> {
        self.calls.push(Call::Recent);
        self.next_failure(None)?;
        Ok(self
            .titles
            .iter()
            .take(songly_cli::RECENT_COUNT)
            .cloned()
            .collect())
    }
}

/// Outcome of running a scripted session.
pub struct Transcript {
    pub end: SessionEnd,
    pub output: String,
    pub calls: Vec<Call>,
    pub state: songly_cli::context::SessionState,
}

impl Transcript {
    /// Output following the banner and help, split on the default prompt.
    ///
    /// Element 0 is whatever was printed before the first prompt (a preload result, or
    /// nothing); element `i` is the response to the `i`-th input line.
    pub fn responses(&self) -> Vec<&str> {
        let preamble = format!("{}\n{}", output::WELCOME, output::help_text());
        self.output
            .strip_prefix(preamble.as_str())
            .expect("session starts with the banner and help")
            .split(songly_cli::session::DEFAULT_PROMPT)
            .collect()
    }
}

pub fn run_script(backend: FakeBackend, input: &str) -> Transcript {
    run_with_options(backend, input, SessionOptions::default())
}

pub fn run_with_options(
    mut backend: FakeBackend,
    input: &str,
    options: SessionOptions,
) -> Transcript {
    let mut out = Vec::new();
    let (end, state) = {
        let mut session = Session::new(&mut backend, &mut out, options);
        let end = session
            .run(Cursor::new(input.as_bytes()))
            .expect("session should not fail on in-memory streams");
        (end, *session.state())
    };

    Transcript {
        end,
        output: String::from_utf8(out).expect("output is utf-8"),
        calls: backend.calls,
        state,
    }
}
