//! # Command Grammar & Parser
//!
//! Turns one input line into a [`Command`]. Parsing never fails: a line that does not fit
//! the grammar becomes [`Command::Invalid`] carrying the reason, so the dispatcher can
//! report it without touching the backend.
//!
//! ## Grammar
//! ```text
//! load FILEPATH
//! energy MAX
//! energy MIN to MAX
//! danceability MIN
//! show MAX_COUNT
//! show most recent
//! help
//! quit
//! ```
//!
//! Keywords are case-sensitive and tokens are separated by runs of whitespace.

use crate::error::CommandError;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load(String),
    EnergyMax(i32),
    EnergyRange(i32, i32),
    Danceability(i32),
    Show(usize),
    ShowRecent,
    Help,
    Quit,
    Invalid(CommandError),
}

impl Command {
    /// Whether executing this command can change session state.
    pub fn mutates_state(&self) -> bool {
        matches!(
            self,
            Command::EnergyMax(_) | Command::EnergyRange(..) | Command::Danceability(_)
        )
    }
}

/// Parses a single line of user input.
pub fn parse_command(line: &str) -> Command {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let Some((&keyword, args)) = tokens.split_first() else {
        return Command::Invalid(CommandError::syntax("empty command"));
    };

    let parsed = match keyword {
        "load" => parse_load(args),
        "energy" => parse_energy(args),
        "danceability" => parse_danceability(args),
        "show" => parse_show(args),
        "help" => no_arguments(args, "help", Command::Help),
        "quit" => no_arguments(args, "quit", Command::Quit),
        _ => Err(CommandError::UnknownCommand),
    };

    parsed.unwrap_or_else(Command::Invalid)
}

fn parse_load(args: &[&str]) -> Result<Command, CommandError> {
    match args {
        [] => Err(CommandError::syntax("missing FILEPATH")),
        [path] => Ok(Command::Load((*path).to_string())),
        _ => Err(CommandError::syntax("more than one FILEPATH")),
    }
}

fn parse_energy(args: &[&str]) -> Result<Command, CommandError> {
    let not_integer = || {
        CommandError::argument_format(
            "energy MAX or energy MIN to MAX, MIN and MAX must be valid integers.",
        )
    };

    match args {
        [max] => {
            let max = parse_int(max).ok_or_else(not_integer)?;
            Ok(Command::EnergyMax(max))
        }
        [min, "to", max] => {
            let min = parse_int(min).ok_or_else(not_integer)?;
            let max = parse_int(max).ok_or_else(not_integer)?;
            Ok(Command::EnergyRange(min, max))
        }
        [_, keyword, _] => Err(CommandError::syntax(format!(
            "energy MIN to MAX, expected 'to' but found '{keyword}'."
        ))),
        _ => Err(CommandError::syntax(
            "energy MAX or energy MIN to MAX, incorrect number of arguments.",
        )),
    }
}

fn parse_danceability(args: &[&str]) -> Result<Command, CommandError> {
    match args {
        [min] => parse_int(min).map(Command::Danceability).ok_or_else(|| {
            CommandError::argument_format("danceability MIN, MIN must be a valid integer.")
        }),
        _ => Err(CommandError::syntax(
            "danceability MIN, incorrect number of arguments.",
        )),
    }
}

fn parse_show(args: &[&str]) -> Result<Command, CommandError> {
    match args {
        ["most", "recent"] => Ok(Command::ShowRecent),
        [count] => {
            let count = parse_int(count).ok_or_else(|| {
                CommandError::argument_format("show MAX_COUNT, MAX_COUNT must be a valid integer.")
            })?;
            usize::try_from(count).map(Command::Show).map_err(|_| {
                CommandError::argument_format(
                    "show MAX_COUNT, MAX_COUNT must be a non-negative integer.",
                )
            })
        }
        [_, _] => Err(CommandError::syntax(
            "show most recent, expected the words 'most recent'.",
        )),
        _ => Err(CommandError::syntax(
            "show most recent or show MAX_COUNT, incorrect number of arguments.",
        )),
    }
}

fn no_arguments(args: &[&str], keyword: &str, command: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::syntax(format!(
            "{keyword} command does not take any arguments."
        )))
    }
}

fn parse_int(token: &str) -> Option<i32> {
    token.parse::<i32>().ok()
}
