//! # Command Handlers
//!
//! Executes a parsed [`Command`] against the backend and the session state, and prints the
//! outcome. Each command issues at most one backend call and changes at most one part of
//! the state.
//!
//! A load that fails on I/O is reported here. Any other backend failure is returned to the
//! caller as a [`SessionError`], which the interaction loop prints before reading the next
//! line.
//!
//! ## Example
//! ```rust,ignore
//! execute(&Command::EnergyRange(10, 90), &mut backend, &mut state, &mut printer)?;
//! ```

use std::io::Write;

use tracing::{debug, warn};

use crate::backend::SongBackend;
use crate::context::SessionState;
use crate::error::{BackendError, Result, SessionError};
use crate::output::Printer;
use crate::parser::Command;

/// Message shown when the backend cannot read the requested file.
pub const LOAD_IO_FAILURE: &str = "IO issues during processing the file.";

/// Runs one command to completion.
pub fn execute<B, W>(
    command: &Command,
    backend: &mut B,
    state: &mut SessionState,
    printer: &mut Printer<W>,
) -> Result<()>
where
    B: SongBackend + ?Sized,
    W: Write,
{
    debug!(?command, mutates_state = command.mutates_state(), "executing command");

    match command {
        Command::Load(path) => handle_load(backend, printer, path),
        Command::EnergyMax(max) => handle_energy_max(backend, state, printer, *max),
        Command::EnergyRange(min, max) => {
            handle_energy_range(backend, state, printer, *min, *max)
        }
        Command::Danceability(min) => handle_danceability(backend, state, printer, *min),
        Command::Show(count) => handle_show(backend, state, printer, *count),
        Command::ShowRecent => handle_show_recent(backend, printer),
        Command::Help => Ok(printer.help()?),
        // Ending the session is up to the loop; a bare `quit` reaching here has nothing to do.
        Command::Quit => Ok(()),
        Command::Invalid(reason) => Ok(printer.error(reason)?),
    }
}

/// Loads a catalog file through the backend.
pub fn handle_load<B, W>(backend: &mut B, printer: &mut Printer<W>, path: &str) -> Result<()>
where
    B: SongBackend + ?Sized,
    W: Write,
{
    match backend.load(path) {
        Ok(()) => {
            debug!(path, "catalog loaded");
            printer.line(format!("Successfully loaded {path}"))?;
            Ok(())
        }
        Err(e @ BackendError::Io { .. }) => {
            warn!(error = %e, "load failed");
            printer.error(LOAD_IO_FAILURE)?;
            Ok(())
        }
        Err(e) => Err(SessionError::Backend(e)),
    }
}

/// Sets the upper energy bound and pushes the current range to the backend.
pub fn handle_energy_max<B, W>(
    backend: &mut B,
    state: &mut SessionState,
    printer: &mut Printer<W>,
    max: i32,
) -> Result<()>
where
    B: SongBackend + ?Sized,
    W: Write,
{
    state.set_max_energy(max);
    let (min_energy, max_energy) = state.energy_range();
    backend.set_energy_range(min_energy, max_energy)?;
    printer.line(format!("Updated the maximum energy level to {max}"))?;
    Ok(())
}

/// Sets both energy bounds and pushes them to the backend.
pub fn handle_energy_range<B, W>(
    backend: &mut B,
    state: &mut SessionState,
    printer: &mut Printer<W>,
    min: i32,
    max: i32,
) -> Result<()>
where
    B: SongBackend + ?Sized,
    W: Write,
{
    state.set_energy_range(min, max);
    backend.set_energy_range(Some(min), Some(max))?;
    printer.line(format!("Updated the energy level range to {min} to {max}"))?;
    Ok(())
}

/// Sets the danceability threshold.
///
/// The backend filter runs even though nothing is listed; its result is dropped.
pub fn handle_danceability<B, W>(
    backend: &mut B,
    state: &mut SessionState,
    printer: &mut Printer<W>,
    threshold: i32,
) -> Result<()>
where
    B: SongBackend + ?Sized,
    W: Write,
{
    state.set_danceability_threshold(threshold);
    let _ = backend.filter_by_danceability(Some(threshold))?;
    printer.line(format!("Updated the danceability threshold to {threshold}"))?;
    Ok(())
}

/// Lists up to `count` songs matching the current filters.
pub fn handle_show<B, W>(
    backend: &mut B,
    state: &SessionState,
    printer: &mut Printer<W>,
    count: usize,
) -> Result<()>
where
    B: SongBackend + ?Sized,
    W: Write,
{
    let titles = backend.filter_by_danceability(state.danceability_threshold)?;
    debug!(found = titles.len(), count, "showing filtered songs");
    printer.songs(&titles, count)?;
    Ok(())
}

/// Lists whatever the backend considers the most recent songs.
pub fn handle_show_recent<B, W>(backend: &mut B, printer: &mut Printer<W>) -> Result<()>
where
    B: SongBackend + ?Sized,
    W: Write,
{
    let titles = backend.most_recent()?;
    printer.songs(&titles, titles.len())?;
    Ok(())
}
