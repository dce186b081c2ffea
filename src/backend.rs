//! # Backend Capability
//!
//! The interpreter never touches song records directly. Everything it needs from the
//! catalog goes through the four operations of [`SongBackend`], so any storage or filtering
//! strategy can sit behind the command loop.
//!
//! The crate ships one implementation, [`SongCatalog`](crate::catalog::SongCatalog).

use crate::error::BackendError;

/// Number of titles [`SongBackend::most_recent`] returns at most.
pub const RECENT_COUNT: usize = 5;

/// Operations the command loop issues against the song catalog.
///
/// Bounds and thresholds are `None` until the user sets them; implementations must treat an
/// unset value as "no restriction".
pub trait SongBackend {
    /// Loads song data from `path`. May block on file I/O.
    fn load(&mut self, path: &str) -> Result<(), BackendError>;

    /// Sets the inclusive energy range and returns the titles inside it.
    fn set_energy_range(
        &mut self,
        min: Option<i32>,
        max: Option<i32>,
    ) -> Result<Vec<String>, BackendError>;

    /// Sets the danceability threshold and returns the titles matching every current filter,
    /// in the backend's order.
    fn filter_by_danceability(
        &mut self,
        threshold: Option<i32>,
    ) -> Result<Vec<String>, BackendError>;

    /// Returns up to [`RECENT_COUNT`] of the most recent matching titles.
    fn most_recent(&mut self) -> Result<Vec<String>, BackendError>;
}

impl<B: SongBackend + ?Sized> SongBackend for &mut B {
    fn load(&mut self, path: &str) -> Result<(), BackendError> {
        (**self).load(path)
    }

    fn set_energy_range(
        &mut self,
        min: Option<i32>,
        max: Option<i32>,
    ) -> Result<Vec<String>, BackendError> {
        (**self).set_energy_range(min, max)
    }

    fn filter_by_danceability(
        &mut self,
        threshold: Option<i32>,
    ) -> Result<Vec<String>, BackendError> {
        (**self).filter_by_danceability(threshold)
    }

    fn most_recent(&mut self) -> Result<Vec<String>, BackendError> {
        (**self).most_recent()
    }
}
