//! # Session State
//!
//! The filter parameters that survive from one command to the next within a run.
//!
//! All three start unset. Only the `energy` and `danceability` commands change them, and a
//! value is only ever replaced, never cleared.
//!
//! ## Example
//! ```rust
//! use songly_cli::context::SessionState;
//!
//! let mut state = SessionState::default();
//! state.set_max_energy(80);
//! assert_eq!(state.energy_range(), (None, Some(80)));
//! ```

/// Filter parameters for the current session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub min_energy: Option<i32>,
    pub max_energy: Option<i32>,
    pub danceability_threshold: Option<i32>,
}

impl SessionState {
    /// Sets the upper energy bound, leaving the lower bound as it was.
    pub fn set_max_energy(&mut self, max: i32) {
        self.max_energy = Some(max);
    }

    /// Sets both energy bounds. `min > max` is stored as given.
    pub fn set_energy_range(&mut self, min: i32, max: i32) {
        self.min_energy = Some(min);
        self.max_energy = Some(max);
    }

    /// Sets the minimum danceability used by `show`.
    pub fn set_danceability_threshold(&mut self, threshold: i32) {
        self.danceability_threshold = Some(threshold);
    }

    /// The `(min, max)` pair handed to the backend's range operation.
    pub fn energy_range(&self) -> (Option<i32>, Option<i32>) {
        (self.min_energy, self.max_energy)
    }
}
