//! # Song Catalog
//!
//! An in-memory [`SongBackend`] fed from JSON files.
//!
//! A catalog file is an array of songs:
//!
//! ```json
//! [
//!   { "title": "Blinding Lights", "artist": "The Weeknd", "year": 2019, "energy": 73, "danceability": 51 },
//!   { "title": "Levitating", "year": 2020, "energy": 82, "danceability": 70 }
//! ]
//! ```
//!
//! Each `load` appends to what is already there. Filtering is a plain scan: a song matches
//! when its energy lies within the current bounds (inclusive) and its danceability reaches
//! the threshold. Unset bounds and thresholds do not restrict anything. Matches are ordered
//! by energy, ties kept in load order.

use std::fs;

use serde::Deserialize;
use tracing::debug;

use crate::backend::{RECENT_COUNT, SongBackend};
use crate::error::BackendError;

/// One record of the catalog.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    #[serde(default)]
    pub artist: String,
    pub year: i32,
    pub energy: i32,
    pub danceability: i32,
}

#[derive(Debug, Default)]
pub struct SongCatalog {
    songs: Vec<Song>,
    min_energy: Option<i32>,
    max_energy: Option<i32>,
    danceability_threshold: Option<i32>,
}

impl SongCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from songs already in memory.
    pub fn with_songs(songs: Vec<Song>) -> Self {
        Self {
            songs,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    fn in_energy_range(&self, song: &Song) -> bool {
        self.min_energy.is_none_or(|min| song.energy >= min)
            && self.max_energy.is_none_or(|max| song.energy <= max)
    }

    fn danceable_enough(&self, song: &Song) -> bool {
        self.danceability_threshold
            .is_none_or(|threshold| song.danceability >= threshold)
    }

    fn sorted_by_energy<'a>(songs: impl Iterator<Item = &'a Song>) -> Vec<&'a Song> {
        let mut songs: Vec<&Song> = songs.collect();
        songs.sort_by_key(|song| song.energy);
        songs
    }

    fn matching(&self) -> Vec<&Song> {
        Self::sorted_by_energy(
            self.songs
                .iter()
                .filter(|song| self.in_energy_range(song) && self.danceable_enough(song)),
        )
    }
}

fn titles(songs: &[&Song]) -> Vec<String> {
    songs.iter().map(|song| song.title.clone()).collect()
}

impl SongBackend for SongCatalog {
    fn load(&mut self, path: &str) -> Result<(), BackendError> {
        let data = fs::read_to_string(path).map_err(|e| BackendError::io(path, e))?;
        let songs: Vec<Song> =
            serde_json::from_str(&data).map_err(|source| BackendError::Format {
                path: path.to_string(),
                source,
            })?;

        debug!(path, added = songs.len(), total = self.songs.len() + songs.len(), "catalog extended");
        self.songs.extend(songs);
        Ok(())
    }

    fn set_energy_range(
        &mut self,
        min: Option<i32>,
        max: Option<i32>,
    ) -> Result<Vec<String>, BackendError> {
        self.min_energy = min;
        self.max_energy = max;

        let in_range = Self::sorted_by_energy(
            self.songs.iter().filter(|song| self.in_energy_range(song)),
        );
        Ok(titles(&in_range))
    }

    fn filter_by_danceability(
        &mut self,
        threshold: Option<i32>,
    ) -> Result<Vec<String>, BackendError> {
        self.danceability_threshold = threshold;
        Ok(titles(&self.matching()))
    }

    fn most_recent(&mut self) -> Result<Vec<String>, BackendError> {
        let mut songs = self.matching();
        // Stable sort, so equal years keep their energy order.
        songs.sort_by(|a, b| b.year.cmp(&a.year));
        songs.truncate(RECENT_COUNT);
        Ok(titles(&songs))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn song(title: &str, year: i32, energy: i32, danceability: i32) -> Song {
        Song {
            title: title.to_string(),
            artist: String::new(),
            year,
            energy,
            danceability,
        }
    }

    fn sample() -> SongCatalog {
        SongCatalog::with_songs(vec![
            song("Calm", 2001, 20, 30),
            song("Groove", 2015, 60, 80),
            song("Anthem", 2019, 90, 55),
            song("Drift", 2010, 40, 65),
            song("Pulse", 2021, 75, 90),
            song("Echo", 2018, 60, 40),
        ])
    }

    #[test]
    fn unset_filters_return_everything_by_energy() {
        let mut catalog = sample();
        assert_eq!(
            catalog.filter_by_danceability(None).unwrap(),
            vec!["Calm", "Drift", "Groove", "Echo", "Pulse", "Anthem"]
        );
    }

    #[test]
    fn energy_range_is_inclusive_and_open_ended() {
        let mut catalog = sample();
        assert_eq!(
            catalog.set_energy_range(None, Some(60)).unwrap(),
            vec!["Calm", "Drift", "Groove", "Echo"]
        );
        assert_eq!(
            catalog.set_energy_range(Some(60), Some(75)).unwrap(),
            vec!["Groove", "Echo", "Pulse"]
        );
        assert!(catalog.set_energy_range(Some(95), Some(5)).unwrap().is_empty());
    }

    #[test]
    fn danceability_combines_with_energy_range() {
        let mut catalog = sample();
        catalog.set_energy_range(Some(30), Some(80)).unwrap();
        assert_eq!(
            catalog.filter_by_danceability(Some(60)).unwrap(),
            vec!["Drift", "Groove", "Pulse"]
        );
    }

    #[test]
    fn most_recent_respects_filters_and_limit() {
        let mut catalog = sample();
        assert_eq!(
            catalog.most_recent().unwrap(),
            vec!["Pulse", "Anthem", "Echo", "Groove", "Drift"]
        );

        catalog.filter_by_danceability(Some(60)).unwrap();
        assert_eq!(catalog.most_recent().unwrap(), vec!["Pulse", "Groove", "Drift"]);
    }

    #[test]
    fn load_appends_songs_from_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "New", "artist": "Someone", "year": 2023, "energy": 50, "danceability": 50}},
                {{"title": "Newer", "year": 2024, "energy": 10, "danceability": 10}}]"#
        )
        .unwrap();

        let mut catalog = sample();
        catalog.load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.most_recent().unwrap()[..2], ["Newer", "New"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let mut catalog = SongCatalog::new();
        let err = catalog.load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, BackendError::Io { .. }), "{err:?}");
        assert!(catalog.is_empty());
    }

    #[test]
    fn malformed_file_is_a_format_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "title,year,energy\nNope,2020,10\n").unwrap();

        let mut catalog = SongCatalog::new();
        let err = catalog.load(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, BackendError::Format { .. }), "{err:?}");
        assert!(catalog.is_empty());
    }
}
