//! Immutable lookup tables for people and movies.
//!
//! A [`FilmStore`] is built once from external records and never mutated
//! afterwards. Every query method takes `&self`, so a loaded store can be
//! shared across any number of concurrent read-only searches.

mod types;

#[cfg(test)]
mod store_tests;
#[cfg(test)]
mod types_tests;

pub use types::{Movie, Person};

use indexmap::IndexSet;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};

/// In-memory filmography tables with a case-insensitive name index.
///
/// Three read-only indices: person id → [`Person`], movie id → [`Movie`],
/// and lowercased name → person ids. Name candidates keep the order they
/// were added in, so disambiguation listings are stable across runs.
#[derive(Debug, Default)]
pub struct FilmStore {
    /// All people indexed by id.
    people: FxHashMap<String, Person>,
    /// All movies indexed by id.
    movies: FxHashMap<String, Movie>,
    /// Secondary index: lowercased name → person ids in insertion order.
    names: FxHashMap<String, IndexSet<String>>,
}

impl FilmStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with pre-allocated table capacity.
    #[must_use]
    pub fn with_capacity(expected_people: usize, expected_movies: usize) -> Self {
        Self {
            people: FxHashMap::with_capacity_and_hasher(expected_people, Default::default()),
            movies: FxHashMap::with_capacity_and_hasher(expected_movies, Default::default()),
            names: FxHashMap::with_capacity_and_hasher(expected_people, Default::default()),
        }
    }

    // ── Population ─────────────────────────────────────────────────────

    /// Adds a person and indexes their name.
    ///
    /// # Errors
    ///
    /// Returns `Error::PersonExists` if a person with the same id was
    /// already added.
    pub fn add_person(&mut self, person: Person) -> Result<()> {
        if self.people.contains_key(person.id()) {
            return Err(Error::PersonExists(person.id().to_string()));
        }
        self.names
            .entry(person.name().to_lowercase())
            .or_default()
            .insert(person.id().to_string());
        self.people.insert(person.id().to_string(), person);
        Ok(())
    }

    /// Adds a movie.
    ///
    /// # Errors
    ///
    /// Returns `Error::MovieExists` if a movie with the same id was
    /// already added.
    pub fn add_movie(&mut self, movie: Movie) -> Result<()> {
        if self.movies.contains_key(movie.id()) {
            return Err(Error::MovieExists(movie.id().to_string()));
        }
        self.movies.insert(movie.id().to_string(), movie);
        Ok(())
    }

    /// Links a starring credit between a person and a movie.
    ///
    /// Pairs referencing an id the store has never seen are skipped:
    /// partial datasets are tolerated at load time rather than treated as
    /// fatal. Returns `true` when the credit was recorded.
    pub fn add_credit(&mut self, person_id: &str, movie_id: &str) -> bool {
        if !self.people.contains_key(person_id) || !self.movies.contains_key(movie_id) {
            tracing::debug!(person_id, movie_id, "skipping credit with unknown id");
            return false;
        }
        if let Some(person) = self.people.get_mut(person_id) {
            person.credit(movie_id);
        }
        if let Some(movie) = self.movies.get_mut(movie_id) {
            movie.credit(person_id);
        }
        true
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Gets a person by id.
    #[must_use]
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    /// Gets a movie by id.
    #[must_use]
    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// Returns the ids of every person whose name matches, ignoring case.
    ///
    /// Candidates keep dataset order. An unknown name yields an empty list.
    #[must_use]
    pub fn person_ids_by_name(&self, name: &str) -> Vec<&str> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns the total number of people.
    #[must_use]
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Returns the total number of movies.
    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }
}
