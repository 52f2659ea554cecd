//! Value types for the filmography tables.
//!
//! These mirror the records the store is populated from but are independent
//! of any input format. Credits are linked by the store after both ends of
//! a pair exist; the types themselves never validate cross-references.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A person in the filmography dataset.
///
/// # Example
///
/// ```rust
/// use costar_core::Person;
///
/// let person = Person::new("102", "Kevin Bacon").with_birth(1958);
/// assert_eq!(person.id(), "102");
/// assert_eq!(person.name(), "Kevin Bacon");
/// assert_eq!(person.birth(), Some(1958));
/// assert!(person.movies().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Person {
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth: Option<u16>,
    movies: FxHashSet<String>,
}

impl Person {
    /// Creates a new person with the given id and display name.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            birth: None,
            movies: FxHashSet::default(),
        }
    }

    /// Sets the birth year (builder pattern).
    #[must_use]
    pub fn with_birth(mut self, birth: u16) -> Self {
        self.birth = Some(birth);
        self
    }

    /// Returns the person id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the birth year, if known.
    #[must_use]
    pub fn birth(&self) -> Option<u16> {
        self.birth
    }

    /// Returns the ids of the movies this person starred in.
    #[must_use]
    pub fn movies(&self) -> &FxHashSet<String> {
        &self.movies
    }

    /// Records a starring credit. Only the store links credits.
    pub(crate) fn credit(&mut self, movie_id: &str) {
        self.movies.insert(movie_id.to_string());
    }
}

/// A movie in the filmography dataset.
///
/// # Example
///
/// ```rust
/// use costar_core::Movie;
///
/// let movie = Movie::new("112384", "Apollo 13").with_year(1995);
/// assert_eq!(movie.id(), "112384");
/// assert_eq!(movie.title(), "Apollo 13");
/// assert_eq!(movie.year(), Some(1995));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<u16>,
    stars: FxHashSet<String>,
}

impl Movie {
    /// Creates a new movie with the given id and title.
    #[must_use]
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            year: None,
            stars: FxHashSet::default(),
        }
    }

    /// Sets the release year (builder pattern).
    #[must_use]
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    /// Returns the movie id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the release year, if known.
    #[must_use]
    pub fn year(&self) -> Option<u16> {
        self.year
    }

    /// Returns the ids of the people credited in this movie.
    #[must_use]
    pub fn stars(&self) -> &FxHashSet<String> {
        &self.stars
    }

    /// Records a starring credit. Only the store links credits.
    pub(crate) fn credit(&mut self, person_id: &str) {
        self.stars.insert(person_id.to_string());
    }
}
