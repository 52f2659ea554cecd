//! Neighbor expansion: the (movie, co-star) edges incident to a person.

use std::collections::BTreeSet;

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::store::{FilmStore, Movie, Person};

/// Read access to the bipartite person/movie graph.
///
/// The search only needs the two membership sets, so any store exposing
/// them can be searched, including lightweight test doubles.
pub trait CoStarGraph {
    /// Returns the ids of the movies a person starred in, or `None` if
    /// the person id is unknown.
    fn movies_of(&self, person_id: &str) -> Option<&FxHashSet<String>>;

    /// Returns the ids of the people credited in a movie, or `None` if
    /// the movie id is unknown.
    fn stars_of(&self, movie_id: &str) -> Option<&FxHashSet<String>>;
}

impl CoStarGraph for FilmStore {
    fn movies_of(&self, person_id: &str) -> Option<&FxHashSet<String>> {
        self.person(person_id).map(Person::movies)
    }

    fn stars_of(&self, movie_id: &str) -> Option<&FxHashSet<String>> {
        self.movie(movie_id).map(Movie::stars)
    }
}

/// Computes the `(movie_id, co_star_id)` edges incident to a person.
///
/// The queried person never appears in its own result: a movie with a
/// single credited star contributes nothing, and sharing several movies
/// with the origin never reintroduces it. Duplicate pairs collapse, and
/// the result is ordered by movie id then person id so traversal traces
/// are reproducible.
///
/// # Errors
///
/// Returns [`Error::UnknownPerson`] when the id is absent from the graph.
/// Expansion is only defined for validated ids; an unknown id here is a
/// caller bug, never an empty neighborhood.
pub fn co_stars<G: CoStarGraph>(graph: &G, person_id: &str) -> Result<Vec<(String, String)>> {
    let movies = graph
        .movies_of(person_id)
        .ok_or_else(|| Error::UnknownPerson(person_id.to_string()))?;

    let mut edges: BTreeSet<(String, String)> = BTreeSet::new();
    for movie_id in movies {
        // A dangling movie id cannot come from the store, but a foreign
        // `CoStarGraph` impl may produce one; treat it as an empty cast.
        let Some(stars) = graph.stars_of(movie_id) else {
            continue;
        };
        for co_star in stars {
            if co_star != person_id {
                edges.insert((movie_id.clone(), co_star.clone()));
            }
        }
    }
    Ok(edges.into_iter().collect())
}
