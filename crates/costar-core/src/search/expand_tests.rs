//! Tests for neighbor expansion.

use super::expand::co_stars;
use crate::error::Error;
use crate::store::{FilmStore, Movie, Person};

/// Person 1 stars in movie 10 with 2 and 3, and in movie 11 alone with 2.
fn sample_store() -> FilmStore {
    let mut store = FilmStore::new();
    for (id, name) in [(1, "A"), (2, "B"), (3, "C")] {
        store
            .add_person(Person::new(&id.to_string(), name))
            .unwrap();
    }
    store.add_movie(Movie::new("10", "First")).unwrap();
    store.add_movie(Movie::new("11", "Second")).unwrap();
    for (person, movie) in [("1", "10"), ("2", "10"), ("3", "10"), ("1", "11"), ("2", "11")] {
        assert!(store.add_credit(person, movie));
    }
    store
}

#[test]
fn expansion_lists_every_co_starring_edge() {
    let store = sample_store();
    let edges = co_stars(&store, "1").unwrap();
    assert_eq!(
        edges,
        vec![
            ("10".to_string(), "2".to_string()),
            ("10".to_string(), "3".to_string()),
            ("11".to_string(), "2".to_string()),
        ]
    );
}

#[test]
fn queried_person_is_never_its_own_neighbor() {
    let store = sample_store();
    for person in ["1", "2", "3"] {
        let edges = co_stars(&store, person).unwrap();
        assert!(edges.iter().all(|(_, co_star)| co_star != person));
    }
}

#[test]
fn single_star_movie_contributes_nothing() {
    let mut store = FilmStore::new();
    store.add_person(Person::new("1", "Solo")).unwrap();
    store.add_movie(Movie::new("10", "One Hander")).unwrap();
    store.add_credit("1", "10");

    assert!(co_stars(&store, "1").unwrap().is_empty());
}

#[test]
fn result_is_sorted_by_movie_then_person() {
    let store = sample_store();
    let edges = co_stars(&store, "2").unwrap();
    let mut sorted = edges.clone();
    sorted.sort();
    assert_eq!(edges, sorted);
}

#[test]
fn unknown_person_is_a_contract_violation() {
    let store = sample_store();
    let result = co_stars(&store, "999");
    assert!(matches!(result, Err(Error::UnknownPerson(id)) if id == "999"));
}
