//! Tests for the FilmStore tables and indices.

use super::{FilmStore, Movie, Person};
use crate::error::Error;

fn small_store() -> FilmStore {
    let mut store = FilmStore::new();
    store.add_person(Person::new("1", "Amy Adams")).unwrap();
    store
        .add_person(Person::new("2", "Christian Bale"))
        .unwrap();
    store.add_person(Person::new("3", "Amy Adams")).unwrap();
    store
        .add_movie(Movie::new("10", "American Hustle").with_year(2013))
        .unwrap();
    store
}

#[test]
fn duplicate_person_is_rejected() {
    let mut store = small_store();
    let result = store.add_person(Person::new("1", "Impostor"));
    assert!(matches!(result, Err(Error::PersonExists(id)) if id == "1"));
}

#[test]
fn duplicate_movie_is_rejected() {
    let mut store = small_store();
    let result = store.add_movie(Movie::new("10", "Remake"));
    assert!(matches!(result, Err(Error::MovieExists(id)) if id == "10"));
}

#[test]
fn credit_links_both_directions() {
    let mut store = small_store();
    assert!(store.add_credit("1", "10"));
    assert!(store.person("1").unwrap().movies().contains("10"));
    assert!(store.movie("10").unwrap().stars().contains("1"));
}

#[test]
fn credit_with_unknown_person_is_skipped() {
    let mut store = small_store();
    assert!(!store.add_credit("999", "10"));
    assert!(store.movie("10").unwrap().stars().is_empty());
}

#[test]
fn credit_with_unknown_movie_is_skipped() {
    let mut store = small_store();
    assert!(!store.add_credit("1", "999"));
    assert!(store.person("1").unwrap().movies().is_empty());
}

#[test]
fn name_lookup_ignores_case() {
    let store = small_store();
    assert_eq!(store.person_ids_by_name("christian bale"), vec!["2"]);
    assert_eq!(store.person_ids_by_name("CHRISTIAN BALE"), vec!["2"]);
}

#[test]
fn name_lookup_keeps_dataset_order() {
    let store = small_store();
    assert_eq!(store.person_ids_by_name("Amy Adams"), vec!["1", "3"]);
}

#[test]
fn unknown_name_yields_empty_list() {
    let store = small_store();
    assert!(store.person_ids_by_name("Nobody").is_empty());
}

#[test]
fn counts_reflect_population() {
    let store = small_store();
    assert_eq!(store.person_count(), 3);
    assert_eq!(store.movie_count(), 1);
}
