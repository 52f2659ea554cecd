//! Tests for the Person and Movie value types.

use super::types::{Movie, Person};

#[test]
fn person_builder_and_accessors() {
    let person = Person::new("102", "Kevin Bacon").with_birth(1958);
    assert_eq!(person.id(), "102");
    assert_eq!(person.name(), "Kevin Bacon");
    assert_eq!(person.birth(), Some(1958));
    assert!(person.movies().is_empty());
}

#[test]
fn person_without_birth_year() {
    let person = Person::new("7", "Unknown Star");
    assert_eq!(person.birth(), None);
}

#[test]
fn person_credits_deduplicate() {
    let mut person = Person::new("1", "Someone");
    person.credit("10");
    person.credit("10");
    person.credit("11");
    assert_eq!(person.movies().len(), 2);
    assert!(person.movies().contains("10"));
}

#[test]
fn movie_builder_and_accessors() {
    let movie = Movie::new("112384", "Apollo 13").with_year(1995);
    assert_eq!(movie.id(), "112384");
    assert_eq!(movie.title(), "Apollo 13");
    assert_eq!(movie.year(), Some(1995));
    assert!(movie.stars().is_empty());
}

#[test]
fn movie_credits_deduplicate() {
    let mut movie = Movie::new("10", "Some Film");
    movie.credit("1");
    movie.credit("1");
    assert_eq!(movie.stars().len(), 1);
}
