//! Name resolution: display name → candidate person ids.
//!
//! Matching is exact apart from case. Picking between several people who
//! share a name needs input the library cannot supply, so ambiguity is
//! reported back to the caller instead of being resolved here.

use crate::store::FilmStore;

/// Outcome of resolving a display name against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameMatch {
    /// No person with this name.
    NotFound,
    /// Exactly one person matches.
    Unique(String),
    /// Several people share the name; candidates in dataset order.
    Ambiguous(Vec<String>),
}

/// Resolves a display name to person ids, ignoring case.
#[must_use]
pub fn resolve_name(store: &FilmStore, name: &str) -> NameMatch {
    let mut ids = store.person_ids_by_name(name);
    match ids.len() {
        0 => NameMatch::NotFound,
        1 => NameMatch::Unique(ids.remove(0).to_string()),
        _ => NameMatch::Ambiguous(ids.into_iter().map(str::to_string).collect()),
    }
}
