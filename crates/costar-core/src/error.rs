//! Error types shared across the crate.

use thiserror::Error;

/// Result alias used throughout `costar-core`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while populating or querying the filmography graph.
#[derive(Debug, Error)]
pub enum Error {
    /// A person with this id was already added to the store.
    #[error("Person '{0}' already exists")]
    PersonExists(String),

    /// A movie with this id was already added to the store.
    #[error("Movie '{0}' already exists")]
    MovieExists(String),

    /// Neighbor expansion was asked about a person the store has never
    /// seen. Ids must be resolved through the store before searching, so
    /// hitting this is a caller bug, not an empty neighborhood.
    #[error("Unknown person id '{0}'")]
    UnknownPerson(String),

    /// The search expanded more people than the configured budget allows.
    #[error("Search aborted after expanding {0} people (limit reached)")]
    SearchLimitExceeded(usize),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}
