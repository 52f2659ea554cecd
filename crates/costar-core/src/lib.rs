//! # costar-core
//!
//! Degrees-of-separation search engine over a filmography dataset.
//!
//! Given immutable people and movie tables, `costar-core` finds the
//! shortest chain of co-starring relationships connecting two people by
//! running a breadth-first search over the implicit bipartite
//! person/movie graph. Edges are derived on demand from the tables;
//! nothing is materialized up front.
//!
//! ## Quick Start
//!
//! ```rust
//! use costar_core::{shortest_path, FilmStore, Movie, Person, SearchConfig};
//!
//! fn main() -> costar_core::Result<()> {
//!     let mut store = FilmStore::new();
//!     store.add_person(Person::new("1", "Amy Adams").with_birth(1974))?;
//!     store.add_person(Person::new("2", "Christian Bale").with_birth(1974))?;
//!     store.add_movie(Movie::new("10", "American Hustle").with_year(2013))?;
//!     store.add_credit("1", "10");
//!     store.add_credit("2", "10");
//!
//!     let path = shortest_path(&store, "1", "2", &SearchConfig::default())?;
//!     assert_eq!(path.map(|hops| hops.len()), Some(1));
//!     Ok(())
//! }
//! ```
//!
//! The store tolerates partial input: credits referencing unknown ids are
//! skipped at load time. Once built, it is never mutated, so it can be
//! shared freely across concurrent read-only searches.

#![warn(missing_docs)]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod resolve;
pub mod search;
pub mod store;

pub use config::{ConfigError, CostarConfig, DataConfig, LoggingConfig, SearchConfig};
pub use error::{Error, Result};
pub use resolve::{resolve_name, NameMatch};
pub use search::{co_stars, shortest_path, CoStarGraph, Frontier, Hop};
pub use store::{FilmStore, Movie, Person};
