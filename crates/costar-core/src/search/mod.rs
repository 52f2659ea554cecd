//! Breadth-first shortest-path search over the co-starring graph.
//!
//! The graph is implicit: people are nodes, and two people are adjacent
//! when they share a movie. Edges are computed on demand by
//! [`co_stars`]; nothing is materialized up front. The engine keeps all
//! [`SearchNode`]s for a query in an arena and links children to parents
//! by index, so path reconstruction after the traversal needs no shared
//! ownership.

mod expand;
mod frontier;

#[cfg(test)]
mod expand_tests;

pub use expand::{co_stars, CoStarGraph};
pub use frontier::Frontier;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::error::{Error, Result};

/// One step of a separation path: the movie through which the search
/// arrived at a person.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hop {
    /// Movie shared with the previous person on the path.
    pub movie_id: String,
    /// Person reached through that movie.
    pub person_id: String,
}

/// A node in the search arena.
struct SearchNode {
    /// Arrival movie; `None` only for the root.
    movie: Option<String>,
    /// Arrived-at person.
    person: String,
    /// Arena index of the parent node; `None` only for the root.
    parent: Option<usize>,
}

/// Finds the shortest chain of co-starring hops from `source` to `target`.
///
/// Returns `Ok(None)` when the two people are in different components.
/// A query for a person against themselves returns an empty path without
/// touching the graph; the traversal itself never compares source to
/// target.
///
/// When several equally short paths exist, which one is returned depends
/// on the (deterministic) neighbor expansion order and is otherwise
/// unspecified.
///
/// # Errors
///
/// Returns [`Error::UnknownPerson`] if an expanded id is missing from the
/// graph, and [`Error::SearchLimitExceeded`] if the configured expansion
/// budget runs out before the search terminates.
pub fn shortest_path<G: CoStarGraph>(
    graph: &G,
    source: &str,
    target: &str,
    config: &SearchConfig,
) -> Result<Option<Vec<Hop>>> {
    if source == target {
        return Ok(Some(Vec::new()));
    }
    run(graph, source, target, config)
}

/// The traversal proper. Assumes `source != target`.
fn run<G: CoStarGraph>(
    graph: &G,
    source: &str,
    target: &str,
    config: &SearchConfig,
) -> Result<Option<Vec<Hop>>> {
    let mut arena: Vec<SearchNode> = Vec::new();
    let mut frontier = Frontier::new();
    let mut explored: FxHashSet<String> = FxHashSet::default();
    let mut expanded = 0usize;

    arena.push(SearchNode {
        movie: None,
        person: source.to_string(),
        parent: None,
    });
    frontier.add(0, source);

    while let Some(index) = frontier.remove() {
        let person = arena[index].person.clone();
        explored.insert(person.clone());

        expanded += 1;
        if let Some(limit) = config.max_visited {
            if expanded > limit {
                return Err(Error::SearchLimitExceeded(limit));
            }
        }

        for (movie_id, co_star) in co_stars(graph, &person)? {
            if frontier.contains_person(&co_star) || explored.contains(&co_star) {
                continue;
            }
            if co_star == target {
                // First match wins: FIFO order means it is at minimum
                // depth. Nothing else is expanded or enqueued past here.
                arena.push(SearchNode {
                    movie: Some(movie_id),
                    person: co_star,
                    parent: Some(index),
                });
                let path = reconstruct(&arena);
                tracing::debug!(source, target, hops = path.len(), expanded, "path found");
                return Ok(Some(path));
            }
            arena.push(SearchNode {
                movie: Some(movie_id),
                person: co_star.clone(),
                parent: Some(index),
            });
            frontier.add(arena.len() - 1, &co_star);
        }
    }

    tracing::debug!(source, target, expanded, "no connection");
    Ok(None)
}

/// Walks parent links from the last node pushed (the terminal node) back
/// to the root, collecting arrival hops in source→target order. The root
/// contributes no hop.
fn reconstruct(arena: &[SearchNode]) -> Vec<Hop> {
    let mut hops = Vec::new();
    let mut current = arena.len() - 1;
    while let (Some(movie), Some(parent)) = (&arena[current].movie, arena[current].parent) {
        hops.push(Hop {
            movie_id: movie.clone(),
            person_id: arena[current].person.clone(),
        });
        current = parent;
    }
    hops.reverse();
    hops
}
