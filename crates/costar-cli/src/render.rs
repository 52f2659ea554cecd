//! Result rendering for the terminal.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use costar_core::{FilmStore, Hop};

/// How query results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Table,
    /// JSON hop list.
    Json,
}

/// Prints a resolved path in the requested format.
///
/// `hops` is empty when source and target are the same person.
pub fn print_path(
    store: &FilmStore,
    source: &str,
    hops: &[Hop],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(hops)?),
        OutputFormat::Table => {
            let degrees = hops.len();
            println!("{}", format!("{degrees} degrees of separation.").green().bold());

            let mut previous = source.to_string();
            for (step, hop) in hops.iter().enumerate() {
                let from = display_name(store, &previous);
                let to = display_name(store, &hop.person_id);
                let movie = store
                    .movie(&hop.movie_id)
                    .map_or_else(|| hop.movie_id.clone(), |movie| movie.title().to_string());
                println!(
                    "{}: {} and {} starred in {}",
                    step + 1,
                    from.cyan(),
                    to.cyan(),
                    movie.italic()
                );
                previous = hop.person_id.clone();
            }
        }
    }
    Ok(())
}

/// Prints the no-connection result.
pub fn print_not_connected(format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("null"),
        OutputFormat::Table => println!("{}", "Not connected.".yellow()),
    }
}

fn display_name(store: &FilmStore, person_id: &str) -> String {
    store
        .person(person_id)
        .map_or_else(|| person_id.to_string(), |person| person.name().to_string())
}
