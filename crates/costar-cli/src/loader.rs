//! CSV ingestion for the people/movies/stars dataset.
//!
//! Schema: `people.csv` (`id,name,birth`), `movies.csv` (`id,title,year`),
//! `stars.csv` (`person_id,movie_id`), all UTF-8 with a header row. Rows
//! that fail to parse are skipped with a warning; star rows referencing
//! unknown ids are dropped by the store.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use costar_core::{FilmStore, Movie, Person};
use indicatif::ProgressBar;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct PersonRecord {
    id: String,
    name: String,
    birth: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct MovieRecord {
    id: String,
    title: String,
    year: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct StarRecord {
    person_id: String,
    movie_id: String,
}

/// Loads the three dataset files from `dir` into a [`FilmStore`].
pub fn load_store(dir: &Path) -> Result<FilmStore> {
    let mut store = FilmStore::new();

    let spinner = ProgressBar::new_spinner().with_message("Loading people...");
    for record in read_rows::<PersonRecord>(&dir.join("people.csv"))? {
        let mut person = Person::new(&record.id, &record.name);
        if let Some(birth) = record.birth {
            person = person.with_birth(birth);
        }
        if let Err(error) = store.add_person(person) {
            warn!(%error, "skipping person row");
        }
        spinner.tick();
    }
    spinner.finish_with_message(format!("Loaded {} people", store.person_count()));

    let spinner = ProgressBar::new_spinner().with_message("Loading movies...");
    for record in read_rows::<MovieRecord>(&dir.join("movies.csv"))? {
        let mut movie = Movie::new(&record.id, &record.title);
        if let Some(year) = record.year {
            movie = movie.with_year(year);
        }
        if let Err(error) = store.add_movie(movie) {
            warn!(%error, "skipping movie row");
        }
        spinner.tick();
    }
    spinner.finish_with_message(format!("Loaded {} movies", store.movie_count()));

    let spinner = ProgressBar::new_spinner().with_message("Loading stars...");
    let mut linked = 0usize;
    let mut skipped = 0usize;
    for record in read_rows::<StarRecord>(&dir.join("stars.csv"))? {
        if store.add_credit(&record.person_id, &record.movie_id) {
            linked += 1;
        } else {
            skipped += 1;
        }
        spinner.tick();
    }
    spinner.finish_with_message(format!("Linked {linked} credits"));
    if skipped > 0 {
        debug!(skipped, "star rows referenced unknown ids");
    }

    Ok(store)
}

/// Reads every well-formed row of a CSV file, skipping the rest.
fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>> {
    let file =
        File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        match result {
            Ok(row) => rows.push(row),
            Err(error) => warn!(%error, file = %path.display(), "skipping malformed row"),
        }
    }
    Ok(rows)
}
