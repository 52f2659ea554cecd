//! Interactive name selection and disambiguation.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use costar_core::{resolve_name, FilmStore, NameMatch};
use rustyline::DefaultEditor;

/// Resolves a person from a provided name or an interactive prompt.
///
/// Ambiguous names list every candidate and ask for the intended id; an
/// id outside the candidate set counts as not found.
pub fn pick_person(store: &FilmStore, provided: Option<&str>) -> Result<String> {
    let name = match provided {
        Some(name) => name.to_string(),
        None => read_line("Name: ")?,
    };

    match resolve_name(store, name.trim()) {
        NameMatch::NotFound => bail!("Person not found."),
        NameMatch::Unique(id) => Ok(id),
        NameMatch::Ambiguous(candidates) => disambiguate(store, name.trim(), &candidates),
    }
}

fn disambiguate(store: &FilmStore, name: &str, candidates: &[String]) -> Result<String> {
    println!("Which '{}'?", name.cyan());
    println!("{}", candidate_table(store, candidates));

    let chosen = read_line("Intended person id: ")?;
    let chosen = chosen.trim();
    if candidates.iter().any(|id| id == chosen) {
        Ok(chosen.to_string())
    } else {
        bail!("Person not found.")
    }
}

/// Renders the candidate list as a table of id, name and birth year.
fn candidate_table(store: &FilmStore, candidates: &[String]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Birth"]);
    for id in candidates {
        if let Some(person) = store.person(id) {
            table.add_row(vec![
                Cell::new(id),
                Cell::new(person.name()),
                Cell::new(person.birth().map_or_else(String::new, |year| year.to_string())),
            ]);
        }
    }
    table
}

fn read_line(prompt: &str) -> Result<String> {
    let mut editor = DefaultEditor::new().context("failed to open terminal input")?;
    Ok(editor.readline(prompt)?)
}
