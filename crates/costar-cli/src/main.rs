//! `costar` - degrees of separation between two people in a filmography
//! dataset.
//!
//! Loads the people/movies/stars CSV tables, resolves the two names
//! (interactively when not given on the command line), and prints the
//! shortest chain of co-starring relationships connecting them.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use costar_core::{shortest_path, CostarConfig, FilmStore};
use instant::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod interact;
mod loader;
mod render;

use render::OutputFormat;

/// Degrees-of-separation search over a filmography dataset.
#[derive(Parser, Debug)]
#[command(name = "costar")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing people.csv, movies.csv and stars.csv
    #[arg(env = "COSTAR_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Source person name (prompted for when omitted)
    #[arg(short, long)]
    source: Option<String>,

    /// Target person name (prompted for when omitted)
    #[arg(short, long)]
    target: Option<String>,

    /// Configuration file (defaults to ./costar.toml, then the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Print how long the search took
    #[arg(long)]
    timing: bool,

    /// Upper bound on people expanded per query (overrides configuration)
    #[arg(long)]
    limit: Option<usize>,

    /// Write a costar.toml with default settings and exit
    #[arg(long)]
    init_config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "costar", &mut std::io::stdout());
        return Ok(());
    }

    if args.init_config {
        let rendered = toml::to_string_pretty(&CostarConfig::default())?;
        std::fs::write("costar.toml", rendered).context("failed to write costar.toml")?;
        println!("Wrote default configuration to costar.toml");
        return Ok(());
    }

    let config_path = args.config.clone().or_else(default_config_path);
    let mut config = CostarConfig::load(config_path.as_deref())?;
    if let Some(limit) = args.limit {
        config.search.max_visited = Some(limit);
    }

    init_tracing(&config);

    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| config.data.dir.clone());
    let store = loader::load_store(&data_dir)
        .with_context(|| format!("failed to load dataset from {}", data_dir.display()))?;
    tracing::debug!(
        people = store.person_count(),
        movies = store.movie_count(),
        "dataset loaded"
    );

    let source = interact::pick_person(&store, args.source.as_deref())?;
    let target = interact::pick_person(&store, args.target.as_deref())?;

    run_query(&store, &config, &args, &source, &target)
}

/// Runs one shortest-path query and prints the result.
fn run_query(
    store: &FilmStore,
    config: &CostarConfig,
    args: &Args,
    source: &str,
    target: &str,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let path = shortest_path(store, source, target, &config.search)?;
    let elapsed = started.elapsed();

    match path {
        Some(hops) => render::print_path(store, source, &hops, args.format)?,
        None => render::print_not_connected(args.format),
    }
    if args.timing {
        println!("({elapsed:.2?})");
    }
    Ok(())
}

/// Picks `./costar.toml` when present, otherwise the user config dir.
fn default_config_path() -> Option<PathBuf> {
    let local = Path::new("costar.toml");
    if local.exists() {
        return Some(local.to_path_buf());
    }
    dirs::config_dir().map(|dir| dir.join("costar").join("costar.toml"))
}

/// Tracing to stderr so query output on stdout stays clean.
fn init_tracing(config: &CostarConfig) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
