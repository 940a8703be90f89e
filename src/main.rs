//! cardfile — composition root.
//!
//! Reads a JSON array of draft records, validates each one, appends the
//! accepted records to an in-memory store, then runs the requested query and
//! prints the matching records as JSON. Rejected drafts are reported on
//! stderr, one line per failed rule.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;

use cardfile_core::config::Config;
use cardfile_core::{validate, Draft, QueryEngine, RecordStore, Tab};

#[derive(Parser)]
#[command(name = "cardfile", about = "Validated contact records with tabbed search")]
struct Cli {
    /// JSON file containing an array of draft records.
    input: PathBuf,

    /// Free-text search query (case-insensitive substring).
    #[arg(short, long, default_value = "")]
    search: String,

    /// Tab filter: all, domestic, or international.
    #[arg(short, long, default_value = "all", value_parser = Tab::from_str)]
    tab: Tab,

    /// Override the configured domestic address-type label.
    #[arg(long)]
    domestic_label: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let file = File::open(&cli.input)
        .with_context(|| format!("failed to open {}", cli.input.display()))?;
    let drafts: Vec<Draft> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse drafts from {}", cli.input.display()))?;

    let store = RecordStore::new();
    let mut rejected = 0usize;
    for (idx, draft) in drafts.into_iter().enumerate() {
        match validate(draft) {
            Ok(record) => store.append(record),
            Err(errors) => {
                rejected += 1;
                for error in errors.iter() {
                    eprintln!("draft {idx}: {error}");
                }
            }
        }
    }
    if rejected > 0 {
        eprintln!("{rejected} draft(s) rejected, {} stored", store.len());
    }
    tracing::info!(stored = store.len(), rejected, "drafts loaded");

    let label = cli
        .domestic_label
        .unwrap_or(config.query.domestic_label);
    let engine = QueryEngine::new(label);

    let records = store.all();
    let results = engine.query(&records, &cli.search, cli.tab);
    if results.is_empty() {
        eprintln!("no data available");
    }
    serde_json::to_writer_pretty(std::io::stdout().lock(), &results)?;
    println!();

    Ok(())
}
