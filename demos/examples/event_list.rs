// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load an event payload from disk, normalize it, and filter it by a search query.
//!
//! The "transport" reads a JSON file instead of issuing an HTTP request. The second load is
//! served from the feed's cache unless `--bypass-cache` is given.
//!
//! Run:
//! - `cargo run -p swipeway_demos --example event_list -- demos/events.json`
//! - `cargo run -p swipeway_demos --example event_list -- demos/events.json --query jazz`

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;
use swipeway_events::{Completion, EventFeed, FetchError, FetchOptions, SearchQuery};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Normalize and search an event-list payload")]
struct Args {
    /// JSON payload in any of the usual envelopes.
    payload: PathBuf,
    /// Search text matched against titles and venues.
    #[arg(long, default_value = "")]
    query: String,
    /// Re-read the file on the second load instead of using the cache.
    #[arg(long)]
    bypass_cache: bool,
}

fn read_payload(path: &str) -> Result<Value, FetchError> {
    let text = std::fs::read_to_string(path).map_err(|e| FetchError::Transport(e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let url = args
        .payload
        .to_str()
        .context("payload path is not valid UTF-8")?;
    let mut feed = EventFeed::new(url);
    let mut transport = read_payload;

    for pass in 1..=2 {
        let options = FetchOptions {
            bypass_cache: pass > 1 && args.bypass_cache,
        };
        match feed.load(&mut transport, options) {
            Completion::Applied { count } => println!("load {pass}: {count} events"),
            Completion::Failed(error) => {
                return Err(error).with_context(|| format!("loading {url}"));
            }
            Completion::Discarded => println!("load {pass}: discarded"),
        }
    }

    let query = SearchQuery::new(&args.query);
    for event in feed.filtered(&query) {
        println!(
            "{:>2} {:<6} {:<28} {:<24} {:<15} {}",
            event.day, event.month, event.title, event.subtitle, event.time, event.price
        );
    }
    Ok(())
}
