// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive navigation from the pager's keyboard contract.
//!
//! Each key name (as in DOM `KeyboardEvent.key`) is sent to a registry-backed pager. Handled
//! keys produce a selection, which is committed through the same `Committer` a swipe uses; the
//! pager then re-derives its state from the registry.
//!
//! Run:
//! - `cargo run -p swipeway_demos --example pager_keys -- ArrowRight ArrowRight End Home Enter`

use clap::Parser;
use swipeway_pager::{Key, Pager};
use swipeway_routes::{Committer, RouteRegistry};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Send key presses to a registry-backed pager")]
struct Args {
    /// Key names such as `ArrowRight`, `ArrowLeft`, `Home`, `End`.
    #[arg(default_values_t = [String::from("ArrowRight"), String::from("End"), String::from("Home")])]
    keys: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut registry = RouteRegistry::with_routes(["/", "/events", "/events/:id"], Some("/"));
    let mut committer = Committer::new(|route: &str| println!("  navigate {route}"));
    let mut pager = Pager::from_registry(&registry);

    for name in &args.keys {
        let outcome = pager.on_key(Key::from_dom_key(name));
        let Some(selection) = outcome.selection else {
            println!("{name}: not handled");
            continue;
        };
        println!(
            "{name}: select dot {} (prevent default: {})",
            selection.index + 1,
            outcome.handled
        );
        if selection.index != registry.index() {
            committer.commit(&mut registry, selection.index);
        }
        pager.sync_from(&registry);
    }

    let view = pager.view();
    println!(
        "{} at {:?}, focus on {:?}",
        view.label,
        registry.current_route(),
        pager.focused()
    );
}
