// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay horizontal drags against a route registry, gesture controller, and pager.
//!
//! This example plays the part of the page-composition boundary: it registers the route order,
//! forwards synthetic contact samples to a `GestureController`, reports animation completion
//! immediately, and keeps a registry-backed `Pager` in sync by comparing revisions.
//!
//! Run:
//! - `cargo run -p swipeway_demos --example swipe_session`
//! - `cargo run -p swipeway_demos --example swipe_session -- --location /events --drag -500`
//! - `RUST_LOG=trace cargo run -p swipeway_demos --example swipe_session -- --config demos/swipeway.toml`

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use kurbo::Point;
use serde::Deserialize;
use swipeway_gesture::{GestureConfig, GestureController, TransitionOutcome};
use swipeway_pager::{Pager, PagerStyle};
use swipeway_routes::{Committer, Navigator, RouteEvent, RouteRegistry};
use tracing_subscriber::EnvFilter;

/// Move samples sent per drag.
const STEPS: u32 = 6;

#[derive(Debug, Parser)]
#[command(about = "Replay horizontal drags against the swipe navigation engine")]
struct Args {
    /// Viewport width in logical pixels.
    #[arg(long, default_value_t = 800.0)]
    viewport_width: f64,
    /// Location the page was opened at.
    #[arg(long, default_value = "/")]
    location: String,
    /// TOML file with `routes`, `[gesture]`, and `[pager]` entries.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Horizontal drag distance in pixels; negative drags leftward. Repeatable.
    #[arg(
        long = "drag",
        allow_negative_numbers = true,
        default_values_t = [-300.0, -500.0, 250.0]
    )]
    drags: Vec<f64>,
    /// Vertical travel added to every drag, in pixels.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    vertical: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    routes: Vec<String>,
    gesture: GestureConfig,
    pager: PagerStyle,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            routes: ["/", "/events", "/events/:id"]
                .into_iter()
                .map(String::from)
                .collect(),
            gesture: GestureConfig::default(),
            pager: PagerStyle::default(),
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Browser-history stand-in.
#[derive(Debug, Default)]
struct History(Vec<String>);

impl Navigator for History {
    fn navigate(&mut self, route: &str) {
        self.0.push(route.to_owned());
    }
}

fn dots(pager: &Pager) -> String {
    pager
        .view()
        .dots
        .iter()
        .map(|dot| if dot.current { '●' } else { '○' })
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let mut registry = RouteRegistry::with_routes(config.routes, Some(&args.location));
    registry.subscribe(|event| match event {
        RouteEvent::RoutesReplaced { len, index } => {
            tracing::info!(len, index, "routes replaced");
        }
        RouteEvent::IndexChanged { from, to } => tracing::info!(from, to, "active page changed"),
    });

    let mut controller =
        GestureController::new(config.gesture).context("invalid gesture configuration")?;
    let mut committer = Committer::new(History::default());
    let mut pager = Pager::from_registry(&registry);
    pager.set_style(config.pager);
    let mut seen_revision = registry.revision();

    println!(
        "start at {} {}",
        registry.current_route().unwrap_or("?"),
        dots(&pager)
    );

    let origin = Point::new(args.viewport_width / 2.0, 400.0);
    for dx in args.drags {
        controller.on_down(origin);
        for step in 1..=STEPS {
            let t = f64::from(step) / f64::from(STEPS);
            let effects = controller.on_move(Point::new(
                origin.x + dx * t,
                origin.y + args.vertical * t,
            ));
            tracing::trace!(?effects, "move sample");
        }

        let Some(release) = controller.on_up(args.viewport_width, &registry) else {
            continue;
        };
        println!(
            "drag {dx:+}px: release toward {} ({})",
            release.offset,
            controller.style().transform_css()
        );

        let outcome =
            controller.on_transition_end(release.transition, &mut registry, &mut committer);
        if registry.revision() != seen_revision {
            pager.sync_from(&registry);
            seen_revision = registry.revision();
        }

        match outcome {
            TransitionOutcome::Committed(commit) => {
                println!("  committed {} -> {}", commit.route, dots(&pager));
            }
            TransitionOutcome::SnappedBack => println!("  snapped back  {}", dots(&pager)),
            TransitionOutcome::Ignored => println!("  ignored"),
        }
    }

    println!("history: {:?}", committer.navigator().0);
    Ok(())
}
