// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipeway Gesture: horizontal swipe navigation between pages.
//!
//! ## Overview
//!
//! [`GestureController`] attaches (logically) to one scrollable container. It tracks a single
//! contact, follows horizontal drags with a live container offset, leaves vertical drags to the
//! platform's scrolling, and on release decides whether the drag commits a move to the next or
//! previous route in a [`RouteRegistry`](swipeway_routes::RouteRegistry).
//!
//! The controller is an explicit state machine driven by discrete inputs: contact down, move,
//! up, and "release animation finished". Waiting for the animation is a state, not a callback,
//! so a dropped or late completion signal can never corrupt the registry.
//!
//! ## Commit rule
//!
//! A release commits when the horizontal displacement `dx` exceeds
//! `max(threshold_px, viewport_width * threshold_fraction)`:
//!
//! - leftward (`dx < -threshold`) with a next route: the container departs to `-viewport_width`
//!   and the next route is committed when the animation ends;
//! - rightward (`dx > threshold`) with a previous route: departs to `+viewport_width`, previous
//!   route committed;
//! - anything else snaps back to `0` without touching the registry.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use swipeway_gesture::{GestureController, MoveEffects, TransitionOutcome};
//! use swipeway_routes::{Committer, RouteRegistry};
//!
//! let mut registry = RouteRegistry::with_routes(["/", "/events", "/events/:id"], Some("/"));
//! let mut committer = Committer::new(|route: &str| println!("navigate to {route}"));
//! let mut swipe = GestureController::default();
//!
//! swipe.on_down(Point::new(600.0, 300.0));
//! let effects = swipe.on_move(Point::new(300.0, 310.0));
//! assert!(effects.contains(MoveEffects::PREVENT_DEFAULT));
//!
//! // 800px viewport: threshold is max(80, 200) = 200px, and we dragged 300px left.
//! let release = swipe.on_up(800.0, &registry).unwrap();
//! assert_eq!(release.target, Some(1));
//! assert_eq!(swipe.style().transform_css(), "translateX(-800px)");
//!
//! // The host reports the end of the slide animation.
//! let outcome = swipe.on_transition_end(release.transition, &mut registry, &mut committer);
//! assert!(matches!(outcome, TransitionOutcome::Committed(_)));
//! assert_eq!(registry.index(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`GestureConfig`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod style;

pub use config::{ConfigError, GestureConfig};
pub use controller::{
    GestureController, MoveEffects, Phase, Release, TransitionId, TransitionOutcome,
};
pub use style::ContainerStyle;
