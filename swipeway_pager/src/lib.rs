// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipeway Pager: a headless page indicator.
//!
//! [`Pager`] renders as a labelled navigation landmark containing one focusable dot per page.
//! It knows nothing about widgets or the DOM: hosts call [`Pager::view`] to get a
//! [`PagerView`] and draw it, and forward clicks and key presses to [`Pager::select`] and
//! [`Pager::on_key`].
//!
//! The active index is either owned by the host ([`PagerMode::Controlled`]) or by the pager
//! ([`PagerMode::Uncontrolled`]). Either way, every index the pager reports is clamped into
//! range, and a pager with zero dots renders nothing and reports index 0.
//!
//! ```rust
//! use swipeway_pager::{Key, Pager, PagerConfig};
//!
//! let mut pager = Pager::uncontrolled(PagerConfig { count: 3, ..PagerConfig::default() });
//!
//! let outcome = pager.on_key(Key::End);
//! assert!(outcome.handled);
//! assert_eq!(pager.active(), 2);
//!
//! // No wraparound past the last dot.
//! pager.on_key(Key::ArrowRight);
//! assert_eq!(pager.active(), 2);
//!
//! let view = pager.view();
//! assert_eq!(view.dots[2].label, "Go to page 3");
//! assert!(view.dots[2].current);
//! ```
//!
//! To mirror a [`RouteRegistry`](swipeway_routes::RouteRegistry), build the pager with
//! [`Pager::from_registry`] and call [`Pager::sync_from`] whenever the registry's revision
//! changes.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `serde`: derives `Serialize`/`Deserialize` for [`PagerConfig`] and [`PagerStyle`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod pager;
pub mod style;

pub use pager::{DotView, Key, KeyOutcome, Pager, PagerMode, PagerView, Selection, clamp_index};
pub use style::{PagerConfig, PagerStyle};
