// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipeway Routes: the ordered page sequence behind swipe navigation.
//!
//! ## Overview
//!
//! This crate owns the single source of truth for "where am I in the page sequence":
//!
//! - [`RouteRegistry`](crate::registry::RouteRegistry) holds an ordered list of opaque route
//!   strings plus the active index. Insertion order is navigation order.
//! - [`Committer`](crate::commit::Committer) is the one place that turns a resolved target
//!   index into an index update followed by an external route change.
//!
//! Neither type performs I/O. Hosts feed the current location (for example a URL path) in when
//! registering routes, and provide a [`Navigator`](crate::commit::Navigator) that performs the
//! actual route change.
//!
//! ## Observers
//!
//! Components that derive state from the registry (pagers, breadcrumbs, and so on) can
//! [`subscribe`](crate::registry::RouteRegistry::subscribe) to
//! [`RouteEvent`](crate::registry::RouteEvent)s, or compare
//! [`revision`](crate::registry::RouteRegistry::revision) values to skip recomputation.
//! Re-registering an identical list that resolves to the same index is a no-op and emits
//! nothing.
//!
//! ## Minimal example
//!
//! ```rust
//! use swipeway_routes::commit::Committer;
//! use swipeway_routes::registry::RouteRegistry;
//!
//! let mut registry = RouteRegistry::new();
//! registry.set_routes(["/", "/events", "/events/:id"], Some("/"));
//! assert_eq!(registry.next_index(), Some(1));
//! assert_eq!(registry.prev_index(), None);
//!
//! let mut visited = Vec::new();
//! let mut committer = Committer::new(|route: &str| visited.push(route.to_owned()));
//! let commit = committer.commit(&mut registry, 1);
//!
//! assert_eq!(commit.route, "/events");
//! assert_eq!(registry.index(), 1);
//! drop(committer);
//! assert_eq!(visited, ["/events"]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod commit;
pub mod registry;

pub use commit::{Commit, Committer, Navigator, ROOT_ROUTE};
pub use registry::{RouteEvent, RouteRegistry, RouteSnapshot, SubscriptionId};
