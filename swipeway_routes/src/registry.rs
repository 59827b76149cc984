// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered route registry.
//!
//! ## Index resolution
//!
//! [`RouteRegistry::set_routes`] resolves the active index from the host's current location:
//! the first entry equal to the location wins, otherwise the index is `0`. The resolved index is
//! therefore always in range for a non-empty list.
//!
//! [`RouteRegistry::set_index`] stores its argument as-is. Callers are expected to pass an index
//! obtained from [`RouteRegistry::next_index`], [`RouteRegistry::prev_index`], or
//! [`RouteRegistry::position`]; readers that render the index (such as a pager) clamp
//! defensively.
//!
//! ## Empty lists
//!
//! An empty list is a degenerate state. [`RouteRegistry::active_index`] reports `None`, and
//! both neighbor queries report `None`, which disables navigation.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::commit::ROOT_ROUTE;

type Observer = Box<dyn FnMut(&RouteEvent)>;

/// Handle returned by [`RouteRegistry::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A mutation observed on a [`RouteRegistry`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RouteEvent {
    /// The route list was replaced and the active index re-resolved.
    RoutesReplaced {
        /// Length of the new route list.
        len: usize,
        /// Resolved active index.
        index: usize,
    },
    /// The active index changed through [`RouteRegistry::set_index`].
    IndexChanged {
        /// Previous index.
        from: usize,
        /// New index.
        to: usize,
    },
}

/// Owned copy of the registry state at one revision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteSnapshot {
    /// Route identifiers in navigation order.
    pub routes: Vec<String>,
    /// Active index, as stored.
    pub index: usize,
    /// Revision the snapshot was taken at.
    pub revision: u64,
}

/// Ordered sequence of routes plus the active index.
///
/// ## Usage
///
/// - Create one registry for the application and pass it by reference to the components that
///   need it (gesture controllers, pagers, the committer).
/// - Register the route order once with [`RouteRegistry::set_routes`].
/// - Let a [`Committer`](crate::commit::Committer) write the index on every committed
///   navigation.
pub struct RouteRegistry {
    routes: Vec<String>,
    index: usize,
    revision: u64,
    observers: SmallVec<[(SubscriptionId, Observer); 2]>,
    next_subscription: u64,
}

impl core::fmt::Debug for RouteRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RouteRegistry")
            .field("routes", &self.routes)
            .field("index", &self.index)
            .field("revision", &self.revision)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteRegistry {
    /// Create a registry holding only the root route, active.
    pub fn new() -> Self {
        let mut routes = Vec::with_capacity(1);
        routes.push(String::from(ROOT_ROUTE));
        Self {
            routes,
            index: 0,
            revision: 0,
            observers: SmallVec::new(),
            next_subscription: 0,
        }
    }

    /// Create a registry and register `routes` against `location`.
    pub fn with_routes<I, S>(routes: I, location: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        registry.set_routes(routes, location);
        registry
    }

    /// Replace the route sequence and re-resolve the active index.
    ///
    /// The index becomes the position of the first route equal to `location`, or `0` when the
    /// location is absent or unknown.
    ///
    /// Returns `false` without notifying observers when the new list is element-wise equal to
    /// the current one and resolves to the current index.
    pub fn set_routes<I, S>(&mut self, routes: I, location: Option<&str>) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let routes: Vec<String> = routes.into_iter().map(Into::into).collect();
        let index = location
            .and_then(|location| routes.iter().position(|route| route == location))
            .unwrap_or(0);

        if self.routes == routes && self.index == index {
            tracing::trace!(len = routes.len(), index, "route list unchanged");
            return false;
        }

        tracing::debug!(len = routes.len(), index, ?location, "registered routes");
        let len = routes.len();
        self.routes = routes;
        self.index = index;
        self.bump_and_notify(RouteEvent::RoutesReplaced { len, index });
        true
    }

    /// Set the active index without clamping.
    ///
    /// Returns `true` if the stored index changed.
    pub fn set_index(&mut self, index: usize) -> bool {
        if self.index == index {
            return false;
        }
        let from = self.index;
        self.index = index;
        if index >= self.routes.len() {
            tracing::warn!(index, len = self.routes.len(), "active index out of range");
        }
        self.bump_and_notify(RouteEvent::IndexChanged { from, to: index });
        true
    }

    /// Index after the active one, if there is one.
    pub fn next_index(&self) -> Option<usize> {
        let next = self.index.checked_add(1)?;
        (next < self.routes.len()).then_some(next)
    }

    /// Index before the active one, if there is one.
    pub fn prev_index(&self) -> Option<usize> {
        if self.routes.is_empty() || self.index == 0 {
            return None;
        }
        Some(self.index - 1)
    }

    /// The stored index, which may be out of range after an unchecked [`Self::set_index`].
    pub fn index(&self) -> usize {
        self.index
    }

    /// The active index, or `None` when the list is empty.
    ///
    /// Out-of-range stored indices are clamped to the last route.
    pub fn active_index(&self) -> Option<usize> {
        let last = self.routes.len().checked_sub(1)?;
        Some(self.index.min(last))
    }

    /// Route identifiers in navigation order.
    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route at `index`, if any.
    pub fn route_at(&self, index: usize) -> Option<&str> {
        self.routes.get(index).map(String::as_str)
    }

    /// Route at the stored index, if it resolves.
    pub fn current_route(&self) -> Option<&str> {
        self.route_at(self.index)
    }

    /// Position of the first route equal to `route`.
    pub fn position(&self, route: &str) -> Option<usize> {
        self.routes.iter().position(|r| r == route)
    }

    /// Counter bumped on every observable mutation.
    ///
    /// Two reads returning the same revision observed the same state.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Copy the current state.
    pub fn snapshot(&self) -> RouteSnapshot {
        RouteSnapshot {
            routes: self.routes.clone(),
            index: self.index,
            revision: self.revision,
        }
    }

    /// Register an observer called synchronously after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&RouteEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn bump_and_notify(&mut self, event: RouteEvent) {
        self.revision += 1;
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}
