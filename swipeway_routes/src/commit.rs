// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation committer.
//!
//! Every committed navigation (a finished swipe, a pager selection, a link click) goes through
//! [`Committer::commit`], which:
//!
//! 1. writes the target index into the [`RouteRegistry`], then
//! 2. hands the route string to the external boundary: the override callback when one is
//!    installed, the [`Navigator`] otherwise.
//!
//! Step 1 happens first so anything reading the registry during the route change already sees
//! the new index.

use alloc::boxed::Box;
use alloc::string::String;

use crate::registry::RouteRegistry;

/// Route used when a committed index does not resolve to a registered route.
pub const ROOT_ROUTE: &str = "/";

/// External route-change primitive (history push, router call, and so on).
pub trait Navigator {
    /// Change the current page to `route`.
    fn navigate(&mut self, route: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, route: &str) {
        self(route);
    }
}

/// Navigator that ignores route changes, for hosts that only use the override.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoNavigator;

impl Navigator for NoNavigator {
    fn navigate(&mut self, _route: &str) {}
}

/// Result of a committed navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    /// Index written into the registry.
    pub index: usize,
    /// Route handed to the navigation boundary.
    pub route: String,
}

type Override = Box<dyn FnMut(&str, usize)>;

/// Single choke point turning a target index into a registry update plus a route change.
pub struct Committer<N: Navigator> {
    navigator: N,
    on_navigate: Option<Override>,
}

impl<N: Navigator> core::fmt::Debug for Committer<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Committer")
            .field("has_override", &self.on_navigate.is_some())
            .finish_non_exhaustive()
    }
}

impl<N: Navigator> Committer<N> {
    /// Create a committer that performs route changes through `navigator`.
    pub fn new(navigator: N) -> Self {
        Self {
            navigator,
            on_navigate: None,
        }
    }

    /// Install an override called with `(route, index)` instead of the navigator.
    pub fn with_override(mut self, on_navigate: impl FnMut(&str, usize) + 'static) -> Self {
        self.on_navigate = Some(Box::new(on_navigate));
        self
    }

    /// Replace or remove the override.
    pub fn set_override(&mut self, on_navigate: Option<Box<dyn FnMut(&str, usize)>>) {
        self.on_navigate = on_navigate;
    }

    /// Access the wrapped navigator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Consume the committer, returning the navigator.
    pub fn into_navigator(self) -> N {
        self.navigator
    }

    /// Commit navigation to `index`.
    ///
    /// The registry index is updated before the route change. An index with no registered route
    /// navigates to [`ROOT_ROUTE`].
    pub fn commit(&mut self, registry: &mut RouteRegistry, index: usize) -> Commit {
        registry.set_index(index);
        let route = String::from(registry.route_at(index).unwrap_or(ROOT_ROUTE));
        tracing::debug!(index, route = %route, "committing navigation");

        match self.on_navigate.as_mut() {
            Some(on_navigate) => on_navigate(&route, index),
            None => self.navigator.navigate(&route),
        }
        Commit { index, route }
    }

    /// Commit navigation to a registered `route`, as a link click would.
    ///
    /// Returns `None` and changes nothing when `route` is not registered.
    pub fn navigate_to(&mut self, registry: &mut RouteRegistry, route: &str) -> Option<Commit> {
        let Some(index) = registry.position(route) else {
            tracing::debug!(route, "ignoring navigation to unregistered route");
            return None;
        };
        Some(self.commit(registry, index))
    }
}
