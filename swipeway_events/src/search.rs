// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free-text search over mapped events.

use alloc::string::String;

use crate::model::EventMapped;

/// A normalized search query.
///
/// The raw input is trimmed and lowercased once. An empty query matches every event; otherwise
/// an event matches when its title or subtitle contains the query, ignoring case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Normalize `raw` into a query.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Whether this query matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Whether `event` matches.
    pub fn matches(&self, event: &EventMapped) -> bool {
        self.is_empty()
            || event.title.to_lowercase().contains(&self.needle)
            || event.subtitle.to_lowercase().contains(&self.needle)
    }

    /// The matching events, in their original order.
    pub fn filter<'a>(
        &'a self,
        events: &'a [EventMapped],
    ) -> impl Iterator<Item = &'a EventMapped> + 'a {
        events.iter().filter(move |event| self.matches(event))
    }
}
