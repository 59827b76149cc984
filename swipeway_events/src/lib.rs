// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipeway Events: the event list shown on a swipe-navigated listing page.
//!
//! ## Overview
//!
//! - [`model`] finds the event array in an API payload and flattens each record into display
//!   strings ([`EventMapped`]).
//! - [`search`] filters mapped events by a trimmed, case-insensitive query on title or
//!   subtitle.
//! - [`feed`] loads the list through a URL-keyed cache. Loads are cancellable: a result that
//!   arrives after its request was aborted or superseded is dropped.
//!
//! Nothing here performs I/O. Hosts perform the HTTP request and hand the parsed JSON back.
//!
//! ## Minimal example
//!
//! ```rust
//! use serde_json::json;
//! use swipeway_events::{Completion, EventFeed, FetchOptions, SearchQuery};
//!
//! let mut feed = EventFeed::new("/api/events");
//! let request = feed.begin(FetchOptions::default()).unwrap();
//!
//! let payload = json!({ "data": { "events": [
//!     { "name": "Jazz Night", "where": "Pustervik", "price": 0,
//!       "when": { "date": "21 mars", "from": "19.00", "to": "22.00" } },
//!     { "where": "Nefertiti" },
//! ] } });
//! assert_eq!(feed.complete(request.id, Ok(payload)), Completion::Applied { count: 2 });
//!
//! let first = &feed.events()[0];
//! assert_eq!((first.day.as_str(), first.month.as_str()), ("21", "mars"));
//! assert_eq!(first.time, "19.00 - 22.00");
//! assert_eq!(first.price, "Free");
//! assert_eq!(feed.events()[1].title, "Untitled");
//!
//! let query = SearchQuery::new("  NEFER ");
//! assert_eq!(feed.filtered(&query).count(), 1);
//!
//! // Served from the cache: no request needed.
//! assert!(feed.begin(FetchOptions::default()).is_none());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod feed;
pub mod model;
pub mod search;

pub use feed::{
    Completion, EventFeed, FetchError, FetchOptions, JsonCache, Request, RequestId, Transport,
};
pub use model::{EventMapped, EventRemote, EventWhen, Scalar, decode_events, map_remote};
pub use search::SearchQuery;
