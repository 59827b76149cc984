// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable, cached loading of the event list.
//!
//! [`EventFeed`] does no I/O itself. A load is split into two discrete inputs:
//!
//! - [`EventFeed::begin`] either serves the payload from the [`JsonCache`] or hands out a
//!   [`Request`] for the host to perform;
//! - [`EventFeed::complete`] delivers the host's result.
//!
//! Every request carries a [`RequestId`]. Aborting a request, starting a newer one, or pointing
//! the feed at another URL makes the old id stale, and a late result for a stale id is dropped
//! without touching the feed or the cache. Hosts with a blocking transport can use
//! [`EventFeed::load`], which runs both steps through a [`Transport`].

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde_json::Value;

use crate::model::{EventMapped, decode_events};
use crate::search::SearchQuery;

/// Failure reported by a transport.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not JSON.
    #[error("invalid JSON: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

/// Blocking JSON GET.
pub trait Transport {
    /// Fetch and parse the JSON document at `url`.
    fn get_json(&mut self, url: &str) -> Result<Value, FetchError>;
}

impl<F: FnMut(&str) -> Result<Value, FetchError>> Transport for F {
    fn get_json(&mut self, url: &str) -> Result<Value, FetchError> {
        self(url)
    }
}

/// Parsed JSON documents keyed by URL.
#[derive(Clone, Debug, Default)]
pub struct JsonCache {
    entries: BTreeMap<String, Value>,
}

impl JsonCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached document for `url`.
    pub fn get(&self, url: &str) -> Option<&Value> {
        self.entries.get(url)
    }

    /// Store `document` for `url`, replacing any earlier entry.
    pub fn insert(&mut self, url: &str, document: Value) {
        self.entries.insert(String::from(url), document);
    }

    /// Drop the entry for `url`, or every entry when `url` is `None`.
    pub fn clear(&mut self, url: Option<&str>) {
        match url {
            Some(url) => {
                self.entries.remove(url);
            }
            None => self.entries.clear(),
        }
    }

    /// Number of cached documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Options for a single load.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Skip the cache lookup and always issue a request. The result is still cached.
    pub bypass_cache: bool,
}

/// Identifies one outstanding request.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

/// A request the host must perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// Pass back to [`EventFeed::complete`] or [`EventFeed::abort`].
    pub id: RequestId,
    /// Document to fetch.
    pub url: String,
}

/// Result of delivering a payload to the feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The payload was applied; `count` events are now listed.
    Applied {
        /// Number of events decoded.
        count: usize,
    },
    /// The request failed; the list is now empty.
    Failed(FetchError),
    /// The request was aborted or superseded; nothing changed.
    Discarded,
}

/// The event list behind a listing page.
#[derive(Clone, Debug)]
pub struct EventFeed {
    url: String,
    cache: JsonCache,
    events: Vec<EventMapped>,
    error: Option<FetchError>,
    in_flight: Option<RequestId>,
    next_request: u64,
}

impl EventFeed {
    /// Create an empty feed for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_cache(url, JsonCache::new())
    }

    /// Create an empty feed for `url` backed by an existing cache.
    pub fn with_cache(url: impl Into<String>, cache: JsonCache) -> Self {
        Self {
            url: url.into(),
            cache,
            events: Vec::new(),
            error: None,
            in_flight: None,
            next_request: 0,
        }
    }

    /// Document this feed loads.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Point the feed at another document.
    ///
    /// A request in flight for the old URL is aborted. The current list stays until the next
    /// load replaces it.
    pub fn set_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if url == self.url {
            return;
        }
        if let Some(id) = self.in_flight.take() {
            tracing::debug!(request = id.0, from = %self.url, to = %url, "aborting request for old url");
        }
        self.url = url;
    }

    /// Loaded events, in payload order.
    pub fn events(&self) -> &[EventMapped] {
        &self.events
    }

    /// Events matching `query`.
    pub fn filtered<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> impl Iterator<Item = &'a EventMapped> + 'a {
        query.filter(&self.events)
    }

    /// Error of the last completed load, if it failed.
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Whether a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The document cache.
    pub fn cache(&self) -> &JsonCache {
        &self.cache
    }

    /// Drop the cached document for `url`, or all of them when `url` is `None`.
    pub fn clear_cache(&mut self, url: Option<&str>) {
        self.cache.clear(url);
    }

    /// Start a load.
    ///
    /// A cache hit is applied immediately and returns `None`. Otherwise the returned
    /// [`Request`] becomes the only one whose result will be accepted; any earlier request is
    /// superseded.
    pub fn begin(&mut self, options: FetchOptions) -> Option<Request> {
        if let Some(id) = self.in_flight.take() {
            tracing::debug!(request = id.0, "superseding request in flight");
        }
        if !options.bypass_cache
            && let Some(document) = self.cache.get(&self.url)
        {
            self.events = decode_events(document);
            self.error = None;
            tracing::debug!(url = %self.url, count = self.events.len(), "served events from cache");
            return None;
        }
        let id = RequestId(self.next_request);
        self.next_request += 1;
        self.in_flight = Some(id);
        tracing::debug!(request = id.0, url = %self.url, "requesting events");
        Some(Request {
            id,
            url: self.url.clone(),
        })
    }

    /// Abort request `id`. Returns whether it was the request in flight.
    pub fn abort(&mut self, id: RequestId) -> bool {
        if self.in_flight != Some(id) {
            return false;
        }
        self.in_flight = None;
        tracing::debug!(request = id.0, "request aborted");
        true
    }

    /// Deliver the result of request `id`.
    ///
    /// Results for stale ids are discarded. A success is cached under the feed's URL and
    /// replaces the list; a failure empties the list and records the error.
    pub fn complete(&mut self, id: RequestId, result: Result<Value, FetchError>) -> Completion {
        if self.in_flight != Some(id) {
            tracing::debug!(request = id.0, "discarding result of stale request");
            return Completion::Discarded;
        }
        self.in_flight = None;
        match result {
            Ok(document) => {
                self.events = decode_events(&document);
                self.error = None;
                self.cache.insert(&self.url, document);
                Completion::Applied {
                    count: self.events.len(),
                }
            }
            Err(error) => {
                tracing::warn!(request = id.0, url = %self.url, %error, "loading events failed");
                self.events.clear();
                self.error = Some(error.clone());
                Completion::Failed(error)
            }
        }
    }

    /// Run a whole load through `transport`.
    pub fn load<T: Transport>(&mut self, transport: &mut T, options: FetchOptions) -> Completion {
        match self.begin(options) {
            None => Completion::Applied {
                count: self.events.len(),
            },
            Some(request) => {
                let result = transport.get_json(&request.url);
                self.complete(request.id, result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://api.example.test/events";

    fn payload(names: &[&str]) -> Value {
        let events: Vec<Value> = names.iter().map(|name| json!({ "name": name })).collect();
        json!({ "events": events })
    }

    fn respond(names: &'static [&'static str]) -> impl FnMut(&str) -> Result<Value, FetchError> {
        move |_| Ok(payload(names))
    }

    fn titles(feed: &EventFeed) -> Vec<&str> {
        feed.events().iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn completed_request_is_applied_and_cached() {
        let mut feed = EventFeed::new(URL);
        let request = feed.begin(FetchOptions::default()).unwrap();
        assert_eq!(request.url, URL);
        assert!(feed.is_loading());

        let outcome = feed.complete(request.id, Ok(payload(&["A", "B"])));
        assert_eq!(outcome, Completion::Applied { count: 2 });
        assert!(!feed.is_loading());
        assert_eq!(titles(&feed), ["A", "B"]);
        assert!(feed.cache().get(URL).is_some());
    }

    #[test]
    fn cache_hit_needs_no_request() {
        let mut feed = EventFeed::new(URL);
        let mut calls = 0;
        let mut transport = |_: &str| -> Result<Value, FetchError> {
            calls += 1;
            Ok(payload(&["A"]))
        };

        feed.load(&mut transport, FetchOptions::default());
        assert_eq!(feed.begin(FetchOptions::default()), None);
        feed.load(&mut transport, FetchOptions::default());
        assert_eq!(calls, 1);
        assert_eq!(titles(&feed), ["A"]);
    }

    #[test]
    fn bypass_refetches_and_refreshes_cache() {
        let mut cache = JsonCache::new();
        cache.insert(URL, payload(&["old"]));
        let mut feed = EventFeed::with_cache(URL, cache);

        let outcome = feed.load(&mut respond(&["new"]), FetchOptions { bypass_cache: true });
        assert_eq!(outcome, Completion::Applied { count: 1 });
        assert_eq!(titles(&feed), ["new"]);
        assert_eq!(feed.cache().get(URL), Some(&payload(&["new"])));
    }

    #[test]
    fn aborted_request_result_is_dropped() {
        let mut feed = EventFeed::new(URL);
        let request = feed.begin(FetchOptions::default()).unwrap();
        assert!(feed.abort(request.id));
        assert!(!feed.abort(request.id));

        let outcome = feed.complete(request.id, Ok(payload(&["late"])));
        assert_eq!(outcome, Completion::Discarded);
        assert!(feed.events().is_empty());
        assert!(feed.cache().is_empty());
    }

    #[test]
    fn newer_request_supersedes_older() {
        let mut feed = EventFeed::new(URL);
        let first = feed.begin(FetchOptions::default()).unwrap();
        let second = feed.begin(FetchOptions::default()).unwrap();
        assert_ne!(first.id, second.id);

        assert_eq!(
            feed.complete(first.id, Ok(payload(&["first"]))),
            Completion::Discarded
        );
        assert_eq!(
            feed.complete(second.id, Ok(payload(&["second"]))),
            Completion::Applied { count: 1 }
        );
        assert_eq!(titles(&feed), ["second"]);
    }

    #[test]
    fn changing_url_aborts_request_in_flight() {
        let mut feed = EventFeed::new(URL);
        let request = feed.begin(FetchOptions::default()).unwrap();
        feed.set_url("https://api.example.test/other");
        assert!(!feed.is_loading());
        assert_eq!(
            feed.complete(request.id, Ok(payload(&["stale"]))),
            Completion::Discarded
        );
        assert!(feed.cache().get(URL).is_none());
    }

    #[test]
    fn failure_empties_list_and_records_error() {
        let mut feed = EventFeed::new(URL);
        feed.load(&mut respond(&["A"]), FetchOptions::default());

        let mut unavailable =
            |_: &str| -> Result<Value, FetchError> { Err(FetchError::Status(503)) };
        let outcome = feed.load(&mut unavailable, FetchOptions { bypass_cache: true });
        assert_eq!(outcome, Completion::Failed(FetchError::Status(503)));
        assert!(feed.events().is_empty());
        assert_eq!(feed.error(), Some(&FetchError::Status(503)));
        assert_eq!(feed.error().map(ToString::to_string).as_deref(), Some("HTTP 503"));

        feed.load(&mut respond(&["B"]), FetchOptions::default());
        assert_eq!(feed.error(), None);
    }

    #[test]
    fn clear_cache_by_url_or_all() {
        let mut cache = JsonCache::new();
        cache.insert("a", json!([]));
        cache.insert("b", json!([]));

        cache.clear(Some("a"));
        assert_eq!(cache.len(), 1);
        assert!(cache.get("b").is_some());
        cache.clear(None);
        assert!(cache.is_empty());
    }

    #[test]
    fn filtered_view_follows_query() {
        let mut feed = EventFeed::new(URL);
        feed.load(&mut respond(&["Jazz Night", "Opera"]), FetchOptions::default());
        let query = SearchQuery::new(" jazz ");
        let matches: Vec<_> = feed.filtered(&query).map(|e| e.title.as_str()).collect();
        assert_eq!(matches, ["Jazz Night"]);
    }
}
