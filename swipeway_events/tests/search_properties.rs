// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for event search and stale loads.

use proptest::prelude::*;
use serde_json::json;
use swipeway_events::{Completion, EventFeed, EventMapped, FetchOptions, SearchQuery};

fn event(title: &str, subtitle: &str) -> EventMapped {
    EventMapped {
        title: title.to_owned(),
        subtitle: subtitle.to_owned(),
        ..EventMapped::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Padding and letter case around the query never change the result, which is an
    /// order-preserving subset of the input.
    #[test]
    fn filter_is_a_stable_subset(
        pairs in prop::collection::vec(("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}"), 0..12),
        query in "[a-z]{0,4}",
        pad in "[ \t]{0,3}",
    ) {
        let events: Vec<_> = pairs.iter().map(|(t, s)| event(t, s)).collect();
        let plain = SearchQuery::new(&query);
        let padded = SearchQuery::new(&format!("{pad}{}{pad}", query.to_uppercase()));
        prop_assert_eq!(&plain, &padded);

        let hits: Vec<_> = plain.filter(&events).collect();
        let mut rest = events.iter();
        for hit in &hits {
            prop_assert!(rest.any(|e| std::ptr::eq(e, *hit)));
        }
        if query.is_empty() {
            prop_assert_eq!(hits.len(), events.len());
        }
    }

    /// Of any sequence of overlapping requests, only the last one's result is applied.
    #[test]
    fn only_latest_request_applies(requests in 1_usize..6, rotation in 0_usize..6) {
        let mut feed = EventFeed::new("/api/events");
        let issued: Vec<_> = (0..requests)
            .map(|_| feed.begin(FetchOptions { bypass_cache: true }).unwrap())
            .collect();

        let mut order: Vec<usize> = (0..requests).collect();
        order.rotate_left(rotation % requests);
        for position in order {
            let payload = json!([{ "name": format!("request {position}") }]);
            let outcome = feed.complete(issued[position].id, Ok(payload));
            if position == requests - 1 {
                prop_assert_eq!(outcome, Completion::Applied { count: 1 });
            } else {
                prop_assert_eq!(outcome, Completion::Discarded);
            }
        }
        let expected = format!("request {}", requests - 1);
        prop_assert_eq!(feed.events()[0].title.as_str(), expected.as_str());
    }
}
