// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Remote event records and their display form.
//!
//! Event APIs do not agree on an envelope. [`pick_events_array`] finds the list inside whatever
//! payload arrives, and [`map_remote`] turns each [`EventRemote`] into the flat strings a card
//! renders ([`EventMapped`]).

use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Title shown for events without a name.
pub const UNTITLED: &str = "Untitled";

/// Price label for events with a non-positive numeric price.
pub const FREE: &str = "Free";

/// Currency suffix appended to numeric prices.
pub const CURRENCY: &str = "sek";

/// Envelope paths probed, in order, for the event array.
const CANDIDATE_PATHS: &[&[&str]] = &[
    &["events", "events"],
    &["events"],
    &["data", "events"],
    &["data"],
    &["items"],
    &[],
];

/// A field that remote payloads send either as a number or as a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// A JSON number, kept exact.
    Number(Number),
    /// A JSON string.
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Schedule of a remote event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventWhen {
    /// Day and month, e.g. `"21 mars"`.
    pub date: Option<String>,
    /// Start time.
    pub from: Option<String>,
    /// End time.
    pub to: Option<String>,
}

/// One event as the remote API sends it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRemote {
    /// Identifier, if any.
    pub id: Option<Scalar>,
    /// Display name.
    pub name: Option<String>,
    /// Price as a number (in [`CURRENCY`]) or free text.
    pub price: Option<Scalar>,
    /// Venue.
    #[serde(rename = "where")]
    pub venue: Option<String>,
    /// Schedule.
    pub when: Option<EventWhen>,
    /// Fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An event flattened for display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventMapped {
    /// Identifier rendered as text.
    pub id: Option<String>,
    /// First word of the date.
    pub day: String,
    /// Remaining words of the date.
    pub month: String,
    /// Name, or [`UNTITLED`].
    pub title: String,
    /// Venue, or empty.
    pub subtitle: String,
    /// `"<from> - <to>"`, or empty without a schedule.
    pub time: String,
    /// `"<n> sek"`, [`FREE`], free text, or empty.
    pub price: String,
    /// Uninterpreted remote fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Follow `keys` through nested objects.
pub fn get_path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| current.get(*key))
}

/// Depth-first search for the first array in `value`.
///
/// Object members are visited in key order.
pub fn find_first_array(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(members) => members.values().find_map(find_first_array),
        _ => None,
    }
}

/// Locate the event array inside an API payload.
///
/// Probes the common envelopes (`events.events`, `events`, `data.events`, `data`, `items`, the
/// payload itself) and falls back to the first array found anywhere. Returns an empty slice
/// when the payload holds no array.
pub fn pick_events_array(raw: &Value) -> &[Value] {
    CANDIDATE_PATHS
        .iter()
        .filter_map(|path| get_path(raw, path))
        .find_map(Value::as_array)
        .map(Vec::as_slice)
        .or_else(|| find_first_array(raw))
        .unwrap_or(&[])
}

/// Flatten one remote event for display.
pub fn map_remote(event: &EventRemote) -> EventMapped {
    let date = event
        .when
        .as_ref()
        .and_then(|when| when.date.as_deref())
        .unwrap_or("")
        .trim();
    let mut words = date.split_whitespace();
    let day = words.next().unwrap_or("").to_owned();
    let month = words.collect::<Vec<_>>().join(" ");

    let time = event
        .when
        .as_ref()
        .map(|when| {
            let from = when.from.as_deref().unwrap_or("");
            let to = when.to.as_deref().unwrap_or("");
            format!("{from} - {to}").trim().to_owned()
        })
        .unwrap_or_default();

    EventMapped {
        id: event.id.as_ref().map(|id| format!("{id}")),
        day,
        month,
        title: event.name.clone().unwrap_or_else(|| UNTITLED.to_owned()),
        subtitle: event.venue.clone().unwrap_or_default(),
        time,
        price: price_label(event.price.as_ref()),
        extra: event.extra.clone(),
    }
}

fn price_label(price: Option<&Scalar>) -> String {
    match price {
        Some(Scalar::Number(number)) => {
            if number.as_f64().is_some_and(|value| value > 0.0) {
                format!("{number} {CURRENCY}")
            } else {
                FREE.to_owned()
            }
        }
        Some(Scalar::Text(text)) => text.clone(),
        None => String::new(),
    }
}

/// Pick the event array out of `raw` and map every record.
///
/// Entries that are not event objects are skipped.
pub fn decode_events(raw: &Value) -> Vec<EventMapped> {
    pick_events_array(raw)
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| match EventRemote::deserialize(entry) {
            Ok(event) => Some(map_remote(&event)),
            Err(error) => {
                tracing::warn!(position, %error, "skipping malformed event entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelopes_are_probed_in_order() {
        let nested = json!({ "events": { "events": [1, 2] }, "items": [3] });
        assert_eq!(pick_events_array(&nested), [json!(1), json!(2)]);

        let data = json!({ "data": { "events": [1] }, "items": [2] });
        assert_eq!(pick_events_array(&data), [json!(1)]);

        let bare = json!([4, 5]);
        assert_eq!(pick_events_array(&bare), [json!(4), json!(5)]);
    }

    #[test]
    fn unknown_envelope_falls_back_to_first_array() {
        let raw = json!({ "meta": { "count": 1 }, "payload": { "list": [7] } });
        assert_eq!(pick_events_array(&raw), [json!(7)]);

        assert!(pick_events_array(&json!({ "count": 0 })).is_empty());
        assert!(pick_events_array(&json!("nope")).is_empty());
    }

    #[test]
    fn maps_a_complete_event() {
        let event: EventRemote = serde_json::from_value(json!({
            "id": "abc",
            "name": "Lasse-Stefanz",
            "price": 350,
            "where": "Kjell Härnqvistsalen",
            "when": { "date": "21 mars", "from": "19.00", "to": "21.00" },
            "tickets": 120,
        }))
        .unwrap();

        let mapped = map_remote(&event);
        assert_eq!(mapped.id.as_deref(), Some("abc"));
        assert_eq!(mapped.day, "21");
        assert_eq!(mapped.month, "mars");
        assert_eq!(mapped.title, "Lasse-Stefanz");
        assert_eq!(mapped.subtitle, "Kjell Härnqvistsalen");
        assert_eq!(mapped.time, "19.00 - 21.00");
        assert_eq!(mapped.price, "350 sek");
        assert_eq!(mapped.extra.get("tickets"), Some(&json!(120)));
    }

    #[test]
    fn missing_fields_get_fallbacks() {
        let mapped = map_remote(&EventRemote::default());
        assert_eq!(mapped.title, UNTITLED);
        assert_eq!(mapped.subtitle, "");
        assert_eq!(mapped.day, "");
        assert_eq!(mapped.month, "");
        assert_eq!(mapped.time, "");
        assert_eq!(mapped.price, "");
        assert_eq!(mapped.id, None);
    }

    #[test]
    fn date_splits_on_whitespace_runs() {
        let event = EventRemote {
            when: Some(EventWhen {
                date: Some(String::from("  3   juni 2026 ")),
                ..EventWhen::default()
            }),
            ..EventRemote::default()
        };
        let mapped = map_remote(&event);
        assert_eq!(mapped.day, "3");
        assert_eq!(mapped.month, "juni 2026");
        assert_eq!(mapped.time, "-");
    }

    #[test]
    fn partial_schedule_trims_the_time() {
        let event = EventRemote {
            when: Some(EventWhen {
                from: Some(String::from("18.00")),
                ..EventWhen::default()
            }),
            ..EventRemote::default()
        };
        assert_eq!(map_remote(&event).time, "18.00 -");
    }

    #[test]
    fn price_labels() {
        let label = |price: Value| {
            let event: EventRemote = serde_json::from_value(json!({ "price": price })).unwrap();
            map_remote(&event).price
        };
        assert_eq!(label(json!(0)), FREE);
        assert_eq!(label(json!(-5)), FREE);
        assert_eq!(label(json!(12.5)), "12.5 sek");
        assert_eq!(label(json!("Sold out")), "Sold out");
        assert_eq!(label(json!("")), "");
        assert_eq!(label(Value::Null), "");
    }

    #[test]
    fn numeric_ids_become_text() {
        let event: EventRemote = serde_json::from_value(json!({ "id": 42 })).unwrap();
        assert_eq!(map_remote(&event).id.as_deref(), Some("42"));
    }

    #[test]
    fn decode_skips_entries_that_are_not_events() {
        let raw = json!({ "events": [{ "name": "A" }, 3, { "name": "B" }] });
        let titles: Vec<_> = decode_events(&raw).into_iter().map(|e| e.title).collect();
        assert_eq!(titles, ["A", "B"]);
    }
}
