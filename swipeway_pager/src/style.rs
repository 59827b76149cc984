// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pager configuration and visual parameters.
//!
//! Nothing here affects selection logic; the style only feeds rendering.

use alloc::format;
use alloc::string::String;

/// Default dot diameter in logical pixels.
pub const DEFAULT_DOT_SIZE: f64 = 10.0;

/// Default gap between dots in logical pixels.
pub const DEFAULT_DOT_GAP: f64 = 12.0;

/// Default color of the active dot.
pub const DEFAULT_ACTIVE_COLOR: &str = "#FFFFFF";

/// Default color of inactive dots.
pub const DEFAULT_INACTIVE_COLOR: &str = "#FFFFFF4D";

/// Default accessible label of the pager landmark.
pub const DEFAULT_ARIA_LABEL: &str = "Pager";

/// Default number of dots when no route list backs the pager.
pub const DEFAULT_COUNT: usize = 3;

/// Visual parameters of a pager.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagerStyle {
    /// Dot diameter in logical pixels.
    pub size: f64,
    /// Gap between dots in logical pixels.
    pub gap: f64,
    /// CSS color of the active dot.
    pub active_color: String,
    /// CSS color of inactive dots.
    pub inactive_color: String,
}

impl Default for PagerStyle {
    fn default() -> Self {
        Self {
            size: DEFAULT_DOT_SIZE,
            gap: DEFAULT_DOT_GAP,
            active_color: String::from(DEFAULT_ACTIVE_COLOR),
            inactive_color: String::from(DEFAULT_INACTIVE_COLOR),
        }
    }
}

impl PagerStyle {
    /// CSS custom properties for the pager container, in declaration order.
    pub fn css_vars(&self) -> [(&'static str, String); 4] {
        [
            ("--pager-size", format!("{}px", self.size)),
            ("--pager-gap", format!("{}px", self.gap)),
            ("--pager-active", self.active_color.clone()),
            ("--pager-inactive", self.inactive_color.clone()),
        ]
    }

    /// Total extent of a row of `count` dots, including the gaps between them.
    pub fn row_extent(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let count = count as f64;
        count * self.size + (count - 1.0) * self.gap
    }
}

/// Construction parameters of a [`Pager`](crate::Pager).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagerConfig {
    /// Number of dots.
    pub count: usize,
    /// Initial index of an uncontrolled pager. Clamped into range.
    pub default_active: usize,
    /// Visual parameters.
    pub style: PagerStyle,
    /// Accessible label of the navigation landmark.
    pub aria_label: String,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            default_active: 0,
            style: PagerStyle::default(),
            aria_label: String::from(DEFAULT_ARIA_LABEL),
        }
    }
}
