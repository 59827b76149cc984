// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual state of the swiped container.
//!
//! The controller never touches a renderer. Hosts read a [`ContainerStyle`] after each input
//! event and apply it: a horizontal translation plus an optional slide transition. The CSS
//! helpers produce values for web hosts; other hosts can use the raw fields.

use alloc::format;
use alloc::string::String;

use crate::config::DEFAULT_TRANSITION_MS;

/// `touch-action` for the container: vertical panning stays with the browser.
pub const TOUCH_ACTION: &str = "pan-y";

/// `will-change` hint for the container.
pub const WILL_CHANGE: &str = "transform";

/// Translation and transition state of the swiped container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerStyle {
    /// Horizontal offset in logical pixels.
    pub translate_x: f64,
    /// Whether changes to `translate_x` should animate.
    pub transition_enabled: bool,
    /// Duration of the slide animation in milliseconds.
    pub transition_ms: u32,
}

impl Default for ContainerStyle {
    fn default() -> Self {
        Self::neutral(DEFAULT_TRANSITION_MS)
    }
}

impl ContainerStyle {
    /// Resting style: no offset, no transition.
    pub fn neutral(transition_ms: u32) -> Self {
        Self {
            translate_x: 0.0,
            transition_enabled: false,
            transition_ms,
        }
    }

    /// Whether the container is at rest.
    pub fn is_neutral(&self) -> bool {
        self.translate_x == 0.0 && !self.transition_enabled
    }

    /// CSS `transform` value, for example `translateX(-120px)`.
    pub fn transform_css(&self) -> String {
        format!("translateX({}px)", self.translate_x)
    }

    /// CSS `transition` value: `transform <ms>ms ease` while animating, `none` otherwise.
    pub fn transition_css(&self) -> String {
        if self.transition_enabled {
            format!("transform {}ms ease", self.transition_ms)
        } else {
            String::from("none")
        }
    }
}
