// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pager state, selection, and view projection.
//!
//! ## Modes
//!
//! - [`PagerMode::Controlled`]: the host owns the active index. Selection reports the new index
//!   through the change callback and the returned [`Selection`], and the host feeds it back
//!   (for example by committing navigation and calling [`Pager::sync_from`]).
//! - [`PagerMode::Uncontrolled`]: the pager owns the index and updates it on selection.
//!
//! ## Clamping
//!
//! Every index the pager stores or reports lies in `[0, max(count - 1, 0)]`. Controlled values
//! are clamped when read; the uncontrolled index is clamped whenever the count changes.
//!
//! ## Keyboard
//!
//! Right/Down select the next dot, Left/Up the previous one, Home the first and End the last.
//! Movement stops at the ends; it does not wrap around.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use swipeway_routes::RouteRegistry;

use crate::style::{PagerConfig, PagerStyle};

/// Who owns the active index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PagerMode {
    /// Active index supplied by the host.
    Controlled(usize),
    /// Active index kept by the pager.
    Uncontrolled(usize),
}

/// Keys the pager responds to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Right arrow.
    ArrowRight,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Up arrow.
    ArrowUp,
    /// Home.
    Home,
    /// End.
    End,
    /// Anything else; not handled.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowRight" => Self::ArrowRight,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowUp" => Self::ArrowUp,
            "Home" => Self::Home,
            "End" => Self::End,
            _ => Self::Other,
        }
    }
}

/// Result of a selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Clamped selected index.
    pub index: usize,
    /// Dot that should receive input focus, if any dot exists.
    pub focus: Option<usize>,
}

/// Result of [`Pager::on_key`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyOutcome {
    /// The key was consumed; the host should prevent its default action.
    pub handled: bool,
    /// Selection made by the key, if handled.
    pub selection: Option<Selection>,
}

/// One selectable dot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotView {
    /// 0-based index.
    pub index: usize,
    /// 1-based position exposed to assistive technology.
    pub position: usize,
    /// Whether this dot is the active one (`aria-current`).
    pub current: bool,
    /// Whether this dot holds input focus.
    pub focused: bool,
    /// Accessible label, `Go to page N`.
    pub label: String,
}

/// Render-ready projection of a pager.
#[derive(Clone, Debug, PartialEq)]
pub struct PagerView {
    /// Label of the navigation landmark.
    pub label: String,
    /// Active index after clamping, or `None` when there are no dots.
    pub active: Option<usize>,
    /// Dots in order.
    pub dots: Vec<DotView>,
    /// Visual parameters.
    pub style: PagerStyle,
}

type ChangeCallback = Box<dyn FnMut(usize)>;

/// Page indicator: a row of selectable dots with one active.
pub struct Pager {
    count: usize,
    mode: PagerMode,
    style: PagerStyle,
    aria_label: String,
    focused: Option<usize>,
    on_change: Option<ChangeCallback>,
}

impl core::fmt::Debug for Pager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pager")
            .field("count", &self.count)
            .field("mode", &self.mode)
            .field("focused", &self.focused)
            .field("has_on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::uncontrolled(PagerConfig::default())
    }
}

/// Clamp `index` into `[0, max(count - 1, 0)]`.
pub fn clamp_index(index: usize, count: usize) -> usize {
    index.min(count.saturating_sub(1))
}

impl Pager {
    /// Create an uncontrolled pager seeded with `config.default_active`.
    pub fn uncontrolled(config: PagerConfig) -> Self {
        let active = clamp_index(config.default_active, config.count);
        Self::with_mode(config, PagerMode::Uncontrolled(active))
    }

    /// Create a pager whose active index is owned by the host.
    pub fn controlled(config: PagerConfig, active: usize) -> Self {
        Self::with_mode(config, PagerMode::Controlled(active))
    }

    /// Create a controlled pager following `registry`: one dot per route, the registry's index
    /// active.
    pub fn from_registry(registry: &RouteRegistry) -> Self {
        let config = PagerConfig {
            count: registry.len(),
            ..PagerConfig::default()
        };
        Self::controlled(config, registry.index())
    }

    fn with_mode(config: PagerConfig, mode: PagerMode) -> Self {
        Self {
            count: config.count,
            mode,
            style: config.style,
            aria_label: config.aria_label,
            focused: None,
            on_change: None,
        }
    }

    /// Install a callback invoked with every selected index.
    pub fn with_on_change(mut self, on_change: impl FnMut(usize) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Replace or remove the change callback.
    pub fn set_on_change(&mut self, on_change: Option<Box<dyn FnMut(usize)>>) {
        self.on_change = on_change;
    }

    /// Number of dots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Current mode, as stored.
    pub fn mode(&self) -> PagerMode {
        self.mode
    }

    /// Visual parameters.
    pub fn style(&self) -> &PagerStyle {
        &self.style
    }

    /// Replace the visual parameters.
    pub fn set_style(&mut self, style: PagerStyle) {
        self.style = style;
    }

    /// Dot that last received focus, if it still exists.
    pub fn focused(&self) -> Option<usize> {
        self.focused.filter(|&dot| dot < self.count)
    }

    /// Drop input focus.
    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Active index after clamping.
    pub fn active(&self) -> usize {
        let raw = match self.mode {
            PagerMode::Controlled(index) | PagerMode::Uncontrolled(index) => index,
        };
        clamp_index(raw, self.count)
    }

    /// Change the number of dots.
    ///
    /// An uncontrolled index that falls out of range is clamped to the new last dot.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if let PagerMode::Uncontrolled(index) = &mut self.mode {
            let clamped = clamp_index(*index, count);
            if clamped != *index {
                tracing::trace!(from = *index, to = clamped, count, "clamped pager index");
                *index = clamped;
            }
        }
    }

    /// Hand ownership of the active index to the host.
    pub fn set_controlled(&mut self, active: usize) {
        self.mode = PagerMode::Controlled(active);
    }

    /// Take ownership of the active index, seeded from the current one.
    pub fn set_uncontrolled(&mut self) {
        self.mode = PagerMode::Uncontrolled(self.active());
    }

    /// Re-derive count and active index from `registry`, switching to controlled mode.
    pub fn sync_from(&mut self, registry: &RouteRegistry) {
        self.set_count(registry.len());
        self.mode = PagerMode::Controlled(registry.index());
    }

    /// Select dot `index`, clamped into range.
    ///
    /// Updates the internal index when uncontrolled, invokes the change callback, and moves
    /// focus to the selected dot. With no dots, the callback still receives `0` but focus does
    /// not move.
    pub fn select(&mut self, index: usize) -> Selection {
        if self.count == 0 {
            if let Some(on_change) = self.on_change.as_mut() {
                on_change(0);
            }
            return Selection {
                index: 0,
                focus: None,
            };
        }
        let next = clamp_index(index, self.count);
        if let PagerMode::Uncontrolled(internal) = &mut self.mode {
            *internal = next;
        }
        tracing::trace!(requested = index, selected = next, "pager selection");
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(next);
        }
        self.focused = Some(next);
        Selection {
            index: next,
            focus: Some(next),
        }
    }

    /// Handle a key press on the pager.
    pub fn on_key(&mut self, key: Key) -> KeyOutcome {
        let current = self.active();
        let target = match key {
            Key::ArrowRight | Key::ArrowDown => current.saturating_add(1),
            Key::ArrowLeft | Key::ArrowUp => current.saturating_sub(1),
            Key::Home => 0,
            Key::End => self.count.saturating_sub(1),
            Key::Other => {
                return KeyOutcome {
                    handled: false,
                    selection: None,
                };
            }
        };
        KeyOutcome {
            handled: true,
            selection: Some(self.select(target)),
        }
    }

    /// Project the current state for rendering.
    pub fn view(&self) -> PagerView {
        let active = (self.count > 0).then(|| self.active());
        let focused = self.focused();
        let dots = (0..self.count)
            .map(|index| DotView {
                index,
                position: index + 1,
                current: Some(index) == active,
                focused: Some(index) == focused,
                label: format!("Go to page {}", index + 1),
            })
            .collect();
        PagerView {
            label: self.aria_label.clone(),
            active,
            dots,
            style: self.style.clone(),
        }
    }
}
