// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe gesture state machine.
//!
//! ## Phases
//!
//! - [`Phase::Idle`]: no contact.
//! - [`Phase::Tracking`]: a contact is down. Horizontal samples drag the container and ask the
//!   host to suppress default scrolling. The first sample where `|dy| > |dx|` locks the session
//!   to the vertical axis; later samples are ignored and the release will snap back.
//! - [`Phase::Releasing`]: the contact is up and the container animates toward its resting
//!   offset. The host reports the end of that animation with
//!   [`GestureController::on_transition_end`], which commits the pending target (if any) and
//!   returns to idle.
//!
//! ## Cancellation
//!
//! A contact-down during [`Phase::Releasing`] discards the pending target and starts tracking
//! again. [`GestureController::cancel`] abandons whatever is in flight, for example when the
//! container is removed. In both cases the abandoned release's [`TransitionId`] goes stale and a
//! late completion signal for it is ignored without touching the registry.

use kurbo::Point;
use swipeway_routes::{Commit, Committer, Navigator, RouteRegistry};

use crate::config::{ConfigError, GestureConfig};
use crate::style::ContainerStyle;

bitflags::bitflags! {
    /// Effects a move sample asks the host to apply.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MoveEffects: u8 {
        /// Suppress the platform's default action (horizontal page scroll).
        const PREVENT_DEFAULT = 0b0000_0001;
        /// The container offset changed; re-apply [`ContainerStyle`].
        const OFFSET_CHANGED  = 0b0000_0010;
        /// This sample locked the session to the vertical axis.
        const AXIS_LOCKED     = 0b0000_0100;
    }
}

/// Coarse state of a [`GestureController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No active contact.
    Idle,
    /// A contact is down and being tracked.
    Tracking,
    /// Waiting for the release animation to finish.
    Releasing,
}

/// Identifies one release animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

/// Decision taken when the contact is lifted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Release {
    /// Index that will be committed when the animation finishes, if any.
    pub target: Option<usize>,
    /// Offset the container animates toward: `-width` (next), `+width` (previous), or `0`.
    pub offset: f64,
    /// Pass back to [`GestureController::on_transition_end`].
    pub transition: TransitionId,
}

/// Result of [`GestureController::on_transition_end`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The release had a target and navigation was committed.
    Committed(Commit),
    /// The release had no target; the container is back at rest.
    SnappedBack,
    /// No release with this id is in flight.
    Ignored,
}

#[derive(Copy, Clone, Debug)]
struct Session {
    origin: Point,
    delta_x: f64,
    axis_locked: bool,
}

#[derive(Copy, Clone, Debug)]
struct PendingRelease {
    transition: TransitionId,
    target: Option<usize>,
}

#[derive(Copy, Clone, Debug)]
enum State {
    Idle,
    Tracking(Session),
    Releasing(PendingRelease),
}

/// Turns a single-contact horizontal drag into a page navigation.
///
/// ## Usage
///
/// - Forward the primary contact's position to [`Self::on_down`], [`Self::on_move`], and
///   [`Self::on_up`]. Honor [`MoveEffects::PREVENT_DEFAULT`] on moves.
/// - After every call, apply [`Self::style`] to the container.
/// - When the container's slide animation finishes, call [`Self::on_transition_end`] with the id
///   from the [`Release`].
/// - Call [`Self::cancel`] when the container goes away.
#[derive(Clone, Debug)]
pub struct GestureController {
    config: GestureConfig,
    state: State,
    style: ContainerStyle,
    next_transition: u64,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::with_valid_config(GestureConfig::default())
    }
}

impl GestureController {
    /// Create a controller, rejecting unusable thresholds.
    pub fn new(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: GestureConfig) -> Self {
        Self {
            config,
            state: State::Idle,
            style: ContainerStyle::neutral(config.transition_ms),
            next_transition: 0,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect from the next release.
    pub fn set_config(&mut self, config: GestureConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.style.transition_ms = config.transition_ms;
        Ok(())
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Tracking(_) => Phase::Tracking,
            State::Releasing(_) => Phase::Releasing,
        }
    }

    /// Visual state to apply to the container.
    pub fn style(&self) -> &ContainerStyle {
        &self.style
    }

    /// Horizontal displacement of the tracked contact, while tracking.
    pub fn delta_x(&self) -> Option<f64> {
        match self.state {
            State::Tracking(session) => Some(session.delta_x),
            _ => None,
        }
    }

    /// Whether the tracked session has locked to the vertical axis.
    pub fn is_axis_locked(&self) -> bool {
        matches!(self.state, State::Tracking(session) if session.axis_locked)
    }

    /// Target of the release in flight, if any.
    pub fn pending_target(&self) -> Option<usize> {
        match self.state {
            State::Releasing(pending) => pending.target,
            _ => None,
        }
    }

    /// Contact went down at `position`.
    ///
    /// Starts a fresh session. A release still in flight is aborted and its target discarded.
    pub fn on_down(&mut self, position: Point) {
        if let State::Releasing(pending) = self.state {
            tracing::debug!(
                transition = pending.transition.0,
                target = ?pending.target,
                "aborting release for new contact"
            );
        }
        self.state = State::Tracking(Session {
            origin: position,
            delta_x: 0.0,
            axis_locked: false,
        });
        self.style = ContainerStyle::neutral(self.config.transition_ms);
    }

    /// Contact moved to `position`.
    ///
    /// Once the session locks to the vertical axis the container keeps its last horizontal
    /// offset while the page scrolls. The release then animates it back to `0`.
    pub fn on_move(&mut self, position: Point) -> MoveEffects {
        let State::Tracking(session) = &mut self.state else {
            return MoveEffects::empty();
        };
        if session.axis_locked {
            return MoveEffects::empty();
        }

        let dx = position.x - session.origin.x;
        let dy = position.y - session.origin.y;
        // dy² > dx² is |dy| > |dx|.
        if dy * dy > dx * dx {
            session.axis_locked = true;
            tracing::trace!(dx, dy, "vertical intent, releasing gesture to scroll");
            return MoveEffects::AXIS_LOCKED;
        }

        session.delta_x = dx;
        let mut effects = MoveEffects::PREVENT_DEFAULT;
        if self.style.translate_x != dx {
            self.style.translate_x = dx;
            effects |= MoveEffects::OFFSET_CHANGED;
        }
        effects
    }

    /// Contact lifted.
    ///
    /// Decides whether the drag commits, using `viewport_width` for both the viewport-relative
    /// threshold and the departure offset, and starts the release animation. A non-finite or
    /// non-positive width counts as `1.0`.
    ///
    /// Returns `None` if no contact was being tracked.
    pub fn on_up(&mut self, viewport_width: f64, registry: &RouteRegistry) -> Option<Release> {
        let State::Tracking(session) = self.state else {
            return None;
        };
        let width = if viewport_width.is_finite() && viewport_width > 0.0 {
            viewport_width
        } else {
            1.0
        };
        let threshold = self.config.commit_threshold(width);
        let dx = session.delta_x;

        let (target, offset) = if session.axis_locked {
            (None, 0.0)
        } else if dx < -threshold {
            match registry.next_index() {
                Some(next) => (Some(next), -width),
                None => (None, 0.0),
            }
        } else if dx > threshold {
            match registry.prev_index() {
                Some(prev) => (Some(prev), width),
                None => (None, 0.0),
            }
        } else {
            (None, 0.0)
        };

        let transition = TransitionId(self.next_transition);
        self.next_transition += 1;
        tracing::debug!(
            dx,
            threshold,
            target = ?target,
            axis_locked = session.axis_locked,
            transition = transition.0,
            "gesture released"
        );

        self.state = State::Releasing(PendingRelease { transition, target });
        self.style.translate_x = offset;
        self.style.transition_enabled = true;
        Some(Release {
            target,
            offset,
            transition,
        })
    }

    /// The release animation identified by `transition` finished.
    ///
    /// Commits the pending target through `committer` (registry first, then route change) and
    /// returns the container to rest. Completion signals for aborted or cancelled releases are
    /// ignored.
    pub fn on_transition_end<N: Navigator>(
        &mut self,
        transition: TransitionId,
        registry: &mut RouteRegistry,
        committer: &mut Committer<N>,
    ) -> TransitionOutcome {
        let State::Releasing(pending) = self.state else {
            return TransitionOutcome::Ignored;
        };
        if pending.transition != transition {
            tracing::trace!(
                stale = transition.0,
                current = pending.transition.0,
                "ignoring stale transition"
            );
            return TransitionOutcome::Ignored;
        }

        self.state = State::Idle;
        self.style = ContainerStyle::neutral(self.config.transition_ms);
        match pending.target {
            Some(target) => TransitionOutcome::Committed(committer.commit(registry, target)),
            None => TransitionOutcome::SnappedBack,
        }
    }

    /// Abandon any session or release in flight without touching the registry.
    ///
    /// Returns `true` if something was abandoned.
    pub fn cancel(&mut self) -> bool {
        let abandoned = !matches!(self.state, State::Idle);
        if abandoned {
            tracing::debug!(phase = ?self.phase(), "gesture cancelled");
        }
        self.state = State::Idle;
        self.style = ContainerStyle::neutral(self.config.transition_ms);
        abandoned
    }
}
