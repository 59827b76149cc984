// Copyright 2025 the Swipeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture configuration.

/// Default absolute commit threshold in logical pixels.
pub const DEFAULT_THRESHOLD_PX: f64 = 80.0;

/// Default commit threshold as a fraction of the viewport width.
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.25;

/// Default duration of the release slide animation in milliseconds.
pub const DEFAULT_TRANSITION_MS: u32 = 320;

/// Tuning for [`GestureController`](crate::GestureController).
///
/// A release commits when the horizontal displacement exceeds
/// [`GestureConfig::commit_threshold`], the larger of the absolute and the
/// viewport-relative threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Absolute commit threshold in logical pixels.
    pub threshold_px: f64,
    /// Commit threshold as a fraction of the viewport width. Values above `1` make every drag
    /// that stays inside the viewport snap back.
    pub threshold_fraction: f64,
    /// Duration of the release slide animation in milliseconds.
    pub transition_ms: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_THRESHOLD_PX,
            threshold_fraction: DEFAULT_THRESHOLD_FRACTION,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl GestureConfig {
    /// Effective commit threshold in pixels for a viewport of `viewport_width`.
    pub fn commit_threshold(&self, viewport_width: f64) -> f64 {
        self.threshold_px.max(viewport_width * self.threshold_fraction)
    }

    /// Check that every threshold is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold_px.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "threshold_px",
                value: self.threshold_px,
            });
        }
        if !self.threshold_fraction.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "threshold_fraction",
                value: self.threshold_fraction,
            });
        }
        if self.threshold_px < 0.0 {
            return Err(ConfigError::NegativeThreshold(self.threshold_px));
        }
        if self.threshold_fraction < 0.0 {
            return Err(ConfigError::NegativeFraction(self.threshold_fraction));
        }
        Ok(())
    }
}

/// Rejected [`GestureConfig`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A threshold was NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NotFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The pixel threshold was negative.
    #[error("threshold_px must not be negative, got {0}")]
    NegativeThreshold(f64),
    /// The viewport fraction was negative.
    #[error("threshold_fraction must not be negative, got {0}")]
    NegativeFraction(f64),
}
