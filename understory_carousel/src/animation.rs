// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation controller: transition timing toward a resting position.
//!
//! The engine never interpolates frames itself. When it settles on an index it
//! hands the host a target translation plus an optional [`Transition`] (duration
//! and easing) and lets the rendering layer animate. Hosts that drive frames by
//! hand can evaluate the in-flight [`Animation`] with [`Animation::sample`].
//!
//! Durations scale with distance but are always clamped, so a one-item hop and
//! a jump across the whole deck both feel quick:
//!
//! ```
//! use core::time::Duration;
//! use understory_carousel::animation::AnimationConfig;
//!
//! let config = AnimationConfig::default();
//! assert_eq!(config.duration_for_distance(100.0), Duration::from_millis(200));
//! assert_eq!(config.duration_for_distance(5_000.0), Duration::from_millis(300));
//! ```

use core::time::Duration;

/// Easing curve applied to a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Starts slow.
    EaseIn,
    /// Starts fast and decelerates into the target.
    #[default]
    EaseOut,
    /// Slow at both ends.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    ///
    /// Quadratic approximations of the named CSS curves.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }

    /// CSS timing-function keyword for declarative hosts.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// Timing of settle animations.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AnimationConfig {
    /// Distance covered per second before clamping.
    pub pixels_per_second: f64,
    /// Shortest transition.
    pub min_duration: Duration,
    /// Longest transition.
    pub max_duration: Duration,
    /// Curve handed to the host.
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            pixels_per_second: 2500.0,
            min_duration: Duration::from_millis(200),
            max_duration: Duration::from_millis(300),
            easing: Easing::EaseOut,
        }
    }
}

impl AnimationConfig {
    /// Transition length for a move of `distance` pixels (sign ignored).
    ///
    /// `distance / pixels_per_second` seconds, clamped to
    /// `[min_duration, max_duration]`. A non-positive speed or a NaN distance
    /// yields `max_duration`.
    #[must_use]
    pub fn duration_for_distance(&self, distance: f64) -> Duration {
        let max = self.max_duration.max(self.min_duration);
        if self.pixels_per_second.is_nan() || self.pixels_per_second <= 0.0 || distance.is_nan() {
            return max;
        }
        let secs = distance.abs() / self.pixels_per_second;
        if secs <= self.min_duration.as_secs_f64() {
            self.min_duration
        } else if secs >= max.as_secs_f64() {
            max
        } else {
            Duration::from_secs_f64(secs)
        }
    }
}

/// Transition the host applies to the surface transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Length of the transition.
    pub duration: Duration,
    /// Timing function.
    pub easing: Easing,
}

/// A settle animation between two surface positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    /// Position when the animation started.
    pub from: f64,
    /// Resting position being animated to.
    pub to: f64,
    /// Timing.
    pub transition: Transition,
}

impl Animation {
    /// Position after `elapsed` time.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> f64 {
        if self.is_finished(elapsed) {
            return self.to;
        }
        let t = elapsed.as_secs_f64() / self.transition.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.transition.easing.apply(t)
    }

    /// Returns `true` once `elapsed` covers the whole transition.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.transition.duration
    }
}

/// Owns the in-flight settle animation, if any.
#[derive(Clone, Debug, Default)]
pub struct AnimationController {
    config: AnimationConfig,
    in_flight: Option<Animation>,
}

impl AnimationController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            in_flight: None,
        }
    }

    /// Timing configuration.
    #[must_use]
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Plans a move from `from` to `to`.
    ///
    /// Returns the transition the host should apply, or `None` for an instant
    /// snap when `animate` is `false`. Any previous animation is superseded.
    pub fn start(&mut self, from: f64, to: f64, animate: bool) -> Option<Transition> {
        if !animate {
            self.in_flight = None;
            return None;
        }
        let transition = Transition {
            duration: self.config.duration_for_distance(to - from),
            easing: self.config.easing,
        };
        self.in_flight = Some(Animation {
            from,
            to,
            transition,
        });
        Some(transition)
    }

    /// The animation the host is currently running.
    #[must_use]
    pub fn in_flight(&self) -> Option<&Animation> {
        self.in_flight.as_ref()
    }

    /// Returns `true` while a transition has not reported completion.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Marks the in-flight transition complete.
    ///
    /// Returns `true` when there was one, in which case the host's transition
    /// should be cleared.
    pub fn finish(&mut self) -> bool {
        self.in_flight.take().is_some()
    }

    /// Abandons the in-flight transition, for example when a drag grabs the surface.
    pub fn interrupt(&mut self) -> Option<Animation> {
        self.in_flight.take()
    }
}
