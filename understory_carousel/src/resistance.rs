// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rubber-band resistance for drags past the first or last index.
//!
//! Inside `[min, max]` the surface follows the pointer exactly. Past either
//! bound only a fraction of the overshoot is honored, so the surface visibly
//! resists being pulled away from the content.
//!
//! These functions run on every pointer move while dragging. They are pure,
//! constant time, and never allocate.
//!
//! ```
//! use understory_carousel::resistance::apply_resistance;
//!
//! // Bounds for three 100px items: index 0 at 0, index 2 at -200.
//! assert_eq!(apply_resistance(-120.0, -200.0, 0.0), -120.0);
//! assert_eq!(apply_resistance(50.0, -200.0, 0.0), 10.0);
//! assert_eq!(apply_resistance(-250.0, -200.0, 0.0), -210.0);
//! ```

/// Fraction of the overshoot honored beyond the bounds.
pub const DEFAULT_RESISTANCE: f64 = 0.2;

/// Damps `raw` past `[min_position, max_position]` by [`DEFAULT_RESISTANCE`].
///
/// `max_position` is the resting translation of index 0 and `min_position` that
/// of the last index.
#[inline]
#[must_use]
pub fn apply_resistance(raw: f64, min_position: f64, max_position: f64) -> f64 {
    apply_resistance_with(raw, min_position, max_position, DEFAULT_RESISTANCE)
}

/// Damps `raw` past `[min_position, max_position]` by `factor`.
///
/// When the bounds collapse to a single position (one item, or zero measured
/// width) there is nowhere to drag, and the result is clamped to that position.
#[inline]
#[must_use]
pub fn apply_resistance_with(raw: f64, min_position: f64, max_position: f64, factor: f64) -> f64 {
    if min_position >= max_position {
        return max_position;
    }
    if raw > max_position {
        max_position + (raw - max_position) * factor
    } else if raw < min_position {
        min_position + (raw - min_position) * factor
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_bounds_is_identity() {
        for raw in [0.0, -1.0, -150.5, -300.0] {
            assert_eq!(apply_resistance(raw, -300.0, 0.0), raw);
        }
    }

    #[test]
    fn overshoot_past_first_index_is_damped() {
        assert_eq!(apply_resistance(100.0, -300.0, 0.0), 20.0);
    }

    #[test]
    fn overshoot_past_last_index_is_damped() {
        assert_eq!(apply_resistance(-400.0, -300.0, 0.0), -320.0);
    }

    #[test]
    fn overshoot_is_always_scaled_by_exactly_the_factor() {
        let (min, max) = (-600.0, 0.0);
        let mut raw = -2000.0;
        while raw <= 2000.0 {
            let bounded = apply_resistance(raw, min, max);
            if raw > max {
                assert!((bounded - max - (raw - max) * 0.2).abs() < 1e-9);
            } else if raw < min {
                assert!((bounded - min - (raw - min) * 0.2).abs() < 1e-9);
            } else {
                assert_eq!(bounded, raw);
            }
            raw += 37.5;
        }
    }

    #[test]
    fn collapsed_bounds_clamp_to_the_only_position() {
        assert_eq!(apply_resistance(80.0, 0.0, 0.0), 0.0);
        assert_eq!(apply_resistance(-80.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn custom_factor() {
        assert_eq!(apply_resistance_with(10.0, -100.0, 0.0, 0.5), 5.0);
        assert_eq!(apply_resistance_with(10.0, -100.0, 0.0, 0.0), 0.0);
    }
}
