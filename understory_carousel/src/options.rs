// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named configuration consumed by the engine.
//!
//! With the `serde` feature every field is optional in serialized form and
//! falls back to its default:
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # fn example() {
//! use understory_carousel::{CarouselOptions, LayoutPolicy};
//!
//! let options: CarouselOptions =
//!     serde_json::from_str(r#"{ "item_count": 3, "policy": "FixedPaneGrid" }"#).unwrap();
//! assert_eq!(options.visible_portion, 0.25);
//! assert_eq!(options.policy, LayoutPolicy::FixedPaneGrid);
//! # }
//! ```

use crate::animation::AnimationConfig;
use crate::gesture::GestureConfig;
use crate::layout::{DEFAULT_VISIBLE_PORTION, LayoutPolicy};

/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CarouselOptions {
    /// Number of items. Kept current through
    /// [`Carousel::notify_items_changed`](crate::Carousel::notify_items_changed).
    pub item_count: usize,
    /// Fraction of a neighbor left visible at rest.
    pub visible_portion: f64,
    /// Index to start on. `None` takes the shared index when one is injected, else 0.
    pub initial_index: Option<usize>,
    /// Layout policy.
    pub policy: LayoutPolicy,
    /// Direction lock and release thresholds.
    pub gesture: GestureConfig,
    /// Settle animation timing.
    pub animation: AnimationConfig,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            item_count: 0,
            visible_portion: DEFAULT_VISIBLE_PORTION,
            initial_index: None,
            policy: LayoutPolicy::default(),
            gesture: GestureConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl CarouselOptions {
    /// Options for `item_count` items, everything else default.
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            ..Self::default()
        }
    }

    /// Sets the item count.
    #[must_use]
    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    /// Sets the visible portion.
    #[must_use]
    pub fn with_visible_portion(mut self, visible_portion: f64) -> Self {
        self.visible_portion = visible_portion;
        self
    }

    /// Sets the starting index.
    #[must_use]
    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.initial_index = Some(index);
        self
    }

    /// Sets the layout policy.
    #[must_use]
    pub fn with_policy(mut self, policy: LayoutPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the gesture thresholds.
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Sets the animation timing.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }
}
