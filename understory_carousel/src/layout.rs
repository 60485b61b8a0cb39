// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout calculator: item spacing, centering offset, and index → position mapping.
//!
//! A layout pass takes the measured [`CarouselConfig`] and a [`LayoutPolicy`] and
//! produces a [`LayoutGeometry`]. The geometry answers three questions for the
//! rest of the engine:
//!
//! - Where should the surface rest to show index `i`? ([`LayoutGeometry::position_for_index`])
//! - Where does item `i` sit on the surface? ([`LayoutGeometry::item_offset`])
//! - How far may the surface travel before resistance kicks in?
//!   ([`LayoutGeometry::min_position`] / [`LayoutGeometry::max_position`])
//!
//! Positions are surface translations along X in pixels. Index 0 always rests
//! at `0.0`; later indices rest at increasingly negative translations.
//!
//! ## Minimal example
//!
//! ```
//! use understory_carousel::{CarouselConfig, LayoutPolicy, compute_layout};
//!
//! // Three 100px items in a 360px container leave 60px to share out.
//! let config = CarouselConfig::new(3, 360.0, 100.0);
//! let geometry = compute_layout(&config, LayoutPolicy::CenteredReveal).unwrap();
//!
//! assert_eq!(geometry.spacing(), 30.0);
//! assert_eq!(geometry.initial_offset(), 100.0 * 0.25 + 30.0);
//! assert_eq!(geometry.position_for_index(1), Some(-130.0));
//! assert_eq!(geometry.position_for_index(3), None);
//! ```

/// Fraction of an adjacent item left visible at rest when nothing else is configured.
pub const DEFAULT_VISIBLE_PORTION: f64 = 0.25;

/// Measured inputs for a single layout pass.
///
/// `container_width` and `item_width` are measured by the host, not configured.
/// They change across resizes and item mutations, and every change needs a new
/// layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Number of items on the surface.
    pub item_count: usize,
    /// Width of the container in pixels.
    pub container_width: f64,
    /// Width of the first item in pixels.
    pub item_width: f64,
    /// Fraction in `[0, 1]` of an adjacent item that stays visible at rest.
    pub visible_portion: f64,
}

impl CarouselConfig {
    /// Creates a config with the default visible portion.
    #[must_use]
    pub fn new(item_count: usize, container_width: f64, item_width: f64) -> Self {
        Self {
            item_count,
            container_width,
            item_width,
            visible_portion: DEFAULT_VISIBLE_PORTION,
        }
    }

    /// Returns a copy with the given visible portion.
    #[must_use]
    pub fn with_visible_portion(mut self, visible_portion: f64) -> Self {
        self.visible_portion = visible_portion;
        self
    }
}

/// How items are distributed across the surface.
///
/// All policies share the same resting positions (`-i * stride`); they differ in
/// how the stride is derived and where the centering offset is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutPolicy {
    /// Full-container pages.
    ///
    /// The stride is the container width and the measured item width is ignored.
    /// There is no spacing and no centering offset.
    EdgeToEdge,
    /// Centered items with a sliver of each neighbor visible.
    ///
    /// Extra space is shared between items and the centering offset moves the
    /// surface origin, so items sit at `i * stride` on the surface.
    #[default]
    CenteredReveal,
    /// Fixed-width panes on a stationary surface origin.
    ///
    /// Spacing matches [`LayoutPolicy::CenteredReveal`], but the centering offset
    /// is folded into every item offset and the surface origin stays at zero.
    FixedPaneGrid,
}

/// Derived layout for one pass; cached by the engine until the next pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutGeometry {
    item_count: usize,
    item_width: f64,
    spacing: f64,
    initial_offset: f64,
    policy: LayoutPolicy,
}

impl LayoutGeometry {
    /// Number of items covered by this layout. Always at least one.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Effective width of one item.
    ///
    /// For [`LayoutPolicy::EdgeToEdge`] this is the container width.
    #[must_use]
    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    /// Extra space placed between neighboring items.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Centering offset; zero when the items fill the container.
    #[must_use]
    pub fn initial_offset(&self) -> f64 {
        self.initial_offset
    }

    /// Policy this geometry was computed with.
    #[must_use]
    pub fn policy(&self) -> LayoutPolicy {
        self.policy
    }

    /// Distance between the resting positions of neighboring indices.
    #[must_use]
    pub fn stride(&self) -> f64 {
        self.item_width + self.spacing
    }

    /// Surface translation that rests on `index`, or `None` when out of range.
    ///
    /// Monotonically non-increasing in `index`, with `position_for_index(0) == Some(0.0)`.
    #[must_use]
    pub fn position_for_index(&self, index: usize) -> Option<f64> {
        (index < self.item_count).then(|| -(index as f64) * self.stride())
    }

    /// Translation resting on index 0. The upper drag bound.
    #[must_use]
    pub fn max_position(&self) -> f64 {
        0.0
    }

    /// Translation resting on the last index. The lower drag bound.
    #[must_use]
    pub fn min_position(&self) -> f64 {
        -((self.item_count - 1) as f64) * self.stride()
    }

    /// Offset of the surface origin inside the container.
    #[must_use]
    pub fn surface_origin(&self) -> f64 {
        match self.policy {
            LayoutPolicy::CenteredReveal => self.initial_offset,
            LayoutPolicy::EdgeToEdge | LayoutPolicy::FixedPaneGrid => 0.0,
        }
    }

    /// Offset of item `index` on the surface, or `None` when out of range.
    #[must_use]
    pub fn item_offset(&self, index: usize) -> Option<f64> {
        (index < self.item_count).then(|| self.item_offset_unchecked(index))
    }

    /// Offsets of every item, in index order.
    pub fn item_offsets(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.item_count).map(|index| self.item_offset_unchecked(index))
    }

    fn item_offset_unchecked(&self, index: usize) -> f64 {
        let base = index as f64 * self.stride();
        match self.policy {
            LayoutPolicy::FixedPaneGrid => self.initial_offset + base,
            LayoutPolicy::EdgeToEdge | LayoutPolicy::CenteredReveal => base,
        }
    }
}

/// Runs a layout pass.
///
/// Returns `None` for an empty carousel; there is nothing to lay out.
///
/// Negative or non-finite widths are treated as zero, and the visible portion
/// is clamped into `[0, 1]`. A single item never gets spacing, and items that
/// overflow the container get neither spacing nor a centering offset.
#[must_use]
pub fn compute_layout(config: &CarouselConfig, policy: LayoutPolicy) -> Option<LayoutGeometry> {
    let item_count = config.item_count;
    if item_count == 0 {
        return None;
    }

    let container_width = non_negative(config.container_width);
    if policy == LayoutPolicy::EdgeToEdge {
        return Some(LayoutGeometry {
            item_count,
            item_width: container_width,
            spacing: 0.0,
            initial_offset: 0.0,
            policy,
        });
    }

    let item_width = non_negative(config.item_width);
    let visible_portion = if config.visible_portion.is_nan() {
        DEFAULT_VISIBLE_PORTION
    } else {
        config.visible_portion.clamp(0.0, 1.0)
    };

    let extra_space = (container_width - item_count as f64 * item_width).max(0.0);
    let spacing = if item_count > 1 {
        extra_space / (item_count - 1) as f64
    } else {
        0.0
    };
    let initial_offset = if extra_space > 0.0 {
        item_width * visible_portion + spacing
    } else {
        0.0
    };

    Some(LayoutGeometry {
        item_count,
        item_width,
        spacing,
        initial_offset,
        policy,
    })
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn items_filling_the_container_get_no_spacing() {
        let config = CarouselConfig::new(3, 300.0, 100.0);
        let geometry = compute_layout(&config, LayoutPolicy::CenteredReveal).unwrap();

        assert_eq!(geometry.spacing(), 0.0);
        assert_eq!(geometry.initial_offset(), 0.0);
        assert_eq!(geometry.stride(), 100.0);
    }

    #[test]
    fn resize_spreads_extra_space_between_items() {
        let narrow = CarouselConfig::new(3, 300.0, 100.0);
        let wide = CarouselConfig {
            container_width: 360.0,
            ..narrow
        };

        let before = compute_layout(&narrow, LayoutPolicy::CenteredReveal).unwrap();
        let after = compute_layout(&wide, LayoutPolicy::CenteredReveal).unwrap();

        assert_eq!(before.spacing(), 0.0);
        assert_eq!(after.spacing(), 30.0);
        assert_eq!(after.initial_offset(), 55.0);
    }

    #[test]
    fn empty_carousel_has_no_layout() {
        let config = CarouselConfig::new(0, 300.0, 100.0);
        assert!(compute_layout(&config, LayoutPolicy::CenteredReveal).is_none());
        assert!(compute_layout(&config, LayoutPolicy::EdgeToEdge).is_none());
    }

    #[test]
    fn single_item_does_not_divide_by_zero() {
        let config = CarouselConfig::new(1, 400.0, 100.0);
        let geometry = compute_layout(&config, LayoutPolicy::CenteredReveal).unwrap();

        assert_eq!(geometry.spacing(), 0.0);
        assert_eq!(geometry.initial_offset(), 25.0);
        assert_eq!(geometry.min_position(), 0.0);
        assert_eq!(geometry.max_position(), 0.0);
    }

    #[test]
    fn positions_start_at_zero_and_never_increase() {
        let config = CarouselConfig::new(6, 1000.0, 120.0);
        let geometry = compute_layout(&config, LayoutPolicy::CenteredReveal).unwrap();

        assert_eq!(geometry.position_for_index(0), Some(0.0));
        let positions: Vec<f64> = (0..6)
            .map(|i| geometry.position_for_index(i).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(geometry.min_position(), positions[5]);
    }

    #[test]
    fn out_of_range_index_has_no_position() {
        let config = CarouselConfig::new(3, 300.0, 100.0);
        let geometry = compute_layout(&config, LayoutPolicy::CenteredReveal).unwrap();

        assert_eq!(geometry.position_for_index(2), Some(-200.0));
        assert_eq!(geometry.position_for_index(3), None);
        assert_eq!(geometry.item_offset(3), None);
    }

    #[test]
    fn edge_to_edge_pages_use_container_width() {
        let config = CarouselConfig::new(3, 390.0, 10.0);
        let geometry = compute_layout(&config, LayoutPolicy::EdgeToEdge).unwrap();

        assert_eq!(geometry.item_width(), 390.0);
        assert_eq!(geometry.spacing(), 0.0);
        assert_eq!(geometry.position_for_index(2), Some(-780.0));
        assert_eq!(geometry.surface_origin(), 0.0);
    }

    #[test]
    fn centered_reveal_moves_the_surface_origin() {
        let config = CarouselConfig::new(3, 360.0, 100.0);
        let geometry = compute_layout(&config, LayoutPolicy::CenteredReveal).unwrap();

        assert_eq!(geometry.surface_origin(), 55.0);
        let offsets: Vec<f64> = geometry.item_offsets().collect();
        assert_eq!(offsets, vec![0.0, 130.0, 260.0]);
    }

    #[test]
    fn fixed_pane_grid_bakes_offset_into_items() {
        let config = CarouselConfig::new(3, 360.0, 100.0);
        let geometry = compute_layout(&config, LayoutPolicy::FixedPaneGrid).unwrap();

        assert_eq!(geometry.surface_origin(), 0.0);
        let offsets: Vec<f64> = geometry.item_offsets().collect();
        assert_eq!(offsets, vec![55.0, 185.0, 315.0]);
        // Resting positions are policy independent.
        assert_eq!(geometry.position_for_index(1), Some(-130.0));
    }

    #[test]
    fn degenerate_measurements_are_clamped() {
        let config = CarouselConfig {
            item_count: 4,
            container_width: f64::NAN,
            item_width: -50.0,
            visible_portion: 3.0,
        };
        let geometry = compute_layout(&config, LayoutPolicy::CenteredReveal).unwrap();

        assert_eq!(geometry.item_width(), 0.0);
        assert_eq!(geometry.spacing(), 0.0);
        assert_eq!(geometry.initial_offset(), 0.0);
        assert_eq!(geometry.min_position(), 0.0);
    }

    #[test]
    fn visible_portion_scales_initial_offset() {
        let config = CarouselConfig::new(2, 300.0, 100.0).with_visible_portion(0.5);
        let geometry = compute_layout(&config, LayoutPolicy::CenteredReveal).unwrap();

        assert_eq!(geometry.spacing(), 100.0);
        assert_eq!(geometry.initial_offset(), 150.0);
    }
}
