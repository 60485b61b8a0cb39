// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host integration contract.
//!
//! The engine owns no widgets and no clock. Everything it needs from the
//! environment, and everything it asks the environment to do, goes through
//! [`CarouselHost`]:
//!
//! - **Measurement**: container width and first-item width, read on each layout pass.
//! - **Rendering**: surface origin, per-item offsets, and the surface
//!   translation with an optional [`Transition`].
//! - **Pointer capture**: acquired on pointer down, released on up or cancel.
//! - **Notification**: an [`IndexChanged`] for every committed index change.
//!
//! Structural changes (items added or removed) are reported the other way, by
//! calling [`Carousel::notify_items_changed`](crate::Carousel::notify_items_changed).

use crate::animation::Transition;
use crate::gesture::PointerId;

/// What triggered an index change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeOrigin {
    /// A drag released past the commit threshold.
    Gesture,
    /// [`Carousel::go_to`](crate::Carousel::go_to), `next`, or `previous`.
    Programmatic,
    /// A change picked up from the shared index.
    External,
    /// The item count shrank below the active index.
    Layout,
}

/// Outbound notification for navigation indicators, routers, and the like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexChanged {
    /// New active index.
    pub index: usize,
    /// Active index before the change.
    pub previous: usize,
    /// What triggered it.
    pub origin: ChangeOrigin,
}

/// Environment the engine measures, renders into, and notifies.
pub trait CarouselHost {
    /// Current container width in pixels.
    fn container_width(&self) -> f64;

    /// Current width of the first item in pixels.
    fn item_width(&self) -> f64;

    /// Positions the surface origin inside the container.
    fn set_surface_origin(&mut self, x: f64);

    /// Positions item `index` on the surface.
    fn set_item_offset(&mut self, index: usize, x: f64);

    /// Applies a horizontal translation to the surface.
    ///
    /// `None` means apply immediately with no transition. Hosts must report the
    /// end of an animated transition through
    /// [`Carousel::on_transition_end`](crate::Carousel::on_transition_end).
    fn set_surface_transform(&mut self, translate_x: f64, transition: Option<Transition>);

    /// Removes any transition from the surface, leaving its translation as is.
    fn clear_transition(&mut self);

    /// Routes every further event of `pointer` to this engine.
    fn capture_pointer(&mut self, pointer: PointerId);

    /// Ends a capture started by [`CarouselHost::capture_pointer`].
    fn release_pointer(&mut self, pointer: PointerId);

    /// Called with `true` when a drag is confirmed and `false` when it ends.
    ///
    /// Hosts typically switch cursors or disable text selection here.
    fn set_dragging(&mut self, dragging: bool) {
        let _ = dragging;
    }

    /// Delivers a committed index change.
    fn index_changed(&mut self, event: IndexChanged);
}
