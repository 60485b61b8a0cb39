// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment check for nested carousels and horizontal scrollers.
//!
//! A carousel embedded in another carousel's item, or a horizontally scrollable
//! region inside an item, must keep its own pointer stream. Before opening a
//! session the engine walks the ancestry of the pointer-down target, from the
//! target toward the root, and only claims the gesture when its own surface is
//! the nearest horizontal scroll owner.
//!
//! Hosts describe the ancestry as a slice of [`RouteNode`]s; how they obtain it
//! (a DOM walk, a box tree, a responder path) is up to them.
//!
//! ```
//! use understory_carousel::route::{RouteNode, should_handle};
//!
//! // Target inside a plain card inside this carousel.
//! let path = [RouteNode::plain(), RouteNode::plain(), RouteNode::Owner];
//! assert!(should_handle(&path));
//!
//! // Target inside a nested carousel: the inner one owns the gesture.
//! let nested = [RouteNode::plain(), RouteNode::Carousel, RouteNode::Owner];
//! assert!(!should_handle(&nested));
//! ```

/// One step on the path from the event target toward the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteNode {
    /// An ordinary element between the target and the surface.
    Element {
        /// `true` when the element scrolls on X and its content overflows.
        scrolls_horizontally: bool,
    },
    /// Some other carousel surface.
    Carousel,
    /// The surface owned by the engine doing the check.
    Owner,
}

impl RouteNode {
    /// An element that does not scroll horizontally.
    #[must_use]
    pub const fn plain() -> Self {
        Self::Element {
            scrolls_horizontally: false,
        }
    }

    /// An element that scrolls horizontally.
    #[must_use]
    pub const fn scroller() -> Self {
        Self::Element {
            scrolls_horizontally: true,
        }
    }
}

/// Returns `true` when the engine owning [`RouteNode::Owner`] should claim the gesture.
///
/// `path` is ordered from the event target toward the root. The first node that
/// owns horizontal movement decides: the owner itself claims it, while another
/// carousel or a horizontal scroller cedes it. A path that never reaches the
/// owner belongs to someone else. An empty path means the host reported the
/// surface itself as the target.
#[must_use]
pub fn should_handle(path: &[RouteNode]) -> bool {
    if path.is_empty() {
        return true;
    }
    for node in path {
        match node {
            RouteNode::Owner => return true,
            RouteNode::Carousel
            | RouteNode::Element {
                scrolls_horizontally: true,
            } => return false,
            RouteNode::Element {
                scrolls_horizontally: false,
            } => {}
        }
    }
    false
}
