// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless, gesture-driven horizontal carousel engine.
//!
//! The engine lays out `N` equal-width items on a horizontally translated
//! surface, tracks one active index, and lets the user drag the surface with a
//! pointer to move between items. It owns no widgets and no clock: measurement,
//! rendering, pointer capture, and change notification all go through a
//! [`CarouselHost`] you implement.
//!
//! ## Pieces
//!
//! - [`compute_layout`]: spacing and initial offset so that a portion of each
//!   neighbor stays visible at rest, under one of three [`LayoutPolicy`] values.
//! - [`gesture`]: the per-pointer session state machine. A session locks to the
//!   horizontal axis after a small threshold or rejects itself for good on
//!   vertical intent, so page scrolling is never hijacked.
//! - [`resistance`]: damping of drags past the first and last index.
//! - [`animation`]: distance-based settle durations with easing.
//! - [`route`]: the containment check that lets nested scrollers keep their
//!   own gestures.
//! - [`SharedIndex`]: an injected holder that keeps several carousels on one
//!   logical selection.
//! - [`Carousel`]: the engine tying all of the above together.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::Point;
//! use understory_carousel::animation::Transition;
//! use understory_carousel::gesture::{PointerEvent, PointerId};
//! use understory_carousel::{
//!     Carousel, CarouselHost, CarouselOptions, IndexChange, IndexChanged, LayoutPolicy,
//! };
//!
//! #[derive(Default)]
//! struct Deck {
//!     translate_x: f64,
//!     changes: Vec<IndexChanged>,
//! }
//!
//! impl CarouselHost for Deck {
//!     fn container_width(&self) -> f64 { 300.0 }
//!     fn item_width(&self) -> f64 { 300.0 }
//!     fn set_surface_origin(&mut self, _x: f64) {}
//!     fn set_item_offset(&mut self, _index: usize, _x: f64) {}
//!     fn set_surface_transform(&mut self, x: f64, _transition: Option<Transition>) {
//!         self.translate_x = x;
//!     }
//!     fn clear_transition(&mut self) {}
//!     fn capture_pointer(&mut self, _pointer: PointerId) {}
//!     fn release_pointer(&mut self, _pointer: PointerId) {}
//!     fn index_changed(&mut self, event: IndexChanged) {
//!         self.changes.push(event);
//!     }
//! }
//!
//! let options = CarouselOptions::new(3).with_policy(LayoutPolicy::EdgeToEdge);
//! let mut carousel = Carousel::new(Deck::default(), options);
//! carousel.initialize();
//!
//! // Drag 150px to the left, slowly.
//! let finger = PointerId(1);
//! carousel.pointer_down(&PointerEvent::down(finger, Point::new(200.0, 10.0), 0), &[]);
//! carousel.pointer_move(&PointerEvent::moved(finger, Point::new(50.0, 12.0), 900));
//! let change = carousel.pointer_up(&PointerEvent::up(finger, Point::new(50.0, 12.0), 1000));
//!
//! assert_eq!(change, Some(IndexChange::Moved { from: 0, to: 1 }));
//! assert_eq!(carousel.host().translate_x, -300.0);
//! assert_eq!(carousel.host().changes[0].index, 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo`, `tracing`, and `thiserror`.
//! - `libm`: float math for `no_std` builds through `kurbo`.
//! - `serde`: (de)serialization of the configuration types.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod animation;
pub mod gesture;
pub mod resistance;
pub mod route;

mod engine;
mod error;
mod host;
mod layout;
mod options;
mod shared;

pub use engine::{Carousel, CarouselState, IndexChange};
pub use error::CarouselError;
pub use host::{CarouselHost, ChangeOrigin, IndexChanged};
pub use layout::{
    CarouselConfig, DEFAULT_VISIBLE_PORTION, LayoutGeometry, LayoutPolicy, compute_layout,
};
pub use options::CarouselOptions;
pub use shared::SharedIndex;
