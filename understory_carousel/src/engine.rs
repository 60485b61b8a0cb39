// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel engine: owns index and position state and wires layout, gestures,
//! resistance, and animation together.

use tracing::{debug, trace};

use crate::animation::{Animation, AnimationController};
use crate::error::CarouselError;
use crate::gesture::{GesturePhase, GestureTracker, MoveOutcome, PointerEvent, Release};
use crate::host::{CarouselHost, ChangeOrigin, IndexChanged};
use crate::layout::{CarouselConfig, LayoutGeometry, compute_layout};
use crate::options::CarouselOptions;
use crate::resistance::apply_resistance_with;
use crate::route::{self, RouteNode};
use crate::shared::SharedIndex;

/// Index and position state that persists across drags.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselState {
    /// Active index; within `[0, item_count)` whenever there are items.
    pub active_index: usize,
    /// Live surface translation. Equals the resting position of
    /// `active_index` whenever no drag is in progress.
    pub current_position: f64,
}

/// Successful outcome of an index request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexChange {
    /// The active index changed and an [`IndexChanged`] was emitted.
    Moved {
        /// Index before the request.
        from: usize,
        /// Index after the request.
        to: usize,
    },
    /// The request named the active index. The surface was still moved to
    /// its resting position, but nothing was emitted.
    Unchanged {
        /// The active index.
        index: usize,
    },
}

impl IndexChange {
    /// Active index after the request.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Moved { to, .. } => to,
            Self::Unchanged { index } => index,
        }
    }
}

/// Gesture-driven carousel over a [`CarouselHost`].
///
/// All mutation happens on the host's single event timeline: pointer handlers,
/// frame callbacks, and transition-end callbacks are expected to be called from
/// the same loop, one at a time.
#[derive(Debug)]
pub struct Carousel<H> {
    host: H,
    options: CarouselOptions,
    geometry: Option<LayoutGeometry>,
    state: CarouselState,
    gesture: GestureTracker,
    animation: AnimationController,
    shared: Option<SharedIndex>,
    shared_revision: u64,
    layout_pending: bool,
}

impl<H: CarouselHost> Carousel<H> {
    /// Creates an engine. Nothing is measured or rendered until
    /// [`Carousel::initialize`].
    #[must_use]
    pub fn new(host: H, options: CarouselOptions) -> Self {
        Self {
            host,
            options,
            geometry: None,
            state: CarouselState {
                active_index: options.initial_index.unwrap_or(0),
                current_position: 0.0,
            },
            gesture: GestureTracker::new(options.gesture),
            animation: AnimationController::new(options.animation),
            shared: None,
            shared_revision: 0,
            layout_pending: false,
        }
    }

    /// Creates an engine that starts on, writes to, and follows `shared`.
    ///
    /// An explicit [`CarouselOptions::initial_index`] wins over the shared value.
    #[must_use]
    pub fn with_shared_index(host: H, options: CarouselOptions, shared: SharedIndex) -> Self {
        let mut carousel = Self::new(host, options);
        carousel.state.active_index = options.initial_index.unwrap_or_else(|| shared.get());
        carousel.shared_revision = shared.revision();
        carousel.shared = Some(shared);
        carousel
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the engine and returns the host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    /// Current options. The item count tracks structural changes.
    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Snapshot of index and position.
    #[must_use]
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Active index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    /// Live surface translation.
    #[must_use]
    pub fn current_position(&self) -> f64 {
        self.state.current_position
    }

    /// Geometry of the last layout pass; `None` when empty or not laid out yet.
    #[must_use]
    pub fn geometry(&self) -> Option<&LayoutGeometry> {
        self.geometry.as_ref()
    }

    /// Phase of the pointer gesture.
    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// The settle animation the host is running, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.in_flight()
    }

    /// Returns `true` while an animated move has not reported its end.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Returns `true` while a layout pass is waiting for the next frame.
    #[must_use]
    pub fn is_layout_pending(&self) -> bool {
        self.layout_pending
    }

    /// The injected shared index, if any.
    #[must_use]
    pub fn shared_index(&self) -> Option<&SharedIndex> {
        self.shared.as_ref()
    }

    /// Measures the host into a layout config.
    #[must_use]
    pub fn measure(&self) -> CarouselConfig {
        CarouselConfig::new(
            self.options.item_count,
            self.host.container_width(),
            self.host.item_width(),
        )
        .with_visible_portion(self.options.visible_portion)
    }

    /// Runs the first layout pass and rests the surface on the active index
    /// without animation.
    pub fn initialize(&mut self) {
        self.on_layout_invalidated();
        debug!(
            active_index = self.state.active_index,
            item_count = self.options.item_count,
            "carousel initialized"
        );
    }

    /// Re-measures, lays out, and repositions everything without animation,
    /// keeping the active index.
    ///
    /// If the item count shrank below the active index, the last index becomes
    /// active and an [`IndexChanged`] with [`ChangeOrigin::Layout`] is emitted.
    /// The first pass clamps a starting index silently and leaves the shared
    /// index alone.
    pub fn on_layout_invalidated(&mut self) {
        let config = self.measure();
        self.apply_layout(config);
    }

    /// Runs a layout pass with explicit measurements instead of asking the host.
    pub fn apply_layout(&mut self, config: CarouselConfig) {
        self.options.item_count = config.item_count;
        self.layout_pending = false;
        if self.animation.interrupt().is_some() {
            self.host.clear_transition();
        }

        let Some(geometry) = compute_layout(&config, self.options.policy) else {
            debug!("layout skipped: carousel is empty");
            self.geometry = None;
            self.state = CarouselState::default();
            return;
        };
        debug!(
            item_count = geometry.item_count(),
            spacing = geometry.spacing(),
            initial_offset = geometry.initial_offset(),
            "layout pass"
        );

        self.host.set_surface_origin(geometry.surface_origin());
        for (index, offset) in geometry.item_offsets().enumerate() {
            self.host.set_item_offset(index, offset);
        }

        let first_pass = self.geometry.is_none();
        let previous = self.state.active_index;
        let index = previous.min(geometry.item_count() - 1);
        let position = geometry.min_position().max(-(index as f64) * geometry.stride());
        self.geometry = Some(geometry);
        self.state = CarouselState {
            active_index: index,
            current_position: position,
        };
        self.host.set_surface_transform(position, None);

        if first_pass {
            if index != previous {
                debug!(requested = previous, index, "starting index clamped");
            }
        } else if index != previous {
            self.emit(IndexChanged {
                index,
                previous,
                origin: ChangeOrigin::Layout,
            });
        }
    }

    /// Moves to `index`, animated or not.
    ///
    /// Emits an [`IndexChanged`] when the active index changes. Out-of-range
    /// requests change nothing and report why.
    pub fn go_to(&mut self, index: usize, animate: bool) -> Result<IndexChange, CarouselError> {
        self.settle_on(index, animate, ChangeOrigin::Programmatic)
    }

    /// Moves to the next index.
    pub fn next(&mut self, animate: bool) -> Result<IndexChange, CarouselError> {
        let Some(geometry) = self.geometry else {
            return Err(CarouselError::Empty);
        };
        let Some(index) = self.state.active_index.checked_add(1) else {
            return Err(CarouselError::PastEnd {
                index: usize::MAX,
                item_count: geometry.item_count(),
            });
        };
        self.go_to(index, animate)
    }

    /// Moves to the previous index.
    pub fn previous(&mut self, animate: bool) -> Result<IndexChange, CarouselError> {
        if self.geometry.is_none() {
            return Err(CarouselError::Empty);
        }
        let Some(index) = self.state.active_index.checked_sub(1) else {
            debug!("ignoring request for the index before 0");
            return Err(CarouselError::BeforeStart);
        };
        self.go_to(index, animate)
    }

    /// Records a structural change in the item collection and schedules a
    /// layout pass for the next frame.
    pub fn notify_items_changed(&mut self, item_count: usize) {
        self.options.item_count = item_count;
        self.request_layout();
    }

    /// Schedules a layout pass for the next frame, for example after a resize.
    pub fn request_layout(&mut self) {
        self.layout_pending = true;
    }

    /// Frame callback. Runs a pending layout pass unless a pointer session is
    /// live, in which case it waits for a frame after the session ends.
    ///
    /// Returns `true` when a layout pass ran.
    pub fn on_frame(&mut self) -> bool {
        if !self.layout_pending || self.gesture.is_active() {
            return false;
        }
        self.on_layout_invalidated();
        true
    }

    /// The host finished the transition started by the last animated move.
    pub fn on_transition_end(&mut self) {
        if self.animation.finish() {
            self.host.clear_transition();
        }
    }

    /// Applies a change made to the shared index by someone else, without
    /// animation.
    ///
    /// Returns `None` when there is no shared index or it has not changed
    /// since the last sync or emit.
    pub fn sync_shared(&mut self) -> Option<Result<IndexChange, CarouselError>> {
        let shared = self.shared.as_ref()?;
        let revision = shared.revision();
        if revision == self.shared_revision {
            return None;
        }
        self.shared_revision = revision;
        let index = shared.get();
        debug!(index, revision, "syncing from shared index");
        Some(self.settle_on(index, false, ChangeOrigin::External))
    }

    /// Pointer down.
    ///
    /// `route` is the ancestry of the event target, target first (see
    /// [`route::should_handle`]). Returns `true` when a session was opened and
    /// the pointer captured.
    pub fn pointer_down(&mut self, event: &PointerEvent, route: &[RouteNode]) -> bool {
        if self.geometry.is_none() {
            return false;
        }
        if !route::should_handle(route) {
            trace!(pointer = event.pointer.0, "pointer down ceded to nested scroll owner");
            return false;
        }
        if !self.gesture.pointer_down(event, self.state.current_position) {
            return false;
        }
        self.host.capture_pointer(event.pointer);
        true
    }

    /// Pointer move. While dragging, the surface follows the pointer with no
    /// transition, damped past the first and last index.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> MoveOutcome {
        let outcome = self.gesture.pointer_move(event);
        let raw_position = match outcome {
            MoveOutcome::Locked { raw_position } => {
                trace!(pointer = event.pointer.0, "horizontal drag locked");
                if self.animation.interrupt().is_some() {
                    self.host.clear_transition();
                }
                self.host.set_dragging(true);
                raw_position
            }
            MoveOutcome::Drag { raw_position } => raw_position,
            MoveOutcome::Ignored | MoveOutcome::Pending | MoveOutcome::Rejected => {
                return outcome;
            }
        };
        let Some(geometry) = self.geometry else {
            return outcome;
        };

        let bounded = apply_resistance_with(
            raw_position,
            geometry.min_position(),
            geometry.max_position(),
            self.options.gesture.resistance,
        );
        self.state.current_position = bounded;
        self.host.set_surface_transform(bounded, None);
        outcome
    }

    /// Pointer up. Releases capture and, after a drag, settles on the
    /// committed index.
    ///
    /// Returns `None` when the event belongs to no session or the session
    /// never became a drag.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> Option<IndexChange> {
        let release = self.gesture.pointer_up(event)?;
        self.end_session(release)
    }

    /// Pointer cancel. Like [`Carousel::pointer_up`], but always snaps back to
    /// the active index.
    pub fn pointer_cancel(&mut self, event: &PointerEvent) -> Option<IndexChange> {
        let release = self.gesture.pointer_cancel(event)?;
        self.end_session(release)
    }

    fn end_session(&mut self, release: Release) -> Option<IndexChange> {
        self.host.release_pointer(release.pointer);
        if !release.was_dragging {
            trace!(pointer = release.pointer.0, "session ended without a drag");
            return None;
        }
        self.host.set_dragging(false);

        let geometry = self.geometry?;
        let target = self.options.gesture.resolve_target(
            &release,
            geometry.item_width(),
            self.state.active_index,
            geometry.item_count(),
        );
        debug!(
            delta_x = release.delta_x,
            velocity = release.velocity(),
            cancelled = release.cancelled,
            target,
            "drag released"
        );
        self.settle_on(target, true, ChangeOrigin::Gesture).ok()
    }

    /// Resolves `index` to its resting position, records it as the new state,
    /// and hands the move to the host.
    ///
    /// State is updated before the transition runs, so observers read the
    /// intended end state right away. While a pointer session is live the move
    /// is instant and the session continues from the new position.
    fn settle_on(
        &mut self,
        index: usize,
        animate: bool,
        origin: ChangeOrigin,
    ) -> Result<IndexChange, CarouselError> {
        let geometry = self.geometry.ok_or(CarouselError::Empty)?;
        let Some(target) = geometry.position_for_index(index) else {
            debug!(
                index,
                item_count = geometry.item_count(),
                "ignoring out-of-range index request"
            );
            return Err(CarouselError::PastEnd {
                index,
                item_count: geometry.item_count(),
            });
        };

        let previous = self.state.active_index;
        let held = self.gesture.is_active();
        if held {
            self.gesture.rebase(target);
        }
        let transition = self
            .animation
            .start(self.state.current_position, target, animate && !held);
        self.state = CarouselState {
            active_index: index,
            current_position: target,
        };
        self.host.set_surface_transform(target, transition);

        if index == previous {
            return Ok(IndexChange::Unchanged { index });
        }
        self.emit(IndexChanged {
            index,
            previous,
            origin,
        });
        Ok(IndexChange::Moved {
            from: previous,
            to: index,
        })
    }

    fn emit(&mut self, event: IndexChanged) {
        if let Some(shared) = &self.shared {
            shared.set(event.index);
            self.shared_revision = shared.revision();
        }
        self.host.index_changed(event);
    }
}
