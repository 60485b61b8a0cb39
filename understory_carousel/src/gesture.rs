// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state machine: pointer sequences in, drag positions and commit decisions out.
//!
//! ## Lifecycle
//!
//! 1) A primary pointer goes down: [`GestureTracker::pointer_down`] opens a
//!    [`DragSession`] and remembers where the surface was.
//! 2) Moves stay [`GesturePhase::Undetermined`] until the pointer travels past
//!    the lock threshold on either axis. Predominantly horizontal movement locks
//!    the session into [`GesturePhase::Dragging`]; anything else rejects it, and
//!    the rest of the session is left to native vertical scrolling.
//! 3) While dragging, each move yields a raw surface position (before resistance).
//! 4) Pointer up or cancel closes the session and yields a [`Release`], which
//!    [`GestureConfig::resolve_target`] turns into the index to settle on.
//!
//! Only the pointer that opened the session is honored until it ends; secondary
//! contacts and other pointer ids are ignored.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_carousel::gesture::{GestureConfig, GestureTracker, MoveOutcome, PointerEvent, PointerId};
//!
//! let config = GestureConfig::default();
//! let mut tracker = GestureTracker::new(config);
//! let id = PointerId(1);
//!
//! // Surface resting at index 0.
//! assert!(tracker.pointer_down(&PointerEvent::down(id, Point::new(200.0, 50.0), 0), 0.0));
//! assert_eq!(
//!     tracker.pointer_move(&PointerEvent::moved(id, Point::new(180.0, 51.0), 16)),
//!     MoveOutcome::Locked { raw_position: -20.0 }
//! );
//! assert_eq!(
//!     tracker.pointer_move(&PointerEvent::moved(id, Point::new(40.0, 52.0), 120)),
//!     MoveOutcome::Drag { raw_position: -160.0 }
//! );
//!
//! let release = tracker.pointer_up(&PointerEvent::up(id, Point::new(40.0, 52.0), 400)).unwrap();
//! // 160px is more than a quarter of a 300px item: advance.
//! assert_eq!(config.resolve_target(&release, 300.0, 0, 3), 1);
//! ```

use kurbo::{Point, Vec2};

/// Identifier of a pointer (mouse, pen, or touch contact) as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// Kind of pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// Contact started.
    Down,
    /// Contact moved.
    Move,
    /// Contact ended normally.
    Up,
    /// Contact was taken away by the platform.
    Cancel,
}

/// Host-neutral pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Capturable pointer identifier.
    pub pointer: PointerId,
    /// What happened.
    pub phase: PointerPhase,
    /// Position in client coordinates.
    pub position: Point,
    /// Host timestamp in milliseconds.
    pub time_ms: u64,
    /// `false` for secondary contacts of a multi-touch interaction.
    pub is_primary: bool,
}

impl PointerEvent {
    /// Creates a primary pointer event.
    #[must_use]
    pub fn new(pointer: PointerId, phase: PointerPhase, position: Point, time_ms: u64) -> Self {
        Self {
            pointer,
            phase,
            position,
            time_ms,
            is_primary: true,
        }
    }

    /// Primary pointer down.
    #[must_use]
    pub fn down(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(pointer, PointerPhase::Down, position, time_ms)
    }

    /// Pointer move.
    #[must_use]
    pub fn moved(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(pointer, PointerPhase::Move, position, time_ms)
    }

    /// Pointer up.
    #[must_use]
    pub fn up(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(pointer, PointerPhase::Up, position, time_ms)
    }

    /// Pointer cancel.
    #[must_use]
    pub fn cancel(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self::new(pointer, PointerPhase::Cancel, position, time_ms)
    }

    /// Marks this event as coming from a secondary contact.
    #[must_use]
    pub fn secondary(mut self) -> Self {
        self.is_primary = false;
        self
    }
}

/// Tunables for direction lock and the release decision.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GestureConfig {
    /// Movement in pixels, on either axis, before the direction is decided.
    pub lock_threshold: f64,
    /// Fraction of the item width a release must cover to move one index.
    pub distance_ratio: f64,
    /// Release speed in pixels per millisecond that moves one index regardless of distance.
    pub velocity_threshold: f64,
    /// Fraction of the overshoot honored past the first or last index.
    pub resistance: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            lock_threshold: 5.0,
            distance_ratio: 0.25,
            velocity_threshold: 0.3,
            resistance: crate::resistance::DEFAULT_RESISTANCE,
        }
    }
}

impl GestureConfig {
    /// Preset for full-screen pages, which need a longer or faster swipe to turn.
    #[must_use]
    pub fn full_screen() -> Self {
        Self {
            distance_ratio: 0.3,
            velocity_threshold: 0.5,
            ..Self::default()
        }
    }

    /// Returns `true` when `release` travelled far enough or fast enough to move one index.
    #[must_use]
    pub fn should_commit(&self, release: &Release, item_width: f64) -> bool {
        release.delta_x.abs() > item_width * self.distance_ratio
            || release.velocity() > self.velocity_threshold
    }

    /// Index the carousel should settle on after `release`.
    ///
    /// A positive delta (pointer moved right) moves to the previous index, a
    /// negative one to the next, clamped to `[0, item_count)`. Cancelled
    /// sessions, sessions that never locked, and releases below both thresholds
    /// snap back to `active_index`.
    #[must_use]
    pub fn resolve_target(
        &self,
        release: &Release,
        item_width: f64,
        active_index: usize,
        item_count: usize,
    ) -> usize {
        if item_count == 0
            || release.cancelled
            || !release.was_dragging
            || !self.should_commit(release, item_width)
        {
            return active_index;
        }
        if release.delta_x > 0.0 {
            active_index.saturating_sub(1)
        } else if release.delta_x < 0.0 {
            (active_index + 1).min(item_count - 1)
        } else {
            active_index
        }
    }
}

/// Phase of the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// A pointer is down but has not moved past the lock threshold.
    Undetermined,
    /// Horizontal intent confirmed; the surface tracks the pointer.
    Dragging,
    /// Vertical intent; moves are ignored until the pointer lifts.
    Rejected,
}

/// State of one pointer interaction, from pointer down to up or cancel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer that owns the session.
    pub pointer: PointerId,
    /// Initial contact point.
    pub start: Point,
    /// Most recent position that moved the surface.
    pub last: Point,
    /// Surface position when the session started.
    pub last_committed_position: f64,
    /// Set once horizontal intent is confirmed.
    pub is_direction_locked: bool,
    /// Host timestamp of the initial contact.
    pub start_time_ms: u64,
    rejected: bool,
}

impl DragSession {
    /// Movement from the initial contact to the last tracked position.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.last - self.start
    }

    /// Surface position implied by the last tracked position, before resistance.
    #[must_use]
    pub fn raw_position(&self) -> f64 {
        self.last_committed_position + self.delta().x
    }

    /// Current phase of this session.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.is_direction_locked {
            GesturePhase::Dragging
        } else if self.rejected {
            GesturePhase::Rejected
        } else {
            GesturePhase::Undetermined
        }
    }
}

/// Result of feeding a move into the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// No session, or the event belongs to another pointer.
    Ignored,
    /// Still under the lock threshold.
    Pending,
    /// This move confirmed horizontal intent; the surface should follow.
    Locked {
        /// Surface position before resistance.
        raw_position: f64,
    },
    /// This move (or an earlier one) showed vertical intent; the session is ceded.
    Rejected,
    /// Regular drag move.
    Drag {
        /// Surface position before resistance.
        raw_position: f64,
    },
}

/// Summary of a finished session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    /// Pointer that owned the session.
    pub pointer: PointerId,
    /// Horizontal travel from the initial contact to the last tracked position.
    pub delta_x: f64,
    /// Time from pointer down to release.
    pub elapsed_ms: u64,
    /// `true` when the session ended through cancel.
    pub cancelled: bool,
    /// `true` when the session reached [`GesturePhase::Dragging`].
    pub was_dragging: bool,
}

impl Release {
    /// Average horizontal speed in pixels per millisecond.
    ///
    /// Sessions shorter than a millisecond are measured over one millisecond.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.delta_x.abs() / self.elapsed_ms.max(1) as f64
    }
}

/// Tracks at most one [`DragSession`] at a time.
#[derive(Clone, Debug)]
pub struct GestureTracker {
    lock_threshold: f64,
    session: Option<DragSession>,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureTracker {
    /// Creates an idle tracker using the lock threshold from `config`.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            lock_threshold: config.lock_threshold,
            session: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.session
            .as_ref()
            .map_or(GesturePhase::Idle, DragSession::phase)
    }

    /// The live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a session exists, whatever its phase.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` once the live session has locked horizontally.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase() == GesturePhase::Dragging
    }

    /// Opens a session for a primary pointer.
    ///
    /// `current_position` is the surface position at contact. Returns `false`
    /// (and changes nothing) for secondary contacts or while another session is live.
    pub fn pointer_down(&mut self, event: &PointerEvent, current_position: f64) -> bool {
        if !event.is_primary || self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            pointer: event.pointer,
            start: event.position,
            last: event.position,
            last_committed_position: current_position,
            is_direction_locked: false,
            start_time_ms: event.time_ms,
            rejected: false,
        });
        true
    }

    /// Advances the session with a move.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> MoveOutcome {
        let threshold = self.lock_threshold;
        let Some(session) = self.session.as_mut() else {
            return MoveOutcome::Ignored;
        };
        if session.pointer != event.pointer {
            return MoveOutcome::Ignored;
        }
        if session.rejected {
            return MoveOutcome::Rejected;
        }

        if !session.is_direction_locked {
            let delta = event.position - session.start;
            let (dx, dy) = (delta.x.abs(), delta.y.abs());
            if dx <= threshold && dy <= threshold {
                return MoveOutcome::Pending;
            }
            if dx > threshold && dx > dy {
                session.is_direction_locked = true;
                session.last = event.position;
                return MoveOutcome::Locked {
                    raw_position: session.raw_position(),
                };
            }
            session.rejected = true;
            return MoveOutcome::Rejected;
        }

        session.last = event.position;
        MoveOutcome::Drag {
            raw_position: session.raw_position(),
        }
    }

    /// Closes the session on pointer up.
    ///
    /// The release delta uses the last tracked move, not the up position.
    /// Returns `None` when the event belongs to no live session.
    pub fn pointer_up(&mut self, event: &PointerEvent) -> Option<Release> {
        self.finish(event, false)
    }

    /// Closes the session on pointer cancel. The release always snaps back.
    pub fn pointer_cancel(&mut self, event: &PointerEvent) -> Option<Release> {
        self.finish(event, true)
    }

    /// Moves the live session's anchor to `position`, measuring further
    /// movement from the last tracked point.
    ///
    /// Used when the index changes under a held pointer, so the surface does
    /// not jump back to where the session started. The start time is kept.
    pub fn rebase(&mut self, position: f64) {
        if let Some(session) = self.session.as_mut() {
            session.start = session.last;
            session.last_committed_position = position;
        }
    }

    /// Drops any live session without producing a release.
    pub fn reset(&mut self) {
        self.session = None;
    }

    fn finish(&mut self, event: &PointerEvent, cancelled: bool) -> Option<Release> {
        if self.session.as_ref()?.pointer != event.pointer {
            return None;
        }
        let session = self.session.take()?;
        Some(Release {
            pointer: session.pointer,
            delta_x: session.delta().x,
            elapsed_ms: event.time_ms.saturating_sub(session.start_time_ms),
            cancelled,
            was_dragging: session.is_direction_locked,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: PointerId = PointerId(7);

    fn tracker() -> GestureTracker {
        GestureTracker::new(GestureConfig::default())
    }

    fn release(delta_x: f64, elapsed_ms: u64) -> Release {
        Release {
            pointer: ID,
            delta_x,
            elapsed_ms,
            cancelled: false,
            was_dragging: true,
        }
    }

    #[test]
    fn new_tracker_is_idle() {
        let t = tracker();
        assert_eq!(t.phase(), GesturePhase::Idle);
        assert!(t.session().is_none());
    }

    #[test]
    fn pointer_down_records_session() {
        let mut t = tracker();
        assert!(t.pointer_down(&PointerEvent::down(ID, Point::new(10.0, 20.0), 100), -300.0));

        let session = t.session().unwrap();
        assert_eq!(session.start, Point::new(10.0, 20.0));
        assert_eq!(session.last_committed_position, -300.0);
        assert_eq!(session.start_time_ms, 100);
        assert!(!session.is_direction_locked);
        assert_eq!(t.phase(), GesturePhase::Undetermined);
    }

    #[test]
    fn secondary_contacts_are_ignored() {
        let mut t = tracker();
        let secondary = PointerEvent::down(ID, Point::ZERO, 0).secondary();
        assert!(!t.pointer_down(&secondary, 0.0));
        assert_eq!(t.phase(), GesturePhase::Idle);
    }

    #[test]
    fn second_pointer_cannot_open_a_concurrent_session() {
        let mut t = tracker();
        assert!(t.pointer_down(&PointerEvent::down(ID, Point::ZERO, 0), 0.0));
        let other = PointerId(8);
        assert!(!t.pointer_down(&PointerEvent::down(other, Point::new(50.0, 0.0), 5), 0.0));

        // Moves and releases from the other pointer do not touch the session.
        let moved = PointerEvent::moved(other, Point::new(90.0, 0.0), 10);
        assert_eq!(t.pointer_move(&moved), MoveOutcome::Ignored);
        assert!(t.pointer_up(&PointerEvent::up(other, Point::ZERO, 20)).is_none());
        assert_eq!(t.session().unwrap().pointer, ID);
    }

    #[test]
    fn small_moves_stay_undetermined() {
        let mut t = tracker();
        t.pointer_down(&PointerEvent::down(ID, Point::ZERO, 0), 0.0);

        let outcome = t.pointer_move(&PointerEvent::moved(ID, Point::new(5.0, -5.0), 10));
        assert_eq!(outcome, MoveOutcome::Pending);
        assert_eq!(t.phase(), GesturePhase::Undetermined);
    }

    #[test]
    fn horizontal_move_locks_direction() {
        let mut t = tracker();
        t.pointer_down(&PointerEvent::down(ID, Point::new(100.0, 100.0), 0), -50.0);

        let outcome = t.pointer_move(&PointerEvent::moved(ID, Point::new(94.0, 102.0), 10));
        assert_eq!(outcome, MoveOutcome::Locked { raw_position: -56.0 });
        assert!(t.is_dragging());
    }

    #[test]
    fn vertical_move_rejects_session_for_good() {
        let mut t = tracker();
        t.pointer_down(&PointerEvent::down(ID, Point::ZERO, 0), 0.0);

        let vertical = PointerEvent::moved(ID, Point::new(2.0, 20.0), 10);
        assert_eq!(t.pointer_move(&vertical), MoveOutcome::Rejected);
        assert_eq!(t.phase(), GesturePhase::Rejected);

        // A later horizontal swipe in the same session is still ignored.
        let horizontal = PointerEvent::moved(ID, Point::new(200.0, 20.0), 20);
        assert_eq!(t.pointer_move(&horizontal), MoveOutcome::Rejected);

        let release = t.pointer_up(&PointerEvent::up(ID, Point::ZERO, 30)).unwrap();
        assert!(!release.was_dragging);
        assert_eq!(t.phase(), GesturePhase::Idle);
    }

    #[test]
    fn diagonal_tie_is_not_horizontal() {
        let mut t = tracker();
        t.pointer_down(&PointerEvent::down(ID, Point::ZERO, 0), 0.0);
        let outcome = t.pointer_move(&PointerEvent::moved(ID, Point::new(8.0, 8.0), 10));
        assert_eq!(outcome, MoveOutcome::Rejected);
    }

    #[test]
    fn drag_moves_report_raw_position_from_session_start() {
        let mut t = tracker();
        t.pointer_down(&PointerEvent::down(ID, Point::new(300.0, 0.0), 0), -100.0);
        t.pointer_move(&PointerEvent::moved(ID, Point::new(290.0, 0.0), 10));

        let outcome = t.pointer_move(&PointerEvent::moved(ID, Point::new(150.0, 3.0), 20));
        assert_eq!(outcome, MoveOutcome::Drag { raw_position: -250.0 });
        assert_eq!(t.session().unwrap().delta(), Vec2::new(-150.0, 3.0));
    }

    #[test]
    fn rebase_continues_from_new_anchor() {
        let mut t = tracker();
        t.pointer_down(&PointerEvent::down(ID, Point::new(300.0, 0.0), 0), 0.0);
        t.pointer_move(&PointerEvent::moved(ID, Point::new(290.0, 0.0), 10));

        t.rebase(-600.0);
        let outcome = t.pointer_move(&PointerEvent::moved(ID, Point::new(280.0, 0.0), 20));
        assert_eq!(outcome, MoveOutcome::Drag { raw_position: -610.0 });
        assert!(t.is_dragging());
    }

    #[test]
    fn release_uses_last_tracked_move() {
        let mut t = tracker();
        t.pointer_down(&PointerEvent::down(ID, Point::new(300.0, 0.0), 1000), 0.0);
        t.pointer_move(&PointerEvent::moved(ID, Point::new(200.0, 0.0), 1100));

        let release = t
            .pointer_up(&PointerEvent::up(ID, Point::new(0.0, 0.0), 1500))
            .unwrap();
        assert_eq!(release.delta_x, -100.0);
        assert_eq!(release.elapsed_ms, 500);
        assert!(release.was_dragging);
        assert!(!release.cancelled);
        assert!(t.session().is_none());
    }

    #[test]
    fn cancel_marks_release_cancelled() {
        let mut t = tracker();
        t.pointer_down(&PointerEvent::down(ID, Point::ZERO, 0), 0.0);
        t.pointer_move(&PointerEvent::moved(ID, Point::new(-200.0, 0.0), 10));

        let release = t.pointer_cancel(&PointerEvent::cancel(ID, Point::ZERO, 20)).unwrap();
        assert!(release.cancelled);
        assert_eq!(GestureConfig::default().resolve_target(&release, 100.0, 1, 3), 1);
    }

    #[test]
    fn zero_elapsed_time_has_finite_velocity() {
        assert_eq!(release(-30.0, 0).velocity(), 30.0);
    }

    #[test]
    fn distance_threshold_boundary() {
        let config = GestureConfig::default();
        let eps = 1e-6;
        // 100px items: threshold is 25px. Slow releases so velocity stays under 0.3.
        let below = release(-(25.0 - eps), 1000);
        let above = release(-(25.0 + eps), 1000);

        assert_eq!(config.resolve_target(&below, 100.0, 0, 3), 0);
        assert_eq!(config.resolve_target(&above, 100.0, 0, 3), 1);
    }

    #[test]
    fn fast_flick_commits_below_distance_threshold() {
        let config = GestureConfig::default();
        // 20px in 50ms is 0.4 px/ms.
        let flick = release(20.0, 50);
        assert_eq!(config.resolve_target(&flick, 300.0, 2, 3), 1);
    }

    #[test]
    fn commit_is_clamped_to_valid_indices() {
        let config = GestureConfig::default();
        assert_eq!(config.resolve_target(&release(200.0, 1000), 100.0, 0, 3), 0);
        assert_eq!(config.resolve_target(&release(-200.0, 1000), 100.0, 2, 3), 2);
    }

    #[test]
    fn full_screen_preset_needs_a_longer_swipe() {
        let config = GestureConfig::full_screen();
        // 27% of a 400px page, slowly.
        let release = release(-108.0, 1000);
        assert_eq!(config.resolve_target(&release, 400.0, 0, 3), 0);
        assert_eq!(GestureConfig::default().resolve_target(&release, 400.0, 0, 3), 1);
    }
}
