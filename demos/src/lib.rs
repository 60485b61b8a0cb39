// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the carousel demos: a host that logs what a real UI would
//! render, and a scripted pointer that plays back drags.

use std::time::Duration;

use kurbo::Point;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use understory_carousel::animation::Transition;
use understory_carousel::gesture::{PointerEvent, PointerId};
use understory_carousel::{Carousel, CarouselHost, IndexChange, IndexChanged};

/// Installs a `tracing` subscriber honoring `RUST_LOG`, defaulting to `debug`
/// for the carousel crates.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "understory_carousel=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Host that keeps the rendered state in fields and logs every call.
#[derive(Debug)]
pub struct LogHost {
    /// Name used in log lines.
    pub name: &'static str,
    /// Container width reported to the engine.
    pub container_width: f64,
    /// First-item width reported to the engine.
    pub item_width: f64,
    /// Last surface translation.
    pub translate_x: f64,
    /// Transition of the last surface translation, if animated.
    pub transition: Option<Transition>,
    /// Committed changes, in order.
    pub changes: Vec<IndexChanged>,
}

impl LogHost {
    /// Creates a host with the given measurements.
    pub fn new(name: &'static str, container_width: f64, item_width: f64) -> Self {
        Self {
            name,
            container_width,
            item_width,
            translate_x: 0.0,
            transition: None,
            changes: Vec::new(),
        }
    }
}

impl CarouselHost for LogHost {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn item_width(&self) -> f64 {
        self.item_width
    }

    fn set_surface_origin(&mut self, x: f64) {
        info!(host = self.name, x, "surface origin");
    }

    fn set_item_offset(&mut self, index: usize, x: f64) {
        info!(host = self.name, index, x, "item offset");
    }

    fn set_surface_transform(&mut self, translate_x: f64, transition: Option<Transition>) {
        self.translate_x = translate_x;
        self.transition = transition;
        match transition {
            Some(t) => info!(
                host = self.name,
                translate_x,
                duration_ms = t.duration.as_millis() as u64,
                easing = t.easing.css_name(),
                "surface transform (animated)"
            ),
            None => info!(host = self.name, translate_x, "surface transform"),
        }
    }

    fn clear_transition(&mut self) {
        self.transition = None;
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        info!(host = self.name, pointer = pointer.0, "capture");
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        info!(host = self.name, pointer = pointer.0, "release");
    }

    fn set_dragging(&mut self, dragging: bool) {
        info!(host = self.name, dragging, "dragging");
    }

    fn index_changed(&mut self, event: IndexChanged) {
        info!(
            host = self.name,
            index = event.index,
            previous = event.previous,
            origin = ?event.origin,
            "index changed"
        );
        self.changes.push(event);
    }
}

/// One scripted drag: `dx`/`dy` total travel spread over `steps` moves.
#[derive(Clone, Copy, Debug)]
pub struct ScriptedDrag {
    /// Horizontal travel in pixels.
    pub dx: f64,
    /// Vertical travel in pixels.
    pub dy: f64,
    /// Time from down to up.
    pub duration: Duration,
    /// Number of move events.
    pub steps: u32,
}

impl ScriptedDrag {
    /// A horizontal drag.
    pub fn horizontal(dx: f64, duration: Duration) -> Self {
        Self {
            dx,
            dy: 0.0,
            duration,
            steps: 8,
        }
    }

    /// Plays the drag against `carousel`, then lets the transition finish.
    pub fn play<H: CarouselHost>(&self, carousel: &mut Carousel<H>) -> Option<IndexChange> {
        let pointer = PointerId(1);
        let start = Point::new(200.0, 200.0);
        let total_ms = self.duration.as_millis() as u64;
        if !carousel.pointer_down(&PointerEvent::down(pointer, start, 0), &[]) {
            return None;
        }
        let steps = self.steps.max(1);
        let mut end = start;
        for step in 1..=steps {
            let t = f64::from(step) / f64::from(steps);
            end = Point::new(start.x + self.dx * t, start.y + self.dy * t);
            let time_ms = total_ms * u64::from(step) / u64::from(steps);
            carousel.pointer_move(&PointerEvent::moved(pointer, end, time_ms));
        }
        let change = carousel.pointer_up(&PointerEvent::up(pointer, end, total_ms));
        carousel.on_transition_end();
        change
    }
}
