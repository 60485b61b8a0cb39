// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared index.
//!
//! A full-screen pane carousel and a thumbnail strip follow one selection
//! through an injected `SharedIndex`. Dragging the panes moves the strip on the
//! next sync, and tapping a thumbnail moves the panes.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example shared_index`

use std::time::Duration;

use tracing::info;
use understory_carousel::gesture::GestureConfig;
use understory_carousel::{Carousel, CarouselOptions, LayoutPolicy, SharedIndex};
use understory_carousel_demos::{LogHost, ScriptedDrag, init_logging};

fn main() {
    init_logging();

    let selection = SharedIndex::new(1);

    let panes_options = CarouselOptions::new(4)
        .with_policy(LayoutPolicy::EdgeToEdge)
        .with_gesture(GestureConfig::full_screen());
    let mut panes = Carousel::with_shared_index(
        LogHost::new("panes", 400.0, 400.0),
        panes_options,
        selection.clone(),
    );

    let strip_options = CarouselOptions::new(4).with_policy(LayoutPolicy::FixedPaneGrid);
    let mut strip = Carousel::with_shared_index(
        LogHost::new("strip", 400.0, 80.0),
        strip_options,
        selection.clone(),
    );

    panes.initialize();
    strip.initialize();

    ScriptedDrag::horizontal(-220.0, Duration::from_millis(700)).play(&mut panes);
    info!(selection = selection.get(), revision = selection.revision(), "after pane drag");
    if let Some(result) = strip.sync_shared() {
        info!(?result, "strip followed");
    }

    // A tap on the first thumbnail.
    if let Err(err) = strip.go_to(0, true) {
        info!(%err, "strip refused");
    }
    if let Some(result) = panes.sync_shared() {
        info!(?result, "panes followed");
    }
    info!(
        panes = panes.active_index(),
        strip = strip.active_index(),
        "in step"
    );
}
