// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe deck.
//!
//! Drive a three-card carousel with scripted drags and button presses, logging
//! every render call the engine makes. Options are read from JSON the way an
//! application would load them from a settings file.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example swipe_deck`
//! - `RUST_LOG=understory_carousel=trace cargo run -p understory_carousel_demos --example swipe_deck`

use std::time::Duration;

use tracing::{info, warn};
use understory_carousel::{Carousel, CarouselOptions};
use understory_carousel_demos::{LogHost, ScriptedDrag, init_logging};

const OPTIONS: &str = r#"{
    "item_count": 3,
    "visible_portion": 0.25,
    "policy": "CenteredReveal",
    "gesture": { "velocity_threshold": 0.3 }
}"#;

fn main() -> Result<(), serde_json::Error> {
    init_logging();

    let options: CarouselOptions = serde_json::from_str(OPTIONS)?;
    let mut carousel = Carousel::new(LogHost::new("deck", 360.0, 100.0), options);
    carousel.initialize();

    let script = [
        ("slow long drag left", ScriptedDrag::horizontal(-150.0, Duration::from_millis(900))),
        ("short fast flick left", ScriptedDrag::horizontal(-30.0, Duration::from_millis(60))),
        ("overscroll past the end", ScriptedDrag::horizontal(-200.0, Duration::from_millis(900))),
        ("small nudge right", ScriptedDrag::horizontal(20.0, Duration::from_millis(800))),
        (
            "mostly vertical scroll",
            ScriptedDrag {
                dx: 15.0,
                dy: -120.0,
                duration: Duration::from_millis(300),
                steps: 6,
            },
        ),
    ];
    for (label, drag) in script {
        let change = drag.play(&mut carousel);
        info!(label, ?change, active = carousel.active_index(), "drag finished");
    }

    for request in [0, 7] {
        match carousel.go_to(request, true) {
            Ok(change) => info!(?change, "go_to({request})"),
            Err(err) => warn!(%err, "go_to({request}) refused"),
        }
        carousel.on_transition_end();
    }

    carousel.notify_items_changed(1);
    carousel.on_frame();
    info!(
        active = carousel.active_index(),
        translate_x = carousel.host().translate_x,
        "after removing all but one card"
    );
    Ok(())
}
