// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_carousel::animation::{AnimationConfig, Transition};
use understory_carousel::gesture::{PointerEvent, PointerId};
use understory_carousel::resistance::apply_resistance;
use understory_carousel::{
    Carousel, CarouselConfig, CarouselHost, CarouselOptions, IndexChanged, LayoutPolicy,
    compute_layout,
};

/// Host that only keeps the last surface translation.
#[derive(Default)]
struct NullHost {
    translate_x: f64,
}

impl CarouselHost for NullHost {
    fn container_width(&self) -> f64 {
        360.0
    }
    fn item_width(&self) -> f64 {
        100.0
    }
    fn set_surface_origin(&mut self, _x: f64) {}
    fn set_item_offset(&mut self, _index: usize, _x: f64) {}
    fn set_surface_transform(&mut self, translate_x: f64, _transition: Option<Transition>) {
        self.translate_x = translate_x;
    }
    fn clear_transition(&mut self) {}
    fn capture_pointer(&mut self, _pointer: PointerId) {}
    fn release_pointer(&mut self, _pointer: PointerId) {}
    fn index_changed(&mut self, event: IndexChanged) {
        black_box(event);
    }
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/pointer_move");

    // Moves per session; every move after the lock renders a new translation.
    for moves in [16usize, 256] {
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_with_input(BenchmarkId::from_parameter(moves), &moves, |b, &moves| {
            let mut carousel = Carousel::new(NullHost::default(), CarouselOptions::new(8));
            carousel.initialize();
            let finger = PointerId(1);
            b.iter(|| {
                carousel.pointer_down(&PointerEvent::down(finger, Point::new(300.0, 0.0), 0), &[]);
                for step in 0..moves {
                    let x = 300.0 - step as f64 * 0.5;
                    let time_ms = step as u64 * 4;
                    black_box(carousel.pointer_move(&PointerEvent::moved(
                        finger,
                        Point::new(x, 1.0),
                        time_ms,
                    )));
                }
                carousel.pointer_cancel(&PointerEvent::cancel(finger, Point::new(0.0, 0.0), 0));
                black_box(carousel.host().translate_x);
            });
        });
    }

    group.finish();
}

fn bench_resistance(c: &mut Criterion) {
    let raws: Vec<f64> = (0..1_024).map(|i| f64::from(i) * 3.0 - 1_800.0).collect();
    let mut group = c.benchmark_group("carousel/resistance");
    group.throughput(Throughput::Elements(raws.len() as u64));
    group.bench_function("apply_resistance", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &raw in &raws {
                acc += apply_resistance(black_box(raw), -1_200.0, 0.0);
            }
            black_box(acc)
        });
    });
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/layout");

    for count in [3usize, 64, 1_024] {
        let config = CarouselConfig::new(count, 360.0, 100.0);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("fixed_pane_grid", count), &config, |b, config| {
            b.iter(|| {
                let geometry = compute_layout(black_box(config), LayoutPolicy::FixedPaneGrid);
                let sum: f64 = geometry.iter().flat_map(|g| g.item_offsets()).sum();
                black_box(sum)
            });
        });
    }

    let animation = AnimationConfig::default();
    group.bench_function("duration_for_distance", |b| {
        b.iter(|| black_box(animation.duration_for_distance(black_box(430.0))));
    });

    group.finish();
}

criterion_group!(benches, bench_pointer_move, bench_resistance, bench_layout);
criterion_main!(benches);
