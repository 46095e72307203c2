// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use std::time::Duration;
use understory_pinch_zoom::{ImageGeometry, PointerEvent, ZoomController, ZoomSettings};

fn pair(center: Point, span: f64) -> [Point; 2] {
    [
        Point::new(center.x - span / 2.0, center.y),
        Point::new(center.x + span / 2.0, center.y),
    ]
}

/// Hypothesis: per-event cost is flat in gesture length; the controller keeps
/// no history beyond the current session.
fn bench_pinch_and_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/pinch_and_pan");
    let geometry = ImageGeometry::new(Size::new(1_024.0, 768.0), Size::new(400.0, 300.0));

    for moves in [32usize, 256, 2_048] {
        let frames: Vec<[Point; 2]> = (0..moves)
            .map(|i| {
                let i = i as f64;
                pair(Point::new(200.0 + i * 0.25, 150.0), 80.0 + (i * 0.1).sin().abs() * 400.0)
            })
            .collect();
        group.throughput(Throughput::Elements(moves as u64));
        group.bench_with_input(BenchmarkId::new("moves", moves), &frames, |b, frames| {
            b.iter_batched(
                || ZoomController::new(ZoomSettings::default().with_restrict_bounds(true)),
                |mut zoom| {
                    let first = frames[0];
                    zoom.handle_event(&PointerEvent::down(&first[..1], 0), &geometry);
                    zoom.handle_event(&PointerEvent::pointer_down(&first, 1), &geometry);
                    for (t, fingers) in frames.iter().enumerate() {
                        let event = PointerEvent::moved(fingers, t as u64 + 2);
                        black_box(zoom.handle_event(&event, &geometry));
                    }
                    let last = frames[frames.len() - 1];
                    zoom.handle_event(&PointerEvent::pointer_up(&last, 1, 10_000), &geometry);
                    black_box(zoom.handle_event(&PointerEvent::up(&last[..1], 10_001), &geometry));
                    black_box(zoom.complete_animation())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_animation_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/animation");
    let geometry = ImageGeometry::new(Size::new(400.0, 400.0), Size::new(400.0, 400.0));
    let p = [Point::new(100.0, 100.0)];

    group.bench_function("double_tap_60_frames", |b| {
        b.iter_batched(
            || {
                let mut zoom = ZoomController::new(ZoomSettings::default());
                zoom.handle_event(&PointerEvent::down(&p, 0), &geometry);
                zoom.handle_event(&PointerEvent::up(&p, 40), &geometry);
                zoom.handle_event(&PointerEvent::down(&p, 120), &geometry);
                zoom.handle_event(&PointerEvent::up(&p, 160), &geometry);
                zoom
            },
            |mut zoom| {
                for frame in 1..=60_u32 {
                    black_box(zoom.tick_animation(f64::from(frame) / 60.0));
                }
                zoom
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_pinch_and_pan, bench_animation_ticks
}
criterion_main!(benches);
