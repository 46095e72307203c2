// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use std::time::Duration;
use understory_gesture::pinch::PinchRecognizer;
use understory_gesture::pointer::PointerEvent;
use understory_gesture::tap::TapRecognizer;

/// Pointer snapshots for `fingers` pointers spreading on a circle over `frames` moves.
fn spread_frames(fingers: usize, frames: usize) -> Vec<Vec<Point>> {
    (0..frames)
        .map(|frame| {
            let radius = 40.0 + frame as f64 * 2.0;
            (0..fingers)
                .map(|i| {
                    let angle = i as f64 / fingers as f64 * core::f64::consts::TAU;
                    Point::new(200.0 + radius * angle.cos(), 200.0 + radius * angle.sin())
                })
                .collect()
        })
        .collect()
}

fn bench_pinch_recognizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/pinch");

    for fingers in [2usize, 5, 10] {
        let frames = spread_frames(fingers, 256);
        group.throughput(Throughput::Elements(frames.len() as u64));
        group.bench_with_input(BenchmarkId::new("spread", fingers), &frames, |b, frames| {
            b.iter(|| {
                let mut pinch = PinchRecognizer::default();
                pinch.on_event(&PointerEvent::down(&frames[0][..1], 0));
                pinch.on_event(&PointerEvent::pointer_down(&frames[0], 1));
                for (t, pointers) in frames.iter().enumerate() {
                    black_box(pinch.on_event(&PointerEvent::moved(pointers, t as u64 + 2)));
                }
                black_box(pinch.focus())
            });
        });
    }

    group.finish();
}

fn bench_tap_recognizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/tap");
    let p = [Point::new(120.0, 80.0)];

    group.bench_function("double_tap", |b| {
        b.iter(|| {
            let mut taps = TapRecognizer::default();
            taps.on_event(&PointerEvent::down(&p, 0));
            taps.on_event(&PointerEvent::up(&p, 40));
            taps.on_event(&PointerEvent::down(&p, 120));
            black_box(taps.on_event(&PointerEvent::up(&p, 160)))
        });
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
    targets = bench_pinch_recognizer, bench_tap_recognizer
}
criterion_main!(benches);
