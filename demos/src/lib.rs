// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the pinch-zoom demos.

use kurbo::{Point, Rect};
use understory_pinch_zoom::{EventResponse, ImageGeometry, ZoomController};

/// Installs `env_logger`, defaulting to `debug` so controller decisions show up.
///
/// Override with `RUST_LOG`, for example `RUST_LOG=trace`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
}

/// Two pointers `span` apart on a horizontal line through `center`.
#[must_use]
pub fn finger_pair(center: Point, span: f64) -> [Point; 2] {
    [
        Point::new(center.x - span / 2.0, center.y),
        Point::new(center.x + span / 2.0, center.y),
    ]
}

/// Prints the controller state after an event.
pub fn report(
    label: &str,
    zoom: &ZoomController,
    geometry: &ImageGeometry,
    response: EventResponse,
) {
    let t = zoom.transform();
    let Rect { x0, y0, x1, y1 } = geometry.displayed_bounds(t);
    println!(
        "{label:<14} scale {:>6.3}  bounds ({x0:>8.1}, {y0:>8.1}) .. ({x1:>8.1}, {y1:>8.1})  \
         changed={} animate={:?} hold={}",
        t.scale_x,
        response.transform_changed,
        response.animation.map(|a| a.duration_ms),
        response.disallow_parent_intercept,
    );
}

/// Runs a requested animation to completion in `steps` frames, printing each frame.
pub fn run_animation(zoom: &mut ZoomController, steps: u32) {
    for step in 1..=steps {
        let t = f64::from(step) / f64::from(steps);
        let frame = zoom.tick_animation(t);
        println!(
            "  frame {step:>2}/{steps}: scale {:>6.3} translate ({:>8.1}, {:>8.1})",
            frame.scale_x, frame.translate_x, frame.translate_y
        );
    }
}
