// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double tap to zoom, double tap again to reset.
//!
//! Run:
//! - `cargo run -p understory_pinch_zoom_demos --example double_tap`

use kurbo::{Point, Size};
use understory_pinch_zoom::{ImageGeometry, PointerEvent, ZoomController, ZoomSettings};
use understory_pinch_zoom_demos::{init_logging, report, run_animation};

fn main() {
    init_logging();

    let geometry = ImageGeometry::new(Size::new(320.0, 480.0), Size::new(320.0, 480.0));
    let mut zoom = ZoomController::new(ZoomSettings::default().with_double_tap_scale_factor(2.5));
    let at = [Point::new(80.0, 120.0)];

    for (round, base) in [(1, 0_u64), (2, 2_000)] {
        println!("double tap #{round}");
        for offset in [0, 120] {
            let down = zoom.handle_event(&PointerEvent::down(&at, base + offset), &geometry);
            report("down", &zoom, &geometry, down);
            let up = zoom.handle_event(&PointerEvent::up(&at, base + offset + 60), &geometry);
            report("up", &zoom, &geometry, up);
            if up.animation.is_some() {
                run_animation(&mut zoom, 4);
            }
        }
    }

    // A lone tap is confirmed once the double-tap timeout passes.
    zoom.handle_event(&PointerEvent::down(&at, 5_000), &geometry);
    zoom.handle_event(&PointerEvent::up(&at, 5_050), &geometry);
    println!("single tap confirmed: {}", zoom.poll(5_400));
}
