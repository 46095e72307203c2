// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch, pan, and release.
//!
//! Feed a scripted two-finger gesture into a `ZoomController` and print the
//! transform after every event, then run the post-release centering animation.
//!
//! Run:
//! - `cargo run -p understory_pinch_zoom_demos --example pinch_session`
//! - `RUST_LOG=trace cargo run -p understory_pinch_zoom_demos --example pinch_session`

use kurbo::{Point, Size};
use understory_pinch_zoom::{
    ImageGeometry, ImageTransform, PointerEvent, ZoomController, ZoomSettings,
};
use understory_pinch_zoom_demos::{finger_pair, init_logging, report, run_animation};

fn main() {
    init_logging();

    // A 600x400 photo fitted into a 300x200 viewport.
    let geometry = ImageGeometry::new(Size::new(600.0, 400.0), Size::new(300.0, 200.0));
    let mut zoom = ZoomController::new(ZoomSettings::default());
    zoom.set_transform(ImageTransform::from_scale(0.5));

    let center = Point::new(200.0, 100.0);
    let mut now = 0;
    let mut tick = || {
        now += 16;
        now
    };

    let start = finger_pair(center, 60.0);
    let r = zoom.handle_event(&PointerEvent::down(&start[..1], tick()), &geometry);
    report("down", &zoom, &geometry, r);
    let r = zoom.handle_event(&PointerEvent::pointer_down(&start, tick()), &geometry);
    report("second finger", &zoom, &geometry, r);

    for span in [90.0, 120.0, 160.0, 200.0] {
        let fingers = finger_pair(center, span);
        let r = zoom.handle_event(&PointerEvent::moved(&fingers, tick()), &geometry);
        report("spread", &zoom, &geometry, r);
    }

    // Slide both fingers right, dragging the image away from the left edge.
    let mut last = finger_pair(center, 200.0);
    for dx in [20.0, 40.0, 60.0] {
        last = finger_pair(Point::new(center.x + dx, center.y), 200.0);
        let r = zoom.handle_event(&PointerEvent::moved(&last, tick()), &geometry);
        report("slide", &zoom, &geometry, r);
    }

    let r = zoom.handle_event(&PointerEvent::pointer_up(&last, 1, tick()), &geometry);
    report("lift one", &zoom, &geometry, r);
    let r = zoom.handle_event(&PointerEvent::up(&last[..1], tick()), &geometry);
    report("lift last", &zoom, &geometry, r);

    if let Some(request) = r.animation {
        log::info!("centering over {} ms", request.duration_ms);
        run_animation(&mut zoom, 5);
        report("settled", &zoom, &geometry, r);
    }
    println!("scale factor: {:.3}", zoom.current_scale_factor());
}
