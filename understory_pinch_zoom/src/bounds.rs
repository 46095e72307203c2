// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge clamping for pan deltas and edge correction after release.
//!
//! Both helpers work one axis at a time on an [`AxisSpan`] (the displayed
//! image's near and far edge along that axis) and a viewport extent starting
//! at `0`. The near edge is left/top, the far edge is right/bottom.

use kurbo::{Rect, Size, Vec2};

/// Near and far edge of the displayed image along one axis, in view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSpan {
    /// Left or top edge.
    pub near: f64,
    /// Right or bottom edge.
    pub far: f64,
}

impl AxisSpan {
    /// Creates a span from its edges.
    #[must_use]
    pub const fn new(near: f64, far: f64) -> Self {
        Self { near, far }
    }

    /// Horizontal span of `rect`.
    #[must_use]
    pub fn horizontal(rect: Rect) -> Self {
        Self::new(rect.x0, rect.x1)
    }

    /// Vertical span of `rect`.
    #[must_use]
    pub fn vertical(rect: Rect) -> Self {
        Self::new(rect.y0, rect.y1)
    }

    /// Displayed length along the axis.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.far - self.near
    }
}

/// Settings that shape [`clamp_pan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PanPolicy {
    /// Keep the image edges from being dragged inward past the viewport edges.
    pub restrict_bounds: bool,
    /// A pinch is in progress; edge restriction is suspended so zooming stays smooth.
    pub scale_in_progress: bool,
}

/// Clamps a proposed pan delta along one axis.
///
/// With `restrict_bounds`, an image at least as large as the viewport may not
/// expose empty space at either edge, and a smaller image may not leave the
/// viewport; the near edge is considered first and only one correction
/// applies. Both restrictions are skipped while a pinch is in progress.
///
/// Regardless of policy the image may never leave the viewport entirely:
/// the far edge stops at `0` and the near edge stops at `extent`.
#[must_use]
pub fn clamp_axis_delta(span: AxisSpan, extent: f64, delta: f64, policy: PanPolicy) -> f64 {
    let mut delta = delta;
    if policy.restrict_bounds && !policy.scale_in_progress {
        delta = restricted_delta(span, extent, delta);
    }
    if span.far + delta < 0.0 {
        delta = -span.far;
    } else if span.near + delta > extent {
        delta = extent - span.near;
    }
    delta
}

fn restricted_delta(span: AxisSpan, extent: f64, delta: f64) -> f64 {
    if span.length() >= extent {
        if span.near <= 0.0 && span.near + delta > 0.0 {
            -span.near
        } else if span.far >= extent && span.far + delta < extent {
            extent - span.far
        } else {
            delta
        }
    } else if span.near >= 0.0 && span.near + delta < 0.0 {
        -span.near
    } else if span.far <= extent && span.far + delta > extent {
        extent - span.far
    } else {
        delta
    }
}

/// Clamps a proposed pan of the displayed image `bounds` inside `viewport`.
///
/// Empty bounds or an empty viewport yield a zero delta.
#[must_use]
pub fn clamp_pan(bounds: Rect, viewport: Size, delta: Vec2, policy: PanPolicy) -> Vec2 {
    if is_degenerate(bounds, viewport) {
        return Vec2::ZERO;
    }
    Vec2::new(
        clamp_axis_delta(AxisSpan::horizontal(bounds), viewport.width, delta.x, policy),
        clamp_axis_delta(AxisSpan::vertical(bounds), viewport.height, delta.y, policy),
    )
}

/// Translation that pulls one axis back to the nearest viewport edge, if needed.
///
/// An image larger than the viewport gets its inward edge pushed back out to
/// the viewport edge. An image that fits gets an overhanging edge pulled
/// back in. The near edge wins when both qualify. Returns `None` when the
/// axis needs no correction.
#[must_use]
pub fn centering_offset(span: AxisSpan, extent: f64) -> Option<f64> {
    if span.length() > extent {
        if span.near > 0.0 {
            Some(-span.near)
        } else if span.far < extent {
            Some(extent - span.far)
        } else {
            None
        }
    } else if span.near < 0.0 {
        Some(-span.near)
    } else if span.far > extent {
        Some(extent - span.far)
    } else {
        None
    }
}

/// Per‑axis [`centering_offset`] for `bounds` inside `viewport`.
///
/// Degenerate geometry needs no correction.
#[must_use]
pub fn centering_offsets(bounds: Rect, viewport: Size) -> (Option<f64>, Option<f64>) {
    if is_degenerate(bounds, viewport) {
        return (None, None);
    }
    (
        centering_offset(AxisSpan::horizontal(bounds), viewport.width),
        centering_offset(AxisSpan::vertical(bounds), viewport.height),
    )
}

fn is_degenerate(bounds: Rect, viewport: Size) -> bool {
    !(bounds.width() > 0.0
        && bounds.height() > 0.0
        && viewport.width > 0.0
        && viewport.height > 0.0)
}
