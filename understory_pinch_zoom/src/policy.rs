// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per‑event hooks for panning, zooming, and parent interception.
//!
//! A [`GesturePolicy`] refines the controller's settings one event at a
//! time. The settings still apply first: a policy can only narrow
//! `translatable` and `zoomable`, never re‑enable them.
//!
//! ## Example
//!
//! ```
//! use understory_pinch_zoom::{GesturePolicy, PointerEvent, ZoomController, ZoomSettings};
//!
//! /// Pan at any zoom level, as long as a single finger is down.
//! #[derive(Debug)]
//! struct OneFingerPan;
//!
//! impl GesturePolicy for OneFingerPan {
//!     fn allow_translate(&self, event: &PointerEvent<'_>, _scale_factor: f64) -> bool {
//!         event.pointer_count() == 1
//!     }
//! }
//!
//! let zoom = ZoomController::with_policy(ZoomSettings::default(), OneFingerPan);
//! assert_eq!(zoom.current_scale_factor(), 1.0);
//! ```

use understory_gesture::pointer::PointerEvent;

/// Decides, per event, whether the controller may pan or zoom and whether
/// ancestors must leave the touch stream alone.
///
/// `scale_factor` is the live scale relative to the session's start scale.
pub trait GesturePolicy {
    /// Whether a move may pan the image. Defaults to panning only while
    /// zoomed in past the start scale.
    fn allow_translate(&self, event: &PointerEvent<'_>, scale_factor: f64) -> bool {
        let _ = event;
        scale_factor > 1.0
    }

    /// Whether a move may apply the pinch scale. Defaults to always.
    fn allow_zoom(&self, event: &PointerEvent<'_>, scale_factor: f64) -> bool {
        let _ = (event, scale_factor);
        true
    }

    /// Whether ancestors should not intercept this touch sequence.
    ///
    /// Called after the event has been applied. Defaults to holding the
    /// stream while several pointers are down, while zoomed in, or while
    /// animating.
    fn disallow_parent_intercept(
        &self,
        event: &PointerEvent<'_>,
        scale_factor: f64,
        animating: bool,
    ) -> bool {
        event.pointer_count() > 1 || scale_factor > 1.0 || animating
    }
}

/// The widget behaviour: pan only when zoomed in, zoom whenever enabled.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultPolicy;

impl GesturePolicy for DefaultPolicy {}
