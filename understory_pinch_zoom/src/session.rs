// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per‑touch‑sequence state: focus tracking, pointer counts, scale and tap flags.
//!
//! ## Usage
//!
//! 1) Call [`GestureSession::observe_pointer_count`] at the start of every event.
//! 2) When the pointer set changes, call [`GestureSession::rebase_focus`] so the
//!    next move measures from the new centroid instead of jumping.
//! 3) On moves, [`GestureSession::focus_delta`] yields the pan since the last
//!    focus and [`GestureSession::commit_focus`] records the new one.
//! 4) Call [`GestureSession::finish_event`] last so pointer‑count changes are
//!    detected on the next event.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_pinch_zoom::GestureSession;
//!
//! let mut session = GestureSession::default();
//! session.observe_pointer_count(1);
//! session.rebase_focus(Point::new(10.0, 20.0));
//! session.finish_event();
//!
//! session.observe_pointer_count(1);
//! assert!(!session.pointer_count_changed());
//! assert_eq!(session.focus_delta(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

/// Ephemeral state for one touch sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    /// Focus recorded by the last rebase or committed move.
    pub last_focus: Point,
    /// Pointer count of the previous event.
    pub previous_pointer_count: usize,
    /// Pointer count of the event being processed.
    pub current_pointer_count: usize,
    /// Absolute `scale_x` captured when the current pinch began.
    pub start_scale: f64,
    /// Clamped multiplier to apply on the next move.
    pub scale_by: f64,
    /// A double tap completed and has not been handled yet.
    pub double_tap_pending: bool,
    /// A first tap lifted and is waiting for confirmation or a second tap.
    pub single_tap_pending: bool,
}

impl Default for GestureSession {
    fn default() -> Self {
        Self {
            last_focus: Point::ZERO,
            previous_pointer_count: 1,
            current_pointer_count: 0,
            start_scale: 1.0,
            scale_by: 1.0,
            double_tap_pending: false,
            single_tap_pending: false,
        }
    }
}

impl GestureSession {
    /// Records the pointer count of the event being processed.
    pub fn observe_pointer_count(&mut self, count: usize) {
        self.current_pointer_count = count;
    }

    /// Returns `true` when the pointer count differs from the previous event.
    #[must_use]
    pub fn pointer_count_changed(&self) -> bool {
        self.current_pointer_count != self.previous_pointer_count
    }

    /// Resets the focus reference without producing a pan.
    pub fn rebase_focus(&mut self, focus: Point) {
        self.last_focus = focus;
    }

    /// Movement of the focus since it was last recorded.
    #[must_use]
    pub fn focus_delta(&self, focus: Point) -> Vec2 {
        focus - self.last_focus
    }

    /// Records `focus` as the reference for the next move.
    pub fn commit_focus(&mut self, focus: Point) {
        self.last_focus = focus;
    }

    /// Captures the scale at which a pinch began.
    pub fn begin_scale(&mut self, scale: f64) {
        self.start_scale = scale;
    }

    /// Drops multiplicative state at the end of a pinch or gesture.
    pub fn end_scale(&mut self) {
        self.scale_by = 1.0;
    }

    /// Takes the pending double tap, clearing both tap flags if there was one.
    pub fn take_double_tap(&mut self) -> bool {
        if !self.double_tap_pending {
            return false;
        }
        self.double_tap_pending = false;
        self.single_tap_pending = false;
        true
    }

    /// Carries the current pointer count over to the next event.
    pub fn finish_event(&mut self) {
        self.previous_pointer_count = self.current_pointer_count;
    }
}
