// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch recognizer: derive a focus point and a scale factor from a pointer set.
//!
//! ## Usage
//!
//! 1) Feed every [`PointerEvent`] of a touch sequence to [`PinchRecognizer::on_event`].
//! 2) React to [`PinchEvent::Begin`], [`PinchEvent::Scale`] and [`PinchEvent::End`].
//! 3) Query [`PinchRecognizer::focus`] for the centroid of the latest event, whether
//!    or not a pinch is in progress.
//!
//! The reported scale factor is cumulative: it is the current span divided by the
//! span at the moment the pinch began. Consumers that want the absolute scale of
//! some content multiply the factor by the content scale they captured on `Begin`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::pinch::{PinchEvent, PinchRecognizer};
//! use understory_gesture::pointer::PointerEvent;
//!
//! let mut pinch = PinchRecognizer::default();
//!
//! let a = [Point::new(100.0, 100.0)];
//! pinch.on_event(&PointerEvent::down(&a, 0));
//! let ab = [Point::new(100.0, 100.0), Point::new(200.0, 100.0)];
//! pinch.on_event(&PointerEvent::pointer_down(&ab, 10));
//!
//! // Spread the fingers: the pinch begins once the span leaves the slop.
//! let wide = [Point::new(50.0, 100.0), Point::new(250.0, 100.0)];
//! assert!(matches!(
//!     pinch.on_event(&PointerEvent::moved(&wide, 20)),
//!     Some(PinchEvent::Begin { .. })
//! ));
//!
//! let wider = [Point::new(0.0, 100.0), Point::new(300.0, 100.0)];
//! let Some(PinchEvent::Scale { scale_factor, .. }) =
//!     pinch.on_event(&PointerEvent::moved(&wider, 30))
//! else {
//!     panic!("expected a scale event");
//! };
//! assert!((scale_factor - 1.5).abs() < 1e-9);
//! ```

use kurbo::{Point, Vec2};

use crate::pointer::PointerEvent;

/// Thresholds for [`PinchRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchConfig {
    /// How far the span must drift from its reference before a pinch begins.
    pub span_slop: f64,
    /// Smallest span at which a pinch may begin.
    pub min_span: f64,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            span_slop: 16.0,
            min_span: 0.0,
        }
    }
}

/// Output of [`PinchRecognizer::on_event`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchEvent {
    /// A pinch started at `focus`.
    Begin {
        /// Centroid of the pointers when the pinch began.
        focus: Point,
    },
    /// The pinch continued.
    Scale {
        /// Current centroid of the pointers.
        focus: Point,
        /// Current span divided by the span at [`PinchEvent::Begin`].
        scale_factor: f64,
    },
    /// The pinch ended.
    End {
        /// Centroid of the pointers when the pinch ended.
        focus: Point,
    },
}

/// Tracks pointer spread across a touch sequence.
#[derive(Clone, Debug, Default)]
pub struct PinchRecognizer {
    config: PinchConfig,
    in_progress: bool,
    resume: bool,
    focus: Point,
    reference_span: f64,
    begin_span: f64,
    current_span: f64,
}

impl PinchRecognizer {
    /// Creates a recognizer with the given thresholds.
    #[must_use]
    pub fn new(config: PinchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configured thresholds.
    #[must_use]
    pub fn config(&self) -> PinchConfig {
        self.config
    }

    /// Returns `true` between [`PinchEvent::Begin`] and [`PinchEvent::End`].
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Centroid of the contributing pointers of the most recent event.
    #[must_use]
    pub fn focus(&self) -> Point {
        self.focus
    }

    /// Span of the most recent event.
    #[must_use]
    pub fn current_span(&self) -> f64 {
        self.current_span
    }

    /// Processes one pointer event.
    pub fn on_event(&mut self, event: &PointerEvent<'_>) -> Option<PinchEvent> {
        if let Some(focus) = event.focus() {
            self.focus = focus;
        }
        let span = span_of(event, self.focus);
        let count = event.active_count();
        self.current_span = span;

        if event.phase.changes_pointer_set() {
            // The pointer set changed: the old span no longer describes the
            // same fingers, so rebase and let the next move decide.
            let was_in_progress = self.in_progress;
            self.in_progress = false;
            self.reference_span = span;
            self.resume = was_in_progress && !event.phase.is_terminal();
            return was_in_progress.then_some(PinchEvent::End { focus: self.focus });
        }

        if self.in_progress {
            if count < 2 {
                self.in_progress = false;
                return Some(PinchEvent::End { focus: self.focus });
            }
            let scale_factor = if self.begin_span > 0.0 {
                span / self.begin_span
            } else {
                1.0
            };
            return Some(PinchEvent::Scale {
                focus: self.focus,
                scale_factor,
            });
        }

        let drifted = (span - self.reference_span).abs() > self.config.span_slop;
        if count >= 2 && span >= self.config.min_span && span > 0.0 && (self.resume || drifted) {
            log::trace!("pinch begin at {:?} with span {span}", self.focus);
            self.in_progress = true;
            self.resume = false;
            self.begin_span = span;
            return Some(PinchEvent::Begin { focus: self.focus });
        }
        None
    }

    /// Abandons any pinch in progress without emitting [`PinchEvent::End`].
    pub fn reset(&mut self) {
        self.in_progress = false;
        self.resume = false;
        self.reference_span = 0.0;
        self.begin_span = 0.0;
        self.current_span = 0.0;
    }
}

/// Twice the mean per-axis deviation from `focus`, combined into one length.
fn span_of(event: &PointerEvent<'_>, focus: Point) -> f64 {
    let count = event.active_count();
    if count == 0 {
        return 0.0;
    }
    let deviation = event.active_pointers().fold(Vec2::ZERO, |acc, p| {
        acc + Vec2::new((p.x - focus.x).abs(), (p.y - focus.y).abs())
    });
    let diameter = deviation / count as f64 * 2.0;
    diameter.hypot()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(xs: &[(f64, f64)]) -> [Point; 2] {
        [Point::new(xs[0].0, xs[0].1), Point::new(xs[1].0, xs[1].1)]
    }

    fn started() -> PinchRecognizer {
        let mut pinch = PinchRecognizer::default();
        let a = [Point::new(100.0, 0.0)];
        pinch.on_event(&PointerEvent::down(&a, 0));
        let ab = pts(&[(100.0, 0.0), (200.0, 0.0)]);
        pinch.on_event(&PointerEvent::pointer_down(&ab, 1));
        let wide = pts(&[(50.0, 0.0), (250.0, 0.0)]);
        let begin = pinch.on_event(&PointerEvent::moved(&wide, 2));
        assert!(
            matches!(begin, Some(PinchEvent::Begin { .. })),
            "pinch should begin once the span leaves the slop"
        );
        pinch
    }

    #[test]
    fn single_pointer_never_pinches() {
        let mut pinch = PinchRecognizer::default();
        let a = [Point::new(0.0, 0.0)];
        assert_eq!(pinch.on_event(&PointerEvent::down(&a, 0)), None);
        let b = [Point::new(300.0, 300.0)];
        assert_eq!(pinch.on_event(&PointerEvent::moved(&b, 1)), None);
        assert!(!pinch.is_in_progress());
        assert_eq!(pinch.focus(), Point::new(300.0, 300.0));
    }

    #[test]
    fn small_spread_stays_inside_slop() {
        let mut pinch = PinchRecognizer::default();
        let ab = pts(&[(100.0, 0.0), (200.0, 0.0)]);
        pinch.on_event(&PointerEvent::down(&ab[..1], 0));
        pinch.on_event(&PointerEvent::pointer_down(&ab, 1));
        let nudged = pts(&[(98.0, 0.0), (202.0, 0.0)]);
        assert_eq!(pinch.on_event(&PointerEvent::moved(&nudged, 2)), None);
        assert!(!pinch.is_in_progress());
    }

    #[test]
    fn scale_factor_is_relative_to_begin_span() {
        let mut pinch = started();
        let wider = pts(&[(0.0, 0.0), (300.0, 0.0)]);
        let Some(PinchEvent::Scale {
            focus,
            scale_factor,
        }) = pinch.on_event(&PointerEvent::moved(&wider, 3))
        else {
            panic!("expected scale event");
        };
        assert_eq!(focus, Point::new(150.0, 0.0));
        assert!((scale_factor - 1.5).abs() < 1e-9);

        // A later move is still measured against the begin span.
        let narrow = pts(&[(100.0, 0.0), (200.0, 0.0)]);
        let Some(PinchEvent::Scale { scale_factor, .. }) =
            pinch.on_event(&PointerEvent::moved(&narrow, 4))
        else {
            panic!("expected scale event");
        };
        assert!((scale_factor - 0.5).abs() < 1e-9);
    }

    #[test]
    fn lifting_a_pointer_ends_the_pinch() {
        let mut pinch = started();
        let wide = pts(&[(50.0, 0.0), (250.0, 0.0)]);
        let ended = pinch.on_event(&PointerEvent::pointer_up(&wide, 1, 3));
        assert!(matches!(ended, Some(PinchEvent::End { .. })));
        assert!(!pinch.is_in_progress());
        assert_eq!(pinch.focus(), Point::new(50.0, 0.0));
    }

    #[test]
    fn third_pointer_rebases_and_resumes_without_slop() {
        let mut pinch = started();
        let abc = [
            Point::new(50.0, 0.0),
            Point::new(250.0, 0.0),
            Point::new(150.0, 100.0),
        ];
        let ended = pinch.on_event(&PointerEvent::pointer_down(&abc, 3));
        assert!(matches!(ended, Some(PinchEvent::End { .. })));

        let resumed = pinch.on_event(&PointerEvent::moved(&abc, 4));
        assert!(matches!(resumed, Some(PinchEvent::Begin { .. })));
    }

    #[test]
    fn cancel_ends_and_does_not_resume() {
        let mut pinch = started();
        let wide = pts(&[(50.0, 0.0), (250.0, 0.0)]);
        assert!(matches!(
            pinch.on_event(&PointerEvent::cancel(&wide, 3)),
            Some(PinchEvent::End { .. })
        ));
        let a = [Point::new(0.0, 0.0)];
        assert_eq!(pinch.on_event(&PointerEvent::down(&a, 4)), None);
        assert_eq!(pinch.on_event(&PointerEvent::moved(&a, 5)), None);
    }

    #[test]
    fn min_span_blocks_begin() {
        let mut pinch = PinchRecognizer::new(PinchConfig {
            span_slop: 1.0,
            min_span: 1_000.0,
        });
        let ab = pts(&[(100.0, 0.0), (200.0, 0.0)]);
        pinch.on_event(&PointerEvent::down(&ab[..1], 0));
        pinch.on_event(&PointerEvent::pointer_down(&ab, 1));
        let wide = pts(&[(0.0, 0.0), (300.0, 0.0)]);
        assert_eq!(pinch.on_event(&PointerEvent::moved(&wide, 2)), None);
    }
}
