// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognizer: single taps, double taps, and single-tap confirmation.
//!
//! The recognizer is driven purely by event timestamps. It never schedules
//! timers itself; a host that wants single taps confirmed while the screen is
//! idle calls [`TapRecognizer::poll`] from its own timer.
//!
//! ## Event order
//!
//! - A lone pointer that lifts without leaving the touch slop produces
//!   [`TapEvent::SingleTapUp`]. The tap is now *pending*.
//! - A pending tap followed by a `Down` within the double-tap timeout and slop
//!   produces [`TapEvent::DoubleTapStart`]; when that second pointer lifts
//!   inside its touch slop, [`TapEvent::DoubleTap`] follows.
//! - A pending tap that is superseded by any other `Down`, or that outlives the
//!   timeout when polled, produces [`TapEvent::SingleTapConfirmed`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::pointer::PointerEvent;
//! use understory_gesture::tap::{TapEvent, TapRecognizer};
//!
//! let mut taps = TapRecognizer::default();
//! let p = [Point::new(20.0, 30.0)];
//!
//! taps.on_event(&PointerEvent::down(&p, 0));
//! assert!(matches!(
//!     taps.on_event(&PointerEvent::up(&p, 60)),
//!     Some(TapEvent::SingleTapUp { .. })
//! ));
//! assert!(matches!(
//!     taps.on_event(&PointerEvent::down(&p, 150)),
//!     Some(TapEvent::DoubleTapStart { .. })
//! ));
//! assert_eq!(
//!     taps.on_event(&PointerEvent::up(&p, 210)),
//!     Some(TapEvent::DoubleTap { position: p[0] })
//! );
//! ```

use kurbo::Point;

use crate::pointer::{PointerEvent, PointerPhase};

/// Spatial and temporal tolerances for [`TapRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapConfig {
    /// Maximum distance a pointer may travel and still count as a tap.
    pub touch_slop: f64,
    /// Maximum distance between the first tap and the second `Down`.
    pub double_tap_slop: f64,
    /// Maximum time between the first tap lifting and the second `Down`.
    pub double_tap_timeout_ms: u64,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            double_tap_slop: 100.0,
            double_tap_timeout_ms: 300,
        }
    }
}

/// Output of [`TapRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapEvent {
    /// A first tap lifted; it may still become half of a double tap.
    SingleTapUp {
        /// Where the tap lifted.
        position: Point,
    },
    /// A pending tap was not followed by a second tap.
    SingleTapConfirmed {
        /// Where the confirmed tap lifted.
        position: Point,
    },
    /// The second pointer of a possible double tap touched down.
    DoubleTapStart {
        /// Where the second pointer touched down.
        position: Point,
    },
    /// A double tap completed.
    DoubleTap {
        /// Where the second tap lifted.
        position: Point,
    },
}

#[derive(Clone, Copy, Debug)]
struct Press {
    origin: Point,
    in_tap_region: bool,
    second_tap: bool,
}

#[derive(Clone, Copy, Debug)]
struct PendingTap {
    position: Point,
    time_ms: u64,
}

/// Recognizes taps and double taps from a stream of pointer events.
#[derive(Clone, Debug, Default)]
pub struct TapRecognizer {
    config: TapConfig,
    press: Option<Press>,
    pending: Option<PendingTap>,
}

impl TapRecognizer {
    /// Creates a recognizer with the given tolerances.
    #[must_use]
    pub fn new(config: TapConfig) -> Self {
        Self {
            config,
            press: None,
            pending: None,
        }
    }

    /// Returns the configured tolerances.
    #[must_use]
    pub fn config(&self) -> TapConfig {
        self.config
    }

    /// Returns `true` while a first tap waits for confirmation or a second tap.
    #[must_use]
    pub fn has_pending_tap(&self) -> bool {
        self.pending.is_some()
    }

    /// Processes one pointer event.
    pub fn on_event(&mut self, event: &PointerEvent<'_>) -> Option<TapEvent> {
        match event.phase {
            PointerPhase::Down => {
                let position = event.focus()?;
                let mut second_tap = false;
                let mut out = None;
                if let Some(pending) = self.pending.take() {
                    if self.continues_double_tap(pending, position, event.time_ms) {
                        second_tap = true;
                        out = Some(TapEvent::DoubleTapStart { position });
                    } else {
                        out = Some(TapEvent::SingleTapConfirmed {
                            position: pending.position,
                        });
                    }
                }
                self.press = Some(Press {
                    origin: position,
                    in_tap_region: true,
                    second_tap,
                });
                out
            }
            PointerPhase::Move => {
                let slop = self.config.touch_slop;
                if let (Some(press), Some(position)) = (self.press.as_mut(), event.focus()) {
                    if (position - press.origin).hypot2() > slop * slop {
                        press.in_tap_region = false;
                    }
                }
                None
            }
            PointerPhase::PointerDown => {
                // A second finger turns this into something other than a tap.
                self.press = None;
                None
            }
            PointerPhase::PointerUp => None,
            PointerPhase::Up => {
                let press = self.press.take()?;
                if !press.in_tap_region {
                    return None;
                }
                let position = event.focus().unwrap_or(press.origin);
                if press.second_tap {
                    Some(TapEvent::DoubleTap { position })
                } else {
                    self.pending = Some(PendingTap {
                        position,
                        time_ms: event.time_ms,
                    });
                    Some(TapEvent::SingleTapUp { position })
                }
            }
            PointerPhase::Cancel => {
                self.press = None;
                self.pending
                    .take()
                    .map(|pending| TapEvent::SingleTapConfirmed {
                        position: pending.position,
                    })
            }
        }
    }

    /// Confirms a pending single tap once the double-tap timeout has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<TapEvent> {
        let pending = self.pending?;
        if now_ms.saturating_sub(pending.time_ms) <= self.config.double_tap_timeout_ms {
            return None;
        }
        self.pending = None;
        Some(TapEvent::SingleTapConfirmed {
            position: pending.position,
        })
    }

    /// Drops all tap state without emitting anything.
    pub fn reset(&mut self) {
        self.press = None;
        self.pending = None;
    }

    fn continues_double_tap(&self, pending: PendingTap, position: Point, time_ms: u64) -> bool {
        let slop = self.config.double_tap_slop;
        time_ms.saturating_sub(pending.time_ms) <= self.config.double_tap_timeout_ms
            && (position - pending.position).hypot2() <= slop * slop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(taps: &mut TapRecognizer, p: Point, down_ms: u64, up_ms: u64) -> Option<TapEvent> {
        let pts = [p];
        taps.on_event(&PointerEvent::down(&pts, down_ms));
        taps.on_event(&PointerEvent::up(&pts, up_ms))
    }

    #[test]
    fn single_tap_is_pending_then_confirmed_by_poll() {
        let mut taps = TapRecognizer::default();
        let p = Point::new(10.0, 10.0);
        assert_eq!(
            tap(&mut taps, p, 0, 50),
            Some(TapEvent::SingleTapUp { position: p })
        );
        assert!(taps.has_pending_tap());

        assert_eq!(taps.poll(200), None);
        assert_eq!(
            taps.poll(400),
            Some(TapEvent::SingleTapConfirmed { position: p })
        );
        assert!(!taps.has_pending_tap());
        assert_eq!(taps.poll(1_000), None);
    }

    #[test]
    fn moving_past_touch_slop_is_not_a_tap() {
        let mut taps = TapRecognizer::default();
        let start = [Point::new(0.0, 0.0)];
        let far = [Point::new(30.0, 0.0)];
        taps.on_event(&PointerEvent::down(&start, 0));
        taps.on_event(&PointerEvent::moved(&far, 10));
        assert_eq!(taps.on_event(&PointerEvent::up(&far, 20)), None);
        assert!(!taps.has_pending_tap());
    }

    #[test]
    fn two_quick_taps_make_a_double_tap() {
        let mut taps = TapRecognizer::default();
        let p = Point::new(50.0, 50.0);
        tap(&mut taps, p, 0, 40);

        let q = [Point::new(55.0, 52.0)];
        assert_eq!(
            taps.on_event(&PointerEvent::down(&q, 120)),
            Some(TapEvent::DoubleTapStart { position: q[0] })
        );
        assert_eq!(
            taps.on_event(&PointerEvent::up(&q, 160)),
            Some(TapEvent::DoubleTap { position: q[0] })
        );
        assert!(!taps.has_pending_tap());
    }

    #[test]
    fn late_second_tap_confirms_the_first() {
        let mut taps = TapRecognizer::default();
        let p = Point::new(50.0, 50.0);
        tap(&mut taps, p, 0, 40);
        let q = [p];
        assert_eq!(
            taps.on_event(&PointerEvent::down(&q, 1_000)),
            Some(TapEvent::SingleTapConfirmed { position: p })
        );
    }

    #[test]
    fn distant_second_tap_confirms_the_first() {
        let mut taps = TapRecognizer::default();
        let p = Point::new(0.0, 0.0);
        tap(&mut taps, p, 0, 40);
        let q = [Point::new(500.0, 0.0)];
        assert_eq!(
            taps.on_event(&PointerEvent::down(&q, 100)),
            Some(TapEvent::SingleTapConfirmed { position: p })
        );
    }

    #[test]
    fn second_finger_abandons_the_tap() {
        let mut taps = TapRecognizer::default();
        let a = [Point::new(0.0, 0.0)];
        let ab = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
        taps.on_event(&PointerEvent::down(&a, 0));
        taps.on_event(&PointerEvent::pointer_down(&ab, 10));
        taps.on_event(&PointerEvent::pointer_up(&ab, 1, 20));
        assert_eq!(taps.on_event(&PointerEvent::up(&a, 30)), None);
    }

    #[test]
    fn dragged_second_tap_is_not_a_double_tap() {
        let mut taps = TapRecognizer::default();
        let p = Point::new(50.0, 50.0);
        tap(&mut taps, p, 0, 40);
        let q = [p];
        let far = [Point::new(150.0, 50.0)];
        taps.on_event(&PointerEvent::down(&q, 100));
        taps.on_event(&PointerEvent::moved(&far, 120));
        assert_eq!(taps.on_event(&PointerEvent::up(&far, 140)), None);
    }

    #[test]
    fn cancel_drops_the_press() {
        let mut taps = TapRecognizer::default();
        let p = [Point::new(20.0, 20.0)];
        taps.on_event(&PointerEvent::down(&p, 0));
        assert_eq!(taps.on_event(&PointerEvent::cancel(&p, 10)), None);
        assert_eq!(taps.on_event(&PointerEvent::up(&p, 20)), None);
        assert!(!taps.has_pending_tap());
    }

    #[test]
    fn cancel_confirms_a_pending_tap() {
        let mut taps = TapRecognizer::default();
        let p = Point::new(20.0, 20.0);
        tap(&mut taps, p, 0, 40);
        assert!(taps.has_pending_tap());
        assert_eq!(
            taps.on_event(&PointerEvent::cancel(&[p], 60)),
            Some(TapEvent::SingleTapConfirmed { position: p })
        );
        assert!(!taps.has_pending_tap());
        assert_eq!(taps.poll(1_000), None);
    }
}
