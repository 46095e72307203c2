// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: headless recognizers for touch input.
//!
//! This crate turns raw multi-touch pointer snapshots into the two signals an
//! interactive zoom surface needs:
//!
//! - [`pinch`]: focus point (centroid of active pointers) and a cumulative
//!   scale factor while two or more pointers spread or pinch.
//! - [`tap`]: single taps, double taps, and single-tap confirmation driven by
//!   event timestamps.
//!
//! Both recognizers observe the same [`pointer::PointerEvent`] stream and are
//! independent of each other. They hold no references to any widget and never
//! call back into the host; each `on_event` returns at most one event for the
//! caller to interpret.
//!
//! ## Feeding both recognizers
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::pinch::PinchRecognizer;
//! use understory_gesture::pointer::PointerEvent;
//! use understory_gesture::tap::{TapEvent, TapRecognizer};
//!
//! let mut pinch = PinchRecognizer::default();
//! let mut taps = TapRecognizer::default();
//!
//! let p = [Point::new(10.0, 10.0)];
//! for event in [PointerEvent::down(&p, 0), PointerEvent::up(&p, 40)] {
//!     let _ = pinch.on_event(&event);
//!     if let Some(TapEvent::SingleTapUp { position }) = taps.on_event(&event) {
//!         assert_eq!(position, p[0]);
//!     }
//! }
//! assert!(!pinch.is_in_progress());
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//!
//! This crate is `no_std`.

#![no_std]

pub mod pinch;
pub mod pointer;
pub mod tap;
