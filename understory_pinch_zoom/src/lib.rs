// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pinch_zoom --heading-base-level=0

//! Understory Pinch Zoom: a headless pinch‑to‑zoom transform controller.
//!
//! This crate turns pointer events into an axis‑aligned scale + translate
//! transform for a single piece of content (typically an image) shown in a
//! fixed viewport. It focuses on:
//! - Pinch zoom about the gesture focus, limited to a scale range relative to
//!   the scale the interaction started at.
//! - Panning that follows the focus point, with optional edge restriction and
//!   an unconditional guard against losing the content off screen.
//! - Double tap to zoom in, or to reset when already zoomed.
//! - Post‑release reconciliation: reset to the start transform or pull edges
//!   back toward the viewport, per [`AutoResetMode`].
//! - Host‑driven animation of resets and corrections.
//!
//! It does **not** render, own a clock, or talk to a platform. Callers are
//! expected to:
//! - Translate platform touch events into [`PointerEvent`] snapshots.
//! - Report content and viewport sizes as an [`ImageGeometry`].
//! - Repaint when an [`EventResponse`] reports a change, and drive
//!   [`ZoomController::tick_animation`] when one requests an animation.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_pinch_zoom::{ImageGeometry, PointerEvent, ZoomController, ZoomSettings};
//!
//! let geometry = ImageGeometry::new(Size::new(400.0, 400.0), Size::new(400.0, 400.0));
//! let mut zoom = ZoomController::new(ZoomSettings::default());
//!
//! // Two fingers land and spread apart around (200, 200).
//! let one = [Point::new(150.0, 200.0)];
//! let two = [Point::new(150.0, 200.0), Point::new(250.0, 200.0)];
//! let spread = [Point::new(100.0, 200.0), Point::new(300.0, 200.0)];
//! let wide = [Point::new(50.0, 200.0), Point::new(350.0, 200.0)];
//! zoom.handle_event(&PointerEvent::down(&one, 0), &geometry);
//! zoom.handle_event(&PointerEvent::pointer_down(&two, 10), &geometry);
//! zoom.handle_event(&PointerEvent::moved(&spread, 20), &geometry);
//! let response = zoom.handle_event(&PointerEvent::moved(&wide, 30), &geometry);
//!
//! assert!(response.transform_changed);
//! assert!(zoom.current_scale_factor() > 1.0);
//! // The focus point stays put on screen.
//! let focus = Point::new(200.0, 200.0);
//! let t = zoom.transform();
//! assert!((t.transform_point(focus) - focus).hypot() < 1e-9);
//! ```
//!
//! ## Animation
//!
//! Resets and edge corrections are animated when a duration is configured.
//! The controller returns an [`AnimationRequest`]; the host calls
//! [`ZoomController::tick_animation`] with normalized progress and repaints.
//! Any new pointer event cancels an animation in flight.
//!
//! ## Policies
//!
//! When panning and zooming are allowed is decided per event by a
//! [`GesturePolicy`]. [`DefaultPolicy`] pans only while zoomed in; hosts that
//! want something else build the controller with
//! [`ZoomController::with_policy`].
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//!
//! This crate is `no_std`.

#![no_std]

pub mod animator;
pub mod bounds;
mod constraint;
mod controller;
pub mod policy;
mod reset;
pub mod session;
mod settings;
mod transform;

pub use animator::{ComponentTrack, DEFAULT_DURATION_MS, TransformAnimator};
pub use constraint::{ScaleConstraint, ScaleRange, ScaleRangeError};
pub use controller::{AnimationRequest, EventResponse, ZoomController};
pub use policy::{DefaultPolicy, GesturePolicy};
pub use reset::{AutoResetMode, ResetAction, decide_reset};
pub use session::GestureSession;
pub use settings::{ImageGeometry, ZoomSettings};
pub use transform::{ImageTransform, TransformComponent};

pub use understory_gesture::pinch::PinchConfig;
pub use understory_gesture::pointer::{PointerEvent, PointerPhase};
pub use understory_gesture::tap::TapConfig;
