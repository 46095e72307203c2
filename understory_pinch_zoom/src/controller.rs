// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_gesture::pinch::{PinchEvent, PinchRecognizer};
use understory_gesture::pointer::{PointerEvent, PointerPhase};
use understory_gesture::tap::{TapEvent, TapRecognizer};

use crate::animator::TransformAnimator;
use crate::bounds::{PanPolicy, centering_offsets, clamp_pan};
use crate::constraint::{ScaleConstraint, ScaleRange, ScaleRangeError};
use crate::policy::{DefaultPolicy, GesturePolicy};
use crate::reset::{AutoResetMode, ResetAction, decide_reset};
use crate::session::GestureSession;
use crate::settings::{ImageGeometry, ZoomSettings};
use crate::transform::{ImageTransform, TransformComponent};

/// Asks the host to start driving the animator.
///
/// The host should call [`ZoomController::tick_animation`] with progress in
/// `[0, 1]` over `duration_ms`, then [`ZoomController::complete_animation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationRequest {
    /// Length of the animation.
    pub duration_ms: u32,
}

/// What a call into the controller changed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EventResponse {
    /// The controller consumed the event. `false` means gestures are
    /// currently disabled and the host should handle the event itself.
    pub handled: bool,
    /// The live transform changed; the host should repaint.
    pub transform_changed: bool,
    /// An animation was started.
    pub animation: Option<AnimationRequest>,
    /// Ancestors should not steal this touch sequence (multi‑touch, zoomed
    /// in, or animating).
    pub disallow_parent_intercept: bool,
    /// New [`ZoomController::current_scale_factor`], if it changed.
    pub scale_factor: Option<f64>,
}

/// Snapshot taken when a matrix session starts.
#[derive(Clone, Copy, Debug, PartialEq)]
struct MatrixSession {
    start: ImageTransform,
    constraint: ScaleConstraint,
}

/// Gesture‑to‑transform state machine for a pinch‑to‑zoom image view.
///
/// The controller owns the live [`ImageTransform`]. The host feeds it pointer
/// events together with the current [`ImageGeometry`], repaints when a
/// response reports a change, and drives animations when asked.
///
/// A *matrix session* starts with the first accepted event and captures the
/// start transform that scale limits and resets refer to. It lasts until the
/// scale range is reconfigured, the content changes, or the controller is
/// disabled.
///
/// Per‑event decisions about panning, zooming, and parent interception are
/// delegated to a [`GesturePolicy`], [`DefaultPolicy`] unless one is given to
/// [`ZoomController::with_policy`].
#[derive(Clone, Debug)]
pub struct ZoomController<P = DefaultPolicy> {
    settings: ZoomSettings,
    policy: P,
    transform: ImageTransform,
    matrix_session: Option<MatrixSession>,
    session: GestureSession,
    pinch: PinchRecognizer,
    taps: TapRecognizer,
    animator: TransformAnimator,
    current_scale_factor: f64,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(ZoomSettings::default())
    }
}

impl ZoomController {
    /// Creates a controller showing content at the identity transform.
    ///
    /// The double‑tap factor is clamped into the scale range.
    #[must_use]
    pub fn new(settings: ZoomSettings) -> Self {
        Self::with_policy(settings, DefaultPolicy)
    }
}

impl<P: GesturePolicy> ZoomController<P> {
    /// Creates a controller that consults `policy` on every event.
    #[must_use]
    pub fn with_policy(settings: ZoomSettings, policy: P) -> Self {
        let mut settings = settings;
        settings.double_tap_scale_factor = settings
            .scale_range
            .clamp_factor(settings.double_tap_scale_factor);
        Self {
            transform: ImageTransform::IDENTITY,
            matrix_session: None,
            session: GestureSession::default(),
            pinch: PinchRecognizer::new(settings.pinch),
            taps: TapRecognizer::new(settings.tap),
            animator: TransformAnimator::new(settings.animation_duration_ms),
            current_scale_factor: 1.0,
            settings,
            policy,
        }
    }

    /// The policy consulted on every event.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &ZoomSettings {
        &self.settings
    }

    /// The live transform.
    #[must_use]
    pub fn transform(&self) -> ImageTransform {
        self.transform
    }

    /// Start transform of the current matrix session, if one has begun.
    #[must_use]
    pub fn start_transform(&self) -> Option<ImageTransform> {
        self.matrix_session.map(|ms| ms.start)
    }

    /// Absolute scale bounds of the current matrix session, if one has begun.
    #[must_use]
    pub fn scale_constraint(&self) -> Option<ScaleConstraint> {
        self.matrix_session.map(|ms| ms.constraint)
    }

    /// Live scale relative to the session's start scale (`1.0` before a session).
    #[must_use]
    pub fn current_scale_factor(&self) -> f64 {
        self.current_scale_factor
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Assigns the live transform, for example after the host lays out its content.
    pub fn set_transform(&mut self, transform: ImageTransform) {
        self.transform = transform;
        self.refresh_scale_factor();
    }

    /// Assigns a new base transform for new content and starts over.
    ///
    /// Any animation is dropped, recognizers forget the current touch
    /// sequence, and the next event begins a new matrix session.
    pub fn content_changed(&mut self, transform: ImageTransform) {
        self.animator.cancel();
        self.pinch.reset();
        self.taps.reset();
        self.session = GestureSession::default();
        self.transform = transform;
        self.invalidate_session();
    }

    /// Ends the matrix session; the next event captures a new start transform.
    pub fn invalidate_session(&mut self) {
        if self.matrix_session.take().is_some() {
            log::debug!("matrix session invalidated");
        }
        self.refresh_scale_factor();
    }

    /// Whether pinch gestures change the scale.
    #[must_use]
    pub fn zoomable(&self) -> bool {
        self.settings.zoomable
    }

    /// Enables or disables pinch zooming.
    pub fn set_zoomable(&mut self, zoomable: bool) {
        self.settings.zoomable = zoomable;
    }

    /// Whether moves pan the image.
    #[must_use]
    pub fn translatable(&self) -> bool {
        self.settings.translatable
    }

    /// Enables or disables panning.
    pub fn set_translatable(&mut self, translatable: bool) {
        self.settings.translatable = translatable;
    }

    /// Whether image edges are kept from being dragged inward past the viewport.
    #[must_use]
    pub fn restrict_bounds(&self) -> bool {
        self.settings.restrict_bounds
    }

    /// Enables or disables edge restriction while panning.
    pub fn set_restrict_bounds(&mut self, restrict: bool) {
        self.settings.restrict_bounds = restrict;
    }

    /// Whether resets animate.
    #[must_use]
    pub fn animate_on_reset(&self) -> bool {
        self.settings.animate_on_reset
    }

    /// Chooses between animated and immediate resets.
    pub fn set_animate_on_reset(&mut self, animate: bool) {
        self.settings.animate_on_reset = animate;
    }

    /// Whether the image is pulled back toward the viewport edges after release.
    #[must_use]
    pub fn auto_center(&self) -> bool {
        self.settings.auto_center
    }

    /// Enables or disables auto‑centering.
    pub fn set_auto_center(&mut self, auto_center: bool) {
        self.settings.auto_center = auto_center;
    }

    /// Whether double taps zoom.
    #[must_use]
    pub fn double_tap_to_zoom(&self) -> bool {
        self.settings.double_tap_to_zoom
    }

    /// Enables or disables double‑tap zooming.
    pub fn set_double_tap_to_zoom(&mut self, enabled: bool) {
        self.settings.double_tap_to_zoom = enabled;
    }

    /// Factor applied by a double tap.
    #[must_use]
    pub fn double_tap_scale_factor(&self) -> f64 {
        self.settings.double_tap_scale_factor
    }

    /// Sets the double‑tap factor, clamped into the scale range.
    pub fn set_double_tap_scale_factor(&mut self, factor: f64) {
        self.settings.double_tap_scale_factor = self.settings.scale_range.clamp_factor(factor);
    }

    /// Configured scale range.
    #[must_use]
    pub fn scale_range(&self) -> ScaleRange {
        self.settings.scale_range
    }

    /// Validates and applies a new scale range.
    ///
    /// On success the double‑tap factor is re‑clamped and the matrix session
    /// is invalidated.
    ///
    /// # Errors
    ///
    /// Returns the [`ScaleRangeError`] from [`ScaleRange::new`]; the
    /// controller is left unchanged.
    pub fn set_scale_range(&mut self, min: f64, max: f64) -> Result<(), ScaleRangeError> {
        let range = ScaleRange::new(min, max)?;
        self.settings.scale_range = range;
        self.settings.double_tap_scale_factor =
            range.clamp_factor(self.settings.double_tap_scale_factor);
        self.invalidate_session();
        Ok(())
    }

    /// Post‑release policy.
    #[must_use]
    pub fn auto_reset_mode(&self) -> AutoResetMode {
        self.settings.auto_reset_mode
    }

    /// Sets the post‑release policy.
    pub fn set_auto_reset_mode(&mut self, mode: AutoResetMode) {
        self.settings.auto_reset_mode = mode;
    }

    /// Length of controller animations.
    #[must_use]
    pub fn animation_duration_ms(&self) -> u32 {
        self.settings.animation_duration_ms
    }

    /// Sets the length of future animations. `0` applies changes immediately.
    pub fn set_animation_duration_ms(&mut self, duration_ms: u32) {
        self.settings.animation_duration_ms = duration_ms;
        self.animator.set_duration_ms(duration_ms);
    }

    /// Whether the controller accepts input.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.settings.enabled
    }

    /// Enables or disables input.
    ///
    /// Disabling snaps back to the start transform and ends the matrix session.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
        if enabled {
            return;
        }
        self.animator.cancel();
        self.pinch.reset();
        self.taps.reset();
        self.session = GestureSession::default();
        if let Some(ms) = self.matrix_session {
            self.transform = ms.start;
        }
        self.invalidate_session();
    }

    /// Whether touches are treated as clicks by the host.
    #[must_use]
    pub fn clickable(&self) -> bool {
        self.settings.clickable
    }

    /// Marks the host as click‑only; gestures are ignored while set.
    pub fn set_clickable(&mut self, clickable: bool) {
        self.settings.clickable = clickable;
    }

    /// Processes one pointer event.
    pub fn handle_event(
        &mut self,
        event: &PointerEvent<'_>,
        geometry: &ImageGeometry,
    ) -> EventResponse {
        if !self.settings.accepts_gestures() {
            return EventResponse::default();
        }
        let before = self.transform;
        let before_factor = self.current_scale_factor;
        let mut animation = None;

        if self.animator.is_active() {
            log::debug!("animation cancelled by {:?}", event.phase);
            self.animator.cancel();
        }
        let ms = self.ensure_matrix_session();
        self.session.observe_pointer_count(event.pointer_count());
        let bounds = geometry.displayed_bounds(self.transform);

        if let Some(pinch) = self.pinch.on_event(event) {
            self.apply_pinch(pinch, &ms);
        }
        if let Some(tap) = self.taps.on_event(event) {
            self.apply_tap(tap);
        }
        if !self.settings.double_tap_to_zoom {
            self.session.double_tap_pending = false;
        }

        if self.session.take_double_tap() {
            animation = self.double_tap_zoom(&ms);
        } else if !self.session.single_tap_pending {
            let focus = self.pinch.focus();
            if event.phase == PointerPhase::Down || self.session.pointer_count_changed() {
                self.session.rebase_focus(focus);
            } else if event.phase == PointerPhase::Move {
                if self.settings.translatable
                    && self.policy.allow_translate(event, self.scale_factor_of(&ms))
                {
                    let pan = PanPolicy {
                        restrict_bounds: self.settings.restrict_bounds,
                        scale_in_progress: self.pinch.is_in_progress(),
                    };
                    let proposed = self.session.focus_delta(focus);
                    let delta = clamp_pan(bounds, geometry.viewport, proposed, pan);
                    log::trace!("pan {delta:?} at focus {focus:?}");
                    self.transform = self.transform.translated_by(delta);
                }
                if self.settings.zoomable
                    && self.policy.allow_zoom(event, self.scale_factor_of(&ms))
                {
                    let by = ms.constraint.clamp(self.session.scale_by, self.transform.scale_x);
                    if by != 1.0 {
                        log::trace!("scale by {by} about {focus:?}");
                        self.transform = self.transform.scaled_about(by, by, focus);
                    }
                }
                self.session.commit_focus(focus);
            }
            if event.phase.is_terminal() {
                self.session.end_scale();
                animation = self.reconcile(&ms, geometry);
            }
        }
        self.session.finish_event();
        self.refresh_scale_factor();

        EventResponse {
            handled: true,
            transform_changed: self.transform != before,
            animation,
            disallow_parent_intercept: self.policy.disallow_parent_intercept(
                event,
                self.current_scale_factor,
                self.animator.is_active(),
            ),
            scale_factor: (self.current_scale_factor != before_factor)
                .then_some(self.current_scale_factor),
        }
    }

    /// Lets the tap recognizer confirm a pending single tap at `now_ms`.
    ///
    /// Returns `true` when a pending tap was resolved, after which moves are
    /// processed again without waiting for the next `Down`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.taps.poll(now_ms) {
            Some(tap) => {
                self.apply_tap(tap);
                true
            }
            None => false,
        }
    }

    /// Resets to the start transform, animating if `animate_on_reset` is set.
    pub fn reset(&mut self) -> Option<AnimationRequest> {
        self.reset_with(self.settings.animate_on_reset)
    }

    /// Resets to the start transform.
    ///
    /// Without a matrix session there is nothing to return to and this is a
    /// no‑op. Returns a request when an animation was started.
    pub fn reset_with(&mut self, animate: bool) -> Option<AnimationRequest> {
        let ms = self.matrix_session?;
        self.animator.cancel();
        if animate {
            self.animate_to(ms.start)
        } else {
            self.transform = ms.start;
            self.refresh_scale_factor();
            None
        }
    }

    /// Advances the running animation to progress `t` (clamped to `[0, 1]`).
    ///
    /// Returns the transform to display. At `t >= 1` the animation completes
    /// on its exact target.
    pub fn tick_animation(&mut self, t: f64) -> ImageTransform {
        if self.animator.is_active() {
            self.transform = self.animator.tick(self.transform, t);
            self.refresh_scale_factor();
        }
        self.transform
    }

    /// Completes the running animation on its exact target.
    pub fn complete_animation(&mut self) -> ImageTransform {
        self.tick_animation(1.0)
    }

    /// Stops the running animation at its last interpolated value.
    pub fn cancel_animation(&mut self) {
        if self.animator.is_active() {
            log::debug!("animation cancelled");
            self.animator.cancel();
        }
    }

    fn ensure_matrix_session(&mut self) -> MatrixSession {
        if let Some(ms) = self.matrix_session {
            return ms;
        }
        let start = self.transform;
        let ms = MatrixSession {
            start,
            constraint: ScaleConstraint::begin(&start, self.settings.scale_range),
        };
        log::debug!(
            "matrix session started at {start:?}, scale bounds {}..{}",
            ms.constraint.calculated_min(),
            ms.constraint.calculated_max()
        );
        self.matrix_session = Some(ms);
        ms
    }

    fn apply_pinch(&mut self, pinch: PinchEvent, ms: &MatrixSession) {
        match pinch {
            PinchEvent::Begin { .. } => {
                self.session.begin_scale(self.transform.scale_x);
                self.session.scale_by = 1.0;
            }
            PinchEvent::Scale { scale_factor, .. } => {
                let current = self.transform.scale_x;
                let proposed = self.session.start_scale * scale_factor / current;
                self.session.scale_by = ms.constraint.clamp(proposed, current);
            }
            PinchEvent::End { .. } => self.session.end_scale(),
        }
    }

    fn apply_tap(&mut self, tap: TapEvent) {
        match tap {
            TapEvent::SingleTapUp { .. } => self.session.single_tap_pending = true,
            TapEvent::SingleTapConfirmed { .. } | TapEvent::DoubleTapStart { .. } => {
                self.session.single_tap_pending = false;
            }
            TapEvent::DoubleTap { .. } => {
                self.session.double_tap_pending = true;
                self.session.single_tap_pending = false;
            }
        }
    }

    fn double_tap_zoom(&mut self, ms: &MatrixSession) -> Option<AnimationRequest> {
        if self.transform.scale_x != ms.start.scale_x {
            log::debug!("double tap while zoomed: reset");
            return self.reset();
        }
        let factor = self.settings.double_tap_scale_factor;
        let focus = self.pinch.focus();
        log::debug!("double tap: zoom by {factor} about {focus:?}");
        self.animate_to(self.transform.scaled_about(factor, factor, focus))
    }

    fn reconcile(
        &mut self,
        ms: &MatrixSession,
        geometry: &ImageGeometry,
    ) -> Option<AnimationRequest> {
        let action = decide_reset(
            self.settings.auto_reset_mode,
            self.transform.scale_x,
            ms.start.scale_x,
            self.settings.auto_center,
        );
        log::debug!("gesture ended at scale {}: {action:?}", self.transform.scale_x);
        match action {
            ResetAction::ResetToStart => self.reset(),
            ResetAction::Center => self.center(geometry),
            ResetAction::Nothing => None,
        }
    }

    fn center(&mut self, geometry: &ImageGeometry) -> Option<AnimationRequest> {
        let bounds = geometry.displayed_bounds(self.transform);
        let (dx, dy) = centering_offsets(bounds, geometry.viewport);
        if dx.is_none() && dy.is_none() {
            return None;
        }
        if let Some(dx) = dx {
            let from = self.transform.translate_x;
            self.animator
                .animate_component(TransformComponent::TranslateX, from, from + dx);
        }
        if let Some(dy) = dy {
            let from = self.transform.translate_y;
            self.animator
                .animate_component(TransformComponent::TranslateY, from, from + dy);
        }
        self.start_animation()
    }

    fn animate_to(&mut self, target: ImageTransform) -> Option<AnimationRequest> {
        if target == self.transform {
            return None;
        }
        self.animator.animate_to(self.transform, target);
        self.start_animation()
    }

    fn start_animation(&mut self) -> Option<AnimationRequest> {
        let duration_ms = self.animator.duration_ms();
        if duration_ms == 0 {
            self.transform = self.animator.finish(self.transform);
            self.refresh_scale_factor();
            return None;
        }
        log::debug!("animation started ({duration_ms} ms)");
        Some(AnimationRequest { duration_ms })
    }

    fn scale_factor_of(&self, ms: &MatrixSession) -> f64 {
        if ms.start.scale_x > 0.0 {
            self.transform.scale_x / ms.start.scale_x
        } else {
            1.0
        }
    }

    fn refresh_scale_factor(&mut self) {
        self.current_scale_factor = match self.matrix_session {
            Some(ms) => self.scale_factor_of(&ms),
            None => 1.0,
        };
    }
}
