// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};
use understory_gesture::pinch::PinchConfig;
use understory_gesture::tap::TapConfig;

use crate::animator::DEFAULT_DURATION_MS;
use crate::constraint::ScaleRange;
use crate::reset::AutoResetMode;
use crate::transform::ImageTransform;

/// Configuration for a [`crate::ZoomController`].
///
/// The defaults mirror a typical pinch‑to‑zoom image view: zooming and
/// panning enabled, free panning, animated resets, auto‑centering, double tap
/// to zoom by `3×`, and a `0.6 ..= 8.0` scale range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomSettings {
    /// Pinch gestures change the scale.
    pub zoomable: bool,
    /// Moves pan the image (only while zoomed past the start scale).
    pub translatable: bool,
    /// Keep image edges from being dragged inward past the viewport edges.
    pub restrict_bounds: bool,
    /// Resets animate instead of snapping.
    pub animate_on_reset: bool,
    /// Pull the image back toward the viewport edges after release.
    pub auto_center: bool,
    /// Double taps zoom in, or reset when already zoomed.
    pub double_tap_to_zoom: bool,
    /// Factor applied by a double tap; clamped into `scale_range`.
    pub double_tap_scale_factor: f64,
    /// Zoom limits relative to the start scale.
    pub scale_range: ScaleRange,
    /// Post‑release reconciliation policy.
    pub auto_reset_mode: AutoResetMode,
    /// Length of reset, centering and double‑tap animations.
    pub animation_duration_ms: u32,
    /// The hosting widget accepts input.
    pub enabled: bool,
    /// The hosting widget treats touches as clicks; gestures are ignored.
    pub clickable: bool,
    /// Pinch recognizer thresholds.
    pub pinch: PinchConfig,
    /// Tap recognizer tolerances.
    pub tap: TapConfig,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            zoomable: true,
            translatable: true,
            restrict_bounds: false,
            animate_on_reset: true,
            auto_center: true,
            double_tap_to_zoom: true,
            double_tap_scale_factor: 3.0,
            scale_range: ScaleRange::DEFAULT,
            auto_reset_mode: AutoResetMode::Under,
            animation_duration_ms: DEFAULT_DURATION_MS,
            enabled: true,
            clickable: false,
            pinch: PinchConfig::default(),
            tap: TapConfig::default(),
        }
    }
}

impl ZoomSettings {
    /// Sets the scale range.
    #[must_use]
    pub fn with_scale_range(mut self, range: ScaleRange) -> Self {
        self.scale_range = range;
        self
    }

    /// Sets the post‑release policy.
    #[must_use]
    pub fn with_auto_reset_mode(mut self, mode: AutoResetMode) -> Self {
        self.auto_reset_mode = mode;
        self
    }

    /// Enables or disables edge restriction.
    #[must_use]
    pub fn with_restrict_bounds(mut self, restrict: bool) -> Self {
        self.restrict_bounds = restrict;
        self
    }

    /// Enables or disables animated resets.
    #[must_use]
    pub fn with_animate_on_reset(mut self, animate: bool) -> Self {
        self.animate_on_reset = animate;
        self
    }

    /// Sets the double‑tap zoom factor.
    #[must_use]
    pub fn with_double_tap_scale_factor(mut self, factor: f64) -> Self {
        self.double_tap_scale_factor = factor;
        self
    }

    /// Returns `true` if these settings let gestures reach the controller.
    #[must_use]
    pub fn accepts_gestures(&self) -> bool {
        self.enabled && !self.clickable && (self.zoomable || self.translatable)
    }
}

/// Host‑supplied sizes for one event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageGeometry {
    /// Natural size of the displayed content, or `None` when nothing is shown.
    pub intrinsic: Option<Size>,
    /// Size of the display area.
    pub viewport: Size,
}

impl ImageGeometry {
    /// Geometry for content of `intrinsic` size shown in `viewport`.
    #[must_use]
    pub const fn new(intrinsic: Size, viewport: Size) -> Self {
        Self {
            intrinsic: Some(intrinsic),
            viewport,
        }
    }

    /// Geometry with no content.
    #[must_use]
    pub const fn empty(viewport: Size) -> Self {
        Self {
            intrinsic: None,
            viewport,
        }
    }

    /// Content rectangle mapped through `transform`, or [`Rect::ZERO`] without content.
    #[must_use]
    pub fn displayed_bounds(&self, transform: ImageTransform) -> Rect {
        match self.intrinsic {
            Some(size) => transform.transform_rect(size.to_rect()),
            None => Rect::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_accept_gestures() {
        let settings = ZoomSettings::default();
        assert!(settings.accepts_gestures());
        assert_eq!(settings.double_tap_scale_factor, 3.0);
        assert_eq!(settings.auto_reset_mode, AutoResetMode::Under);
        assert!(!settings.restrict_bounds);
    }

    #[test]
    fn click_only_or_disabled_rejects_gestures() {
        let clickable = ZoomSettings {
            clickable: true,
            ..ZoomSettings::default()
        };
        assert!(!clickable.accepts_gestures());

        let disabled = ZoomSettings {
            enabled: false,
            ..ZoomSettings::default()
        };
        assert!(!disabled.accepts_gestures());

        let pan_only = ZoomSettings {
            zoomable: false,
            ..ZoomSettings::default()
        };
        assert!(pan_only.accepts_gestures());
        let neither = ZoomSettings {
            translatable: false,
            ..pan_only
        };
        assert!(!neither.accepts_gestures());
    }

    #[test]
    fn displayed_bounds_follow_transform() {
        let geometry = ImageGeometry::new(Size::new(100.0, 50.0), Size::new(400.0, 400.0));
        let bounds = geometry.displayed_bounds(ImageTransform::new(2.0, 2.0, 10.0, 20.0));
        assert_eq!(bounds, Rect::new(10.0, 20.0, 210.0, 120.0));

        let empty = ImageGeometry::empty(Size::new(400.0, 400.0));
        assert_eq!(empty.displayed_bounds(ImageTransform::IDENTITY), Rect::ZERO);
    }
}
