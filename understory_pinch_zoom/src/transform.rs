// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// One of the four parameters of an [`ImageTransform`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformComponent {
    /// Horizontal scale.
    ScaleX,
    /// Vertical scale.
    ScaleY,
    /// Horizontal translation in view coordinates.
    TranslateX,
    /// Vertical translation in view coordinates.
    TranslateY,
}

/// Axis‑aligned scale + translate transform mapping image space into view space.
///
/// This is the rotation‑free, shear‑free subset of [`kurbo::Affine`]:
/// a point `(x, y)` maps to `(scale_x * x + translate_x, scale_y * y + translate_y)`.
/// Scale components are expected to stay positive and finite; the
/// constraints in [`crate::ScaleConstraint`] keep them that way during
/// interaction.
///
/// All operations return new values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageTransform {
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Horizontal translation.
    pub translate_x: f64,
    /// Vertical translation.
    pub translate_y: f64,
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ImageTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new(1.0, 1.0, 0.0, 0.0);

    /// Creates a transform from its four components.
    #[must_use]
    pub const fn new(scale_x: f64, scale_y: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    /// Uniform scale about the origin.
    #[must_use]
    pub const fn from_scale(scale: f64) -> Self {
        Self::new(scale, scale, 0.0, 0.0)
    }

    /// Pure translation.
    #[must_use]
    pub const fn from_translation(offset: Vec2) -> Self {
        Self::new(1.0, 1.0, offset.x, offset.y)
    }

    /// Scale by `(sx, sy)` keeping `pivot` fixed.
    #[must_use]
    pub fn scale_about(sx: f64, sy: f64, pivot: Point) -> Self {
        Self::new(sx, sy, pivot.x - sx * pivot.x, pivot.y - sy * pivot.y)
    }

    /// Converts from an [`Affine`] that has no rotation or shear and positive scales.
    ///
    /// Returns `None` for any other affine.
    #[must_use]
    pub fn from_affine(affine: Affine) -> Option<Self> {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        if b != 0.0 || c != 0.0 {
            return None;
        }
        let t = Self::new(a, d, e, f);
        t.is_valid().then_some(t)
    }

    /// Returns `true` if both scales are positive and all components finite.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale_x > 0.0
            && self.scale_y > 0.0
            && self.scale_x.is_finite()
            && self.scale_y.is_finite()
            && self.translate_x.is_finite()
            && self.translate_y.is_finite()
    }

    /// Composes two transforms: the result applies `other` first, then `self`.
    ///
    /// This matches the order of `Affine * Affine` in Kurbo.
    #[must_use]
    pub fn compose(self, other: Self) -> Self {
        Self::new(
            self.scale_x * other.scale_x,
            self.scale_y * other.scale_y,
            self.scale_x * other.translate_x + self.translate_x,
            self.scale_y * other.translate_y + self.translate_y,
        )
    }

    /// Splits the transform into `(scale_x, scale_y, translate_x, translate_y)`.
    #[must_use]
    pub fn decompose(self) -> (f64, f64, f64, f64) {
        (self.scale_x, self.scale_y, self.translate_x, self.translate_y)
    }

    /// Applies an additional scale around a view‑space `pivot` after this transform.
    #[must_use]
    pub fn scaled_about(self, sx: f64, sy: f64, pivot: Point) -> Self {
        Self::scale_about(sx, sy, pivot).compose(self)
    }

    /// Applies an additional view‑space translation after this transform.
    #[must_use]
    pub fn translated_by(self, delta: Vec2) -> Self {
        Self::new(
            self.scale_x,
            self.scale_y,
            self.translate_x + delta.x,
            self.translate_y + delta.y,
        )
    }

    /// Translation part as a vector.
    #[must_use]
    pub fn translation(self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Maps an image‑space point into view space.
    #[must_use]
    pub fn transform_point(self, pt: Point) -> Point {
        Point::new(
            self.scale_x * pt.x + self.translate_x,
            self.scale_y * pt.y + self.translate_y,
        )
    }

    /// Maps an image‑space rectangle into view space.
    #[must_use]
    pub fn transform_rect(self, rect: Rect) -> Rect {
        let p0 = self.transform_point(Point::new(rect.x0, rect.y0));
        let p1 = self.transform_point(Point::new(rect.x1, rect.y1));
        Rect::from_points(p0, p1)
    }

    /// Reads a single component.
    #[must_use]
    pub fn component(self, component: TransformComponent) -> f64 {
        match component {
            TransformComponent::ScaleX => self.scale_x,
            TransformComponent::ScaleY => self.scale_y,
            TransformComponent::TranslateX => self.translate_x,
            TransformComponent::TranslateY => self.translate_y,
        }
    }

    /// Returns a copy with a single component replaced.
    #[must_use]
    pub fn with_component(mut self, component: TransformComponent, value: f64) -> Self {
        match component {
            TransformComponent::ScaleX => self.scale_x = value,
            TransformComponent::ScaleY => self.scale_y = value,
            TransformComponent::TranslateX => self.translate_x = value,
            TransformComponent::TranslateY => self.translate_y = value,
        }
        self
    }

    /// Componentwise linear interpolation: `self + (target - self) * t`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self::new(
            self.scale_x + (target.scale_x - self.scale_x) * t,
            self.scale_y + (target.scale_y - self.scale_y) * t,
            self.translate_x + (target.translate_x - self.translate_x) * t,
            self.translate_y + (target.translate_y - self.translate_y) * t,
        )
    }
}

impl From<ImageTransform> for Affine {
    fn from(t: ImageTransform) -> Self {
        Self::new([t.scale_x, 0.0, 0.0, t.scale_y, t.translate_x, t.translate_y])
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect, Vec2};

    use super::{ImageTransform, TransformComponent};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn compose_with_identity_is_noop() {
        let t = ImageTransform::new(2.0, 2.0, 10.0, -4.0);
        assert_eq!(t.compose(ImageTransform::IDENTITY), t);
        assert_eq!(ImageTransform::IDENTITY.compose(t), t);
    }

    #[test]
    fn compose_matches_kurbo_multiplication() {
        let a = ImageTransform::new(2.0, 3.0, 5.0, 7.0);
        let b = ImageTransform::new(0.5, 4.0, -1.0, 2.0);
        let ours = Affine::from(a.compose(b));
        let kurbo = Affine::from(a) * Affine::from(b);
        for (x, y) in ours.as_coeffs().iter().zip(kurbo.as_coeffs()) {
            assert!(close(*x, y), "coefficients differ: {x} vs {y}");
        }
    }

    #[test]
    fn scaled_about_keeps_pivot_fixed() {
        let t = ImageTransform::new(1.5, 1.5, 20.0, 30.0);
        let pivot = Point::new(100.0, 80.0);
        let image_pt = Point::new((pivot.x - 20.0) / 1.5, (pivot.y - 30.0) / 1.5);
        let scaled = t.scaled_about(2.0, 2.0, pivot);
        let mapped = scaled.transform_point(image_pt);
        assert!(close(mapped.x, pivot.x));
        assert!(close(mapped.y, pivot.y));
        let (sx, sy, _, _) = scaled.decompose();
        assert!(close(sx, 3.0));
        assert!(close(sy, 3.0));
    }

    #[test]
    fn translated_by_only_moves() {
        let t = ImageTransform::from_scale(2.0).translated_by(Vec2::new(3.0, -1.0));
        assert_eq!(t, ImageTransform::new(2.0, 2.0, 3.0, -1.0));
        assert_eq!(t.translation(), Vec2::new(3.0, -1.0));
    }

    #[test]
    fn transform_rect_gives_displayed_bounds() {
        let t = ImageTransform::new(2.0, 0.5, 10.0, 20.0);
        let bounds = t.transform_rect(Rect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(bounds, Rect::new(10.0, 20.0, 210.0, 40.0));
    }

    #[test]
    fn affine_round_trip_and_rejection() {
        let t = ImageTransform::new(2.0, 2.0, 1.0, 2.0);
        assert_eq!(ImageTransform::from_affine(Affine::from(t)), Some(t));
        assert_eq!(ImageTransform::from_affine(Affine::rotate(0.5)), None);
        assert_eq!(ImageTransform::from_affine(Affine::scale(-1.0)), None);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = ImageTransform::new(1.0, 1.0, 0.0, 0.0);
        let b = ImageTransform::new(3.0, 3.0, -40.0, 20.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), ImageTransform::new(2.0, 2.0, -20.0, 10.0));
    }

    #[test]
    fn component_access() {
        let t = ImageTransform::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(t.component(TransformComponent::TranslateY), 4.0);
        let t = t.with_component(TransformComponent::TranslateX, -9.0);
        assert_eq!(t.translate_x, -9.0);
        assert!(t.is_valid());
        assert!(!ImageTransform::from_scale(0.0).is_valid());
    }
}
