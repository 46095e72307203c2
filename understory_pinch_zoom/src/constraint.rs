// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::transform::ImageTransform;

/// Error returned when a scale range is malformed.
///
/// Checks run in declaration order: a range that is both inverted and
/// non‑positive reports [`ScaleRangeError::MinNotBelowMax`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleRangeError {
    /// `min` is greater than or equal to `max`.
    MinNotBelowMax {
        /// Offending minimum.
        min: f64,
        /// Offending maximum.
        max: f64,
    },
    /// `min` is zero, negative, or NaN.
    NonPositiveMin(f64),
    /// `max` is zero, negative, or NaN.
    NonPositiveMax(f64),
    /// `max` is positive infinity.
    InfiniteMax(f64),
}

impl fmt::Display for ScaleRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinNotBelowMax { min, max } => {
                write!(f, "min scale {min} must be less than max scale {max}")
            }
            Self::NonPositiveMin(min) => write!(f, "min scale {min} must be greater than 0"),
            Self::NonPositiveMax(max) => write!(f, "max scale {max} must be greater than 0"),
            Self::InfiniteMax(max) => write!(f, "max scale {max} must be finite"),
        }
    }
}

impl core::error::Error for ScaleRangeError {}

/// Configured zoom limits, as multiples of the session's starting scale.
///
/// A `ScaleRange` can only be built through [`ScaleRange::new`], so holding
/// one means `0 < min < max` with `max` finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRange {
    min: f64,
    max: f64,
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ScaleRange {
    /// `0.6 ..= 8.0`.
    pub const DEFAULT: Self = Self { min: 0.6, max: 8.0 };

    /// Validates and builds a range.
    ///
    /// # Errors
    ///
    /// - [`ScaleRangeError::MinNotBelowMax`] when `min >= max`.
    /// - [`ScaleRangeError::NonPositiveMin`] when `min <= 0` or is NaN.
    /// - [`ScaleRangeError::NonPositiveMax`] when `max <= 0` or is NaN.
    /// - [`ScaleRangeError::InfiniteMax`] when `max` is infinite.
    pub fn new(min: f64, max: f64) -> Result<Self, ScaleRangeError> {
        if min >= max {
            return Err(ScaleRangeError::MinNotBelowMax { min, max });
        }
        if min.is_nan() || min <= 0.0 {
            return Err(ScaleRangeError::NonPositiveMin(min));
        }
        if max.is_nan() || max <= 0.0 {
            return Err(ScaleRangeError::NonPositiveMax(max));
        }
        if max.is_infinite() {
            return Err(ScaleRangeError::InfiniteMax(max));
        }
        Ok(Self { min, max })
    }

    /// Lower multiplier.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper multiplier.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps a relative factor (such as the double‑tap zoom factor) into the range.
    #[must_use]
    pub fn clamp_factor(&self, factor: f64) -> f64 {
        factor.clamp(self.min, self.max)
    }
}

/// Absolute scale bounds for one matrix session.
///
/// Built from the session's start transform with [`ScaleConstraint::begin`];
/// the calculated bounds are `range × start.scale_x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleConstraint {
    calculated_min: f64,
    calculated_max: f64,
}

impl ScaleConstraint {
    /// Resolves `range` against the start transform's horizontal scale.
    #[must_use]
    pub fn begin(start: &ImageTransform, range: ScaleRange) -> Self {
        Self {
            calculated_min: range.min * start.scale_x,
            calculated_max: range.max * start.scale_x,
        }
    }

    /// Smallest absolute scale allowed in this session.
    #[must_use]
    pub fn calculated_min(&self) -> f64 {
        self.calculated_min
    }

    /// Largest absolute scale allowed in this session.
    #[must_use]
    pub fn calculated_max(&self) -> f64 {
        self.calculated_max
    }

    /// Adjusts a proposed per‑event multiplier so the resulting scale stays in bounds.
    ///
    /// `current_scale` is the live `scale_x`. When `proposed * current_scale`
    /// falls outside the calculated bounds, the returned multiplier lands
    /// exactly on the violated bound. Non‑positive or non‑finite current
    /// scales leave the proposal untouched.
    #[must_use]
    pub fn clamp(&self, proposed: f64, current_scale: f64) -> f64 {
        if current_scale <= 0.0 || !current_scale.is_finite() {
            return proposed;
        }
        let projected = proposed * current_scale;
        if projected < self.calculated_min {
            self.calculated_min / current_scale
        } else if projected > self.calculated_max {
            self.calculated_max / current_scale
        } else {
            proposed
        }
    }
}
