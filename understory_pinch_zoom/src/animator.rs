// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time‑parameterized interpolation of an [`ImageTransform`].
//!
//! The animator does not own a clock. The host drives it with a normalized
//! progress value `t` in `[0, 1]` and the animator returns the transform to
//! display for that progress. Reaching `t = 1` (or calling
//! [`TransformAnimator::finish`]) snaps exactly to the target.

use smallvec::SmallVec;

use crate::transform::{ImageTransform, TransformComponent};

/// Default animation length in milliseconds.
pub const DEFAULT_DURATION_MS: u32 = 200;

/// Lerp of one component from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComponentTrack {
    /// Which component moves.
    pub component: TransformComponent,
    /// Value at `t = 0`.
    pub from: f64,
    /// Value at `t = 1`.
    pub to: f64,
}

impl ComponentTrack {
    fn value_at(&self, t: f64) -> f64 {
        self.from + (self.to - self.from) * t
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Motion {
    Full {
        begin: ImageTransform,
        target: ImageTransform,
    },
    Components(SmallVec<[ComponentTrack; 2]>),
}

/// Drives at most one motion on a transform at a time.
#[derive(Clone, Debug)]
pub struct TransformAnimator {
    duration_ms: u32,
    motion: Option<Motion>,
    progress: f64,
}

impl Default for TransformAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_MS)
    }
}

impl TransformAnimator {
    /// Creates an idle animator whose motions last `duration_ms`.
    #[must_use]
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            motion: None,
            progress: 0.0,
        }
    }

    /// Length of each motion in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Changes the length of future motions.
    pub fn set_duration_ms(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }

    /// Returns `true` while a motion is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.motion.is_some()
    }

    /// Progress last applied through [`TransformAnimator::tick`].
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Starts a full‑transform motion, replacing any motion in flight.
    pub fn animate_to(&mut self, begin: ImageTransform, target: ImageTransform) {
        self.motion = Some(Motion::Full { begin, target });
        self.progress = 0.0;
    }

    /// Adds a single‑component motion.
    ///
    /// Component motions run together: a track for a component that is
    /// already moving replaces it, tracks for other components are kept. A
    /// full‑transform motion in flight is replaced.
    pub fn animate_component(&mut self, component: TransformComponent, from: f64, to: f64) {
        let track = ComponentTrack {
            component,
            from,
            to,
        };
        match &mut self.motion {
            Some(Motion::Components(tracks)) => {
                if let Some(existing) = tracks.iter_mut().find(|t| t.component == component) {
                    *existing = track;
                } else {
                    tracks.push(track);
                }
            }
            _ => {
                let mut tracks = SmallVec::new();
                tracks.push(track);
                self.motion = Some(Motion::Components(tracks));
            }
        }
        self.progress = 0.0;
    }

    /// Transform to display at progress `t` (clamped to `[0, 1]`).
    ///
    /// Component motions only touch their own components of `current`.
    #[must_use]
    pub fn sample(&self, current: ImageTransform, t: f64) -> ImageTransform {
        let t = clamp_progress(t);
        match &self.motion {
            None => current,
            Some(Motion::Full { begin, target }) => {
                if t >= 1.0 {
                    *target
                } else {
                    begin.lerp(*target, t)
                }
            }
            Some(Motion::Components(tracks)) => tracks.iter().fold(current, |acc, track| {
                let value = if t >= 1.0 {
                    track.to
                } else {
                    track.value_at(t)
                };
                acc.with_component(track.component, value)
            }),
        }
    }

    /// Advances to progress `t` and returns the transform to display.
    ///
    /// At `t >= 1` the motion completes and the exact target is returned.
    pub fn tick(&mut self, current: ImageTransform, t: f64) -> ImageTransform {
        let t = clamp_progress(t);
        let next = self.sample(current, t);
        self.progress = t;
        if t >= 1.0 {
            self.motion = None;
        }
        next
    }

    /// Forces completion and returns the exact target.
    pub fn finish(&mut self, current: ImageTransform) -> ImageTransform {
        self.tick(current, 1.0)
    }

    /// Stops the motion where it is.
    ///
    /// The caller keeps whatever transform it last applied.
    pub fn cancel(&mut self) {
        self.motion = None;
    }
}

fn clamp_progress(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}
