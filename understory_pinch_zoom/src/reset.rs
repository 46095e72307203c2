// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Policy for reconciling the transform after the last pointer lifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AutoResetMode {
    /// Reset when zoomed out to or below the start scale; otherwise center.
    #[default]
    Under,
    /// Reset when zoomed in to or above the start scale; otherwise center.
    Over,
    /// Always reset.
    Always,
    /// Never reset; only center.
    Never,
}

impl AutoResetMode {
    /// Maps a stored index (`0..=3` in declaration order) to a mode.
    ///
    /// Unknown indices map to [`AutoResetMode::Under`].
    #[must_use]
    pub const fn from_index(index: i32) -> Self {
        match index {
            1 => Self::Over,
            2 => Self::Always,
            3 => Self::Never,
            _ => Self::Under,
        }
    }

    /// Index of this mode, the inverse of [`AutoResetMode::from_index`].
    #[must_use]
    pub const fn index(self) -> i32 {
        match self {
            Self::Under => 0,
            Self::Over => 1,
            Self::Always => 2,
            Self::Never => 3,
        }
    }
}

/// What to do with the transform once a gesture ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResetAction {
    /// Return to the session's start transform.
    ResetToStart,
    /// Keep the scale and pull the edges back toward the viewport.
    Center,
    /// Leave the transform alone.
    Nothing,
}

/// Decides the post‑release action for `mode`.
///
/// `auto_center` only affects the centering outcome: with it disabled,
/// [`ResetAction::Center`] becomes [`ResetAction::Nothing`], while a reset
/// still happens.
#[must_use]
pub fn decide_reset(
    mode: AutoResetMode,
    current_scale: f64,
    start_scale: f64,
    auto_center: bool,
) -> ResetAction {
    let reset = match mode {
        AutoResetMode::Under => current_scale <= start_scale,
        AutoResetMode::Over => current_scale >= start_scale,
        AutoResetMode::Always => true,
        AutoResetMode::Never => false,
    };
    if reset {
        ResetAction::ResetToStart
    } else if auto_center {
        ResetAction::Center
    } else {
        ResetAction::Nothing
    }
}

#[cfg(test)]
mod tests {
    use super::{AutoResetMode, ResetAction, decide_reset};

    #[test]
    fn under_resets_when_zoomed_out() {
        assert_eq!(
            decide_reset(AutoResetMode::Under, 0.8, 1.0, true),
            ResetAction::ResetToStart
        );
        assert_eq!(
            decide_reset(AutoResetMode::Under, 1.0, 1.0, true),
            ResetAction::ResetToStart
        );
        assert_eq!(
            decide_reset(AutoResetMode::Under, 1.5, 1.0, true),
            ResetAction::Center
        );
    }

    #[test]
    fn over_mirrors_under() {
        assert_eq!(
            decide_reset(AutoResetMode::Over, 1.5, 1.0, true),
            ResetAction::ResetToStart
        );
        assert_eq!(
            decide_reset(AutoResetMode::Over, 1.0, 1.0, true),
            ResetAction::ResetToStart
        );
        assert_eq!(
            decide_reset(AutoResetMode::Over, 0.8, 1.0, true),
            ResetAction::Center
        );
    }

    #[test]
    fn always_and_never() {
        for scale in [0.5, 1.0, 4.0] {
            assert_eq!(
                decide_reset(AutoResetMode::Always, scale, 1.0, false),
                ResetAction::ResetToStart
            );
            assert_eq!(
                decide_reset(AutoResetMode::Never, scale, 1.0, true),
                ResetAction::Center
            );
        }
    }

    #[test]
    fn auto_center_off_turns_center_into_nothing() {
        assert_eq!(
            decide_reset(AutoResetMode::Never, 2.0, 1.0, false),
            ResetAction::Nothing
        );
        assert_eq!(
            decide_reset(AutoResetMode::Under, 0.5, 1.0, false),
            ResetAction::ResetToStart
        );
    }

    #[test]
    fn index_mapping_defaults_to_under() {
        for mode in [
            AutoResetMode::Under,
            AutoResetMode::Over,
            AutoResetMode::Always,
            AutoResetMode::Never,
        ] {
            assert_eq!(AutoResetMode::from_index(mode.index()), mode);
        }
        assert_eq!(AutoResetMode::from_index(-1), AutoResetMode::Under);
        assert_eq!(AutoResetMode::from_index(42), AutoResetMode::Under);
    }
}
