// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event model shared by the recognizers.
//!
//! A [`PointerEvent`] is a snapshot of every pointer that is down while the
//! event is delivered. Hosts translate their platform touch events into this
//! shape once and feed the same value to every recognizer.

use kurbo::Point;

/// What happened to the pointer set in a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The first pointer touched down; a new touch sequence starts.
    Down,
    /// An additional pointer touched down while others are already down.
    PointerDown,
    /// One or more pointers moved.
    Move,
    /// A pointer lifted while at least one other pointer stays down.
    PointerUp,
    /// The last pointer lifted; the touch sequence ends.
    Up,
    /// The host aborted the touch sequence.
    Cancel,
}

impl PointerPhase {
    /// Returns `true` for phases that end the touch sequence.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }

    /// Returns `true` for phases that add or remove a pointer.
    #[must_use]
    pub const fn changes_pointer_set(self) -> bool {
        !matches!(self, Self::Move)
    }
}

/// A single touch input event.
///
/// `pointers` holds the positions of all pointers that are down for this
/// event, in view coordinates. For [`PointerPhase::PointerUp`] and
/// [`PointerPhase::Up`] the lifting pointer is still listed, and
/// `action_index` identifies it. For [`PointerPhase::PointerDown`]
/// `action_index` identifies the new pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent<'a> {
    /// What happened.
    pub phase: PointerPhase,
    /// Positions of every pointer that is down during this event.
    pub pointers: &'a [Point],
    /// Index into `pointers` of the pointer that went down or up.
    pub action_index: usize,
    /// Event timestamp in milliseconds.
    pub time_ms: u64,
}

impl<'a> PointerEvent<'a> {
    /// Creates an event with an explicit phase and action index.
    #[must_use]
    pub const fn new(
        phase: PointerPhase,
        pointers: &'a [Point],
        action_index: usize,
        time_ms: u64,
    ) -> Self {
        Self {
            phase,
            pointers,
            action_index,
            time_ms,
        }
    }

    /// First pointer down.
    #[must_use]
    pub const fn down(pointers: &'a [Point], time_ms: u64) -> Self {
        Self::new(PointerPhase::Down, pointers, 0, time_ms)
    }

    /// Additional pointer down; the new pointer is the last entry of `pointers`.
    #[must_use]
    pub const fn pointer_down(pointers: &'a [Point], time_ms: u64) -> Self {
        Self::new(
            PointerPhase::PointerDown,
            pointers,
            pointers.len().saturating_sub(1),
            time_ms,
        )
    }

    /// Pointer movement.
    #[must_use]
    pub const fn moved(pointers: &'a [Point], time_ms: u64) -> Self {
        Self::new(PointerPhase::Move, pointers, 0, time_ms)
    }

    /// The pointer at `action_index` lifts while others stay down.
    #[must_use]
    pub const fn pointer_up(pointers: &'a [Point], action_index: usize, time_ms: u64) -> Self {
        Self::new(PointerPhase::PointerUp, pointers, action_index, time_ms)
    }

    /// The last pointer lifts.
    #[must_use]
    pub const fn up(pointers: &'a [Point], time_ms: u64) -> Self {
        Self::new(PointerPhase::Up, pointers, 0, time_ms)
    }

    /// The touch sequence was cancelled by the host.
    #[must_use]
    pub const fn cancel(pointers: &'a [Point], time_ms: u64) -> Self {
        Self::new(PointerPhase::Cancel, pointers, 0, time_ms)
    }

    /// Number of pointers reported by this event, including a lifting one.
    #[must_use]
    pub const fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Index of the pointer to leave out of focus and span computations.
    ///
    /// Only a [`PointerPhase::PointerUp`] excludes its pointer; on
    /// [`PointerPhase::Up`] the last pointer still counts so that a tap's
    /// focus is where it lifted.
    #[must_use]
    pub fn excluded_index(&self) -> Option<usize> {
        (self.phase == PointerPhase::PointerUp).then_some(self.action_index)
    }

    /// Iterates over the pointers that contribute to focus and span.
    pub fn active_pointers(&self) -> impl Iterator<Item = Point> + '_ {
        let skip = self.excluded_index();
        self.pointers
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != skip)
            .map(|(_, p)| *p)
    }

    /// Number of pointers that contribute to focus and span.
    #[must_use]
    pub fn active_count(&self) -> usize {
        match self.excluded_index() {
            Some(i) if i < self.pointers.len() => self.pointers.len() - 1,
            _ => self.pointers.len(),
        }
    }

    /// Centroid of the contributing pointers, or `None` when there are none.
    #[must_use]
    pub fn focus(&self) -> Option<Point> {
        let count = self.active_count();
        if count == 0 {
            return None;
        }
        let sum = self
            .active_pointers()
            .fold(kurbo::Vec2::ZERO, |acc, p| acc + p.to_vec2());
        Some((sum / count as f64).to_point())
    }
}
