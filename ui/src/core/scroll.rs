//! Scroll-driven visibility for the navbar.
//!
//! Policy
//! ------
//! Evaluated on every new vertical offset, first match wins:
//! 1. offset `0` (top of page): visible, flat.
//! 2. offset grew (scrolling down): hidden, floating.
//! 3. offset shrank (scrolling up): visible, floating.
//! 4. same non-zero offset: nothing changes.
//!
//! The previous offset is replaced by the current one after every call,
//! whichever branch fired.

use super::motion::NavMotion;

/// Visual phase of the bar. `Hidden` is always floating: the only way to hide
/// the bar is to scroll down, which also applies the floating style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPhase {
    VisibleFlat,
    VisibleFloating,
    HiddenFloating,
}

impl NavPhase {
    fn from_flags(visible: bool, floating: bool) -> Self {
        match (visible, floating) {
            (true, false) => Self::VisibleFlat,
            (true, true) => Self::VisibleFloating,
            // Not reachable through `ScrollTracker::observe`.
            (false, _) => Self::HiddenFloating,
        }
    }

    pub fn is_visible(self) -> bool {
        !matches!(self, Self::HiddenFloating)
    }

    pub fn is_floating(self) -> bool {
        !matches!(self, Self::VisibleFlat)
    }
}

/// Result of feeding one offset into the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub visible: bool,
    pub floating: bool,
    /// `true` only when `visible` differs from its value before this offset.
    pub visibility_changed: bool,
    pub phase: NavPhase,
}

impl ScrollUpdate {
    /// New transition target, only when visibility flipped.
    pub fn motion(&self) -> Option<NavMotion> {
        self.visibility_changed
            .then(|| NavMotion::for_visibility(self.visible))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTracker {
    previous_offset: i64,
    visible: bool,
    floating: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    /// Tracker for a page that loads at the top.
    pub fn new() -> Self {
        Self {
            previous_offset: 0,
            visible: true,
            floating: false,
        }
    }

    pub fn previous_offset(&self) -> i64 {
        self.previous_offset
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn floating(&self) -> bool {
        self.floating
    }

    pub fn phase(&self) -> NavPhase {
        NavPhase::from_flags(self.visible, self.floating)
    }

    /// Like `observe`, but offsets seen before the bar is mounted are dropped
    /// without touching any state, the previous offset included.
    pub fn observe_mounted(&mut self, mounted: bool, current: i64) -> Option<ScrollUpdate> {
        mounted.then(|| self.observe(current))
    }

    pub fn observe(&mut self, current: i64) -> ScrollUpdate {
        let was_visible = self.visible;

        if current == 0 {
            self.visible = true;
            self.floating = false;
        } else if current > self.previous_offset {
            self.visible = false;
            self.floating = true;
        } else if current < self.previous_offset {
            self.visible = true;
            self.floating = true;
        }

        self.previous_offset = current;

        ScrollUpdate {
            visible: self.visible,
            floating: self.floating,
            visibility_changed: was_visible != self.visible,
            phase: self.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visibility_for(offsets: &[i64]) -> Vec<bool> {
        let mut tracker = ScrollTracker::new();
        offsets.iter().map(|&y| tracker.observe(y).visible).collect()
    }

    #[test]
    fn starts_visible_and_flat() {
        let tracker = ScrollTracker::new();
        assert!(tracker.visible());
        assert!(!tracker.floating());
        assert_eq!(tracker.phase(), NavPhase::VisibleFlat);
        assert_eq!(tracker.previous_offset(), 0);
    }

    #[test]
    fn scrolling_down_keeps_bar_hidden() {
        let mut tracker = ScrollTracker::new();
        let floating: Vec<bool> = [0, 50, 120]
            .iter()
            .map(|&y| tracker.observe(y).floating)
            .collect();

        assert_eq!(visibility_for(&[0, 50, 120]), vec![true, false, false]);
        assert_eq!(floating, vec![false, true, true]);
    }

    #[test]
    fn scrolling_back_up_reveals_floating_bar() {
        assert_eq!(visibility_for(&[0, 50, 30]), vec![true, false, true]);

        let mut tracker = ScrollTracker::new();
        tracker.observe(50);
        let update = tracker.observe(30);
        assert_eq!(update.phase, NavPhase::VisibleFloating);
        assert!(update.visibility_changed);
    }

    #[test]
    fn returning_to_top_drops_floating_style() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(400);
        tracker.observe(200);
        let update = tracker.observe(0);
        assert_eq!(update.phase, NavPhase::VisibleFlat);
        assert!(!update.visibility_changed);
    }

    #[test]
    fn repeated_offset_is_a_no_op() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(80);
        let before = tracker;
        let update = tracker.observe(80);

        assert!(!update.visibility_changed);
        assert_eq!(tracker, before);
        assert_eq!(update.phase, NavPhase::HiddenFloating);
    }

    #[test]
    fn equal_offset_does_not_reassert_floating_style() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(120);
        tracker.observe(60);
        let update = tracker.observe(60);
        assert_eq!(update.phase, NavPhase::VisibleFloating);
        assert!(!update.visibility_changed);
    }

    #[test]
    fn previous_offset_follows_every_observation() {
        let mut tracker = ScrollTracker::new();
        for y in [10, 10, 3, 0, 99] {
            tracker.observe(y);
            assert_eq!(tracker.previous_offset(), y);
        }
    }

    #[test]
    fn visibility_tracks_direction_over_a_long_walk() {
        let offsets = [0, 5, 40, 40, 38, 1, 0, 0, 700, 650, 651, 0];
        let mut tracker = ScrollTracker::new();
        let mut previous = 0;
        let mut last_visible = true;

        for y in offsets {
            let update = tracker.observe(y);
            let expected = if y == 0 {
                true
            } else if y > previous {
                false
            } else if y < previous {
                true
            } else {
                last_visible
            };
            assert_eq!(update.visible, expected, "offset {y} after {previous}");
            assert_eq!(update.visibility_changed, expected != last_visible);
            assert_eq!(update.floating, update.phase.is_floating());
            previous = y;
            last_visible = update.visible;
        }
    }

    #[test]
    fn offsets_before_mount_are_ignored() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.observe_mounted(false, 300), None);
        assert_eq!(tracker, ScrollTracker::new());
        assert_eq!(tracker.previous_offset(), 0);

        let update = tracker.observe_mounted(true, 300).unwrap();
        assert!(!update.visible);
        assert_eq!(tracker.previous_offset(), 300);
    }

    #[test]
    fn motion_only_follows_visibility_flips() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.observe(0).motion(), None);
        assert_eq!(tracker.observe(50).motion(), Some(NavMotion::HIDDEN));
        assert_eq!(tracker.observe(50).motion(), None);
        assert_eq!(tracker.observe(120).motion(), None);
        assert_eq!(tracker.observe(90).motion(), Some(NavMotion::SHOWN));
        assert_eq!(tracker.observe(0).motion(), None);
    }

    #[test]
    fn hidden_phase_is_always_floating() {
        let mut tracker = ScrollTracker::new();
        let update = tracker.observe(1);
        assert!(!update.phase.is_visible());
        assert!(update.phase.is_floating());
    }
}
