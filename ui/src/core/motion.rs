//! Show/hide transition targets for the navbar.
//!
//! The host's CSS transition engine does the animating. Writing a new target
//! while a transition is running retargets it from wherever it currently is,
//! so the most recent write always wins.

/// Length of the show/hide transition.
pub const TRANSITION_MS: u32 = 200;

/// Vertical offset of the hidden bar, far enough to clear its own height.
pub const HIDDEN_TRANSLATE_Y_PX: i32 = -100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavMotion {
    pub translate_y_px: i32,
    pub opacity: f32,
    pub duration_ms: u32,
}

impl NavMotion {
    pub const SHOWN: Self = Self {
        translate_y_px: 0,
        opacity: 1.0,
        duration_ms: TRANSITION_MS,
    };

    pub const HIDDEN: Self = Self {
        translate_y_px: HIDDEN_TRANSLATE_Y_PX,
        opacity: 0.0,
        duration_ms: TRANSITION_MS,
    };

    pub fn for_visibility(visible: bool) -> Self {
        if visible {
            Self::SHOWN
        } else {
            Self::HIDDEN
        }
    }

    /// Inline style carrying both the target values and the transition.
    pub fn style(&self) -> String {
        format!(
            "transform: translateY({}px); opacity: {}; transition: transform {ms}ms, opacity {ms}ms;",
            self.translate_y_px,
            self.opacity,
            ms = self.duration_ms,
        )
    }
}

impl Default for NavMotion {
    fn default() -> Self {
        Self::SHOWN
    }
}
