//! Viewport classification against the mobile breakpoint

/// Width class of the current browsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    /// Width at or below the breakpoint
    Mobile,
    /// Width above the breakpoint
    Desktop,
}

impl Viewport {
    /// Classify a viewport width. The breakpoint itself counts as mobile.
    pub fn classify(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}
