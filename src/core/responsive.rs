use serde::{Deserialize, Serialize};

/// Viewport widths strictly below this value switch the carousel to mobile mode.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

#[must_use]
pub fn is_mobile_width(viewport_width: u32) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX
}

/// Effective visible/scroll counts for the current display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    pub slides_visible: usize,
    pub slides_to_scroll: usize,
}

impl DisplayMetrics {
    /// Mobile mode forces single-slide view and single-slide steps.
    #[must_use]
    pub fn resolve(is_mobile: bool, slides_visible: u32, slides_to_scroll: u32) -> Self {
        if is_mobile {
            return Self {
                slides_visible: 1,
                slides_to_scroll: 1,
            };
        }
        Self {
            slides_visible: slides_visible as usize,
            slides_to_scroll: slides_to_scroll as usize,
        }
    }
}
