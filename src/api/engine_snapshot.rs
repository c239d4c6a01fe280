use serde::{Deserialize, Serialize};

use crate::core::TrackLayout;
use crate::interaction::AutoplayState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSnapshot {
    pub prev_hidden: bool,
    pub next_hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationSnapshot {
    pub page_count: usize,
    pub active_page: Option<usize>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSnapshot {
    pub name: String,
    pub item_count: usize,
    pub current_item: usize,
    pub is_mobile: bool,
    pub viewport_width: u32,
    pub slides_visible: usize,
    pub slides_to_scroll: usize,
    pub loop_enabled: bool,
    pub layout: TrackLayout,
    pub translate_percent: f64,
    pub navigation: Option<NavigationSnapshot>,
    pub pagination: Option<PaginationSnapshot>,
    pub autoplay: Option<AutoplayState>,
    pub observer_count: usize,
}
