use crate::error::{CarouselError, CarouselResult};
use crate::render::Renderer;

use super::{Carousel, CarouselSnapshot, NavigationSnapshot, PaginationSnapshot};

impl<R: Renderer> Carousel<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            name: self.core.config.name.clone(),
            item_count: self.item_count(),
            current_item: self.core.current_item,
            is_mobile: self.core.is_mobile,
            viewport_width: self.core.viewport_width,
            slides_visible: self.slides_visible(),
            slides_to_scroll: self.slides_to_scroll(),
            loop_enabled: self.core.config.loop_enabled,
            layout: self.core.layout,
            translate_percent: self.translate_percent(),
            navigation: self
                .core
                .navigation
                .as_ref()
                .map(|navigation| NavigationSnapshot {
                    prev_hidden: navigation.prev_hidden(),
                    next_hidden: navigation.next_hidden(),
                }),
            pagination: self
                .core
                .pagination
                .as_ref()
                .map(|pagination| PaginationSnapshot {
                    page_count: pagination.len(),
                    active_page: pagination.active_page(),
                }),
            autoplay: self.autoplay_state(),
            observer_count: self.core.observers.len(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> CarouselResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| CarouselError::Serialization(format!("failed to serialize snapshot: {e}")))
    }
}
