use crate::core::{Slide, TrackLayout, track_translate_percent};
use crate::error::CarouselResult;
use crate::render::{CarouselFrame, Renderer};

use super::{CarouselConfig, engine_core::CarouselCore, frame_builder::build_carousel_frame};

/// Main orchestration facade consumed by host applications.
///
/// `Carousel` owns slide order, the current position, responsive state,
/// decorators and observers, and hands finished frames to the renderer.
pub struct Carousel<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: CarouselCore,
}

impl<R: Renderer> Carousel<R> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.core.config.name
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.core.config
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.core.slides
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.core.slides.len()
    }

    /// Index of the left-most displayed slide.
    #[must_use]
    pub fn current_item(&self) -> usize {
        self.core.current_item
    }

    #[must_use]
    pub fn slides_visible(&self) -> usize {
        self.core.display_metrics().slides_visible
    }

    #[must_use]
    pub fn slides_to_scroll(&self) -> usize {
        self.core.display_metrics().slides_to_scroll
    }

    #[must_use]
    pub fn layout(&self) -> TrackLayout {
        self.core.layout
    }

    /// Current track offset in percent of the track width.
    #[must_use]
    pub fn translate_percent(&self) -> f64 {
        track_translate_percent(self.core.current_item, self.core.slides.len())
    }

    /// Builds the element tree for the current state.
    #[must_use]
    pub fn frame(&self) -> CarouselFrame {
        build_carousel_frame(&self.core)
    }

    pub fn render(&mut self) -> CarouselResult<()> {
        let frame = self.frame();
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
