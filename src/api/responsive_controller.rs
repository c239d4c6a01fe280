use tracing::debug;

use crate::core::{TrackLayout, is_mobile_width};
use crate::error::CarouselResult;
use crate::extensions::MoveReason;
use crate::render::Renderer;

use super::Carousel;

impl<R: Renderer> Carousel<R> {
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.core.is_mobile
    }

    #[must_use]
    pub fn viewport_width(&self) -> u32 {
        self.core.viewport_width
    }

    /// Applies a new viewport width.
    ///
    /// Returns `true` when the mobile flag flipped; in that case layout is
    /// recomputed and observers are re-notified with the unchanged index.
    pub fn resize(&mut self, viewport_width: u32) -> CarouselResult<bool> {
        self.core.viewport_width = viewport_width;
        let mobile = is_mobile_width(viewport_width);
        if mobile == self.core.is_mobile {
            return Ok(false);
        }

        self.core.is_mobile = mobile;
        self.set_style()?;
        debug!(
            viewport_width,
            is_mobile = mobile,
            slides_visible = self.slides_visible(),
            "responsive mode changed"
        );
        self.notify_observers(MoveReason::Relayout);
        Ok(true)
    }

    fn set_style(&mut self) -> CarouselResult<()> {
        self.core.layout = TrackLayout::compute(self.core.slides.len(), self.slides_visible())?;
        Ok(())
    }
}
