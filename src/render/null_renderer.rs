use crate::error::CarouselResult;
use crate::render::{CarouselFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch malformed markup
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_element_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &CarouselFrame) -> CarouselResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_element_count = frame.element_count();
        Ok(())
    }
}
