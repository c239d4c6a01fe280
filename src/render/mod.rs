mod frame;
mod html_renderer;
mod null_renderer;

pub use frame::{CarouselFrame, ElementNode, ElementTag, Node};
pub use html_renderer::{HtmlRenderer, render_frame_html};
pub use null_renderer::NullRenderer;

use crate::error::CarouselResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `CarouselFrame` so
/// output code stays isolated from carousel state and input handling.
pub trait Renderer {
    fn render(&mut self, frame: &CarouselFrame) -> CarouselResult<()>;
}
