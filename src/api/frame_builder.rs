use crate::core::{format_percent, track_translate_percent};
use crate::render::{CarouselFrame, ElementNode, ElementTag};

use super::class_names::CONTAINER;
use super::engine_core::CarouselCore;

/// Materializes the carousel tree: root, then track, next, prev and pagination.
pub(super) fn build_carousel_frame(core: &CarouselCore) -> CarouselFrame {
    let translate = track_translate_percent(core.current_item, core.slides.len());
    let slide_width = format_percent(core.layout.slide_width_percent);

    let track = core.slides.iter().fold(
        ElementNode::div(core.class_names.part(CONTAINER))
            .with_style("width", format_percent(core.layout.track_width_percent))
            .with_style(
                "transform",
                format!("translate3d({}, 0, 0)", format_percent(translate)),
            ),
        |track, slide| {
            track.with_child(
                ElementNode::new(ElementTag::Div, core.item_classes())
                    .with_style("width", slide_width.clone())
                    .with_markup(slide.markup.clone()),
            )
        },
    );

    let mut root = ElementNode::div(core.class_names.root())
        .with_attribute("tabindex", "0")
        .with_child(track);

    if let Some(navigation) = &core.navigation {
        let (next, prev) = navigation.elements();
        root = root.with_child(next).with_child(prev);
    }
    if let Some(pagination) = &core.pagination {
        root = root.with_child(pagination.element());
    }

    CarouselFrame::new(root)
}
