use tracing::trace;

use crate::core::{ClassList, MoveOutcome};
use crate::error::{CarouselError, CarouselResult};
use crate::extensions::MoveContext;
use crate::render::{ElementNode, ElementTag, Renderer};

use super::Carousel;
use super::class_names::{
    ClassNames, NEXT, NEXT_HIDDEN, NEXT_IMAGE, PREV, PREV_HIDDEN, PREV_IMAGE,
};

const NAVIGATION_IMAGE_ALT: &str = "A pagination image";

/// Prev/next control pair and its boundary visibility state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct NavigationControls {
    next: ClassList,
    prev: ClassList,
    next_hidden_class: String,
    prev_hidden_class: String,
    images: Option<NavigationImageNodes>,
    tracks_bounds: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NavigationImageNodes {
    prev_src: String,
    next_src: String,
    prev_class: String,
    next_class: String,
}

impl NavigationControls {
    pub(super) fn build(
        class_names: &ClassNames,
        images: Option<(&str, &str)>,
        loop_enabled: bool,
    ) -> Self {
        Self {
            next: ClassList::new().with_class(class_names.part(NEXT)),
            prev: ClassList::new().with_class(class_names.part(PREV)),
            next_hidden_class: class_names.part(NEXT_HIDDEN),
            prev_hidden_class: class_names.part(PREV_HIDDEN),
            images: images.map(|(prev, next)| NavigationImageNodes {
                prev_src: prev.to_owned(),
                next_src: next.to_owned(),
                prev_class: class_names.part(PREV_IMAGE),
                next_class: class_names.part(NEXT_IMAGE),
            }),
            // Loop mode never hides the controls.
            tracks_bounds: !loop_enabled,
        }
    }

    pub(super) fn on_move(&mut self, context: MoveContext) {
        if !self.tracks_bounds {
            return;
        }
        let has_slide_after_view =
            context.index.saturating_add(context.slides_visible) < context.item_count;
        self.prev.set(&self.prev_hidden_class, context.index == 0);
        self.next.set(&self.next_hidden_class, !has_slide_after_view);
    }

    #[must_use]
    pub(super) fn prev_hidden(&self) -> bool {
        self.prev.contains(&self.prev_hidden_class)
    }

    #[must_use]
    pub(super) fn next_hidden(&self) -> bool {
        self.next.contains(&self.next_hidden_class)
    }

    /// Returns the `(next, prev)` elements in document order.
    pub(super) fn elements(&self) -> (ElementNode, ElementNode) {
        let mut next = ElementNode::new(ElementTag::Div, self.next.clone());
        let mut prev = ElementNode::new(ElementTag::Div, self.prev.clone());
        if let Some(images) = &self.images {
            prev = prev.with_child(navigation_image(&images.prev_src, &images.prev_class));
            next = next.with_child(navigation_image(&images.next_src, &images.next_class));
        }
        (next, prev)
    }
}

fn navigation_image(src: &str, class: &str) -> ElementNode {
    ElementNode::new(ElementTag::Img, ClassList::new().with_class(class))
        .with_attribute("src", src)
        .with_attribute("alt", NAVIGATION_IMAGE_ALT)
}

impl<R: Renderer> Carousel<R> {
    #[must_use]
    pub fn has_navigation(&self) -> bool {
        self.core.navigation.is_some()
    }

    /// Whether the prev control currently carries its hidden flag.
    #[must_use]
    pub fn prev_control_hidden(&self) -> Option<bool> {
        self.core
            .navigation
            .as_ref()
            .map(NavigationControls::prev_hidden)
    }

    /// Whether the next control currently carries its hidden flag.
    #[must_use]
    pub fn next_control_hidden(&self) -> Option<bool> {
        self.core
            .navigation
            .as_ref()
            .map(NavigationControls::next_hidden)
    }

    /// Handles a click on the next control.
    pub fn click_next(&mut self) -> CarouselResult<MoveOutcome> {
        self.require_navigation()?;
        trace!("next control clicked");
        Ok(self.next())
    }

    /// Handles a click on the prev control.
    pub fn click_prev(&mut self) -> CarouselResult<MoveOutcome> {
        self.require_navigation()?;
        trace!("prev control clicked");
        Ok(self.prev())
    }

    fn require_navigation(&self) -> CarouselResult<()> {
        if self.core.navigation.is_none() {
            return Err(CarouselError::InvalidInput(
                "navigation controls are disabled for this carousel".to_owned(),
            ));
        }
        Ok(())
    }
}
